//! External tool discovery.
//!
//! The bundler, the packaging tool and the runtime are collaborators found
//! on PATH; none of them is linked in.

use std::path::PathBuf;

use crate::error::{CliError, Error, Result};

/// Bundler executable compiling the shell and application configurations.
pub const BUNDLER_BIN: &str = "webpack";

/// Packaging tool producing platform-native distributables.
pub const PACKAGER_BIN: &str = "electron-packager";

/// Runtime binary queried for its self-reported version.
pub const RUNTIME_BIN: &str = "electron";

/// Locates a required tool on PATH.
///
/// `purpose` is folded into the error message so a missing tool tells the
/// user what would have needed it.
pub fn require(tool: &str, purpose: &str) -> Result<PathBuf> {
    match which::which(tool) {
        Ok(path) => {
            log::debug!("Found {} at: {}", tool, path.display());
            Ok(path)
        }
        Err(e) => Err(Error::Cli(CliError::MissingTool {
            tool: tool.to_string(),
            reason: format!("{e}; {purpose}"),
        })),
    }
}

/// Locates an optional tool on PATH.
pub fn find(tool: &str) -> Option<PathBuf> {
    match which::which(tool) {
        Ok(path) => {
            log::debug!("Found {} at: {}", tool, path.display());
            Some(path)
        }
        Err(e) => {
            log::debug!("{} not found in PATH: {}", tool, e);
            None
        }
    }
}
