//! Build orchestration for desktop application distributables.
//!
//! This library drives the fixed build sequence for a desktop application:
//! - resolve the target runtime version (explicit flag or the installed
//!   runtime's self-reported version),
//! - compile the back-end shell and front-end application bundles with an
//!   external bundler,
//! - clear the previous release output,
//! - package every requested platform/architecture pair with an external
//!   packaging tool, concurrently and with per-target failure isolation.
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod manifest;
pub mod pack;
pub mod version;

// Re-export commonly used types
pub use error::{CliError, Error, Result};
