//! Package descriptor and bundler configuration parsing.
//!
//! The package descriptor supplies the application name, version and
//! dependency lists; the shell bundler configuration supplies the externals
//! that stay out of the packaging ignore list.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::error::{CliError, Error, Result};

/// Package descriptor file read from the working directory.
pub const MANIFEST_FILE: &str = "package.json";

/// Bundler configuration for the back-end shell build.
pub const SHELL_BUNDLE_CONFIG: &str = "bundler.shell.json";

/// Bundler configuration for the front-end application build.
pub const APP_BUNDLE_CONFIG: &str = "bundler.app.json";

/// Package descriptor contents.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    /// Package name.
    #[serde(default)]
    pub name: Option<String>,

    /// Human-readable product name, preferred over `name` for artifacts.
    #[serde(default, rename = "productName")]
    pub product_name: Option<String>,

    /// Application version.
    #[serde(default)]
    pub version: Option<String>,

    /// Runtime dependencies.
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,

    /// Development-only dependencies, never packaged.
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl Manifest {
    /// Loads the package descriptor from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::Cli(CliError::ExecutionFailed {
                command: "read package descriptor".to_string(),
                reason: format!("Failed to read {}: {}", path.display(), e),
            })
        })?;

        Ok(serde_json::from_str(&raw)?)
    }

    /// Returns the name used for packaged artifacts.
    pub fn product_name(&self) -> Option<String> {
        self.product_name.clone().or_else(|| self.name.clone())
    }

    /// Runtime dependency names.
    pub fn dependency_names(&self) -> Vec<String> {
        self.dependencies.keys().cloned().collect()
    }

    /// Development dependency names.
    pub fn dev_dependency_names(&self) -> Vec<String> {
        self.dev_dependencies.keys().cloned().collect()
    }
}

/// The slice of a bundler configuration this tool reads.
#[derive(Debug, Default, Deserialize)]
pub struct BundlerConfig {
    /// Modules the bundler leaves to the packaged runtime's own resolution.
    #[serde(default)]
    pub externals: Vec<String>,
}

impl BundlerConfig {
    /// Loads a bundler configuration from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read bundler configuration {}", path.display()))?;

        Ok(serde_json::from_str(&raw)?)
    }
}

/// Computes the packaging ignore patterns.
///
/// Development dependencies are always excluded from the package; runtime
/// dependencies are excluded unless the bundler treats them as externals,
/// in which case the packaged runtime loads them itself.
pub fn ignore_patterns(deps: &[String], dev_deps: &[String], externals: &[String]) -> Vec<String> {
    let mut patterns = vec![
        "^/test($|/)".to_string(),
        "^/release($|/)".to_string(),
        "^/main.development.js".to_string(),
    ];

    patterns.extend(
        dev_deps
            .iter()
            .map(|name| format!("/node_modules/{name}($|/)")),
    );
    patterns.extend(
        deps.iter()
            .filter(|name| !externals.contains(*name))
            .map(|name| format!("/node_modules/{name}($|/)")),
    );

    patterns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_package_descriptor() {
        let manifest: Manifest = serde_json::from_str(
            r#"{
                "name": "demo",
                "productName": "Demo",
                "version": "1.0.0",
                "dependencies": { "request": "^2.88.0" },
                "devDependencies": { "linter": "^2.0.0" }
            }"#,
        )
        .unwrap();

        assert_eq!(manifest.product_name().as_deref(), Some("Demo"));
        assert_eq!(manifest.version.as_deref(), Some("1.0.0"));
        assert_eq!(manifest.dependency_names(), names(&["request"]));
        assert_eq!(manifest.dev_dependency_names(), names(&["linter"]));
    }

    #[test]
    fn product_name_falls_back_to_package_name() {
        let manifest: Manifest = serde_json::from_str(r#"{ "name": "demo" }"#).unwrap();
        assert_eq!(manifest.product_name().as_deref(), Some("demo"));
    }

    #[test]
    fn bundler_config_without_externals_is_empty() {
        let config: BundlerConfig = serde_json::from_str("{}").unwrap();
        assert!(config.externals.is_empty());
    }

    #[test]
    fn fixed_prefixes_are_always_present() {
        let patterns = ignore_patterns(&[], &[], &[]);
        assert_eq!(
            patterns,
            names(&["^/test($|/)", "^/release($|/)", "^/main.development.js"])
        );
    }

    #[test]
    fn dev_dependencies_are_always_ignored() {
        let patterns = ignore_patterns(&[], &names(&["linter"]), &names(&["linter"]));
        assert!(patterns.contains(&"/node_modules/linter($|/)".to_string()));
    }

    #[test]
    fn externals_stay_out_of_the_ignore_list() {
        let patterns = ignore_patterns(
            &names(&["left-pad", "request"]),
            &[],
            &names(&["left-pad"]),
        );
        assert!(patterns.contains(&"/node_modules/request($|/)".to_string()));
        assert!(!patterns.iter().any(|p| p.contains("left-pad")));
    }
}
