//! Packaging configuration: immutable base settings and per-target overlays.

use std::path::{Path, PathBuf};

use crate::error::{CliError, Error, Result};

use super::target::{Arch, Platform};

/// Base packaging configuration shared by every packaging task.
///
/// Constructed once via [`SettingsBuilder`] and never mutated afterwards;
/// target-specific values are layered on top through
/// [`PackSettings::for_target`], which returns a fresh [`PackOptions`] and
/// leaves the base untouched. That keeps the concurrent packaging fan-out
/// free of shared mutable state.
#[derive(Clone, Debug)]
pub struct PackSettings {
    /// Application source directory handed to the packaging tool.
    source_dir: PathBuf,

    /// Application name.
    name: String,

    /// Pack sources into an asar archive.
    asar: bool,

    /// Ignore patterns excluding modules and build leftovers from the package.
    ignore: Vec<String>,

    /// Icon path without extension.
    icon: String,

    /// Runtime version the packages are built against.
    runtime_version: String,

    /// Application version stamped into the packages.
    app_version: String,

    /// Root of the release output tree.
    out_root: PathBuf,
}

impl PackSettings {
    /// Returns the application name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the runtime version the packages are built against.
    pub fn runtime_version(&self) -> &str {
        &self.runtime_version
    }

    /// Returns the application version stamped into the packages.
    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    /// Returns the root of the release output tree.
    pub fn out_root(&self) -> &Path {
        &self.out_root
    }

    /// Merges target-specific overrides over the base configuration.
    ///
    /// Returns `None` for the darwin/ia32 pair, for which no runtime build
    /// exists; every other pair yields options with pruning enabled, the
    /// platform-appropriate icon extension, and an output directory of its
    /// own under the release root.
    pub fn for_target(&self, platform: Platform, arch: Arch) -> Option<PackOptions> {
        if platform == Platform::Darwin && arch == Arch::Ia32 {
            return None;
        }

        Some(PackOptions {
            source_dir: self.source_dir.clone(),
            name: self.name.clone(),
            asar: self.asar,
            prune: true,
            ignore: self.ignore.clone(),
            icon: PathBuf::from(format!("{}{}", self.icon, platform.icon_extension())),
            runtime_version: self.runtime_version.clone(),
            app_version: self.app_version.clone(),
            platform,
            arch,
            out: self.out_root.join(format!("{platform}-{arch}")),
        })
    }
}

/// Per-task packaging options: the base configuration merged with one
/// target's overrides. Each packaging task owns its value.
#[derive(Clone, Debug)]
pub struct PackOptions {
    /// Application source directory.
    pub source_dir: PathBuf,

    /// Application name.
    pub name: String,

    /// Pack sources into an asar archive.
    pub asar: bool,

    /// Prune modules the package does not need.
    pub prune: bool,

    /// Ignore patterns excluding modules and build leftovers.
    pub ignore: Vec<String>,

    /// Icon path with the platform-specific extension applied.
    pub icon: PathBuf,

    /// Runtime version the package is built against.
    pub runtime_version: String,

    /// Application version stamped into the package.
    pub app_version: String,

    /// Target platform.
    pub platform: Platform,

    /// Target architecture.
    pub arch: Arch,

    /// Output directory for this target.
    pub out: PathBuf,
}

/// Builder for constructing [`PackSettings`].
pub struct SettingsBuilder {
    name: Option<String>,
    asar: bool,
    ignore: Vec<String>,
    icon: Option<String>,
    runtime_version: Option<String>,
    app_version: Option<String>,
    source_dir: PathBuf,
    out_root: PathBuf,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Self {
            name: None,
            asar: false,
            ignore: Vec::new(),
            icon: None,
            runtime_version: None,
            app_version: None,
            source_dir: PathBuf::from("."),
            out_root: PathBuf::from("release"),
        }
    }

    /// Sets the application name.
    ///
    /// # Required
    pub fn name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    /// Enables or disables asar packing.
    ///
    /// Default: false
    pub fn asar(mut self, asar: bool) -> Self {
        self.asar = asar;
        self
    }

    /// Sets the packaging ignore patterns.
    ///
    /// Default: empty
    pub fn ignore(mut self, ignore: Vec<String>) -> Self {
        self.ignore = ignore;
        self
    }

    /// Sets the icon path (without extension).
    ///
    /// # Required
    pub fn icon(mut self, icon: String) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Sets the runtime version.
    ///
    /// # Required
    pub fn runtime_version(mut self, version: String) -> Self {
        self.runtime_version = Some(version);
        self
    }

    /// Sets the application version.
    ///
    /// # Required
    pub fn app_version(mut self, version: String) -> Self {
        self.app_version = Some(version);
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing.
    pub fn build(self) -> Result<PackSettings> {
        Ok(PackSettings {
            source_dir: self.source_dir,
            name: self.name.ok_or_else(|| missing("name"))?,
            asar: self.asar,
            ignore: self.ignore,
            icon: self.icon.ok_or_else(|| missing("icon"))?,
            runtime_version: self.runtime_version.ok_or_else(|| missing("runtime_version"))?,
            app_version: self.app_version.ok_or_else(|| missing("app_version"))?,
            out_root: self.out_root,
        })
    }
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn missing(argument: &str) -> Error {
    Error::Cli(CliError::MissingArgument {
        argument: argument.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::target;

    fn base() -> PackSettings {
        SettingsBuilder::new()
            .name("Demo".to_string())
            .asar(true)
            .icon("logo/logo".to_string())
            .ignore(vec!["^/release($|/)".to_string()])
            .runtime_version("1.4.0".to_string())
            .app_version("1.0.0".to_string())
            .build()
            .unwrap()
    }

    #[test]
    fn darwin_ia32_has_no_overlay() {
        assert!(base().for_target(Platform::Darwin, Arch::Ia32).is_none());
    }

    #[test]
    fn overlay_sets_output_path_icon_and_prune() {
        let opts = base().for_target(Platform::Win32, Arch::X64).unwrap();
        assert_eq!(opts.out, PathBuf::from("release/win32-x64"));
        assert_eq!(opts.icon, PathBuf::from("logo/logo.ico"));
        assert!(opts.prune);
        assert!(opts.asar);
        assert_eq!(opts.app_version, "1.0.0");
        assert_eq!(opts.runtime_version, "1.4.0");
    }

    #[test]
    fn icon_extension_varies_per_platform() {
        let settings = base();
        let darwin = settings.for_target(Platform::Darwin, Arch::X64).unwrap();
        let linux = settings.for_target(Platform::Linux, Arch::Ia32).unwrap();
        assert_eq!(darwin.icon, PathBuf::from("logo/logo.icns"));
        assert_eq!(linux.icon, PathBuf::from("logo/logo.png"));
    }

    #[test]
    fn full_matrix_yields_five_distinct_targets() {
        let settings = base();
        let opts: Vec<PackOptions> = target::matrix()
            .into_iter()
            .filter_map(|(platform, arch)| settings.for_target(platform, arch))
            .collect();

        assert_eq!(opts.len(), 5);

        let outs: std::collections::HashSet<&Path> =
            opts.iter().map(|o| o.out.as_path()).collect();
        assert_eq!(outs.len(), 5);
    }

    #[test]
    fn builder_rejects_missing_required_fields() {
        assert!(SettingsBuilder::new().build().is_err());
    }
}
