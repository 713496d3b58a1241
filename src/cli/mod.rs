//! Command line interface for distpack.
//!
//! Wires argument parsing, manifest loading, version resolution and the
//! packaging pipeline together.

mod args;

pub use args::Args;

use std::path::Path;

use crate::error::{CliError, Error, Result};
use crate::manifest::{self, BundlerConfig, Manifest};
use crate::pack::{Pipeline, SettingsBuilder, tools};
use crate::version;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();

    let manifest = Manifest::load(Path::new(manifest::MANIFEST_FILE))?;
    let shell_config = BundlerConfig::load(Path::new(manifest::SHELL_BUNDLE_CONFIG))?;

    let name = args
        .name
        .clone()
        .or_else(|| manifest.product_name())
        .ok_or_else(|| {
            Error::Cli(CliError::InvalidArguments {
                reason: format!(
                    "no --name given and {} declares no product name",
                    manifest::MANIFEST_FILE
                ),
            })
        })?;

    // Packaging must not start until a version string exists; an explicit
    // flag never touches the runtime binary.
    let runtime = if args.version.is_none() {
        tools::find(tools::RUNTIME_BIN)
    } else {
        None
    };
    let runtime_version = version::resolve(args.version.clone(), runtime.as_deref()).await;

    let app_version = manifest
        .version
        .clone()
        .unwrap_or_else(|| runtime_version.clone());

    let ignore = manifest::ignore_patterns(
        &manifest.dependency_names(),
        &manifest.dev_dependency_names(),
        &shell_config.externals,
    );

    let settings = SettingsBuilder::new()
        .name(name)
        .asar(args.asar)
        .icon(args.icon.clone())
        .ignore(ignore)
        .runtime_version(runtime_version)
        .app_version(app_version)
        .build()?;

    let bundler = tools::require(
        tools::BUNDLER_BIN,
        "it compiles the shell and application bundles",
    )?;
    let packager = tools::require(
        tools::PACKAGER_BIN,
        "it produces the platform distributables",
    )?;

    log::info!(
        "Packing {} v{} (runtime {})...",
        settings.name(),
        settings.app_version(),
        settings.runtime_version()
    );

    Pipeline::new(settings, bundler, packager, args.all)
        .run()
        .await?;

    Ok(0)
}
