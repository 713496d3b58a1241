//! Build pipeline orchestration.
//!
//! Sequences the two bundler compilations, the release-directory cleanup,
//! and the packaging fan-out, and reports per-target completion.

use std::path::{Path, PathBuf};

use tokio::task::JoinSet;

use crate::error::Result;
use crate::manifest::{APP_BUNDLE_CONFIG, SHELL_BUNDLE_CONFIG};

use super::settings::PackSettings;
use super::target;
use super::{bundler, fs, packager};

/// Build pipeline coordinator.
///
/// Runs the fixed step sequence: shell bundle, application bundle, cleanup,
/// packaging fan-out. Compilation and cleanup failures abort the run;
/// failures of individual packaging tasks are logged and do not cancel
/// their siblings.
pub struct Pipeline {
    settings: PackSettings,
    bundler: PathBuf,
    packager: PathBuf,
    build_all: bool,
}

impl Pipeline {
    /// Creates a pipeline over resolved settings and tool paths.
    pub fn new(
        settings: PackSettings,
        bundler: PathBuf,
        packager: PathBuf,
        build_all: bool,
    ) -> Self {
        Self {
            settings,
            bundler,
            packager,
            build_all,
        }
    }

    /// Runs the pipeline to completion.
    ///
    /// Returns `Ok` once every dispatched packaging task has settled, even
    /// when some of them failed; per-target outcomes are reported through
    /// the log.
    pub async fn run(&self) -> Result<()> {
        // The application bundle may consume artifacts the shell bundle
        // wrote into the shared output directory; the order is fixed.
        bundler::compile(&self.bundler, Path::new(SHELL_BUNDLE_CONFIG)).await?;
        bundler::compile(&self.bundler, Path::new(APP_BUNDLE_CONFIG)).await?;

        // Stale artifacts from a previous run must be gone before any
        // packaging task writes output.
        fs::remove_dir_all(self.settings.out_root()).await?;

        let targets = if self.build_all {
            target::matrix()
        } else {
            vec![target::host()?]
        };

        let mut tasks = JoinSet::new();
        for (platform, arch) in targets {
            let Some(opts) = self.settings.for_target(platform, arch) else {
                log::debug!("skipping {platform}-{arch}: no runtime build exists");
                continue;
            };
            let packager_bin = self.packager.clone();
            tasks.spawn(async move {
                let outcome = packager::package(&packager_bin, &opts).await;
                (opts.platform, opts.arch, outcome)
            });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((platform, arch, Ok(()))) => log::info!("{platform}-{arch} finished!"),
                Ok((platform, arch, Err(e))) => log::error!("{platform}-{arch} failed: {e}"),
                Err(e) => log::error!("packaging task panicked: {e}"),
            }
        }

        Ok(())
    }
}
