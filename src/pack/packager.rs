//! External packaging tool invocation.

use std::path::Path;

use tokio::process::Command;

use crate::error::{CliError, Error, Result};

use super::settings::PackOptions;

/// Builds the packaging tool's argument vector for one target.
pub fn packager_args(opts: &PackOptions) -> Vec<String> {
    let mut args = vec![
        opts.source_dir.display().to_string(),
        opts.name.clone(),
        format!("--platform={}", opts.platform),
        format!("--arch={}", opts.arch),
        format!("--electron-version={}", opts.runtime_version),
        format!("--app-version={}", opts.app_version),
        format!("--icon={}", opts.icon.display()),
        format!("--out={}", opts.out.display()),
    ];

    if opts.prune {
        args.push("--prune".to_string());
    }
    if opts.asar {
        args.push("--asar".to_string());
    }
    for pattern in &opts.ignore {
        args.push(format!("--ignore={pattern}"));
    }

    args
}

/// Runs the packaging tool for one platform/arch pair.
///
/// Output directories are disjoint per target, so concurrent invocations do
/// not contend on the filesystem.
pub async fn package(packager: &Path, opts: &PackOptions) -> Result<()> {
    let args = packager_args(opts);
    let command = format!("{} {}-{}", packager.display(), opts.platform, opts.arch);

    log::debug!("{} {}", packager.display(), args.join(" "));

    let output = Command::new(packager)
        .args(&args)
        .output()
        .await
        .map_err(|e| {
            Error::Cli(CliError::ExecutionFailed {
                command: command.clone(),
                reason: e.to_string(),
            })
        })?;

    if !output.status.success() {
        return Err(Error::Cli(CliError::ExecutionFailed {
            command,
            reason: format!(
                "packager exited with status {:?}\n{}",
                output.status.code(),
                String::from_utf8_lossy(&output.stderr)
            ),
        }));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::target::{Arch, Platform};
    use std::path::PathBuf;

    fn sample(asar: bool) -> PackOptions {
        PackOptions {
            source_dir: PathBuf::from("."),
            name: "Demo".to_string(),
            asar,
            prune: true,
            ignore: vec![
                "^/release($|/)".to_string(),
                "/node_modules/linter($|/)".to_string(),
            ],
            icon: PathBuf::from("logo/logo.png"),
            runtime_version: "1.4.0".to_string(),
            app_version: "1.0.0".to_string(),
            platform: Platform::Linux,
            arch: Arch::X64,
            out: PathBuf::from("release/linux-x64"),
        }
    }

    #[test]
    fn argv_carries_the_merged_overrides() {
        let args = packager_args(&sample(true));

        assert_eq!(args[0], ".");
        assert_eq!(args[1], "Demo");
        assert!(args.contains(&"--platform=linux".to_string()));
        assert!(args.contains(&"--arch=x64".to_string()));
        assert!(args.contains(&"--electron-version=1.4.0".to_string()));
        assert!(args.contains(&"--app-version=1.0.0".to_string()));
        assert!(args.contains(&"--icon=logo/logo.png".to_string()));
        assert!(args.contains(&"--out=release/linux-x64".to_string()));
        assert!(args.contains(&"--prune".to_string()));
        assert!(args.contains(&"--asar".to_string()));
        assert_eq!(
            args.iter().filter(|a| a.starts_with("--ignore=")).count(),
            2
        );
    }

    #[test]
    fn asar_flag_is_omitted_when_disabled() {
        let args = packager_args(&sample(false));
        assert!(!args.contains(&"--asar".to_string()));
    }
}
