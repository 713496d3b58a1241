//! External bundler invocation.

use std::path::Path;
use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

use crate::error::{CliError, Error, Result};

/// Runs one bundler compilation for the given configuration file.
///
/// The bundler's stdout is streamed into the log as it arrives; stderr is
/// captured and reported when the compilation fails. A non-zero exit status
/// fails the step.
pub async fn compile(bundler: &Path, config: &Path) -> Result<()> {
    let command = format!("{} --config {}", bundler.display(), config.display());

    log::info!("Bundling {}...", config.display());

    let mut child = Command::new(bundler)
        .arg("--config")
        .arg(config)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            Error::Cli(CliError::ExecutionFailed {
                command: command.clone(),
                reason: e.to_string(),
            })
        })?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    // Both streams must be drained before the exit status is checked
    let (_, stderr_lines) = tokio::join!(
        // Stream stdout in real-time
        async {
            if let Some(stdout) = stdout {
                let mut lines = BufReader::new(stdout).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    log::info!("  {line}");
                }
            }
        },
        // Capture stderr for error reporting
        async {
            let mut captured = Vec::new();
            if let Some(stderr) = stderr {
                let mut lines = BufReader::new(stderr).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    captured.push(line);
                }
            }
            captured
        }
    );

    let status = child.wait().await.map_err(|e| {
        Error::Cli(CliError::ExecutionFailed {
            command: command.clone(),
            reason: e.to_string(),
        })
    })?;

    if !status.success() {
        return Err(Error::Cli(CliError::ExecutionFailed {
            command,
            reason: format!(
                "bundler exited with status {:?}\n{}",
                status.code(),
                stderr_lines.join("\n")
            ),
        }));
    }

    Ok(())
}
