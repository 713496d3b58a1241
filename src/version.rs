//! Runtime version resolution.
//!
//! An explicit version flag wins; otherwise the installed runtime is asked
//! for its own version, with a fixed fallback when that fails.

use std::path::Path;

use semver::Version;
use tokio::process::Command;

/// Version substituted when the runtime's own version cannot be determined.
pub const FALLBACK_VERSION: &str = "1.2.0";

/// Resolves the runtime version to package against.
///
/// An explicit version is used verbatim without consulting the runtime.
/// Otherwise the runtime binary reports its own version; if the binary is
/// missing, exits non-zero, or reports something that is not a semantic
/// version, the fallback is substituted and a warning logged.
pub async fn resolve(explicit: Option<String>, runtime: Option<&Path>) -> String {
    if let Some(version) = explicit {
        return version;
    }

    match query_runtime(runtime).await {
        Some(version) => version.to_string(),
        None => {
            log::warn!("Unable to identify runtime version, falling back to v{FALLBACK_VERSION}.");
            FALLBACK_VERSION.to_string()
        }
    }
}

/// Normalizes a self-reported version string into a strict semantic version.
pub fn sanitize(raw: &str) -> Option<Version> {
    let cleaned = raw.trim().trim_start_matches('v');
    Version::parse(cleaned).ok()
}

async fn query_runtime(runtime: Option<&Path>) -> Option<Version> {
    let runtime = runtime?;

    let output = Command::new(runtime).arg("--version").output().await.ok()?;
    if !output.status.success() {
        return None;
    }

    sanitize(&String::from_utf8_lossy(&output.stdout))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_prefix_and_whitespace() {
        assert_eq!(sanitize("v1.4.0\n"), Some(Version::new(1, 4, 0)));
        assert_eq!(sanitize("  2.0.1"), Some(Version::new(2, 0, 1)));
    }

    #[test]
    fn sanitize_rejects_malformed_output() {
        assert_eq!(sanitize("not-a-version"), None);
        assert_eq!(sanitize(""), None);
        assert_eq!(sanitize("1.4"), None);
    }

    #[tokio::test]
    async fn explicit_version_is_used_verbatim() {
        assert_eq!(resolve(Some("2.3.4".to_string()), None).await, "2.3.4");
        // verbatim means no sanitization either
        assert_eq!(resolve(Some("v9".to_string()), None).await, "v9");
    }

    #[tokio::test]
    async fn missing_runtime_falls_back() {
        assert_eq!(resolve(None, None).await, FALLBACK_VERSION);
    }
}
