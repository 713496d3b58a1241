//! File system helpers for the release output tree.

use std::io;
use std::path::Path;

use tokio::fs;

use crate::error::Result;

/// Removes the directory and its contents if it exists.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn removes_existing_tree_and_ignores_missing() {
        let dir = tempfile::tempdir().unwrap();
        let release = dir.path().join("release");
        fs::create_dir_all(release.join("linux-x64")).await.unwrap();
        fs::write(release.join("linux-x64").join("stale"), b"old")
            .await
            .unwrap();

        remove_dir_all(&release).await.unwrap();
        assert!(!release.exists());

        // second removal is a no-op
        remove_dir_all(&release).await.unwrap();
    }
}
