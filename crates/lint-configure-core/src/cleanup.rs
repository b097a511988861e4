//! Removal of configuration left behind by earlier setups

use crate::error::ConfigureError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Paths removed before anything is generated, relative to the project root.
///
/// `.prettirrc` is a misspelling that older setups actually produced.
pub const LEGACY_PATHS: &[&str] = &[
    ".husky",
    "lint-staged.config.js",
    ".prettirrc",
    ".prettierrc",
    ".prettierrc.json",
    ".prettierrc.js",
    ".eslintrc.js",
    ".eslintrc.json",
    ".eslintrc",
    ".vscode",
];

/// Delete every [`LEGACY_PATHS`] entry under `root` that exists.
///
/// Returns the paths actually removed. Missing paths are skipped, so running
/// this twice in a row succeeds both times.
pub async fn remove_legacy_files(root: &Path) -> Result<Vec<PathBuf>, ConfigureError> {
    let mut removed = Vec::new();

    for relative in LEGACY_PATHS {
        let path = root.join(relative);
        if remove_path(&path).await.map_err(|source| ConfigureError::CleanupFailed {
            path: path.clone(),
            source,
        })? {
            removed.push(PathBuf::from(relative));
        }
    }

    Ok(removed)
}

/// Remove a file, symlink or directory tree. `Ok(false)` when nothing was there.
async fn remove_path(path: &Path) -> std::io::Result<bool> {
    let metadata = match fs::symlink_metadata(path).await {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };

    let result = if metadata.is_dir() {
        fs::remove_dir_all(path).await
    } else {
        fs::remove_file(path).await
    };

    match result {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_removes_files_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join(".husky/_")).unwrap();
        std::fs::write(root.join(".husky/pre-commit"), "#!/bin/sh").unwrap();
        std::fs::create_dir_all(root.join(".vscode")).unwrap();
        std::fs::write(root.join(".vscode/settings.json"), "{}").unwrap();
        std::fs::write(root.join(".eslintrc"), "{}").unwrap();
        std::fs::write(root.join(".prettirrc"), "{}").unwrap();
        std::fs::write(root.join("package.json"), "{}").unwrap();

        let removed = remove_legacy_files(root).await.unwrap();

        assert_eq!(
            removed,
            vec![
                PathBuf::from(".husky"),
                PathBuf::from(".prettirrc"),
                PathBuf::from(".eslintrc"),
                PathBuf::from(".vscode"),
            ]
        );
        assert!(!root.join(".husky").exists());
        assert!(!root.join(".vscode").exists());
        assert!(root.join("package.json").exists());
    }

    #[tokio::test]
    async fn test_cleanup_twice_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".eslintrc.json"), "{}").unwrap();

        let first = remove_legacy_files(dir.path()).await.unwrap();
        assert_eq!(first.len(), 1);

        let second = remove_legacy_files(dir.path()).await.unwrap();
        assert!(second.is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_permission_error_is_cleanup_failure() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("project");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join(".eslintrc.js"), "module.exports = {}").unwrap();
        std::fs::set_permissions(&root, std::fs::Permissions::from_mode(0o555)).unwrap();

        let result = remove_legacy_files(&root).await;
        std::fs::set_permissions(&root, std::fs::Permissions::from_mode(0o755)).unwrap();

        // root ignores permission bits, so only assert when the removal was refused
        if root.join(".eslintrc.js").exists() {
            match result {
                Err(ConfigureError::CleanupFailed { path, .. }) => {
                    assert!(path.ends_with(".eslintrc.js"));
                }
                other => panic!("expected CleanupFailed, got {:?}", other),
            }
        }
    }
}
