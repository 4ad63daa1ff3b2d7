//! Pattern-matching directory listing.
//!
//! The store resolves a session id to its file by globbing the session
//! directory. That collaborator is a trait so tests (and callers with an
//! index of their own) can substitute the listing strategy.

use std::path::Path;

use async_trait::async_trait;
use glob::Pattern;

use crate::error::{Error, Result};

/// Trait for directory-listing backends.
///
/// Implementations return the file names in `dir` matching `pattern`, in no
/// guaranteed order. A missing directory is a listing failure, not an empty
/// result; the session directory is required to exist.
#[async_trait]
pub trait DirectoryLister: Send + Sync {
    /// List the file names in `dir` matching the glob `pattern`.
    async fn list(&self, dir: &Path, pattern: &str) -> Result<Vec<String>>;
}

/// Default lister: a linear scan of the directory with glob matching.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobLister;

#[async_trait]
impl DirectoryLister for GlobLister {
    async fn list(&self, dir: &Path, pattern: &str) -> Result<Vec<String>> {
        let pattern = Pattern::new(pattern).map_err(|source| Error::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;

        let list_err = |source| Error::List {
            path: dir.to_path_buf(),
            source,
        };

        let mut entries = tokio::fs::read_dir(dir).await.map_err(list_err)?;
        let mut names = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(list_err)? {
            if let Some(name) = entry.file_name().to_str() {
                if pattern.matches(name) {
                    names.push(name.to_string());
                }
            }
        }

        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lists_only_matching_names() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("6162__1000.json"), "{}").unwrap();
        std::fs::write(tmp.path().join("6162__2000.json"), "{}").unwrap();
        std::fs::write(tmp.path().join("6163__1000.json"), "{}").unwrap();
        std::fs::write(tmp.path().join("notes.txt"), "x").unwrap();

        let mut names = GlobLister.list(tmp.path(), "6162__*.json").await.unwrap();
        names.sort();
        assert_eq!(names, vec!["6162__1000.json", "6162__2000.json"]);
    }

    #[tokio::test]
    async fn test_empty_directory_lists_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let names = GlobLister.list(tmp.path(), "6162__*.json").await.unwrap();
        assert!(names.is_empty());
    }

    #[tokio::test]
    async fn test_missing_directory_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope");
        let result = GlobLister.list(&missing, "*.json").await;
        assert!(matches!(result, Err(Error::List { .. })));
    }

    #[tokio::test]
    async fn test_invalid_pattern_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let result = GlobLister.list(tmp.path(), "[").await;
        assert!(matches!(result, Err(Error::Pattern { .. })));
    }
}
