//! Directory enumeration
//!
//! Reads the served directory fresh on every request; nothing is cached
//! between requests, so renames and new files show up immediately.

use std::path::Path;
use tokio::fs;

use crate::error::StorageError;

/// Lists the entry names of `dir` in the order the filesystem yields them.
pub async fn list_directory(dir: &Path) -> Result<Vec<String>, StorageError> {
    let mut entries = fs::read_dir(dir).await.map_err(|e| StorageError::ReadDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut names = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| StorageError::ReadDir {
            path: dir.to_path_buf(),
            source: e,
        })?
    {
        names.push(entry.file_name().to_string_lossy().to_string());
    }

    Ok(names)
}

/// Checks whether `name` is an entry of `dir`.
///
/// The comparison is exact and case-sensitive, against the same entry
/// names a listing would report.
pub async fn contains_entry(dir: &Path, name: &str) -> Result<bool, StorageError> {
    let mut entries = fs::read_dir(dir).await.map_err(|e| StorageError::ReadDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| StorageError::ReadDir {
            path: dir.to_path_buf(),
            source: e,
        })?
    {
        if entry.file_name().to_string_lossy() == name {
            return Ok(true);
        }
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::PathBuf;

    fn setup_test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("ft-responder-storage-{}", name));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn cleanup_test_dir(dir: &Path) {
        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn test_list_directory_returns_all_entries() {
        let dir = setup_test_dir("list");
        std::fs::write(dir.join("a.txt"), b"a").unwrap();
        std::fs::write(dir.join("b.txt"), b"b").unwrap();
        std::fs::create_dir(dir.join("sub")).unwrap();

        let names = list_directory(&dir).await.unwrap();
        let names: HashSet<String> = names.into_iter().collect();
        let expected: HashSet<String> = ["a.txt", "b.txt", "sub"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, expected);

        cleanup_test_dir(&dir);
    }

    #[tokio::test]
    async fn test_list_directory_empty() {
        let dir = setup_test_dir("list-empty");

        let names = list_directory(&dir).await.unwrap();
        assert!(names.is_empty());

        cleanup_test_dir(&dir);
    }

    #[tokio::test]
    async fn test_list_directory_missing_dir_fails() {
        let parent = setup_test_dir("list-missing");
        let dir = parent.join("nope");

        let err = list_directory(&dir).await.unwrap_err();
        assert!(matches!(err, StorageError::ReadDir { .. }));

        cleanup_test_dir(&parent);
    }

    #[tokio::test]
    async fn test_contains_entry_finds_existing_file() {
        let dir = setup_test_dir("contains");
        std::fs::write(dir.join("notes.txt"), b"hello").unwrap();

        assert!(contains_entry(&dir, "notes.txt").await.unwrap());
        assert!(!contains_entry(&dir, "other.txt").await.unwrap());

        cleanup_test_dir(&dir);
    }

    #[tokio::test]
    async fn test_contains_entry_is_case_sensitive() {
        let dir = setup_test_dir("contains-case");
        std::fs::write(dir.join("Notes.txt"), b"hello").unwrap();

        assert!(contains_entry(&dir, "Notes.txt").await.unwrap());
        assert!(!contains_entry(&dir, "notes.txt").await.unwrap());

        cleanup_test_dir(&dir);
    }
}
