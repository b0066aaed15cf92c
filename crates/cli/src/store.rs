//! JSON file standing in for browser storage.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dashboard::SessionStore;

/// Key/value store persisted as a flat JSON object.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid store file {}", self.path.display()))
    }

    /// Set a key, creating the file and its directory when needed.
    pub fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&values)?)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}

impl SessionStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        match self.load() {
            Ok(mut values) => values.remove(key),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable store");
                None
            }
        }
    }

    fn clear_all(&self) {
        if self.path.exists()
            && let Err(e) = fs::remove_file(&self.path)
        {
            tracing::warn!(error = %e, path = %self.path.display(), "failed to clear store");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_reads_nothing() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("store.json"));
        assert_eq!(store.read("walletAddress"), None);
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested/store.json"));

        store.write("walletAddress", "0xabc").unwrap();
        store.write("theme", "dark").unwrap();

        assert_eq!(store.read("walletAddress").as_deref(), Some("0xabc"));
        assert_eq!(store.read("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_clear_all_removes_file() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("store.json"));
        store.write("walletAddress", "0xabc").unwrap();

        store.clear_all();

        assert!(!store.path().exists());
        assert_eq!(store.read("walletAddress"), None);
    }

    #[test]
    fn test_corrupt_file_reads_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();

        let store = FileStore::new(path);
        assert_eq!(store.read("walletAddress"), None);
        assert!(store.write("walletAddress", "0xabc").is_err());
    }
}
