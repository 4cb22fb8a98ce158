//! File-backed key-value store
//!
//! Keeps every entry in a single JSON object on disk. The whole file is read
//! on open and rewritten on each change.

use crate::storage::{KeyValueStore, StorageError};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store; a corrupt one is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        let entries = if path.exists() {
            let json = fs::read_to_string(&path)?;
            serde_json::from_str(&json)?
        } else {
            tracing::info!("Storage file {:?} not found, starting empty", path);
            BTreeMap::new()
        };

        Ok(Self { path, entries })
    }

    /// Open the store at `path`, treating an unparseable file as empty.
    ///
    /// The bad contents are left on disk until the next write replaces them.
    pub fn open_or_reset(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        match Self::open(path.clone()) {
            Err(StorageError::Json(e)) => {
                tracing::warn!("Storage file {:?} is corrupt, starting empty: {}", path, e);
                Ok(Self {
                    path,
                    entries: BTreeMap::new(),
                })
            }
            other => other,
        }
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)?;

        tracing::debug!("Flushed {} entries to {:?}", self.entries.len(), self.path);
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_none() {
            return Ok(());
        }
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("selectedLocation").unwrap(), None);
        assert!(!path.exists());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("selectedLocation", "Bengaluru").unwrap();
        store.set("other", "x").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("selectedLocation").unwrap().as_deref(),
            Some("Bengaluru")
        );
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn test_delete_removes_entry_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("selectedLocation", "Rajampeta").unwrap();
        store.delete("selectedLocation").unwrap();

        let json = fs::read_to_string(&path).unwrap();
        assert!(!json.contains("selectedLocation"));
        assert_eq!(FileStore::open(&path).unwrap().get("selectedLocation").unwrap(), None);
    }

    #[test]
    fn test_delete_missing_key_does_not_create_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");

        let mut store = FileStore::open(&path).unwrap();
        store.delete("selectedLocation").unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(FileStore::open(&path), Err(StorageError::Json(_))));
    }

    #[test]
    fn test_corrupt_file_is_replaced_on_next_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{truncated").unwrap();

        let mut store = FileStore::open_or_reset(&path).unwrap();
        assert_eq!(store.get("selectedLocation").unwrap(), None);

        store.set("selectedLocation", "Bengaluru").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("selectedLocation").unwrap().as_deref(),
            Some("Bengaluru")
        );
    }

    #[test]
    fn test_open_or_reset_still_reports_io_errors() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be cannot be read as a file.
        let path = dir.path().join("storage.json");
        fs::create_dir(&path).unwrap();

        assert!(matches!(FileStore::open_or_reset(&path), Err(StorageError::Io(_))));
    }
}
