//! Persistent storage
//!
//! Key-value persistence for user selections, plus the application settings file.

pub mod file;
pub mod memory;
pub mod settings;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not determine data directory")]
    NoDataDir,
}

/// String key-value storage, the desktop counterpart of browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing a key that is not present succeeds.
    fn delete(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Application data directory
///
/// - Linux: ~/.local/share/CampusGuide
/// - macOS: ~/Library/Application Support/com.CampusGuide.CampusGuide
/// - Windows: %APPDATA%/CampusGuide/CampusGuide/data
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    directories::ProjectDirs::from("com", "CampusGuide", "CampusGuide")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StorageError::NoDataDir)
}

/// Open the durable store in the data directory.
///
/// A corrupt storage file is treated as empty and overwritten by the next write.
/// Falls back to a session-only [`MemoryStore`] when the file cannot be opened.
pub fn open_local_storage(file_name: &str) -> Box<dyn KeyValueStore> {
    let opened = get_data_dir().and_then(|dir| FileStore::open_or_reset(dir.join(file_name)));
    match opened {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!("Failed to open local storage, selections will not persist: {}", e);
            Box::new(MemoryStore::new())
        }
    }
}
