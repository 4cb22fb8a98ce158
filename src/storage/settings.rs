//! Settings storage
//!
//! Loads application settings from the data directory.

use crate::storage::{get_data_dir, StorageError};
use crate::types::Location;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Locations offered by the location selector
    #[serde(default = "default_selectable_locations")]
    pub selectable_locations: Vec<Location>,
    /// File name, inside the data directory, of the key-value storage file
    #[serde(default = "default_storage_file")]
    pub storage_file: String,
}

fn default_selectable_locations() -> Vec<Location> {
    vec![Location::Rajampeta]
}

fn default_storage_file() -> String {
    "local_storage.json".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            selectable_locations: default_selectable_locations(),
            storage_file: default_storage_file(),
        }
    }
}

impl AppSettings {
    /// Validate settings values
    pub fn validate(&mut self) {
        let mut seen = Vec::with_capacity(self.selectable_locations.len());
        self.selectable_locations.retain(|location| {
            if seen.contains(location) {
                false
            } else {
                seen.push(*location);
                true
            }
        });

        if self.selectable_locations.is_empty() {
            self.selectable_locations = default_selectable_locations();
        }

        if self.storage_file.trim().is_empty() {
            self.storage_file = default_storage_file();
        }
    }
}

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from disk
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings() -> AppSettings {
    match get_settings_path().and_then(|path| load_settings_from(&path)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        }
    }
}

pub fn load_settings_from(path: &Path) -> Result<AppSettings, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(AppSettings::default());
    }

    let json = fs::read_to_string(path)?;
    let mut settings: AppSettings = serde_json::from_str(&json)?;
    settings.validate();

    tracing::debug!("Loaded settings from disk");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.selectable_locations, vec![Location::Rajampeta]);
        assert_eq!(settings.storage_file, "local_storage.json");
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = AppSettings {
            selectable_locations: vec![
                Location::Bengaluru,
                Location::Rajampeta,
                Location::Bengaluru,
            ],
            storage_file: "  ".to_string(),
        };
        settings.validate();
        assert_eq!(
            settings.selectable_locations,
            vec![Location::Bengaluru, Location::Rajampeta]
        );
        assert_eq!(settings.storage_file, "local_storage.json");

        settings.selectable_locations.clear();
        settings.validate();
        assert_eq!(settings.selectable_locations, vec![Location::Rajampeta]);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_settings_persistence() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config").join("settings.json");

        let settings = AppSettings {
            selectable_locations: Location::ALL.to_vec(),
            storage_file: "selections.json".to_string(),
        };
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();

        assert_eq!(load_settings_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let loaded = load_settings_from(&dir.path().join("settings.json")).unwrap();
        assert_eq!(loaded, AppSettings::default());
    }

    #[test]
    fn test_unknown_location_in_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"selectable_locations": ["Mumbai"]}"#).unwrap();

        assert!(matches!(load_settings_from(&path), Err(StorageError::Json(_))));
    }
}
