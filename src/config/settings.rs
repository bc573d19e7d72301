//! User settings for Phonebook
//!
//! Manages user preferences: input bounds, phone number warnings and audit
//! logging.

use serde::{Deserialize, Serialize};

use super::paths::PhonebookPaths;
use crate::error::PhonebookError;
use crate::models::contact::{DEFAULT_MAX_NAME_LEN, DEFAULT_MAX_NUMBER_LEN};

/// User settings for Phonebook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Print a warning when an entered number fails the format check
    #[serde(default = "default_true")]
    pub warn_invalid_numbers: bool,

    /// Record every mutation in the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,

    /// Longest accepted contact name, in characters
    #[serde(default = "default_max_name_len")]
    pub max_name_len: usize,

    /// Longest accepted phone number, in characters
    #[serde(default = "default_max_number_len")]
    pub max_number_len: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_max_name_len() -> usize {
    DEFAULT_MAX_NAME_LEN
}

fn default_max_number_len() -> usize {
    DEFAULT_MAX_NUMBER_LEN
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            warn_invalid_numbers: true,
            audit_enabled: true,
            max_name_len: default_max_name_len(),
            max_number_len: default_max_number_len(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &PhonebookPaths) -> Result<Self, PhonebookError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                PhonebookError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PhonebookError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PhonebookPaths) -> Result<(), PhonebookError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            PhonebookError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            PhonebookError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.warn_invalid_numbers);
        assert!(settings.audit_enabled);
        assert_eq!(settings.max_name_len, 49);
        assert_eq!(settings.max_number_len, 14);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PhonebookPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            audit_enabled: false,
            max_name_len: 20,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(!loaded.audit_enabled);
        assert_eq!(loaded.max_name_len, 20);
        assert_eq!(loaded.max_number_len, 14);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PhonebookPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"warn_invalid_numbers": false}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(!loaded.warn_invalid_numbers);
        assert!(loaded.audit_enabled);
        assert_eq!(loaded.schema_version, 1);
    }

    #[test]
    fn test_invalid_settings_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PhonebookPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, PhonebookError::Config(_)));
    }
}
