//! Path management for Phonebook
//!
//! Resolves where contact files, settings and the audit log live.
//!
//! ## Path Resolution Order
//!
//! 1. An explicit directory passed on the command line (`--data-dir`)
//! 2. `PHONEBOOK_DATA_DIR` environment variable (if set)
//! 3. The platform config directory (`~/.config/phonebook` on Linux)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::PhonebookError;
use crate::models::Provider;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "PHONEBOOK_DATA_DIR";

/// Manages all paths used by Phonebook
#[derive(Debug, Clone)]
pub struct PhonebookPaths {
    /// Base directory for all Phonebook data
    base_dir: PathBuf,
}

impl PhonebookPaths {
    /// Create a new PhonebookPaths instance
    ///
    /// Path resolution:
    /// 1. `PHONEBOOK_DATA_DIR` env var (explicit override)
    /// 2. Platform config directory from `directories`
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, PhonebookError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create PhonebookPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the directory holding the provider contact files
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the contact file of a provider
    pub fn provider_file(&self, provider: Provider) -> PathBuf {
        self.data_dir().join(provider.file_name())
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), PhonebookError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PhonebookError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| PhonebookError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default base directory for the current platform
fn resolve_default_path() -> Result<PathBuf, PhonebookError> {
    ProjectDirs::from("", "", "phonebook")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PhonebookError::Config("Could not determine home directory".into()))
}
