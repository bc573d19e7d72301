//! Storage layer for Phonebook
//!
//! One plain-text record store per provider, plus the audit log that records
//! every change made through them.

pub mod contacts;
pub mod file_io;

pub use contacts::{ContactStore, PendingRewrite, RecordChange};
pub use file_io::Records;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::PhonebookPaths;
use crate::config::settings::Settings;
use crate::error::PhonebookError;
use crate::models::Provider;

/// Main storage coordinator that provides access to every provider's store
pub struct Storage {
    paths: PhonebookPaths,
    airtel: ContactStore,
    jio: ContactStore,
    vi: ContactStore,
    audit: AuditLogger,
    audit_enabled: bool,
}

impl Storage {
    /// Create a new Storage instance, creating the data directories if needed
    pub fn new(paths: PhonebookPaths, settings: &Settings) -> Result<Self, PhonebookError> {
        paths.ensure_directories()?;

        let store = |provider: Provider| ContactStore::new(provider, paths.provider_file(provider));

        Ok(Self {
            airtel: store(Provider::Airtel),
            jio: store(Provider::Jio),
            vi: store(Provider::Vi),
            audit: AuditLogger::new(paths.audit_log()),
            audit_enabled: settings.audit_enabled,
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &PhonebookPaths {
        &self.paths
    }

    /// Get the record store of a provider
    pub fn contacts(&self, provider: Provider) -> &ContactStore {
        match provider {
            Provider::Airtel => &self.airtel,
            Provider::Jio => &self.jio,
            Provider::Vi => &self.vi,
        }
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record audit entries, unless auditing is turned off
    pub fn record(&self, entries: &[AuditEntry]) -> Result<(), PhonebookError> {
        if !self.audit_enabled {
            return Ok(());
        }
        self.audit.log_batch(entries)
    }
}
