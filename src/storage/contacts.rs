//! Contact store for one provider's record file
//!
//! Supports appending, scanning, and rewriting the records whose number
//! matches a key.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::PhonebookError;
use crate::models::{Contact, Provider};

use super::file_io::{
    append_records, open_records, persist_over, sibling_temp_file, write_record, Records,
};

/// One matched record and what it became
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordChange {
    /// The record as it was read
    pub before: Contact,
    /// Its replacement, or `None` if it was dropped from the file
    pub after: Option<Contact>,
}

/// A rewrite that has been staged in a temp file but not yet applied
///
/// Dropping it without calling [`PendingRewrite::commit`] leaves the store untouched.
#[derive(Debug)]
pub struct PendingRewrite {
    path: PathBuf,
    temp: NamedTempFile,
    changes: Vec<RecordChange>,
}

impl PendingRewrite {
    /// Records matched during the scan, in file order
    pub fn changes(&self) -> &[RecordChange] {
        &self.changes
    }

    /// Whether any record matched
    pub fn has_matches(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Replace the store file with the staged contents
    pub fn commit(self) -> Result<Vec<RecordChange>, PhonebookError> {
        persist_over(self.temp, &self.path)?;
        Ok(self.changes)
    }
}

/// Record store for a single provider
#[derive(Debug, Clone)]
pub struct ContactStore {
    provider: Provider,
    path: PathBuf,
}

impl ContactStore {
    /// Create a store backed by the file at `path`
    pub fn new(provider: Provider, path: PathBuf) -> Self {
        Self { provider, path }
    }

    /// Provider this store belongs to
    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one contact to the end of the file
    pub fn append(&self, contact: &Contact) -> Result<(), PhonebookError> {
        append_records(&self.path, std::slice::from_ref(contact))
    }

    /// Append several contacts, keeping their order
    pub fn append_all(&self, contacts: &[Contact]) -> Result<(), PhonebookError> {
        if contacts.is_empty() {
            return Ok(());
        }
        append_records(&self.path, contacts)
    }

    /// Scan all records from the start of the file
    ///
    /// Every call re-opens the file. A store that was never written scans empty.
    pub fn scan_all(&self) -> Result<Records<BufReader<File>>, PhonebookError> {
        open_records(&self.path)
    }

    /// Collect every record, in file order
    pub fn load_all(&self) -> Result<Vec<Contact>, PhonebookError> {
        self.scan_all()?.collect()
    }

    /// Find the first record with exactly this number
    pub fn find_first(&self, number: &str) -> Result<Option<Contact>, PhonebookError> {
        for record in self.scan_all()? {
            let contact = record?;
            if contact.has_number(number) {
                return Ok(Some(contact));
            }
        }
        Ok(None)
    }

    /// Stage a rewrite of every record whose number equals `number`
    ///
    /// `on_match` is called for each match in file order and returns the
    /// replacement record, or `None` to drop it. Non-matching records are
    /// copied unchanged. An error from `on_match` abandons the rewrite.
    pub fn prepare_rewrite<F>(&self, number: &str, mut on_match: F) -> Result<PendingRewrite, PhonebookError>
    where
        F: FnMut(&Contact) -> Result<Option<Contact>, PhonebookError>,
    {
        let records = self.scan_all()?;
        let temp = sibling_temp_file(&self.path)?;
        let mut writer = BufWriter::new(temp);
        let mut changes = Vec::new();

        for record in records {
            let contact = record?;

            if contact.has_number(number) {
                let after = on_match(&contact)?;
                if let Some(replacement) = &after {
                    self.write_staged(&mut writer, replacement)?;
                }
                changes.push(RecordChange {
                    before: contact,
                    after,
                });
            } else {
                self.write_staged(&mut writer, &contact)?;
            }
        }

        writer
            .flush()
            .map_err(|e| PhonebookError::Storage(format!("Failed to flush temp file: {}", e)))?;
        let temp = writer
            .into_inner()
            .map_err(|e| PhonebookError::Storage(format!("Failed to flush temp file: {}", e.error())))?;

        Ok(PendingRewrite {
            path: self.path.clone(),
            temp,
            changes,
        })
    }

    /// Rewrite matching records in one step
    ///
    /// Returns the changes made, or a not-found error (leaving the file
    /// untouched) when no record matched.
    pub fn replace_matching<F>(&self, number: &str, on_match: F) -> Result<Vec<RecordChange>, PhonebookError>
    where
        F: FnMut(&Contact) -> Result<Option<Contact>, PhonebookError>,
    {
        let pending = self.prepare_rewrite(number, on_match)?;
        if !pending.has_matches() {
            return Err(PhonebookError::contact_not_found(number));
        }
        pending.commit()
    }

    fn write_staged<W: Write>(&self, writer: &mut W, contact: &Contact) -> Result<(), PhonebookError> {
        write_record(writer, contact)
            .map_err(|e| PhonebookError::Storage(format!("Failed to write temp file: {}", e)))
    }
}
