//! Transfer service
//!
//! Moves contacts from one provider's store to another. Every record of the
//! source whose number matches is removed from the source and appended to
//! the end of the destination, in the order it was found.

use crate::audit::AuditEntry;
use crate::error::{PhonebookError, PhonebookResult};
use crate::models::{Contact, Provider};
use crate::storage::Storage;

/// Service for moving contacts between providers
pub struct TransferService<'a> {
    storage: &'a Storage,
}

impl<'a> TransferService<'a> {
    /// Create a new transfer service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Move every contact numbered `number` from `source` to `destination`
    ///
    /// The destination is appended before the source is replaced, so a failure
    /// part way through can leave a copy in both stores but never loses one.
    /// Fails with a not-found error, touching neither store, when the source
    /// has no match.
    pub fn transfer(
        &self,
        source: Provider,
        destination: Provider,
        number: &str,
    ) -> PhonebookResult<Vec<Contact>> {
        if source == destination {
            return Err(PhonebookError::Validation(
                "Source and destination providers must be different".into(),
            ));
        }

        let pending = self
            .storage
            .contacts(source)
            .prepare_rewrite(number, |_| Ok(None))?;

        if !pending.has_matches() {
            return Err(PhonebookError::contact_not_found(number));
        }

        let moved: Vec<Contact> = pending
            .changes()
            .iter()
            .map(|change| change.before.clone())
            .collect();

        self.storage.contacts(destination).append_all(&moved)?;
        pending.commit()?;

        let entries: Vec<AuditEntry> = moved
            .iter()
            .map(|c| AuditEntry::transfer(source, destination, c))
            .collect();
        self.storage.record(&entries)?;

        Ok(moved)
    }
}
