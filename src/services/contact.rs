//! Contact service
//!
//! Provides business logic for managing one provider's contacts: adding,
//! listing, searching, editing and deleting by phone number.

use crate::audit::AuditEntry;
use crate::config::settings::Settings;
use crate::error::{PhonebookError, PhonebookResult};
use crate::models::{Contact, Provider};
use crate::storage::Storage;

/// A contact that was edited, before and after
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatedContact {
    pub before: Contact,
    pub after: Contact,
}

/// Service for contact management
pub struct ContactService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> ContactService<'a> {
    /// Create a new contact service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Check a contact against the configured bounds
    pub fn validate(&self, contact: &Contact) -> PhonebookResult<()> {
        contact
            .validate(self.settings.max_name_len, self.settings.max_number_len)
            .map_err(|e| PhonebookError::Validation(e.to_string()))
    }

    /// Add a contact to the end of a provider's store
    ///
    /// Duplicates are allowed. A malformed number is stored as given.
    pub fn add(&self, provider: Provider, name: &str, number: &str) -> PhonebookResult<Contact> {
        let contact = Contact::new(name.trim(), number.trim());
        self.validate(&contact)?;

        self.storage.contacts(provider).append(&contact)?;
        self.storage.record(&[AuditEntry::create(provider, &contact)])?;

        Ok(contact)
    }

    /// List every contact of a provider, in file order
    pub fn list(&self, provider: Provider) -> PhonebookResult<Vec<Contact>> {
        self.storage.contacts(provider).load_all()
    }

    /// Find the first contact with exactly this number
    pub fn search(&self, provider: Provider, number: &str) -> PhonebookResult<Option<Contact>> {
        self.storage.contacts(provider).find_first(number)
    }

    /// Rewrite every contact whose number equals `number`
    ///
    /// `replace` is asked for the new version of each match, in file order.
    /// Fails with a not-found error, leaving the store untouched, if nothing
    /// matches. A replacement that fails validation abandons the whole edit.
    pub fn update<F>(
        &self,
        provider: Provider,
        number: &str,
        mut replace: F,
    ) -> PhonebookResult<Vec<UpdatedContact>>
    where
        F: FnMut(&Contact) -> PhonebookResult<Contact>,
    {
        let changes = self.storage.contacts(provider).replace_matching(number, |old| {
            let new = replace(old)?;
            self.validate(&new)?;
            Ok(Some(new))
        })?;

        let updated: Vec<UpdatedContact> = changes
            .into_iter()
            .filter_map(|change| {
                change.after.map(|after| UpdatedContact {
                    before: change.before,
                    after,
                })
            })
            .collect();

        let entries: Vec<AuditEntry> = updated
            .iter()
            .map(|u| AuditEntry::update(provider, &u.before, &u.after))
            .collect();
        self.storage.record(&entries)?;

        Ok(updated)
    }

    /// Delete every contact whose number equals `number`
    ///
    /// Returns the removed contacts in file order, or a not-found error.
    pub fn delete(&self, provider: Provider, number: &str) -> PhonebookResult<Vec<Contact>> {
        let changes = self
            .storage
            .contacts(provider)
            .replace_matching(number, |_| Ok(None))?;

        let removed: Vec<Contact> = changes.into_iter().map(|c| c.before).collect();

        let entries: Vec<AuditEntry> = removed
            .iter()
            .map(|c| AuditEntry::delete(provider, c))
            .collect();
        self.storage.record(&entries)?;

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::PhonebookPaths;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PhonebookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let storage = Storage::new(paths, &settings).unwrap();
        (temp_dir, storage, settings)
    }

    fn seed(service: &ContactService, records: &[(&str, &str)]) {
        for (name, number) in records {
            service.add(Provider::Airtel, name, number).unwrap();
        }
    }

    fn file_contents(storage: &Storage) -> String {
        fs::read_to_string(storage.contacts(Provider::Airtel).path()).unwrap_or_default()
    }

    #[test]
    fn test_add_and_list() {
        let (_temp, storage, settings) = create_test_storage();
        let service = ContactService::new(&storage, &settings);

        seed(&service, &[("Amy", "111"), ("Bo", "222")]);

        let contacts = service.list(Provider::Airtel).unwrap();
        assert_eq!(contacts, vec![Contact::new("Amy", "111"), Contact::new("Bo", "222")]);
        assert!(service.list(Provider::Jio).unwrap().is_empty());
    }

    #[test]
    fn test_add_keeps_invalid_number() {
        let (_temp, storage, settings) = create_test_storage();
        let service = ContactService::new(&storage, &settings);

        let contact = service.add(Provider::Airtel, "Amy", "12a34").unwrap();
        assert!(!contact.has_valid_number());
        assert_eq!(file_contents(&storage), "Amy 12a34\n");
    }

    #[test]
    fn test_add_rejects_too_long_name() {
        let (_temp, storage, settings) = create_test_storage();
        let service = ContactService::new(&storage, &settings);

        let err = service
            .add(Provider::Airtel, &"x".repeat(50), "111")
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(file_contents(&storage), "");
    }

    #[test]
    fn test_add_is_audited() {
        let (_temp, storage, settings) = create_test_storage();
        let service = ContactService::new(&storage, &settings);

        service.add(Provider::Airtel, "Amy", "111").unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
    }

    #[test]
    fn test_search_first_match() {
        let (_temp, storage, settings) = create_test_storage();
        let service = ContactService::new(&storage, &settings);

        assert_eq!(service.search(Provider::Airtel, "111").unwrap(), None);

        seed(&service, &[("Amy", "111"), ("Bo", "222"), ("Ann", "111")]);
        assert_eq!(
            service.search(Provider::Airtel, "111").unwrap(),
            Some(Contact::new("Amy", "111"))
        );
        assert_eq!(service.search(Provider::Airtel, "333").unwrap(), None);
    }

    #[test]
    fn test_update_rewrites_all_duplicates() {
        let (_temp, storage, settings) = create_test_storage();
        let service = ContactService::new(&storage, &settings);
        seed(&service, &[("Amy", "111"), ("Bo", "222"), ("Ann", "111")]);

        let updated = service
            .update(Provider::Airtel, "111", |_| Ok(Contact::new("Zed", "999")))
            .unwrap();

        assert_eq!(updated.len(), 2);
        assert_eq!(updated[0].before, Contact::new("Amy", "111"));
        assert_eq!(updated[1].before, Contact::new("Ann", "111"));
        assert_eq!(file_contents(&storage), "Zed 999\nBo 222\nZed 999\n");

        let audited = storage.audit().read_all().unwrap();
        let updates = audited
            .iter()
            .filter(|e| e.operation == Operation::Update)
            .count();
        assert_eq!(updates, 2);
    }

    #[test]
    fn test_update_not_found_leaves_file() {
        let (_temp, storage, settings) = create_test_storage();
        let service = ContactService::new(&storage, &settings);
        seed(&service, &[("Amy", "111"), ("Bo", "222")]);
        let before = file_contents(&storage);

        let err = service
            .update(Provider::Airtel, "333", |_| Ok(Contact::new("Zed", "999")))
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(file_contents(&storage), before);
    }

    #[test]
    fn test_update_rejects_invalid_replacement() {
        let (_temp, storage, settings) = create_test_storage();
        let service = ContactService::new(&storage, &settings);
        seed(&service, &[("Amy", "111")]);

        let err = service
            .update(Provider::Airtel, "111", |_| Ok(Contact::new("", "999")))
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(file_contents(&storage), "Amy 111\n");
    }

    #[test]
    fn test_delete_scenario() {
        let (_temp, storage, settings) = create_test_storage();
        let service = ContactService::new(&storage, &settings);
        seed(&service, &[("Amy", "111"), ("Bo", "222")]);

        let removed = service.delete(Provider::Airtel, "222").unwrap();
        assert_eq!(removed, vec![Contact::new("Bo", "222")]);
        assert_eq!(service.list(Provider::Airtel).unwrap(), vec![Contact::new("Amy", "111")]);

        let err = service.delete(Provider::Airtel, "222").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(file_contents(&storage), "Amy 111\n");
    }

    #[test]
    fn test_delete_removes_every_duplicate() {
        let (_temp, storage, settings) = create_test_storage();
        let service = ContactService::new(&storage, &settings);
        seed(&service, &[("Amy", "111"), ("Bo", "222"), ("Ann", "111"), ("Cy", "333")]);

        let removed = service.delete(Provider::Airtel, "111").unwrap();

        assert_eq!(removed.len(), 2);
        assert_eq!(file_contents(&storage), "Bo 222\nCy 333\n");
    }
}
