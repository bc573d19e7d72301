//! Audit entry data structures
//!
//! Defines the operations that are audited and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Contact, Provider};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Contact was added
    Create,
    /// Contact was rewritten in place
    Update,
    /// Contact was removed
    Delete,
    /// Contact was moved to another provider
    Transfer,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Transfer => write!(f, "TRANSFER"),
        }
    }
}

/// A single audit log entry
///
/// Records one operation on one contact record. `before` is set for updates,
/// deletes and transfers; `after` for creates, updates and transfers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Provider whose store was changed
    pub provider: Provider,

    /// Identifier of the record, `<provider>:<number>` before the change
    pub entity_id: String,

    /// Destination provider, for transfers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Provider>,

    /// Contact before the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Contact>,

    /// Contact after the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Contact>,

    /// Human-readable change summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn base(operation: Operation, provider: Provider, number: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            provider,
            entity_id: format!("{}:{}", provider.key(), number),
            destination: None,
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    /// Create a new audit entry for an added contact
    pub fn create(provider: Provider, contact: &Contact) -> Self {
        Self {
            after: Some(contact.clone()),
            ..Self::base(Operation::Create, provider, &contact.number)
        }
    }

    /// Create a new audit entry for a rewritten contact
    pub fn update(provider: Provider, before: &Contact, after: &Contact) -> Self {
        Self {
            before: Some(before.clone()),
            after: Some(after.clone()),
            diff_summary: contact_diff(before, after),
            ..Self::base(Operation::Update, provider, &before.number)
        }
    }

    /// Create a new audit entry for a removed contact
    pub fn delete(provider: Provider, contact: &Contact) -> Self {
        Self {
            before: Some(contact.clone()),
            ..Self::base(Operation::Delete, provider, &contact.number)
        }
    }

    /// Create a new audit entry for a contact moved between providers
    pub fn transfer(source: Provider, destination: Provider, contact: &Contact) -> Self {
        Self {
            destination: Some(destination),
            before: Some(contact.clone()),
            after: Some(contact.clone()),
            diff_summary: Some(format!(
                "provider: {} -> {}",
                source.display_name(),
                destination.display_name()
            )),
            ..Self::base(Operation::Transfer, source, &contact.number)
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_id
        );

        if let Some(contact) = self.after.as_ref().or(self.before.as_ref()) {
            output.push_str(&format!(" ({})", contact.name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

/// Summarize the fields that differ between two versions of a contact
fn contact_diff(before: &Contact, after: &Contact) -> Option<String> {
    let mut changes = Vec::new();

    if before.name != after.name {
        changes.push(format!("name: {:?} -> {:?}", before.name, after.name));
    }
    if before.number != after.number {
        changes.push(format!("number: {:?} -> {:?}", before.number, after.number));
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
        assert_eq!(Operation::Transfer.to_string(), "TRANSFER");
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(Provider::Airtel, &Contact::new("Amy", "111"));

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_id, "airtel:111");
        assert!(entry.before.is_none());
        assert_eq!(entry.after, Some(Contact::new("Amy", "111")));
    }

    #[test]
    fn test_update_entry_diff() {
        let before = Contact::new("Amy", "111");
        let after = Contact::new("Amy", "333");
        let entry = AuditEntry::update(Provider::Jio, &before, &after);

        assert_eq!(entry.operation, Operation::Update);
        assert_eq!(entry.entity_id, "jio:111");
        assert_eq!(
            entry.diff_summary,
            Some("number: \"111\" -> \"333\"".to_string())
        );
    }

    #[test]
    fn test_update_without_changes_has_no_diff() {
        let contact = Contact::new("Amy", "111");
        let entry = AuditEntry::update(Provider::Jio, &contact, &contact);
        assert!(entry.diff_summary.is_none());
    }

    #[test]
    fn test_delete_entry() {
        let entry = AuditEntry::delete(Provider::Vi, &Contact::new("Bo", "222"));

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_transfer_entry() {
        let entry = AuditEntry::transfer(Provider::Airtel, Provider::Jio, &Contact::new("Amy", "111"));

        assert_eq!(entry.operation, Operation::Transfer);
        assert_eq!(entry.provider, Provider::Airtel);
        assert_eq!(entry.destination, Some(Provider::Jio));
        assert_eq!(entry.diff_summary, Some("provider: Airtel -> JIO".to_string()));
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::create(Provider::Vi, &Contact::new("Amy", "111"));

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"operation\":\"create\""));
        assert!(json.contains("\"provider\":\"vi\""));
        assert!(!json.contains("destination"));

        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.operation, Operation::Create);
        assert_eq!(deserialized.provider, Provider::Vi);
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::update(
            Provider::Airtel,
            &Contact::new("Amy", "111"),
            &Contact::new("Zed", "111"),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("UPDATE"));
        assert!(formatted.contains("airtel:111"));
        assert!(formatted.contains("(Zed)"));
        assert!(formatted.contains("Changes: name: \"Amy\" -> \"Zed\""));
    }
}
