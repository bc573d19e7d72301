//! Audit logging system for Phonebook
//!
//! Records every add, update, delete and transfer of a contact in an
//! append-only audit log.
//!
//! The log file uses a line-delimited JSON format (JSONL): one `AuditEntry`
//! per line, written and flushed as each operation completes.
//!
//! # Example
//!
//! ```rust,ignore
//! use phonebook::audit::{AuditEntry, AuditLogger};
//! use phonebook::models::{Contact, Provider};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! logger.log(&AuditEntry::create(Provider::Airtel, &Contact::new("Amy", "111")))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
