//! Core data models for Phonebook
//!
//! Contacts, the fixed set of providers, and the phone number format check.

pub mod contact;
pub mod phone;
pub mod provider;

pub use contact::{Contact, ContactValidationError};
pub use phone::is_valid_phone_number;
pub use provider::Provider;
