//! Service layer for Phonebook
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, auditing, and cross-provider operations.

pub mod contact;
pub mod transfer;

pub use contact::{ContactService, UpdatedContact};
pub use transfer::TransferService;
