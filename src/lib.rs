//! Phonebook - console contact manager for phone-service providers
//!
//! Keeps a separate plain-text contact list for each of three providers
//! (Airtel, JIO, VI) and lets a user add, view, search, edit, delete and
//! transfer contacts through a numbered console menu.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Contacts, providers and the phone number check
//! - `storage`: Plain-text record stores, one per provider
//! - `audit`: Append-only audit log of every change
//! - `services`: Business logic layer
//! - `display`: Console formatting
//! - `cli`: Interactive menu and subcommand handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use phonebook::config::{paths::PhonebookPaths, settings::Settings};
//! use phonebook::models::Provider;
//! use phonebook::services::ContactService;
//! use phonebook::storage::Storage;
//!
//! let paths = PhonebookPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//! ContactService::new(&storage, &settings).add(Provider::Airtel, "Amy", "111")?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{PhonebookError, PhonebookResult};
