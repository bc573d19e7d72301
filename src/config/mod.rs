//! Configuration module for Phonebook
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PhonebookPaths;
pub use settings::Settings;
