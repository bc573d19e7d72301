//! Contact model
//!
//! A contact is a name and a phone number. Neither field is unique; the store
//! keeps duplicates in the order they were written.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::phone::is_valid_phone_number;

/// Longest name accepted by default
pub const DEFAULT_MAX_NAME_LEN: usize = 49;

/// Longest phone number accepted by default
pub const DEFAULT_MAX_NUMBER_LEN: usize = 14;

/// A single contact record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Contact name (one whitespace-free token)
    pub name: String,

    /// Phone number, digits with an optional leading `+`
    pub number: String,
}

impl Contact {
    /// Create a new contact
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }

    /// Render the record as it is stored on disk, without the line terminator
    pub fn to_record_line(&self) -> String {
        format!("{} {}", self.name, self.number)
    }

    /// Check whether this contact's number equals `number` exactly
    pub fn has_number(&self, number: &str) -> bool {
        self.number == number
    }

    /// Whether the number passes the advisory format check
    pub fn has_valid_number(&self) -> bool {
        is_valid_phone_number(&self.number)
    }

    /// Validate the contact against length bounds
    ///
    /// The phone number format is not checked here; see [`Contact::has_valid_number`].
    pub fn validate(
        &self,
        max_name_len: usize,
        max_number_len: usize,
    ) -> Result<(), ContactValidationError> {
        if self.name.is_empty() {
            return Err(ContactValidationError::EmptyName);
        }

        if self.number.is_empty() {
            return Err(ContactValidationError::EmptyNumber);
        }

        if self.name.chars().any(char::is_whitespace) {
            return Err(ContactValidationError::NameHasWhitespace);
        }

        if self.number.chars().any(char::is_whitespace) {
            return Err(ContactValidationError::NumberHasWhitespace);
        }

        let name_len = self.name.chars().count();
        if name_len > max_name_len {
            return Err(ContactValidationError::NameTooLong {
                len: name_len,
                max: max_name_len,
            });
        }

        let number_len = self.number.chars().count();
        if number_len > max_number_len {
            return Err(ContactValidationError::NumberTooLong {
                len: number_len,
                max: max_number_len,
            });
        }

        Ok(())
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Number: {}", self.name, self.number)
    }
}

/// Validation errors for contacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    EmptyName,
    EmptyNumber,
    NameHasWhitespace,
    NumberHasWhitespace,
    NameTooLong { len: usize, max: usize },
    NumberTooLong { len: usize, max: usize },
}

impl fmt::Display for ContactValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::EmptyNumber => write!(f, "Phone number cannot be empty"),
            Self::NameHasWhitespace => write!(f, "Contact name cannot contain whitespace"),
            Self::NumberHasWhitespace => write!(f, "Phone number cannot contain whitespace"),
            Self::NameTooLong { len, max } => {
                write!(f, "Contact name too long ({} chars, max {})", len, max)
            }
            Self::NumberTooLong { len, max } => {
                write!(f, "Phone number too long ({} chars, max {})", len, max)
            }
        }
    }
}

impl std::error::Error for ContactValidationError {}
