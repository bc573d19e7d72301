//! Phone-service providers
//!
//! The provider set is fixed: each provider owns exactly one contact file whose
//! name never changes.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One of the phone-service providers whose contacts are managed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Airtel,
    Jio,
    Vi,
}

impl Provider {
    /// Every provider, in menu order
    pub const ALL: [Provider; 3] = [Provider::Airtel, Provider::Jio, Provider::Vi];

    /// Name shown in menus and messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Airtel => "Airtel",
            Provider::Jio => "JIO",
            Provider::Vi => "VI",
        }
    }

    /// File name of this provider's contact store
    pub fn file_name(&self) -> &'static str {
        match self {
            Provider::Airtel => "airtel_contacts.txt",
            Provider::Jio => "jio_contacts.txt",
            Provider::Vi => "vi_contacts.txt",
        }
    }

    /// Stable lowercase identifier, used in audit entries
    pub fn key(&self) -> &'static str {
        match self {
            Provider::Airtel => "airtel",
            Provider::Jio => "jio",
            Provider::Vi => "vi",
        }
    }

    /// 1-based position in provider menus
    pub fn menu_number(&self) -> u32 {
        match self {
            Provider::Airtel => 1,
            Provider::Jio => 2,
            Provider::Vi => 3,
        }
    }

    /// Resolve a 1-based menu choice to a provider
    pub fn from_menu_choice(choice: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.menu_number() == choice)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
