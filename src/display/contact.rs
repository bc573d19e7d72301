//! Contact display formatting
//!
//! Formats contacts for the interactive menu and for the table printed by
//! `phonebook list`.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Contact, Provider};

/// One row of the contact table
#[derive(Tabled)]
struct ContactRow<'a> {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Number")]
    number: &'a str,
    #[tabled(rename = "Valid")]
    valid: &'static str,
}

/// Format contacts the way the interactive menu lists them
pub fn format_contact_list(contacts: &[Contact]) -> String {
    let mut output = String::from("Contacts List:\n");
    for contact in contacts {
        output.push_str(&format!("{}\n", contact));
    }
    output
}

/// Format the search result line for a found contact
pub fn format_contact_found(contact: &Contact) -> String {
    format!("Contact Found: {}", contact)
}

/// Format a provider's contacts as a table
pub fn format_contact_table(provider: Provider, contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return format!("No {} contacts found.", provider.display_name());
    }

    let rows = contacts.iter().enumerate().map(|(i, c)| ContactRow {
        position: i + 1,
        name: &c.name,
        number: &c.number,
        valid: if c.has_valid_number() { "yes" } else { "no" },
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());

    format!(
        "{} contacts\n{}\n\nTotal: {} contacts",
        provider.display_name(),
        table,
        contacts.len()
    )
}
