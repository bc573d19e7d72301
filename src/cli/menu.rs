//! Interactive menu
//!
//! A two-level loop: the main menu picks a provider, a transfer, or exit;
//! the provider menu runs contact operations against the chosen provider
//! until the user returns.

use std::io::{BufRead, Write};

use crate::config::settings::Settings;
use crate::display::{format_contact_found, format_contact_list};
use crate::error::{PhonebookError, PhonebookResult};
use crate::models::{Contact, Provider};
use crate::services::{ContactService, TransferService};
use crate::storage::Storage;

use super::console::Console;

const MAIN_TITLE: &str = "=== Contact and Service Provider Management System ===";
const NO_MATCH: &str = "\nError: No matching contact found.";

/// A selection from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    Manage(Provider),
    Transfer,
    Exit,
}

impl MainChoice {
    const TRANSFER_NUMBER: u32 = Provider::ALL.len() as u32 + 1;
    const EXIT_NUMBER: u32 = Provider::ALL.len() as u32 + 2;

    /// Resolve a main menu number
    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            Self::TRANSFER_NUMBER => Some(Self::Transfer),
            Self::EXIT_NUMBER => Some(Self::Exit),
            n => Provider::from_menu_choice(n).map(Self::Manage),
        }
    }
}

/// A selection from a provider's menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderAction {
    Add,
    View,
    Search,
    Edit,
    Delete,
    Return,
}

impl ProviderAction {
    /// Every action, in menu order
    pub const ALL: [ProviderAction; 6] = [
        ProviderAction::Add,
        ProviderAction::View,
        ProviderAction::Search,
        ProviderAction::Edit,
        ProviderAction::Delete,
        ProviderAction::Return,
    ];

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            ProviderAction::Add => "Add Contact",
            ProviderAction::View => "View Contacts",
            ProviderAction::Search => "Search Contact",
            ProviderAction::Edit => "Edit Contact",
            ProviderAction::Delete => "Delete Contact",
            ProviderAction::Return => "Return to Main Menu",
        }
    }

    /// 1-based menu number
    pub fn number(&self) -> u32 {
        match self {
            ProviderAction::Add => 1,
            ProviderAction::View => 2,
            ProviderAction::Search => 3,
            ProviderAction::Edit => 4,
            ProviderAction::Delete => 5,
            ProviderAction::Return => 6,
        }
    }

    /// Resolve a provider menu number
    pub fn from_number(number: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.number() == number)
    }
}

/// The interactive menu bound to one storage and settings
pub struct Menu<'a, R, W> {
    storage: &'a Storage,
    settings: &'a Settings,
    console: Console<R, W>,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Create a menu over the given console
    pub fn new(storage: &'a Storage, settings: &'a Settings, console: Console<R, W>) -> Self {
        Self {
            storage,
            settings,
            console,
        }
    }

    /// Consume the menu, returning its console
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> PhonebookResult<()> {
        match self.main_loop() {
            Err(e) if e.is_input_closed() => {
                self.console.say("")?;
                Ok(())
            }
            other => other,
        }
    }

    fn main_loop(&mut self) -> PhonebookResult<()> {
        loop {
            self.show_main_menu()?;
            let choice = self.console.prompt_choice("Select an option: ")?;

            match choice.and_then(MainChoice::from_number) {
                Some(MainChoice::Manage(provider)) => self.provider_loop(provider)?,
                Some(MainChoice::Transfer) => self.transfer()?,
                Some(MainChoice::Exit) => {
                    self.console.say("\nExiting... Have a great day!")?;
                    return Ok(());
                }
                None => self.console.say("\nError: Invalid choice. Please try again.")?,
            }
        }
    }

    fn show_main_menu(&mut self) -> PhonebookResult<()> {
        self.console.say(&format!("\n{}", MAIN_TITLE))?;
        self.show_providers("Manage ", " Contacts")?;
        self.console
            .say(&format!("{}. Transfer Contact", MainChoice::TRANSFER_NUMBER))?;
        self.console
            .say(&format!("{}. Exit", MainChoice::EXIT_NUMBER))
    }

    fn show_providers(&mut self, prefix: &str, suffix: &str) -> PhonebookResult<()> {
        for provider in Provider::ALL {
            self.console.say(&format!(
                "{}. {}{}{}",
                provider.menu_number(),
                prefix,
                provider.display_name(),
                suffix
            ))?;
        }
        Ok(())
    }

    fn provider_loop(&mut self, provider: Provider) -> PhonebookResult<()> {
        loop {
            self.console
                .say(&format!("\n=== Manage Contacts ({}) ===", provider.display_name()))?;
            for action in ProviderAction::ALL {
                self.console
                    .say(&format!("{}. {}", action.number(), action.label()))?;
            }

            let choice = self.console.prompt_choice("Select an option: ")?;
            match choice.and_then(ProviderAction::from_number) {
                Some(ProviderAction::Return) => {
                    self.console.say("\nReturning to Main Menu.")?;
                    return Ok(());
                }
                Some(action) => self.perform(provider, action)?,
                None => self.console.say("\nError: Invalid option. Try again.")?,
            }
        }
    }

    fn perform(&mut self, provider: Provider, action: ProviderAction) -> PhonebookResult<()> {
        let result = match action {
            ProviderAction::Add => self.add(provider),
            ProviderAction::View => self.view(provider),
            ProviderAction::Search => self.search(provider),
            ProviderAction::Edit => self.edit(provider),
            ProviderAction::Delete => self.delete(provider),
            ProviderAction::Return => Ok(()),
        };
        self.report(result)
    }

    /// Print an operation failure and carry on; only a closed input or a broken
    /// console ends the loop.
    fn report(&mut self, result: PhonebookResult<()>) -> PhonebookResult<()> {
        match result {
            Ok(()) => Ok(()),
            Err(PhonebookError::InputClosed) => Err(PhonebookError::InputClosed),
            Err(e) if e.is_not_found() => self.console.say(NO_MATCH),
            Err(e) => self.console.say(&format!("\nError: {}", e)),
        }
    }

    fn warn_numbers(&self) -> bool {
        self.settings.warn_invalid_numbers
    }

    fn add(&mut self, provider: Provider) -> PhonebookResult<()> {
        let warn = self.warn_numbers();
        let name = self.console.prompt("Enter name: ")?;
        let number = self
            .console
            .prompt_phone_number("Enter the phone number: ", warn)?;

        ContactService::new(self.storage, self.settings).add(provider, &name, &number)?;
        self.console.say("\nContact added successfully!")
    }

    fn view(&mut self, provider: Provider) -> PhonebookResult<()> {
        let contacts = ContactService::new(self.storage, self.settings).list(provider)?;
        self.console.show(&format!("\n{}", format_contact_list(&contacts)))
    }

    fn search(&mut self, provider: Provider) -> PhonebookResult<()> {
        let warn = self.warn_numbers();
        let number = self
            .console
            .prompt_phone_number("Enter the phone number to search: ", warn)?;

        match ContactService::new(self.storage, self.settings).search(provider, &number)? {
            Some(contact) => self.console.say(&format_contact_found(&contact)),
            None => Err(PhonebookError::contact_not_found(number)),
        }
    }

    fn edit(&mut self, provider: Provider) -> PhonebookResult<()> {
        let warn = self.warn_numbers();
        let number = self
            .console
            .prompt_phone_number("Enter the phone number of the contact to update: ", warn)?;

        let service = ContactService::new(self.storage, self.settings);
        let console = &mut self.console;
        let updated = service.update(provider, &number, |old| {
            console.say(&format!("Editing {}", old))?;
            let name = console.prompt("Enter new name: ")?;
            let number = console.prompt_phone_number("Enter the new phone number: ", warn)?;
            Ok(Contact::new(name, number))
        })?;

        if updated.len() > 1 {
            self.console
                .say(&format!("\n{} contacts updated successfully.", updated.len()))
        } else {
            self.console.say("\nContact updated successfully.")
        }
    }

    fn delete(&mut self, provider: Provider) -> PhonebookResult<()> {
        let warn = self.warn_numbers();
        let number = self
            .console
            .prompt_phone_number("Enter the phone number of the contact to delete: ", warn)?;

        let removed = ContactService::new(self.storage, self.settings).delete(provider, &number)?;

        if removed.len() > 1 {
            self.console
                .say(&format!("\n{} contacts deleted successfully.", removed.len()))
        } else {
            self.console.say("\nContact deleted successfully.")
        }
    }

    fn select_provider(&mut self, title: &str) -> PhonebookResult<Option<Provider>> {
        self.console.say(&format!("\nSelect {} Provider:", title))?;
        self.show_providers("", "")?;
        let choice = self.console.prompt_choice("")?;
        Ok(choice.and_then(Provider::from_menu_choice))
    }

    fn transfer(&mut self) -> PhonebookResult<()> {
        let source = self.select_provider("Source")?;
        let destination = self.select_provider("Target")?;

        let (source, destination) = match (source, destination) {
            (Some(source), Some(destination)) => (source, destination),
            _ => return self.console.say("\nError: Invalid provider selection."),
        };

        if source == destination {
            return self
                .console
                .say("\nSource and destination providers must be different.");
        }

        let result = self.transfer_between(source, destination);
        self.report(result)
    }

    fn transfer_between(&mut self, source: Provider, destination: Provider) -> PhonebookResult<()> {
        let warn = self.warn_numbers();
        let number = self
            .console
            .prompt_phone_number("Enter the phone number of the contact to transfer: ", warn)?;

        let moved = TransferService::new(self.storage).transfer(source, destination, &number)?;

        if moved.len() > 1 {
            self.console
                .say(&format!("\n{} contacts transferred successfully.", moved.len()))
        } else {
            self.console.say("\nContact transferred successfully.")
        }
    }
}
