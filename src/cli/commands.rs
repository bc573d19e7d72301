//! Non-interactive command handlers
//!
//! Bridges the clap subcommands in `main.rs` with the service layer.

use std::io;

use crate::config::paths::DATA_DIR_ENV;
use crate::config::settings::Settings;
use crate::display::format_contact_table;
use crate::error::PhonebookResult;
use crate::models::Provider;
use crate::services::ContactService;
use crate::storage::Storage;

use super::console::Console;
use super::menu::Menu;

/// Run the interactive menu on standard input and output
pub fn run_interactive(storage: &Storage, settings: &Settings) -> PhonebookResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());
    Menu::new(storage, settings, console).run()
}

/// Print one provider's contacts as a table
pub fn handle_list_command(
    storage: &Storage,
    settings: &Settings,
    provider: Provider,
) -> PhonebookResult<()> {
    let contacts = ContactService::new(storage, settings).list(provider)?;
    println!("{}", format_contact_table(provider, &contacts));
    Ok(())
}

/// Print resolved paths and current settings
pub fn handle_config_command(storage: &Storage, settings: &Settings) -> PhonebookResult<()> {
    let paths = storage.paths();

    println!("Phonebook Configuration");
    println!("=======================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Data directory:   {}", paths.data_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Audit log:        {}", paths.audit_log().display());
    println!("(override with --data-dir or {})", DATA_DIR_ENV);
    println!();
    println!("Provider files:");
    for provider in Provider::ALL {
        println!(
            "  {:<8} {}",
            provider.display_name(),
            paths.provider_file(provider).display()
        );
    }
    println!();
    println!("Settings:");
    println!("  Warn on invalid numbers: {}", settings.warn_invalid_numbers);
    println!("  Audit logging:           {}", settings.audit_enabled);
    println!("  Max name length:         {}", settings.max_name_len);
    println!("  Max number length:       {}", settings.max_number_len);

    Ok(())
}

/// Print the most recent audit entries
pub fn handle_audit_command(storage: &Storage, limit: usize) -> PhonebookResult<()> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("No audit entries recorded.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
