use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use phonebook::cli::{handle_audit_command, handle_config_command, handle_list_command, run_interactive};
use phonebook::config::{paths::PhonebookPaths, settings::Settings};
use phonebook::models::Provider;
use phonebook::storage::Storage;

#[derive(Parser)]
#[command(
    name = "phonebook",
    version,
    about = "Console contact manager for phone-service providers",
    long_about = "Phonebook keeps a separate contact list for each of Airtel, JIO \
                  and VI. Run it without a subcommand to open the interactive menu."
)]
struct Cli {
    /// Directory holding contact files, settings and the audit log
    #[arg(long, global = true, env = "PHONEBOOK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive menu (default)
    Menu,

    /// Print one provider's contacts as a table
    #[command(alias = "ls")]
    List {
        /// Provider to list
        #[arg(value_enum)]
        provider: Provider,
    },

    /// Show current configuration and paths
    Config,

    /// Show recent changes from the audit log
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => PhonebookPaths::with_base_dir(dir),
        None => PhonebookPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
    }
    let storage = Storage::new(paths, &settings)?;

    match cli.command {
        None | Some(Commands::Menu) => run_interactive(&storage, &settings)?,
        Some(Commands::List { provider }) => handle_list_command(&storage, &settings, provider)?,
        Some(Commands::Config) => handle_config_command(&storage, &settings)?,
        Some(Commands::Audit { limit }) => handle_audit_command(&storage, limit)?,
    }

    Ok(())
}
