//! CLI command handlers
//!
//! This module contains the interactive menu and the handlers for the
//! non-interactive subcommands.

pub mod commands;
pub mod console;
pub mod menu;

pub use commands::{handle_audit_command, handle_config_command, handle_list_command, run_interactive};
pub use console::Console;
pub use menu::{MainChoice, Menu, ProviderAction};
