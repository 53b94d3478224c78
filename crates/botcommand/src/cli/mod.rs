//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the botcommand binary.

mod account;
mod commands;
mod info;
mod records;
mod tui_handler;

pub use account::{login, logout, whoami};
pub use commands::{Cli, Commands, OutputFormat, ResourceKind};
pub use info::{show_environment, show_stats};
pub use records::{delete_record, list_records, show_record};
pub use tui_handler::launch_tui;
