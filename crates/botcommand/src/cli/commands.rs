//! CLI command definitions.

use botcommand::EnvironmentMode;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// BotCommand - configure your Discord bot from the terminal
#[derive(Parser, Debug)]
#[command(name = "botcommand")]
#[command(about = "Configure a BotCommand Discord bot from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute (defaults to the dashboard)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file, layered over the defaults
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Hostname used to detect the environment
    #[arg(long, global = true, env = "BOTCOMMAND_HOST")]
    pub host: Option<String>,

    /// Force preview or production instead of detecting from the hostname
    #[arg(long, global = true, value_parser = parse_mode)]
    pub mode: Option<EnvironmentMode>,
}

fn parse_mode(s: &str) -> Result<EnvironmentMode, String> {
    s.parse()
        .map_err(|_| format!("expected auto, preview or production, got '{}'", s))
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the terminal dashboard
    Tui,

    /// Sign in and store the token
    Login {
        /// Account name
        #[arg(long, short)]
        username: String,

        /// Account password
        #[arg(long, short, env = "BOTCOMMAND_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the stored token
    Logout,

    /// Print the signed-in user
    Whoami,

    /// Print the detected environment and selected backend
    Env,

    /// Print server stats and bot status
    Stats {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// List records of one type
    List {
        /// Record type
        resource: ResourceKind,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Show one record
    Show {
        /// Record type
        resource: ResourceKind,

        /// Record id
        id: String,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Delete one record
    Delete {
        /// Record type
        resource: ResourceKind,

        /// Record id
        id: String,
    },
}

/// Record types addressable from the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    /// Custom commands
    Commands,
    /// Reaction roles
    ReactionRoles,
    /// YouTube feeds
    YoutubeFeeds,
    /// Logging configuration
    Logs,
    /// Auto-moderation rules
    AutomodRules,
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
