//! BotCommand CLI binary.
//!
//! This binary provides command-line access to the dashboard:
//! - Launch the terminal dashboard (the default)
//! - Sign in and out, and inspect the environment
//! - List, show and delete records

use botcommand::{
    AutoModRule, Command, DashboardBackend, DashboardConfig, LogConfig, LogTarget, ReactionRole,
    YouTubeFeed, init_logging, open_session, select_backend,
};
use clap::Parser;
use std::sync::Arc;

mod cli;

use cli::{Cli, Commands, ResourceKind};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before clap reads BOTCOMMAND_* variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);

    let target = if matches!(command, Commands::Tui) {
        LogTarget::dashboard_default()
    } else {
        LogTarget::Stderr
    };
    init_logging(cli.verbose, target)?;

    let config = DashboardConfig::load(cli.config.as_deref())?
        .with_environment_overrides(cli.host, cli.mode);
    let session = open_session(&config)?;
    let backend = select_backend(&config, session)?;

    match command {
        Commands::Tui => cli::launch_tui(&config, backend).await?,
        Commands::Login { username, password } => {
            cli::login(&*backend, &username, &password).await?
        }
        Commands::Logout => cli::logout(&*backend)?,
        Commands::Whoami => cli::whoami(&*backend).await?,
        Commands::Env => cli::show_environment(&config, &*backend),
        Commands::Stats { format } => cli::show_stats(&*backend, format).await?,
        Commands::List { resource, format } => list(&backend, resource, format).await?,
        Commands::Show {
            resource,
            id,
            format,
        } => show(&backend, resource, &id, format).await?,
        Commands::Delete { resource, id } => delete(&backend, resource, &id).await?,
    }

    Ok(())
}

type Backend = Arc<dyn DashboardBackend>;

async fn list(
    backend: &Backend,
    resource: ResourceKind,
    format: cli::OutputFormat,
) -> botcommand::DashboardResult<()> {
    match resource {
        ResourceKind::Commands => cli::list_records::<Command>(backend, format).await,
        ResourceKind::ReactionRoles => cli::list_records::<ReactionRole>(backend, format).await,
        ResourceKind::YoutubeFeeds => cli::list_records::<YouTubeFeed>(backend, format).await,
        ResourceKind::Logs => cli::list_records::<LogConfig>(backend, format).await,
        ResourceKind::AutomodRules => cli::list_records::<AutoModRule>(backend, format).await,
    }
}

async fn show(
    backend: &Backend,
    resource: ResourceKind,
    id: &str,
    format: cli::OutputFormat,
) -> botcommand::DashboardResult<()> {
    match resource {
        ResourceKind::Commands => cli::show_record::<Command>(backend, id, format).await,
        ResourceKind::ReactionRoles => cli::show_record::<ReactionRole>(backend, id, format).await,
        ResourceKind::YoutubeFeeds => cli::show_record::<YouTubeFeed>(backend, id, format).await,
        ResourceKind::Logs => cli::show_record::<LogConfig>(backend, id, format).await,
        ResourceKind::AutomodRules => cli::show_record::<AutoModRule>(backend, id, format).await,
    }
}

async fn delete(backend: &Backend, resource: ResourceKind, id: &str) -> botcommand::DashboardResult<()> {
    match resource {
        ResourceKind::Commands => cli::delete_record::<Command>(backend, id).await,
        ResourceKind::ReactionRoles => cli::delete_record::<ReactionRole>(backend, id).await,
        ResourceKind::YoutubeFeeds => cli::delete_record::<YouTubeFeed>(backend, id).await,
        ResourceKind::Logs => cli::delete_record::<LogConfig>(backend, id).await,
        ResourceKind::AutomodRules => cli::delete_record::<AutoModRule>(backend, id).await,
    }
}
