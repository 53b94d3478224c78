//! Environment and stats handlers.

use super::OutputFormat;
use botcommand::{DashboardBackend, DashboardConfig, DashboardResult, JsonError};
use serde_json::json;

/// Print the detected environment and selected backend.
pub fn show_environment(config: &DashboardConfig, backend: &dyn DashboardBackend) {
    println!("Hostname:    {}", config.environment.hostname);
    println!("Mode:        {}", config.environment.mode);
    println!("Environment: {}", config.environment());
    println!("Backend:     {}", backend.kind());
    println!("API:         {}", config.api.base_url);
    println!(
        "Session:     {}",
        if backend.session().is_authenticated() {
            "logged in"
        } else {
            "logged out"
        }
    );
}

/// Print server stats and bot status.
pub async fn show_stats(backend: &dyn DashboardBackend, format: OutputFormat) -> DashboardResult<()> {
    let (stats, status) = tokio::try_join!(backend.server_stats(), backend.bot_status())?;

    match format {
        OutputFormat::Json => {
            let body = json!({ "server_stats": stats, "bot_status": status });
            let text = serde_json::to_string_pretty(&body)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", text);
        }
        OutputFormat::Human => {
            println!("Server stats:");
            println!("  Commands used:      {}", stats.total_commands_used);
            println!("  Active users:       {}", stats.active_users);
            println!("  Moderation actions: {}", stats.moderation_actions);
            println!("  Messages today:     {}", stats.messages_today);
            println!("  New members (week): {}", stats.new_members_week);
            for channel in stats.top_channels.iter().flatten() {
                println!("  #{:<18} {}", channel.name, channel.messages);
            }
            println!("Bot status:");
            println!("  Version:  {}", status.version);
            println!("  Uptime:   {}", status.uptime);
            println!("  Servers:  {}", status.servers);
            println!("  Auto-moderation: {}", status.auto_moderation);
            println!("  Welcome messages: {}", status.welcome_messages);
            println!("  Logging: {}", status.logging);
            if let Some(count) = status.commands_registered {
                println!("  Commands registered: {}", count);
            }
        }
    }
    Ok(())
}
