//! Read-only aggregates shown on the home view.

use serde::{Deserialize, Serialize};

/// Message count for one busy channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopChannel {
    /// Channel name
    pub name: String,
    /// Messages posted
    pub messages: u64,
}

/// Server activity counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerStats {
    /// Commands invoked overall
    pub total_commands_used: u64,
    /// Members active recently
    pub active_users: u64,
    /// Moderation actions taken
    pub moderation_actions: u64,
    /// Messages posted today
    pub messages_today: u64,
    /// Members joined this week
    pub new_members_week: u64,
    /// Busiest channels, when the backend reports them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_channels: Option<Vec<TopChannel>>,
}

/// Bot feature flags and build information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotStatus {
    /// Auto-moderation switched on
    pub auto_moderation: bool,
    /// Welcome messages switched on
    pub welcome_messages: bool,
    /// Event logging switched on
    pub logging: bool,
    /// Human-readable uptime
    pub uptime: String,
    /// Bot version
    pub version: String,
    /// Servers the bot has joined
    pub servers: u64,
    /// Registered command count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands_registered: Option<u64>,
}

impl ServerStats {
    /// Figures shown when the backend cannot be reached.
    pub fn fallback() -> Self {
        Self {
            total_commands_used: 1234,
            active_users: 89,
            moderation_actions: 23,
            messages_today: 567,
            new_members_week: 12,
            top_channels: None,
        }
    }
}

impl BotStatus {
    /// Status shown when the backend cannot be reached.
    pub fn fallback() -> Self {
        Self {
            auto_moderation: true,
            welcome_messages: true,
            logging: false,
            uptime: "3 days, 7 hours".to_string(),
            version: "1.2.3".to_string(),
            servers: 42,
            commands_registered: None,
        }
    }
}
