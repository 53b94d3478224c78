//! Sample data the preview backend starts from.
//!
//! The same records double as fallback rows when a live fetch fails.

use botcommand_core::{
    AutoModRule, BotStatus, Command, LogConfig, ReactionRole, ServerStats, TopChannel,
    TriggerType, User, YouTubeFeed,
};

fn command(id: &str, trigger: &str, kind: TriggerType, response: &str, roles: &str, channels: &str) -> Command {
    Command {
        id: id.to_string(),
        trigger: trigger.to_string(),
        trigger_type: kind,
        response: response.to_string(),
        roles: roles.to_string(),
        channels: channels.to_string(),
        case_sensitive: false,
    }
}

/// Seed custom commands.
pub fn seed_commands() -> Vec<Command> {
    vec![
        command(
            "1",
            "!help",
            TriggerType::Command,
            "Here are the available commands: !help, !rules, !welcome",
            "Everyone",
            "All",
        ),
        command(
            "2",
            "!rules",
            TriggerType::Command,
            "1. Be respectful\n2. No spamming\n3. Follow Discord TOS",
            "Everyone",
            "All",
        ),
        command(
            "3",
            "-warn",
            TriggerType::Minus,
            "User has been warned!",
            "Moderator",
            "mod-commands",
        ),
        command(
            "4",
            "&rank",
            TriggerType::Prefix,
            "Your rank is: {rank}",
            "Everyone",
            "bot-commands",
        ),
    ]
}

fn reaction_role(id: &str, message_id: &str, channel: &str, emoji: &str, role: &str) -> ReactionRole {
    ReactionRole {
        id: id.to_string(),
        message_id: message_id.to_string(),
        channel: channel.to_string(),
        emoji: emoji.to_string(),
        role: role.to_string(),
    }
}

/// Seed reaction roles.
pub fn seed_reaction_roles() -> Vec<ReactionRole> {
    vec![
        reaction_role("1", "1234567890123456", "roles", "🎮", "Gamer"),
        reaction_role("2", "1234567890123456", "roles", "🎵", "Music Lover"),
        reaction_role("3", "9876543210987654", "get-roles", "🎨", "Artist"),
    ]
}

/// Seed YouTube feeds.
pub fn seed_youtube_feeds() -> Vec<YouTubeFeed> {
    vec![
        YouTubeFeed {
            id: "1".to_string(),
            channel_name: "YAGPDB".to_string(),
            channel_id: "UCt4Kp23GIKCZgZ3uGhsj8Pg".to_string(),
            notification_channel: "youtube-notifications".to_string(),
            enabled: true,
            mention_everyone: false,
        },
        YouTubeFeed {
            id: "2".to_string(),
            channel_name: "Discord".to_string(),
            channel_id: "UC4xOVw8GrKjUyzHHZnvLSIQ".to_string(),
            notification_channel: "discord-updates".to_string(),
            enabled: true,
            mention_everyone: true,
        },
    ]
}

/// Seed log configurations.
pub fn seed_logs() -> Vec<LogConfig> {
    ["Member Join", "Member Leave", "Message Delete"]
        .iter()
        .enumerate()
        .map(|(i, event)| LogConfig {
            id: (i + 1).to_string(),
            event_type: event.to_string(),
            channel: "logs".to_string(),
            enabled: true,
        })
        .collect()
}

/// Seed auto-moderation rules.
pub fn seed_automod_rules() -> Vec<AutoModRule> {
    vec![
        AutoModRule {
            id: "1".to_string(),
            name: "Anti-Spam".to_string(),
            trigger_type: "Spam".to_string(),
            action: "Delete".to_string(),
            enabled: true,
        },
        AutoModRule {
            id: "2".to_string(),
            name: "Word Filter".to_string(),
            trigger_type: "Banned Words".to_string(),
            action: "Delete + Warn".to_string(),
            enabled: true,
        },
    ]
}

/// Seed server statistics, including the busiest channels.
pub fn seed_server_stats() -> ServerStats {
    ServerStats {
        top_channels: Some(vec![
            TopChannel {
                name: "general".to_string(),
                messages: 345,
            },
            TopChannel {
                name: "gaming".to_string(),
                messages: 234,
            },
            TopChannel {
                name: "music".to_string(),
                messages: 123,
            },
        ]),
        ..ServerStats::fallback()
    }
}

/// Seed bot status.
pub fn seed_bot_status() -> BotStatus {
    BotStatus {
        commands_registered: Some(25),
        ..BotStatus::fallback()
    }
}

/// The only account the preview backend knows.
pub fn seed_user() -> User {
    User {
        id: "1".to_string(),
        username: "admin".to_string(),
        email: "admin@example.com".to_string(),
        disabled: Some(false),
    }
}
