//! Panel presentation of each record type.

use crate::PanelRecord;
use crate::form::{flag, optional, parse_flag, required};
use botcommand_core::{
    AutoModRule, Command, LogConfig, ReactionRole, Switchable, TriggerType, YouTubeFeed,
};
use botcommand_store::{
    seed_automod_rules, seed_commands, seed_logs, seed_reaction_roles, seed_youtube_feeds,
};

fn enabled_cell(enabled: bool) -> String {
    if enabled { "Enabled" } else { "Disabled" }.to_string()
}

fn switched<R: Switchable>(record: &R) -> R {
    let mut copy = record.clone();
    copy.set_enabled(!record.enabled());
    copy
}

impl PanelRecord for Command {
    const TITLE: &'static str = "Custom Commands";
    const DESCRIPTION: &'static str = "Create and manage custom commands for your server";
    const PLURAL: &'static str = "custom commands";
    const SINGULAR: &'static str = "command";

    fn columns() -> &'static [&'static str] {
        &["Trigger", "Type", "Response", "Roles", "Channels"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.trigger.clone(),
            self.trigger_type.to_string(),
            self.response.replace('\n', " "),
            self.roles.clone(),
            self.channels.clone(),
        ]
    }

    fn form_labels() -> &'static [&'static str] {
        &[
            "Trigger",
            "Trigger type (Command/Prefix/Minus/Regex/Contains)",
            "Response",
            "Roles",
            "Channels",
            "Case sensitive (yes/no)",
        ]
    }

    fn form_values(&self) -> Vec<String> {
        vec![
            self.trigger.clone(),
            self.trigger_type.to_string(),
            self.response.clone(),
            self.roles.clone(),
            self.channels.clone(),
            flag(self.case_sensitive),
        ]
    }

    fn from_form(values: &[String]) -> Result<Self, String> {
        let trigger_type = optional(values, 1);
        let trigger_type = if trigger_type.is_empty() {
            TriggerType::default()
        } else {
            trigger_type
                .parse()
                .map_err(|_| format!("Unknown trigger type: {}", trigger_type))?
        };
        let roles = optional(values, 3);
        let channels = optional(values, 4);
        Ok(Self {
            id: String::new(),
            trigger: required(values, 0, "Trigger")?,
            trigger_type,
            response: required(values, 2, "Response")?,
            roles: if roles.is_empty() { "Everyone".into() } else { roles },
            channels: if channels.is_empty() { "All".into() } else { channels },
            case_sensitive: parse_flag(&optional(values, 5)),
        })
    }

    fn fallback() -> Vec<Self> {
        seed_commands()
    }
}

impl PanelRecord for ReactionRole {
    const TITLE: &'static str = "Reaction Roles";
    const DESCRIPTION: &'static str = "Let members pick roles by reacting to a message";
    const PLURAL: &'static str = "reaction roles";
    const SINGULAR: &'static str = "reaction role";

    fn columns() -> &'static [&'static str] {
        &["Message ID", "Channel", "Emoji", "Role"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.message_id.clone(),
            format!("#{}", self.channel),
            self.emoji.clone(),
            self.role.clone(),
        ]
    }

    fn form_labels() -> &'static [&'static str] {
        &["Message ID", "Channel", "Emoji", "Role"]
    }

    fn form_values(&self) -> Vec<String> {
        vec![
            self.message_id.clone(),
            self.channel.clone(),
            self.emoji.clone(),
            self.role.clone(),
        ]
    }

    fn from_form(values: &[String]) -> Result<Self, String> {
        Ok(Self {
            id: String::new(),
            message_id: required(values, 0, "Message ID")?,
            channel: required(values, 1, "Channel")?,
            emoji: required(values, 2, "Emoji")?,
            role: required(values, 3, "Role")?,
        })
    }

    fn fallback() -> Vec<Self> {
        seed_reaction_roles()
    }
}

impl PanelRecord for YouTubeFeed {
    const TITLE: &'static str = "YouTube Feeds";
    const DESCRIPTION: &'static str = "Announce new uploads from YouTube channels";
    const PLURAL: &'static str = "YouTube feeds";
    const SINGULAR: &'static str = "YouTube feed";

    fn columns() -> &'static [&'static str] {
        &["Channel", "Channel ID", "Notify In", "Status", "@everyone"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.channel_name.clone(),
            self.channel_id.clone(),
            format!("#{}", self.notification_channel),
            enabled_cell(self.enabled),
            flag(self.mention_everyone),
        ]
    }

    fn form_labels() -> &'static [&'static str] {
        &[
            "Channel name",
            "Channel ID",
            "Notification channel",
            "Enabled (yes/no)",
            "Mention everyone (yes/no)",
        ]
    }

    fn form_values(&self) -> Vec<String> {
        vec![
            self.channel_name.clone(),
            self.channel_id.clone(),
            self.notification_channel.clone(),
            flag(self.enabled),
            flag(self.mention_everyone),
        ]
    }

    fn from_form(values: &[String]) -> Result<Self, String> {
        Ok(Self {
            id: String::new(),
            channel_name: required(values, 0, "Channel name")?,
            channel_id: required(values, 1, "Channel ID")?,
            notification_channel: required(values, 2, "Notification channel")?,
            enabled: parse_flag(&optional(values, 3)),
            mention_everyone: parse_flag(&optional(values, 4)),
        })
    }

    fn fallback() -> Vec<Self> {
        seed_youtube_feeds()
    }

    fn toggled(&self) -> Option<Self> {
        Some(switched(self))
    }

    fn secondary_toggled(&self) -> Option<Self> {
        let mut copy = self.clone();
        copy.mention_everyone = !self.mention_everyone;
        Some(copy)
    }
}

impl PanelRecord for LogConfig {
    const TITLE: &'static str = "Logging";
    const DESCRIPTION: &'static str = "Choose which server events are logged and where";
    const PLURAL: &'static str = "logging configuration";
    const SINGULAR: &'static str = "log configuration";

    fn columns() -> &'static [&'static str] {
        &["Event", "Channel", "Status"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.event_type.clone(),
            format!("#{}", self.channel),
            enabled_cell(self.enabled),
        ]
    }

    fn form_labels() -> &'static [&'static str] {
        &["Event type", "Channel", "Enabled (yes/no)"]
    }

    fn form_values(&self) -> Vec<String> {
        vec![
            self.event_type.clone(),
            self.channel.clone(),
            flag(self.enabled),
        ]
    }

    fn from_form(values: &[String]) -> Result<Self, String> {
        Ok(Self {
            id: String::new(),
            event_type: required(values, 0, "Event type")?,
            channel: required(values, 1, "Channel")?,
            enabled: parse_flag(&optional(values, 2)),
        })
    }

    fn fallback() -> Vec<Self> {
        seed_logs()
    }

    fn toggled(&self) -> Option<Self> {
        Some(switched(self))
    }
}

impl PanelRecord for AutoModRule {
    const TITLE: &'static str = "Auto-Moderation";
    const DESCRIPTION: &'static str = "Automatically act on spam, banned words and more";
    const PLURAL: &'static str = "auto-moderation rules";
    const SINGULAR: &'static str = "rule";

    fn columns() -> &'static [&'static str] {
        &["Name", "Trigger", "Action", "Status"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.trigger_type.clone(),
            self.action.clone(),
            enabled_cell(self.enabled),
        ]
    }

    fn form_labels() -> &'static [&'static str] {
        &["Name", "Trigger type", "Action", "Enabled (yes/no)"]
    }

    fn form_values(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.trigger_type.clone(),
            self.action.clone(),
            flag(self.enabled),
        ]
    }

    fn from_form(values: &[String]) -> Result<Self, String> {
        Ok(Self {
            id: String::new(),
            name: required(values, 0, "Name")?,
            trigger_type: required(values, 1, "Trigger type")?,
            action: required(values, 2, "Action")?,
            enabled: parse_flag(&optional(values, 3)),
        })
    }

    fn fallback() -> Vec<Self> {
        seed_automod_rules()
    }

    fn toggled(&self) -> Option<Self> {
        Some(switched(self))
    }
}
