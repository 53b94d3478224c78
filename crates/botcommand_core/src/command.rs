//! Custom command records.

use crate::resource::impl_resource;
use serde::{Deserialize, Serialize};

/// How a command trigger is matched against chat messages.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumString,
)]
pub enum TriggerType {
    /// Prefixed command such as `!help`
    #[default]
    Command,
    /// Message starts with the trigger
    Prefix,
    /// Minus-prefixed moderation command
    Minus,
    /// Trigger is a regular expression
    Regex,
    /// Message contains the trigger anywhere
    Contains,
}

/// A custom bot command.
///
/// # Examples
///
/// ```
/// use botcommand_core::{Command, TriggerType};
///
/// let json = r#"{"id":"1","trigger":"!help","trigger_type":"Command",
///     "response":"Try !rules","roles":"Everyone","channels":"All"}"#;
/// let cmd: Command = serde_json::from_str(json).unwrap();
/// assert_eq!(cmd.trigger_type, TriggerType::Command);
/// assert!(!cmd.case_sensitive);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Record identifier
    #[serde(default)]
    pub id: String,
    /// Text that fires the command
    pub trigger: String,
    /// Matching strategy
    #[serde(default)]
    pub trigger_type: TriggerType,
    /// Reply sent by the bot
    pub response: String,
    /// Roles allowed to use the command
    pub roles: String,
    /// Channels the command listens in
    pub channels: String,
    /// Whether matching respects case
    #[serde(default)]
    pub case_sensitive: bool,
}

impl_resource!(Command, "commands", "Command");
