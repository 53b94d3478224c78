//! Auto-moderation rules.

use crate::resource::{impl_resource, impl_switchable};
use serde::{Deserialize, Serialize};

/// A moderation rule applied automatically by the bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoModRule {
    /// Record identifier
    #[serde(default)]
    pub id: String,
    /// Rule name
    pub name: String,
    /// What the rule looks for, e.g. `Spam`
    pub trigger_type: String,
    /// What happens on a match, e.g. `Delete + Warn`
    pub action: String,
    /// Whether the rule is active
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl Default for AutoModRule {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            trigger_type: String::new(),
            action: String::new(),
            enabled: true,
        }
    }
}

impl_resource!(AutoModRule, "automod-rules", "AutoMod rule");
impl_switchable!(AutoModRule);
