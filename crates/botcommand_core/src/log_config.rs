//! Event logging configuration.

use crate::resource::{impl_resource, impl_switchable};
use serde::{Deserialize, Serialize};

/// Routes one server event type to a log channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Record identifier
    #[serde(default)]
    pub id: String,
    /// Event name, e.g. `Member Join`
    pub event_type: String,
    /// Channel receiving the log line
    pub channel: String,
    /// Whether the event is logged
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            event_type: String::new(),
            channel: String::new(),
            enabled: true,
        }
    }
}

impl_resource!(LogConfig, "logs", "Log");
impl_switchable!(LogConfig);
