//! YouTube upload notification feeds.

use crate::resource::{impl_resource, impl_switchable};
use serde::{Deserialize, Serialize};

/// Announces new uploads of a YouTube channel in a chat channel.
///
/// # Examples
///
/// ```
/// use botcommand_core::YouTubeFeed;
///
/// let feed: YouTubeFeed = serde_json::from_str(
///     r#"{"channel_name":"Test","channel_id":"UC1","notification_channel":"videos"}"#,
/// ).unwrap();
/// assert!(feed.enabled);
/// assert!(!feed.mention_everyone);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YouTubeFeed {
    /// Record identifier
    #[serde(default)]
    pub id: String,
    /// Display name of the YouTube channel
    pub channel_name: String,
    /// YouTube channel id
    pub channel_id: String,
    /// Chat channel receiving announcements
    pub notification_channel: String,
    /// Whether announcements are sent
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    /// Whether announcements ping everyone
    #[serde(default)]
    pub mention_everyone: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl Default for YouTubeFeed {
    fn default() -> Self {
        Self {
            id: String::new(),
            channel_name: String::new(),
            channel_id: String::new(),
            notification_channel: String::new(),
            enabled: true,
            mention_everyone: false,
        }
    }
}

impl_resource!(YouTubeFeed, "youtube-feeds", "YouTube feed");
impl_switchable!(YouTubeFeed);
