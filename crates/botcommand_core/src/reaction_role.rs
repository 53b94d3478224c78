//! Reaction role records.

use crate::resource::impl_resource;
use serde::{Deserialize, Serialize};

/// Grants `role` to members reacting with `emoji` on a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionRole {
    /// Record identifier
    #[serde(default)]
    pub id: String,
    /// Message the reaction is placed on
    pub message_id: String,
    /// Channel holding the message
    pub channel: String,
    /// Emoji that triggers the grant
    pub emoji: String,
    /// Role to grant
    pub role: String,
}

impl_resource!(ReactionRole, "reaction-roles", "Reaction role");
