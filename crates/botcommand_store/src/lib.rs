//! Seeded in-memory backend for BotCommand preview deployments.
//!
//! [`InMemoryBackend`] stands in for the REST API when the dashboard runs in
//! a preview environment. Collections start from fixed sample data and all
//! changes are lost when the backend is dropped.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod collection;
mod seed;

pub use backend::{InMemoryBackend, MOCK_PASSWORD, MOCK_TOKEN, MOCK_USERNAME, StoredRecord};
pub use collection::Collection;
pub use seed::{
    seed_automod_rules, seed_bot_status, seed_commands, seed_logs, seed_reaction_roles,
    seed_server_stats, seed_user, seed_youtube_feeds,
};
