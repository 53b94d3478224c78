//! Core data types for the BotCommand dashboard.
//!
//! Records managed by the dashboard, the session handle shared by every
//! backend, the deployment environment rule, and configuration loading.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod automod_rule;
mod command;
mod config;
mod environment;
mod log_config;
mod reaction_role;
mod resource;
mod session;
mod settings;
mod stats;
mod user;
mod welcome;
mod youtube_feed;

pub use automod_rule::AutoModRule;
pub use command::{Command, TriggerType};
pub use config::{
    ApiConfig, DashboardConfig, EnvironmentConfig, PreviewConfig, SessionConfig, TuiConfig,
};
pub use environment::{DEFAULT_PRODUCTION_HOST, Environment, EnvironmentMode};
pub use log_config::LogConfig;
pub use reaction_role::ReactionRole;
pub use resource::{Resource, Switchable};
pub use session::Session;
pub use settings::{BotSettings, Language, Timezone};
pub use stats::{BotStatus, ServerStats, TopChannel};
pub use user::{DeleteAck, Token, User};
pub use welcome::WelcomeConfig;
pub use youtube_feed::YouTubeFeed;
