//! BotCommand - terminal dashboard for a Discord bot.
//!
//! Manage custom commands, reaction roles, YouTube feeds, logging and
//! auto-moderation rules against the bot's REST API, or against a seeded
//! in-memory backend in preview deployments.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use botcommand::{DashboardConfig, ResourceStore, Command, open_session, select_backend};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DashboardConfig::load(None)?;
//!     let session = open_session(&config)?;
//!     let backend = select_backend(&config, session)?;
//!
//!     let commands = ResourceStore::<Command>::list(&*backend).await?;
//!     println!("{} commands", commands.len());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `botcommand_error` - Error types
//! - `botcommand_core` - Records, session, environment rule and configuration
//! - `botcommand_interface` - Backend capability traits
//! - `botcommand_client` - REST backend over reqwest
//! - `botcommand_store` - Seeded in-memory backend
//! - `botcommand_tui` - Terminal dashboard
//!
//! This crate (`botcommand`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod logging;

pub use backend::{open_session, select_backend};
pub use logging::{LogTarget, init_logging};

pub use botcommand_client::*;
pub use botcommand_core::*;
pub use botcommand_error::*;
pub use botcommand_interface::*;
pub use botcommand_store::*;
pub use botcommand_tui::*;
