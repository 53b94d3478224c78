//! Error types for the BotCommand dashboard.
//!
//! This crate provides the foundation error types used throughout the BotCommand workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use botcommand_error::{DashboardResult, StoreError, StoreErrorKind};
//!
//! fn find_command() -> DashboardResult<String> {
//!     Err(StoreError::new(StoreErrorKind::NotFound("Command".to_string())))?
//! }
//!
//! match find_command() {
//!     Ok(id) => println!("Got: {}", id),
//!     Err(e) => assert_eq!(e.user_message(), "Command not found"),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod config;
mod error;
mod json;
mod session;
mod store;
mod transport;
#[cfg(feature = "tui")]
mod tui;

pub use auth::{AuthError, AuthErrorKind};
pub use config::ConfigError;
pub use error::{DashboardError, DashboardErrorKind, DashboardResult};
pub use json::JsonError;
pub use session::SessionError;
pub use store::{StoreError, StoreErrorKind};
pub use transport::{TransportError, TransportErrorKind};
#[cfg(feature = "tui")]
pub use tui::{TuiError, TuiErrorKind, TuiResult};
