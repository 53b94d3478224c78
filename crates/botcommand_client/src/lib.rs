//! REST client backend for the BotCommand dashboard.
//!
//! [`Transport`] wraps every outbound call: it resolves paths against the
//! configured base URL, applies the request deadline, attaches the session's
//! bearer token and classifies failures. [`RemoteBackend`] implements the
//! dashboard backend traits on top of it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod remote;
mod transport;

pub use config::{ClientConfig, ClientConfigBuilder, ClientConfigBuilderError};
pub use remote::RemoteBackend;
pub use transport::Transport;
