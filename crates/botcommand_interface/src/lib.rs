//! Backend trait definitions for the BotCommand dashboard.
//!
//! A backend is a capability set: one [`ResourceStore`] per record type, plus
//! authentication and read-only statistics. The REST client and the
//! in-memory preview store both implement [`DashboardBackend`], and the
//! binary selects one of them at startup.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{AuthBackend, BackendKind, DashboardBackend, ResourceStore, StatsBackend};
