//! Terminal dashboard for configuring a BotCommand bot.
//!
//! One panel per record type follows the same load/mutate cycle against a
//! [`botcommand_interface::DashboardBackend`]; the [`App`] shell switches
//! between them and routes to the login form whenever the session ends.
//! Built with ratatui for terminal rendering.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app;
mod events;
mod form;
mod home;
mod login;
mod panel;
mod records;
mod runner;
mod settings;
mod ui;

pub use app::{App, Section, View};
pub use events::{Event, EventHandler};
pub use form::{EditForm, FormField, FormMode};
pub use home::HomeView;
pub use login::{LOGIN_FALLBACK_MESSAGE, LoginField, LoginForm, LoginState, login_error_message};
pub use panel::{Applied, Mutation, Panel, PanelRecord, PanelState};
pub use runner::run_tui;
pub use settings::{SettingsField, SettingsPanel};
