//! Top-level error wrapper types.

use crate::{
    AuthError, AuthErrorKind, ConfigError, JsonError, SessionError, StoreError, StoreErrorKind,
    TransportError, TransportErrorKind,
};
#[cfg(feature = "tui")]
use crate::TuiError;

/// Every failure a dashboard operation can report.
///
/// # Examples
///
/// ```
/// use botcommand_error::{DashboardError, ConfigError};
///
/// let err: DashboardError = ConfigError::new("bad timeout").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum DashboardErrorKind {
    /// HTTP transport failure
    #[from(TransportError)]
    Transport(TransportError),
    /// Authentication failure
    #[from(AuthError)]
    Auth(AuthError),
    /// In-memory store failure
    #[from(StoreError)]
    Store(StoreError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Session persistence error
    #[from(SessionError)]
    Session(SessionError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Terminal UI error
    #[cfg(feature = "tui")]
    #[from(TuiError)]
    Tui(TuiError),
}

/// Dashboard error with kind discrimination.
///
/// # Examples
///
/// ```
/// use botcommand_error::{DashboardResult, AuthError, AuthErrorKind};
///
/// fn login() -> DashboardResult<()> {
///     Err(AuthError::new(AuthErrorKind::InvalidCredentials))?
/// }
///
/// let err = login().unwrap_err();
/// assert_eq!(err.user_message(), "Invalid username or password");
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("BotCommand Error: {}", _0)]
pub struct DashboardError(Box<DashboardErrorKind>);

impl DashboardError {
    /// Create a new error from a kind.
    pub fn new(kind: DashboardErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &DashboardErrorKind {
        &self.0
    }

    /// Short name of the failing layer, used in login diagnostics.
    pub fn name(&self) -> &'static str {
        match self.kind() {
            DashboardErrorKind::Transport(_) => "TransportError",
            DashboardErrorKind::Auth(_) => "AuthError",
            DashboardErrorKind::Store(_) => "StoreError",
            DashboardErrorKind::Config(_) => "ConfigError",
            DashboardErrorKind::Session(_) => "SessionError",
            DashboardErrorKind::Json(_) => "JsonError",
            #[cfg(feature = "tui")]
            DashboardErrorKind::Tui(_) => "TuiError",
        }
    }

    /// Message suitable for showing to the operator, without source locations.
    pub fn user_message(&self) -> String {
        match self.kind() {
            DashboardErrorKind::Transport(e) => match &e.kind {
                TransportErrorKind::Status {
                    detail: Some(detail),
                    ..
                } => detail.clone(),
                kind => kind.to_string(),
            },
            DashboardErrorKind::Auth(e) => e.kind.to_string(),
            DashboardErrorKind::Store(e) => e.kind.to_string(),
            DashboardErrorKind::Config(e) => e.message.clone(),
            DashboardErrorKind::Session(e) => e.message.clone(),
            DashboardErrorKind::Json(e) => e.message.clone(),
            #[cfg(feature = "tui")]
            DashboardErrorKind::Tui(e) => e.kind.to_string(),
        }
    }

    /// Generic description of the failure, ignoring any server detail.
    pub fn message(&self) -> String {
        match self.kind() {
            DashboardErrorKind::Transport(e) => e.kind.to_string(),
            _ => self.user_message(),
        }
    }

    /// Server-provided `detail`, when the failure came with one.
    pub fn detail(&self) -> Option<&str> {
        match self.kind() {
            DashboardErrorKind::Transport(e) => e.detail(),
            _ => None,
        }
    }

    /// HTTP status, when a response arrived.
    pub fn status(&self) -> Option<u16> {
        match self.kind() {
            DashboardErrorKind::Transport(e) => e.status_code(),
            DashboardErrorKind::Store(StoreError {
                kind: StoreErrorKind::NotFound(_),
                ..
            }) => Some(404),
            DashboardErrorKind::Auth(AuthError {
                kind: AuthErrorKind::Unauthorized,
                ..
            }) => Some(401),
            _ => None,
        }
    }

    /// True when the requested record does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// True when the session was rejected and cleared.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self.kind(),
            DashboardErrorKind::Auth(AuthError {
                kind: AuthErrorKind::Unauthorized,
                ..
            })
        )
    }
}

// Generic From implementation for any type that converts to DashboardErrorKind
impl<T> From<T> for DashboardError
where
    T: Into<DashboardErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for dashboard operations.
pub type DashboardResult<T> = std::result::Result<T, DashboardError>;
