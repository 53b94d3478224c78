//! Authentication error types.

/// Authentication error kind variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum AuthErrorKind {
    /// Username/password pair was rejected
    #[display("Invalid username or password")]
    InvalidCredentials,
    /// The server rejected the bearer token; the session was cleared
    #[display("Your session has expired. Please log in again.")]
    Unauthorized,
    /// Operation is only available against the preview backend
    #[display("Direct login is only available in preview mode")]
    PreviewOnly,
}

/// Authentication error with source location tracking.
///
/// # Examples
///
/// ```
/// use botcommand_error::{AuthError, AuthErrorKind};
///
/// let err = AuthError::new(AuthErrorKind::InvalidCredentials);
/// assert!(format!("{}", err).contains("Invalid username or password"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Auth Error: {} at line {} in {}", kind, line, file)]
pub struct AuthError {
    /// Error kind
    pub kind: AuthErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl AuthError {
    /// Create a new AuthError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AuthErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
