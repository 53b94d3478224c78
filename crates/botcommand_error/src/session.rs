//! Session storage error types.

/// Failure reading or writing the persisted session token.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Session Error: {} at line {} in {}", message, line, file)]
pub struct SessionError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl SessionError {
    /// Create a new SessionError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use botcommand_error::SessionError;
    ///
    /// let err = SessionError::new("Failed to write token file");
    /// assert!(err.message.contains("token file"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
