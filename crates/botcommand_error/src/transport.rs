//! Error types for the HTTP transport.

/// Failure shapes of an outbound request.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum TransportErrorKind {
    /// The server answered with a non-success status.
    #[display("{}", message)]
    Status {
        /// HTTP status code
        status: u16,
        /// `detail` field from the response body, when present
        detail: Option<String>,
        /// Generic description of the failure
        message: String,
    },

    /// The request was sent but no response arrived (connect failure, timeout).
    #[display("{}", _0)]
    NoResponse(String),

    /// The request could not be constructed.
    #[display("Failed to build request: {}", _0)]
    Request(String),

    /// The response arrived but its body could not be decoded.
    #[display("Failed to decode response: {}", _0)]
    Decode(String),
}

/// Transport error with source location tracking.
///
/// # Examples
///
/// ```
/// use botcommand_error::{TransportError, TransportErrorKind};
///
/// let err = TransportError::status(404, Some("Command not found".to_string()));
/// assert_eq!(err.status_code(), Some(404));
/// assert_eq!(err.detail(), Some("Command not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Transport Error: {} at line {} in {}", kind, line, file)]
pub struct TransportError {
    /// The error kind
    pub kind: TransportErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl TransportError {
    /// Create a new TransportError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TransportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Error for a non-success status, keeping the server's detail when it sent one.
    #[track_caller]
    pub fn status(status: u16, detail: Option<String>) -> Self {
        Self::new(TransportErrorKind::Status {
            status,
            detail,
            message: format!("Request failed with status code {}", status),
        })
    }

    /// HTTP status of the response, if one arrived.
    pub fn status_code(&self) -> Option<u16> {
        match &self.kind {
            TransportErrorKind::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-provided detail message, if any.
    pub fn detail(&self) -> Option<&str> {
        match &self.kind {
            TransportErrorKind::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}
