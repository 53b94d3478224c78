//! Error types for the in-memory store.

/// Store error kind variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoreErrorKind {
    /// No record with the requested id. Carries the record label, e.g. "Command".
    #[display("{} not found", _0)]
    NotFound(String),
}

/// Store error with source location tracking.
///
/// # Examples
///
/// ```
/// use botcommand_error::{StoreError, StoreErrorKind};
///
/// let err = StoreError::new(StoreErrorKind::NotFound("YouTube feed".to_string()));
/// assert_eq!(err.kind.to_string(), "YouTube feed not found");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Store Error: {} at line {} in {}", kind, line, file)]
pub struct StoreError {
    /// Error kind
    pub kind: StoreErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl StoreError {
    /// Create a new StoreError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoreErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a NotFound error on the given record label.
    #[track_caller]
    pub fn not_found(label: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::NotFound(label.into()))
    }
}
