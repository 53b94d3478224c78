//! Tests for dashboard error classification and operator messages.

use botcommand_error::{
    AuthError, AuthErrorKind, ConfigError, DashboardError, DashboardResult, StoreError,
    TransportError, TransportErrorKind,
};

#[test]
fn test_not_found_message_names_record() {
    let err: DashboardError = StoreError::not_found("Reaction role").into();
    assert!(err.is_not_found());
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.user_message(), "Reaction role not found");
    assert_eq!(err.name(), "StoreError");
}

#[test]
fn test_status_error_prefers_server_detail() {
    let err: DashboardError = TransportError::status(400, Some("Trigger is required".into())).into();
    assert_eq!(err.user_message(), "Trigger is required");
    assert_eq!(err.detail(), Some("Trigger is required"));
    assert_eq!(err.message(), "Request failed with status code 400");
    assert_eq!(err.status(), Some(400));
    assert!(!err.is_not_found());
}

#[test]
fn test_status_error_without_detail_uses_generic_message() {
    let err: DashboardError = TransportError::status(500, None).into();
    assert_eq!(err.user_message(), "Request failed with status code 500");
    assert_eq!(err.detail(), None);
}

#[test]
fn test_no_response_has_no_status() {
    let err: DashboardError =
        TransportError::new(TransportErrorKind::NoResponse("Cannot connect".into())).into();
    assert_eq!(err.status(), None);
    assert_eq!(err.user_message(), "Cannot connect");
    assert_eq!(err.name(), "TransportError");
}

#[test]
fn test_unauthorized_classification() {
    let err: DashboardError = AuthError::new(AuthErrorKind::Unauthorized).into();
    assert!(err.is_unauthorized());
    assert_eq!(err.status(), Some(401));

    let invalid: DashboardError = AuthError::new(AuthErrorKind::InvalidCredentials).into();
    assert!(!invalid.is_unauthorized());
    assert_eq!(invalid.user_message(), "Invalid username or password");
}

#[test]
fn test_question_mark_conversion() {
    fn load() -> DashboardResult<()> {
        Err(ConfigError::new("timeout_secs must be positive"))?
    }

    let err = load().unwrap_err();
    assert!(format!("{}", err).starts_with("BotCommand Error: Configuration Error"));
    assert_eq!(err.user_message(), "timeout_secs must be positive");
}

#[test]
fn test_location_is_tracked() {
    let err = StoreError::not_found("Log");
    assert!(err.file.ends_with("error_test.rs"));
    assert!(err.line > 0);
}
