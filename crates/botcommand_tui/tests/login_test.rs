//! Tests for the login form.

use botcommand_core::Session;
use botcommand_error::{DashboardError, JsonError, TransportError};
use botcommand_store::{InMemoryBackend, MOCK_TOKEN};
use botcommand_tui::{LOGIN_FALLBACK_MESSAGE, LoginField, LoginForm, LoginState, login_error_message};

fn type_str(form: &mut LoginForm, text: &str) {
    for c in text.chars() {
        form.push_char(c);
    }
}

fn filled(username: &str, password: &str) -> LoginForm {
    let mut form = LoginForm::new(true);
    type_str(&mut form, username);
    form.toggle_focus();
    type_str(&mut form, password);
    form
}

#[test]
fn test_typing_and_masking() {
    let mut form = filled("admin", "secret");
    assert_eq!(form.username(), "admin");
    assert_eq!(form.password(), "secret");
    assert_eq!(form.masked_password(), "******");
    assert_eq!(form.focused(), LoginField::Password);

    form.backspace();
    assert_eq!(form.password(), "secre");
    form.toggle_focus();
    form.backspace();
    assert_eq!(form.username(), "admi");
}

#[tokio::test]
async fn test_preview_login_succeeds() {
    let session = Session::in_memory();
    let backend = InMemoryBackend::new(session.clone());
    let mut form = filled("admin", "password");

    assert!(form.submit(&backend).await);
    assert_eq!(form.state(), LoginState::Authenticated);
    assert_eq!(form.error(), None);
    assert_eq!(session.token().as_deref(), Some(MOCK_TOKEN));
}

#[tokio::test]
async fn test_rejected_login_records_message_and_debug_info() {
    let session = Session::in_memory();
    let backend = InMemoryBackend::new(session.clone());
    let mut form = filled("admin", "hunter2");

    assert!(!form.submit(&backend).await);
    assert_eq!(form.state(), LoginState::Failed);
    assert_eq!(form.error(), Some("Invalid username or password"));
    assert_eq!(
        form.debug_info(),
        Some("Error type: AuthError, Message: Invalid username or password, Status: No status")
    );
    assert!(!session.is_authenticated());
}

#[test]
fn test_begin_submit_clears_previous_failure() {
    let mut form = LoginForm::new(false);
    form.set_notice("old");
    form.begin_submit();
    assert_eq!(form.state(), LoginState::Submitting);
    assert_eq!(form.error(), None);
    assert_eq!(form.debug_info(), None);
}

#[test]
fn test_error_message_prefers_server_detail() {
    let err: DashboardError =
        TransportError::status(401, Some("Incorrect username or password".to_string())).into();
    assert_eq!(login_error_message(&err), "Incorrect username or password");

    let err: DashboardError = TransportError::status(500, None).into();
    assert_eq!(login_error_message(&err), "Request failed with status code 500");

    let err: DashboardError = JsonError::new("").into();
    assert_eq!(login_error_message(&err), LOGIN_FALLBACK_MESSAGE);
}

#[test]
fn test_direct_login_in_preview() {
    let session = Session::in_memory();
    let mut form = LoginForm::new(true);

    assert!(form.direct_login(&session));
    assert_eq!(form.state(), LoginState::Authenticated);
    let token = session.token().unwrap();
    let millis = token.strip_prefix("mock-token-").unwrap();
    assert!(millis.parse::<i64>().unwrap() > 0);
}

#[test]
fn test_direct_login_refused_outside_preview() {
    let session = Session::in_memory();
    let mut form = LoginForm::new(false);

    assert!(!form.direct_login(&session));
    assert_eq!(form.state(), LoginState::Failed);
    assert_eq!(form.error(), Some("Direct login failed"));
    assert!(form.debug_info().unwrap().starts_with("Error type: AuthError"));
    assert!(!session.is_authenticated());
}
