//! Login form.

use botcommand_core::{Session, Token};
use botcommand_error::{AuthError, AuthErrorKind, DashboardError, DashboardResult};
use botcommand_interface::AuthBackend;
use tracing::{error, info, instrument};

/// Shown when a failed login carries no usable message.
pub const LOGIN_FALLBACK_MESSAGE: &str =
    "Login failed. Please check your credentials and try again.";

/// Submission state of the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoginState {
    /// Waiting for input
    Idle,
    /// Credentials sent, awaiting the backend
    Submitting,
    /// Token stored
    Authenticated,
    /// Last attempt was rejected
    Failed,
}

/// Input field with focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoginField {
    /// Username input
    Username,
    /// Password input
    Password,
}

/// Most specific message for a failed login.
///
/// Prefers the server's `detail`, then the error's own message, then
/// [`LOGIN_FALLBACK_MESSAGE`].
pub fn login_error_message(err: &DashboardError) -> String {
    if let Some(detail) = err.detail() {
        if !detail.is_empty() {
            return detail.to_string();
        }
    }
    let message = err.user_message();
    if message.is_empty() {
        LOGIN_FALLBACK_MESSAGE.to_string()
    } else {
        message
    }
}

fn debug_info(err: &DashboardError) -> String {
    let status = err
        .status()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "No status".to_string());
    format!(
        "Error type: {}, Message: {}, Status: {}",
        err.name(),
        err.message(),
        status
    )
}

/// Username/password form shown while signed out.
#[derive(Debug, Clone)]
pub struct LoginForm {
    username: String,
    password: String,
    focused: LoginField,
    state: LoginState,
    error: Option<String>,
    debug_info: Option<String>,
    preview: bool,
}

impl LoginForm {
    /// Empty form. `preview` enables direct login.
    pub fn new(preview: bool) -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            focused: LoginField::Username,
            state: LoginState::Idle,
            error: None,
            debug_info: None,
            preview,
        }
    }

    /// Typed username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Typed password.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Password masked for display.
    pub fn masked_password(&self) -> String {
        "*".repeat(self.password.chars().count())
    }

    /// Focused field.
    pub fn focused(&self) -> LoginField {
        self.focused
    }

    /// Submission state.
    pub fn state(&self) -> LoginState {
        self.state
    }

    /// Message from the last failed attempt.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Diagnostics from the last failed attempt.
    pub fn debug_info(&self) -> Option<&str> {
        self.debug_info.as_deref()
    }

    /// Whether direct login is offered.
    pub fn is_preview(&self) -> bool {
        self.preview
    }

    /// Show a message without a failed attempt, e.g. after session expiry.
    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Switch focus between the two fields.
    pub fn toggle_focus(&mut self) {
        self.focused = match self.focused {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    /// Type a character into the focused field.
    pub fn push_char(&mut self, c: char) {
        match self.focused {
            LoginField::Username => self.username.push(c),
            LoginField::Password => self.password.push(c),
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        match self.focused {
            LoginField::Username => self.username.pop(),
            LoginField::Password => self.password.pop(),
        };
    }

    /// Enter `Submitting` and clear the previous failure.
    pub fn begin_submit(&mut self) {
        self.state = LoginState::Submitting;
        self.error = None;
        self.debug_info = None;
    }

    /// Send the credentials. Returns true once a token is stored.
    #[instrument(skip(self, auth), fields(username = %self.username))]
    pub async fn submit(&mut self, auth: &dyn AuthBackend) -> bool {
        self.begin_submit();
        let result = auth.login(&self.username, &self.password).await;
        self.finish_submit(result)
    }

    /// Apply the result of a login call.
    pub fn finish_submit(&mut self, result: DashboardResult<Token>) -> bool {
        match result {
            Ok(_) => {
                info!("Login successful");
                self.password.clear();
                self.state = LoginState::Authenticated;
                true
            }
            Err(e) => {
                error!("Login error: {}", e);
                self.fail(&e);
                false
            }
        }
    }

    /// Store a fabricated token without contacting any backend.
    ///
    /// Only offered against the preview backend.
    #[instrument(skip_all)]
    pub fn direct_login(&mut self, session: &Session) -> bool {
        self.begin_submit();
        match self.store_direct_token(session) {
            Ok(()) => {
                info!("Direct login token stored");
                self.state = LoginState::Authenticated;
                true
            }
            Err(e) => {
                error!("Direct login error: {}", e);
                self.state = LoginState::Failed;
                self.error = Some("Direct login failed".to_string());
                self.debug_info = Some(debug_info(&e));
                false
            }
        }
    }

    fn store_direct_token(&self, session: &Session) -> DashboardResult<()> {
        if !self.preview {
            return Err(AuthError::new(AuthErrorKind::PreviewOnly).into());
        }
        let token = format!("mock-token-{}", chrono::Utc::now().timestamp_millis());
        session.store_token(token)
    }

    fn fail(&mut self, err: &DashboardError) {
        self.state = LoginState::Failed;
        self.error = Some(login_error_message(err));
        self.debug_info = Some(debug_info(err));
    }
}
