//! Shared bearer-token session.

use botcommand_error::{DashboardResult, SessionError};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, instrument, warn};

#[derive(Debug)]
struct SessionState {
    token: RwLock<Option<String>>,
    expired: AtomicBool,
    token_file: Option<PathBuf>,
}

/// Holds the bearer token for the signed-in operator.
///
/// Cloning yields another handle to the same session, so the transport,
/// the backends and the UI all observe the same login state. When a token
/// file is configured the token survives restarts.
///
/// # Examples
///
/// ```
/// use botcommand_core::Session;
///
/// let session = Session::in_memory();
/// session.store_token("abc").unwrap();
/// assert_eq!(session.bearer_header().as_deref(), Some("Bearer abc"));
///
/// session.expire().unwrap();
/// assert!(!session.is_authenticated());
/// assert!(session.take_expired());
/// assert!(!session.take_expired());
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    inner: Arc<SessionState>,
}

impl Session {
    /// A session that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self::with_state(None, None)
    }

    /// A session persisted to `path`. Any token already stored there is loaded.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn persistent(path: impl AsRef<Path>) -> DashboardResult<Self> {
        let path = path.as_ref().to_path_buf();
        let token = if path.exists() {
            let text = std::fs::read_to_string(&path).map_err(|e| {
                SessionError::new(format!("Failed to read {}: {}", path.display(), e))
            })?;
            let text = text.trim().to_string();
            (!text.is_empty()).then_some(text)
        } else {
            None
        };
        debug!(restored = token.is_some(), "Session opened");
        Ok(Self::with_state(token, Some(path)))
    }

    /// Token file under the user config directory.
    pub fn default_token_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("botcommand").join("token"))
    }

    fn with_state(token: Option<String>, token_file: Option<PathBuf>) -> Self {
        Self {
            inner: Arc::new(SessionState {
                token: RwLock::new(token),
                expired: AtomicBool::new(false),
                token_file,
            }),
        }
    }

    /// Current token, if signed in.
    pub fn token(&self) -> Option<String> {
        self.inner
            .token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a token is held.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// `Authorization` header value for the current token.
    pub fn bearer_header(&self) -> Option<String> {
        self.token().map(|t| format!("Bearer {}", t))
    }

    /// Record a new token, persisting it when a token file is configured.
    #[instrument(skip_all)]
    pub fn store_token(&self, token: impl Into<String>) -> DashboardResult<()> {
        let token = token.into();
        if let Some(path) = &self.inner.token_file {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    SessionError::new(format!("Failed to create {}: {}", parent.display(), e))
                })?;
            }
            std::fs::write(path, &token).map_err(|e| {
                SessionError::new(format!("Failed to write {}: {}", path.display(), e))
            })?;
        }
        *self
            .inner
            .token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(token);
        self.inner.expired.store(false, Ordering::SeqCst);
        debug!("Token stored");
        Ok(())
    }

    /// Forget the token, including its persisted copy.
    #[instrument(skip(self))]
    pub fn clear(&self) -> DashboardResult<()> {
        *self
            .inner
            .token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
        if let Some(path) = &self.inner.token_file {
            if path.exists() {
                std::fs::remove_file(path).map_err(|e| {
                    SessionError::new(format!("Failed to remove {}: {}", path.display(), e))
                })?;
            }
        }
        debug!("Session cleared");
        Ok(())
    }

    /// Clear the token because the server rejected it, and flag the expiry.
    pub fn expire(&self) -> DashboardResult<()> {
        warn!("Session rejected by server");
        self.inner.expired.store(true, Ordering::SeqCst);
        self.clear()
    }

    /// Whether the session expired since the last call. Resets the flag.
    pub fn take_expired(&self) -> bool {
        self.inner.expired.swap(false, Ordering::SeqCst)
    }
}
