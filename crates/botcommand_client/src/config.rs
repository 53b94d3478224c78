//! Connection settings for the REST client.

use botcommand_core::ApiConfig;
use std::time::Duration;

/// Base URL and deadline for outbound requests.
///
/// # Examples
///
/// ```
/// use botcommand_client::ClientConfigBuilder;
/// use std::time::Duration;
///
/// let config = ClientConfigBuilder::default()
///     .base_url("http://127.0.0.1:8000")
///     .build()
///     .unwrap();
/// assert_eq!(*config.timeout(), Duration::from_secs(15));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ClientConfig {
    /// Base URL of the bot backend, without a trailing slash
    base_url: String,
    /// Per-request deadline
    #[builder(default = "Duration::from_secs(15)")]
    timeout: Duration,
}

impl ClientConfig {
    /// Settings for `base_url` with the default deadline.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(15),
        }
    }

    /// Override the request deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl From<&ApiConfig> for ClientConfig {
    fn from(api: &ApiConfig) -> Self {
        Self::new(api.base_url.clone()).with_timeout(api.timeout())
    }
}
