//! Preview/production classification of the deployment hostname.

use serde::{Deserialize, Serialize};

/// Production hostname recognised when none is configured.
pub const DEFAULT_PRODUCTION_HOST: &str = "dca-frontend-v3.vercel.app";

/// Where the dashboard is running.
///
/// Preview contexts use the in-memory backend; production talks to the REST API.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Environment {
    /// Local development or a preview deployment
    Preview,
    /// The live deployment
    Production,
}

/// Configured override of the hostname rule.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EnvironmentMode {
    /// Classify from the hostname
    #[default]
    Auto,
    /// Always preview
    Preview,
    /// Always production
    Production,
}

impl Environment {
    /// Classify a hostname.
    ///
    /// `localhost` and `127.0.0.1` are preview. A `vercel.app` host is
    /// preview unless it is one of `production_hosts`. Anything else is
    /// production. Comparison ignores ASCII case and surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use botcommand_core::{Environment, DEFAULT_PRODUCTION_HOST};
    ///
    /// let prod = [DEFAULT_PRODUCTION_HOST];
    /// assert_eq!(Environment::detect("localhost", &prod), Environment::Preview);
    /// assert_eq!(Environment::detect("dca-frontend-v3-git-main.vercel.app", &prod), Environment::Preview);
    /// assert_eq!(Environment::detect("dca-frontend-v3.vercel.app", &prod), Environment::Production);
    /// assert_eq!(Environment::detect("bot.example.com", &prod), Environment::Production);
    /// ```
    pub fn detect<S: AsRef<str>>(hostname: &str, production_hosts: &[S]) -> Self {
        let host = hostname.trim().to_ascii_lowercase();

        if host == "localhost" || host == "127.0.0.1" {
            return Self::Preview;
        }

        if host.contains("vercel.app") {
            let is_production = production_hosts
                .iter()
                .any(|p| p.as_ref().trim().eq_ignore_ascii_case(&host));
            return if is_production {
                Self::Production
            } else {
                Self::Preview
            };
        }

        Self::Production
    }

    /// Apply an override, falling back to [`Environment::detect`] for `Auto`.
    pub fn resolve<S: AsRef<str>>(
        mode: EnvironmentMode,
        hostname: &str,
        production_hosts: &[S],
    ) -> Self {
        match mode {
            EnvironmentMode::Auto => Self::detect(hostname, production_hosts),
            EnvironmentMode::Preview => Self::Preview,
            EnvironmentMode::Production => Self::Production,
        }
    }

    /// Whether the in-memory backend should be used.
    pub fn is_preview(&self) -> bool {
        matches!(self, Self::Preview)
    }
}
