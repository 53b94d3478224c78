//! Dashboard configuration.
//!
//! Loaded from TOML with the following precedence (later sources override earlier):
//! - Bundled defaults (include_str! from botcommand.toml)
//! - `~/.config/botcommand/botcommand.toml`
//! - `./botcommand.toml`
//! - An explicit file passed on the command line

use crate::{DEFAULT_PRODUCTION_HOST, Environment, EnvironmentMode};
use botcommand_error::{ConfigError, DashboardError, DashboardResult};
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../botcommand.toml");

/// REST API connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the bot backend
    pub base_url: String,
    /// Per-request deadline in seconds
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Per-request deadline.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://dca-backend-v3-production.up.railway.app".to_string(),
            timeout_secs: 15,
        }
    }
}

/// Deployment environment settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Hostname the dashboard runs under
    pub hostname: String,
    /// Override of the hostname rule
    #[serde(default)]
    pub mode: EnvironmentMode,
    /// `vercel.app` hosts that are production rather than preview
    #[serde(default)]
    pub production_hosts: Vec<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            hostname: "localhost".to_string(),
            mode: EnvironmentMode::Auto,
            production_hosts: vec![DEFAULT_PRODUCTION_HOST.to_string()],
        }
    }
}

/// Simulated latency of the in-memory backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Delay for list, create, update, delete and stats calls
    pub latency_ms: u64,
    /// Delay for single-record lookups
    pub lookup_latency_ms: u64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            latency_ms: 500,
            lookup_latency_ms: 300,
        }
    }
}

/// Session persistence settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Keep the token in the user config directory between runs
    pub persist: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { persist: true }
    }
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Event loop tick in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

/// Top-level dashboard configuration.
///
/// # Example
///
/// ```no_run
/// use botcommand_core::DashboardConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = DashboardConfig::load(None)?;
/// println!("Backend at {}", config.api.base_url);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// REST API connection
    #[serde(default)]
    pub api: ApiConfig,
    /// Environment detection
    #[serde(default)]
    pub environment: EnvironmentConfig,
    /// In-memory backend behaviour
    #[serde(default)]
    pub preview: PreviewConfig,
    /// Session persistence
    #[serde(default)]
    pub session: SessionConfig,
    /// Terminal UI
    #[serde(default)]
    pub tui: TuiConfig,
}

impl DashboardConfig {
    /// Load configuration from a specific file path, over the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> DashboardResult<Self> {
        debug!("Loading configuration from file");

        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()));
        Self::finish(builder)
    }

    /// Load configuration with precedence: explicit file > current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    /// The explicit file, when given, must exist.
    #[instrument(skip(explicit))]
    pub fn load(explicit: Option<&Path>) -> DashboardResult<Self> {
        debug!("Loading configuration with precedence: explicit > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/botcommand/botcommand.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("botcommand").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path));
        }

        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> DashboardResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                DashboardError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                DashboardError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the dashboard cannot run with.
    pub fn validate(&self) -> DashboardResult<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::new("api.base_url must not be empty").into());
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::new("api.timeout_secs must be positive").into());
        }
        if self.tui.tick_rate_ms == 0 {
            return Err(ConfigError::new("tui.tick_rate_ms must be positive").into());
        }
        Ok(())
    }

    /// Apply command-line overrides of the hostname and mode.
    pub fn with_environment_overrides(
        mut self,
        hostname: Option<String>,
        mode: Option<EnvironmentMode>,
    ) -> Self {
        if let Some(hostname) = hostname {
            self.environment.hostname = hostname;
        }
        if let Some(mode) = mode {
            self.environment.mode = mode;
        }
        self
    }

    /// Resolve the environment once from the configured hostname and mode.
    pub fn environment(&self) -> Environment {
        Environment::resolve(
            self.environment.mode,
            &self.environment.hostname,
            &self.environment.production_hosts,
        )
    }
}
