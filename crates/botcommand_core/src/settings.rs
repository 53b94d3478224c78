//! General bot settings edited on the settings panel.

use botcommand_error::{ConfigError, DashboardResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Interface language.
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
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// Spanish
    Es,
    /// French
    Fr,
    /// German
    De,
    /// Japanese
    Ja,
}

impl Language {
    /// Name shown in the selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Spanish",
            Self::Fr => "French",
            Self::De => "German",
            Self::Ja => "Japanese",
        }
    }
}

/// Timezone used for scheduled messages.
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
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Timezone {
    /// Coordinated Universal Time
    #[default]
    Utc,
    /// Eastern Standard Time
    Est,
    /// Central Standard Time
    Cst,
    /// Pacific Standard Time
    Pst,
    /// Greenwich Mean Time
    Gmt,
}

/// Settings panel form. Stored locally; the backend has no endpoint for it.
///
/// # Examples
///
/// ```
/// use botcommand_core::{BotSettings, Language};
///
/// let settings = BotSettings::default();
/// assert_eq!(settings.prefix, "!");
/// assert_eq!(settings.language, Language::En);
/// assert!(settings.delete_command_messages);
/// assert!(!settings.mention_as_prefix);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotSettings {
    /// Command prefix
    pub prefix: String,
    /// Interface language
    pub language: Language,
    /// Timezone
    pub timezone: Timezone,
    /// Delete the invoking message after a command runs
    pub delete_command_messages: bool,
    /// Answer commands sent by direct message
    pub respond_in_dms: bool,
    /// Accept a mention of the bot as the prefix
    pub mention_as_prefix: bool,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            prefix: "!".to_string(),
            language: Language::En,
            timezone: Timezone::Utc,
            delete_command_messages: true,
            respond_in_dms: true,
            mention_as_prefix: false,
        }
    }
}

impl BotSettings {
    /// Read settings from a TOML file, or defaults when it does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> DashboardResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No settings file, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let settings = toml::from_str(&text)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;
        Ok(settings)
    }

    /// Write settings to a TOML file, creating parent directories.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>) -> DashboardResult<()> {
        let path = path.as_ref();
        let text = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize settings: {}", e)))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::new(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }
        std::fs::write(path, text).map_err(|e| {
            ConfigError::new(format!("Failed to write {}: {}", path.display(), e))
        })?;
        debug!("Settings saved");
        Ok(())
    }

    /// Default settings file, `~/.config/botcommand/settings.toml`.
    pub fn default_path() -> Option<std::path::PathBuf> {
        dirs::config_dir().map(|dir| dir.join("botcommand").join("settings.toml"))
    }
}
