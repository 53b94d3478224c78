//! General settings panel, persisted to a local TOML file.

use botcommand_core::{BotSettings, Language, Timezone};
use botcommand_error::{TuiError, TuiErrorKind};
use std::path::PathBuf;
use strum::IntoEnumIterator;
use tracing::{error, info, instrument};

/// Editable setting with focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
pub enum SettingsField {
    /// Command prefix text
    #[strum(to_string = "Command prefix")]
    Prefix,
    /// Interface language selector
    #[strum(to_string = "Language")]
    Language,
    /// Timezone selector
    #[strum(to_string = "Timezone")]
    Timezone,
    /// Delete invoking messages switch
    #[strum(to_string = "Delete command messages")]
    DeleteCommandMessages,
    /// Direct message switch
    #[strum(to_string = "Respond in DMs")]
    RespondInDms,
    /// Mention prefix switch
    #[strum(to_string = "Mention as prefix")]
    MentionAsPrefix,
}

/// Next variant after `current`, wrapping.
fn cycle<T: IntoEnumIterator + PartialEq + Copy>(current: T) -> T {
    let all: Vec<T> = T::iter().collect();
    let index = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(index + 1) % all.len()]
}

/// Form over [`BotSettings`].
#[derive(Debug, Clone)]
pub struct SettingsPanel {
    settings: BotSettings,
    path: Option<PathBuf>,
    focused: SettingsField,
    message: Option<String>,
    error: Option<String>,
}

impl SettingsPanel {
    /// Panel editing the settings stored at `path`.
    ///
    /// An unreadable file falls back to defaults with a banner. Without a
    /// path the panel edits defaults and cannot save.
    pub fn open(path: Option<PathBuf>) -> Self {
        let (settings, error) = match &path {
            Some(p) => match BotSettings::load(p) {
                Ok(settings) => (settings, None),
                Err(e) => {
                    error!("Failed to load settings: {}", e);
                    (
                        BotSettings::default(),
                        Some("Failed to load settings. Using defaults.".to_string()),
                    )
                }
            },
            None => (BotSettings::default(), None),
        };
        Self {
            settings,
            path,
            focused: SettingsField::Prefix,
            message: None,
            error,
        }
    }

    /// Current values.
    pub fn settings(&self) -> &BotSettings {
        &self.settings
    }

    /// Focused field.
    pub fn focused(&self) -> SettingsField {
        self.focused
    }

    /// Confirmation from the last save.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Error banner, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Display value of `field`.
    pub fn value(&self, field: SettingsField) -> String {
        let s = &self.settings;
        let switch = |on: bool| if on { "On" } else { "Off" }.to_string();
        match field {
            SettingsField::Prefix => s.prefix.clone(),
            SettingsField::Language => s.language.label().to_string(),
            SettingsField::Timezone => s.timezone.to_string().to_uppercase(),
            SettingsField::DeleteCommandMessages => switch(s.delete_command_messages),
            SettingsField::RespondInDms => switch(s.respond_in_dms),
            SettingsField::MentionAsPrefix => switch(s.mention_as_prefix),
        }
    }

    /// Move focus down, wrapping.
    pub fn focus_next(&mut self) {
        self.focused = cycle(self.focused);
    }

    /// Move focus up, wrapping.
    pub fn focus_previous(&mut self) {
        let all: Vec<SettingsField> = SettingsField::iter().collect();
        let index = all.iter().position(|f| *f == self.focused).unwrap_or(0);
        self.focused = all[(index + all.len() - 1) % all.len()];
    }

    /// Cycle a selector or flip a switch on the focused field.
    pub fn activate(&mut self) {
        let s = &mut self.settings;
        match self.focused {
            SettingsField::Prefix => {}
            SettingsField::Language => s.language = cycle::<Language>(s.language),
            SettingsField::Timezone => s.timezone = cycle::<Timezone>(s.timezone),
            SettingsField::DeleteCommandMessages => {
                s.delete_command_messages = !s.delete_command_messages
            }
            SettingsField::RespondInDms => s.respond_in_dms = !s.respond_in_dms,
            SettingsField::MentionAsPrefix => s.mention_as_prefix = !s.mention_as_prefix,
        }
        self.message = None;
    }

    /// Type into the prefix field.
    pub fn push_char(&mut self, c: char) {
        if self.focused == SettingsField::Prefix {
            self.settings.prefix.push(c);
            self.message = None;
        }
    }

    /// Delete from the prefix field.
    pub fn backspace(&mut self) {
        if self.focused == SettingsField::Prefix {
            self.settings.prefix.pop();
            self.message = None;
        }
    }

    /// Write the settings file. Returns true on success.
    #[instrument(skip(self))]
    pub fn save(&mut self) -> bool {
        let result = match &self.path {
            Some(path) => self
                .settings
                .save(path)
                .map_err(|e| TuiError::new(TuiErrorKind::Settings(e.user_message()))),
            None => Err(TuiError::new(TuiErrorKind::Settings(
                "no settings file location".to_string(),
            ))),
        };
        match result {
            Ok(()) => {
                info!("Settings saved");
                self.error = None;
                self.message = Some("Settings saved successfully".to_string());
                true
            }
            Err(e) => {
                error!("{}", e);
                self.message = None;
                self.error = Some(e.kind.to_string());
                false
            }
        }
    }
}
