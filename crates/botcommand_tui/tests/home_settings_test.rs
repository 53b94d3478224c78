//! Tests for the home view and settings panel.

use async_trait::async_trait;
use botcommand_core::{BotSettings, BotStatus, Language, ServerStats, Session, Timezone};
use botcommand_error::{DashboardResult, TransportError};
use botcommand_interface::StatsBackend;
use botcommand_store::InMemoryBackend;
use botcommand_tui::{HomeView, PanelState, SettingsField, SettingsPanel};

/// Stats that load but a status endpoint that fails.
struct HalfBroken;

#[async_trait]
impl StatsBackend for HalfBroken {
    async fn server_stats(&self) -> DashboardResult<ServerStats> {
        Ok(ServerStats {
            total_commands_used: 1,
            ..ServerStats::default()
        })
    }

    async fn bot_status(&self) -> DashboardResult<BotStatus> {
        Err(TransportError::status(502, None).into())
    }
}

#[tokio::test]
async fn test_home_loads_stats_and_status() {
    let backend = InMemoryBackend::new(Session::in_memory());
    let mut home = HomeView::new();
    home.load(&backend).await;

    assert_eq!(home.state(), PanelState::Ready);
    assert_eq!(home.error(), None);
    assert_eq!(home.status().commands_registered, Some(25));
    assert!(home.stats().top_channels.is_some());
}

#[tokio::test]
async fn test_home_falls_back_when_either_call_fails() {
    let mut home = HomeView::new();
    home.load(&HalfBroken).await;

    assert_eq!(home.state(), PanelState::ReadyWithError);
    assert_eq!(
        home.error(),
        Some("Failed to load dashboard data. Using fallback data.")
    );
    assert_eq!(home.stats(), &ServerStats::fallback());
    assert_eq!(home.status(), &BotStatus::fallback());
}

#[test]
fn test_welcome_preview_uses_template() {
    let home = HomeView::new();
    assert_eq!(
        home.welcome_preview(),
        "Welcome @NewMember to My Server! Please read the rules in #rules."
    );
}

#[test]
fn test_welcome_form_requires_channel() {
    let mut home = HomeView::new();
    home.open_welcome_form();
    home.welcome_form_mut().unwrap().set_value(0, "  ");
    assert!(!home.submit_welcome_form());
    assert_eq!(
        home.welcome_form().and_then(|f| f.error()),
        Some("Welcome channel is required")
    );

    home.welcome_form_mut().unwrap().set_value(0, "lobby");
    home.welcome_form_mut().unwrap().set_value(2, "yes");
    assert!(home.submit_welcome_form());
    assert_eq!(home.welcome().channel, "lobby");
    assert!(home.welcome().send_dm);
}

#[test]
fn test_settings_editing() {
    let mut panel = SettingsPanel::open(None);
    assert_eq!(panel.focused(), SettingsField::Prefix);
    panel.backspace();
    panel.push_char('?');
    assert_eq!(panel.settings().prefix, "?");

    panel.focus_next();
    panel.activate();
    assert_eq!(panel.settings().language, Language::Es);
    assert_eq!(panel.value(SettingsField::Language), "Spanish");

    panel.focus_next();
    for _ in 0..5 {
        panel.activate();
    }
    assert_eq!(panel.settings().timezone, Timezone::Utc);

    panel.focus_previous();
    panel.focus_previous();
    panel.focus_previous();
    assert_eq!(panel.focused(), SettingsField::MentionAsPrefix);
    panel.activate();
    assert!(panel.settings().mention_as_prefix);
    assert_eq!(panel.value(SettingsField::MentionAsPrefix), "On");
}

#[test]
fn test_settings_save_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.toml");

    let mut panel = SettingsPanel::open(Some(path.clone()));
    panel.push_char('!');
    assert!(panel.save());
    assert_eq!(panel.message(), Some("Settings saved successfully"));
    assert_eq!(panel.error(), None);

    let saved = BotSettings::load(&path).unwrap();
    assert_eq!(saved.prefix, "!!");

    let reopened = SettingsPanel::open(Some(path));
    assert_eq!(reopened.settings(), &saved);
}

#[test]
fn test_settings_save_without_location_fails() {
    let mut panel = SettingsPanel::open(None);
    assert!(!panel.save());
    assert_eq!(panel.message(), None);
    assert_eq!(
        panel.error(),
        Some("Failed to save settings: no settings file location")
    );
}

#[test]
fn test_unreadable_settings_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "prefix = [not toml").unwrap();

    let panel = SettingsPanel::open(Some(path));
    assert_eq!(panel.settings(), &BotSettings::default());
    assert_eq!(
        panel.error(),
        Some("Failed to load settings. Using defaults.")
    );
}
