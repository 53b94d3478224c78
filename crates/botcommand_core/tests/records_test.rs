//! Tests for record wire formats and helpers.

use botcommand_core::{
    AutoModRule, BotSettings, Command, LogConfig, ReactionRole, Resource, ServerStats, Switchable,
    Timezone, TriggerType, WelcomeConfig, YouTubeFeed,
};

#[test]
fn test_resource_paths_and_labels() {
    assert_eq!(Command::collection_path(), "/commands");
    assert_eq!(ReactionRole::item_path("7"), "/reaction-roles/7");
    assert_eq!(YouTubeFeed::PATH, "youtube-feeds");
    assert_eq!(LogConfig::not_found_message(), "Log not found");
    assert_eq!(AutoModRule::not_found_message(), "AutoMod rule not found");
    assert_eq!(
        ReactionRole::deleted_message(),
        "Reaction role deleted successfully"
    );
}

#[test]
fn test_trigger_type_wire_names() {
    let cmd = Command {
        id: "3".into(),
        trigger: "-warn".into(),
        trigger_type: TriggerType::Minus,
        response: "User has been warned!".into(),
        roles: "Moderator".into(),
        channels: "mod-commands".into(),
        case_sensitive: false,
    };
    let value = serde_json::to_value(&cmd).unwrap();
    assert_eq!(value["trigger_type"], "Minus");
    assert_eq!(value["case_sensitive"], false);
    assert_eq!("Regex".parse::<TriggerType>().unwrap(), TriggerType::Regex);
}

#[test]
fn test_switchable_defaults_and_toggle() {
    let mut rule: AutoModRule = serde_json::from_str(
        r#"{"name":"Caps","trigger_type":"Caps Lock","action":"Warn"}"#,
    )
    .unwrap();
    assert!(rule.enabled());
    rule.set_enabled(false);
    assert!(!rule.enabled);

    let log: LogConfig =
        serde_json::from_str(r#"{"id":"9","event_type":"Ban","channel":"logs"}"#).unwrap();
    assert!(log.enabled);
    assert_eq!(log.id(), "9");
}

#[test]
fn test_stats_without_top_channels() {
    let stats: ServerStats = serde_json::from_str(
        r#"{"total_commands_used":1,"active_users":2,"moderation_actions":3,
            "messages_today":4,"new_members_week":5}"#,
    )
    .unwrap();
    assert!(stats.top_channels.is_none());
    assert_eq!(ServerStats::fallback().active_users, 89);
}

#[test]
fn test_welcome_count_placeholder() {
    let config = WelcomeConfig {
        message: "{user} is member #{count} of {server}".into(),
        ..WelcomeConfig::default()
    };
    assert_eq!(config.render("ada", "rust", 7), "ada is member #7 of rust");
}

#[test]
fn test_settings_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");

    assert_eq!(BotSettings::load(&path).unwrap(), BotSettings::default());

    let settings = BotSettings {
        prefix: "?".into(),
        timezone: Timezone::Pst,
        respond_in_dms: false,
        ..BotSettings::default()
    };
    settings.save(&path).unwrap();
    assert!(std::fs::read_to_string(&path).unwrap().contains("timezone = \"pst\""));
    assert_eq!(BotSettings::load(&path).unwrap(), settings);
}
