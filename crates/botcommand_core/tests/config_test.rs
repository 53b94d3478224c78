//! Tests for configuration loading.

use botcommand_core::{DashboardConfig, Environment, EnvironmentMode};
use std::io::Write;

#[test]
fn test_defaults() {
    let config = DashboardConfig::default();
    assert_eq!(
        config.api.base_url,
        "https://dca-backend-v3-production.up.railway.app"
    );
    assert_eq!(config.api.timeout().as_secs(), 15);
    assert_eq!(config.preview.latency_ms, 500);
    assert_eq!(config.preview.lookup_latency_ms, 300);
    assert_eq!(config.environment.mode, EnvironmentMode::Auto);
    assert_eq!(config.environment(), Environment::Preview);
}

#[test]
fn test_file_overrides_bundled_defaults() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
[api]
base_url = "http://127.0.0.1:9000"

[environment]
hostname = "dashboard.example.com"
"#
    )
    .unwrap();

    let config = DashboardConfig::from_file(file.path()).unwrap();
    assert_eq!(config.api.base_url, "http://127.0.0.1:9000");
    // Untouched keys keep the bundled values
    assert_eq!(config.api.timeout_secs, 15);
    assert_eq!(config.tui.tick_rate_ms, 250);
    assert_eq!(config.environment(), Environment::Production);
}

#[test]
fn test_mode_override_from_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[environment]\nmode = \"preview\"\nhostname = \"bot.example.com\"").unwrap();

    let config = DashboardConfig::from_file(file.path()).unwrap();
    assert_eq!(config.environment.mode, EnvironmentMode::Preview);
    assert_eq!(config.environment(), Environment::Preview);
}

#[test]
fn test_zero_timeout_rejected() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[api]\ntimeout_secs = 0").unwrap();

    let err = DashboardConfig::from_file(file.path()).unwrap_err();
    assert!(err.user_message().contains("timeout_secs"));
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    assert!(DashboardConfig::load(Some(&missing)).is_err());
}
