//! Tests for preview/production classification.

use botcommand_core::{DEFAULT_PRODUCTION_HOST, Environment, EnvironmentMode};

const PROD: [&str; 1] = [DEFAULT_PRODUCTION_HOST];

#[test]
fn test_local_hosts_are_preview() {
    assert_eq!(Environment::detect("localhost", &PROD), Environment::Preview);
    assert_eq!(Environment::detect("127.0.0.1", &PROD), Environment::Preview);
}

#[test]
fn test_vercel_preview_deployments() {
    assert_eq!(
        Environment::detect("dca-frontend-v3-git-feature-alice.vercel.app", &PROD),
        Environment::Preview
    );
    assert_eq!(
        Environment::detect("dca-frontend-v3-abc123.vercel.app", &PROD),
        Environment::Preview
    );
}

#[test]
fn test_production_vercel_host_is_exact_match() {
    assert_eq!(
        Environment::detect("dca-frontend-v3.vercel.app", &PROD),
        Environment::Production
    );
    // Suffix or prefix variations are not the production host
    assert_eq!(
        Environment::detect("www.dca-frontend-v3.vercel.app", &PROD),
        Environment::Preview
    );
}

#[test]
fn test_other_domains_are_production() {
    assert_eq!(
        Environment::detect("dashboard.example.com", &PROD),
        Environment::Production
    );
    assert_eq!(Environment::detect("10.0.0.5", &PROD), Environment::Production);
}

#[test]
fn test_case_and_whitespace_ignored() {
    assert_eq!(Environment::detect("  LocalHost ", &PROD), Environment::Preview);
    assert_eq!(
        Environment::detect("DCA-Frontend-V3.Vercel.App", &PROD),
        Environment::Production
    );
}

#[test]
fn test_custom_production_hosts() {
    let hosts = vec!["my-dash.vercel.app".to_string()];
    assert_eq!(
        Environment::detect("my-dash.vercel.app", &hosts),
        Environment::Production
    );
    assert_eq!(
        Environment::detect("dca-frontend-v3.vercel.app", &hosts),
        Environment::Preview
    );
}

#[test]
fn test_detection_is_pure() {
    for host in ["localhost", "x.vercel.app", "dca-frontend-v3.vercel.app", "a.b"] {
        assert_eq!(
            Environment::detect(host, &PROD),
            Environment::detect(host, &PROD)
        );
    }
}

#[test]
fn test_mode_overrides_rule() {
    assert_eq!(
        Environment::resolve(EnvironmentMode::Production, "localhost", &PROD),
        Environment::Production
    );
    assert_eq!(
        Environment::resolve(EnvironmentMode::Preview, "dashboard.example.com", &PROD),
        Environment::Preview
    );
    assert_eq!(
        Environment::resolve(EnvironmentMode::Auto, "localhost", &PROD),
        Environment::Preview
    );
}

#[test]
fn test_mode_parses_from_str() {
    assert_eq!("preview".parse::<EnvironmentMode>().unwrap(), EnvironmentMode::Preview);
    assert_eq!(EnvironmentMode::Auto.to_string(), "auto");
}
