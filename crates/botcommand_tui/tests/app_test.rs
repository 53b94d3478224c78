//! Tests for the dashboard shell.

use botcommand_core::{Language, Session};
use botcommand_interface::DashboardBackend;
use botcommand_store::InMemoryBackend;
use botcommand_tui::{App, LoginState, PanelState, Section, SettingsField, View};
use std::sync::Arc;
use std::time::Duration;

fn app_with(session: Session) -> App {
    let backend: Arc<dyn DashboardBackend> = Arc::new(InMemoryBackend::new(session));
    App::new(backend, None)
}

async fn signed_in() -> App {
    let mut app = app_with(Session::in_memory());
    for c in "admin".chars() {
        app.login.push_char(c);
    }
    app.login.toggle_focus();
    for c in "password".chars() {
        app.login.push_char(c);
    }
    app.submit_login();
    app.wait_for_tasks().await;
    assert_eq!(app.view, View::Dashboard);
    app
}

fn slow_signed_in_app() -> App {
    let session = Session::in_memory();
    session.store_token("mock-token-12345").unwrap();
    let backend: Arc<dyn DashboardBackend> = Arc::new(
        InMemoryBackend::new(session)
            .with_latency(Duration::from_millis(500), Duration::from_millis(300)),
    );
    App::new(backend, None)
}

#[test]
fn test_sections() {
    assert_eq!(Section::nth(1), Some(Section::Home));
    assert_eq!(Section::nth(5), Some(Section::AutoMod));
    assert_eq!(Section::nth(7), Some(Section::Settings));
    assert_eq!(Section::nth(0), None);
    assert_eq!(Section::nth(8), None);
    assert_eq!(Section::Home.to_string(), "Dashboard");
    assert_eq!(Section::AutoMod.to_string(), "Auto-Moderation");
}

#[test]
fn test_starts_on_login_without_token() {
    let app = app_with(Session::in_memory());
    assert_eq!(app.view, View::Login);
    assert!(app.is_preview());
    assert!(app.login.is_preview());
}

#[test]
fn test_starts_on_dashboard_with_token() {
    let session = Session::in_memory();
    session.store_token("mock-token-12345").unwrap();
    let app = app_with(session);
    assert_eq!(app.view, View::Dashboard);
}

#[tokio::test]
async fn test_login_enters_dashboard() {
    let app = signed_in().await;
    assert_eq!(app.view, View::Dashboard);
    assert_eq!(app.section, Section::Home);
    assert_eq!(app.home.state(), PanelState::Ready);
    assert_eq!(app.home.stats().total_commands_used, 1234);
    assert_eq!(app.user.as_ref().map(|u| u.username.as_str()), Some("admin"));
    assert_eq!(app.login.password(), "");
}

#[tokio::test]
async fn test_failed_login_stays_on_login() {
    let mut app = app_with(Session::in_memory());
    app.login.push_char('x');
    app.submit_login();
    app.wait_for_tasks().await;
    assert_eq!(app.view, View::Login);
    assert_eq!(app.login.error(), Some("Invalid username or password"));
}

#[tokio::test]
async fn test_direct_login() {
    let mut app = app_with(Session::in_memory());
    assert!(app.direct_login());
    assert_eq!(app.view, View::Dashboard);
    app.wait_for_tasks().await;
    assert_eq!(app.home.state(), PanelState::Ready);
    assert!(app.session().token().unwrap().starts_with("mock-token-"));
}

#[tokio::test]
async fn test_navigation_loads_panels() {
    let mut app = signed_in().await;

    app.navigate(Section::Commands);
    app.wait_for_tasks().await;
    assert_eq!(app.commands.state(), PanelState::Ready);
    assert_eq!(app.commands.rows().len(), 4);

    app.next_section();
    app.wait_for_tasks().await;
    assert_eq!(app.section, Section::ReactionRoles);
    assert_eq!(app.reaction_roles.rows().len(), 3);

    app.previous_section();
    app.previous_section();
    assert_eq!(app.section, Section::Home);
    app.previous_section();
    assert_eq!(app.section, Section::Settings);
}

#[tokio::test]
async fn test_actions_route_to_current_panel() {
    let mut app = signed_in().await;
    app.navigate(Section::Logging);
    app.wait_for_tasks().await;

    app.toggle_selected();
    app.wait_for_tasks().await;
    assert!(!app.logs.rows()[0].enabled);

    app.select_next();
    app.delete_selected();
    app.wait_for_tasks().await;
    assert_eq!(app.logs.rows().len(), 2);
    assert_eq!(app.status_message, "Deleted");

    app.open_create_form();
    assert!(app.form().is_some());
    app.close_form();
    assert!(app.form().is_none());
}

#[tokio::test]
async fn test_welcome_editor_on_home() {
    let mut app = signed_in().await;
    app.open_edit_form();
    let form = app.form_mut().unwrap();
    form.set_value(1, "Hi {user}, you are member #{count} of {server}");
    app.submit_form();

    assert!(app.form().is_none());
    assert_eq!(
        app.home.welcome().message,
        "Hi {user}, you are member #{count} of {server}"
    );
    assert!(app.home.welcome_preview().starts_with("Hi @NewMember"));
}

#[tokio::test]
async fn test_settings_actions() {
    let mut app = signed_in().await;
    app.navigate(Section::Settings);
    app.select_next();
    assert_eq!(app.settings.focused(), SettingsField::Language);
    app.toggle_selected();
    assert_eq!(app.settings.settings().language, Language::Es);
}

#[tokio::test]
async fn test_expired_session_returns_to_login() {
    let mut app = signed_in().await;
    app.session().expire().unwrap();

    app.navigate(Section::Commands);
    app.wait_for_tasks().await;
    assert_eq!(app.view, View::Login);
    assert_eq!(
        app.login.error(),
        Some("Your session has expired. Please log in again.")
    );
    assert!(app.user.is_none());
}

#[tokio::test]
async fn test_logout() {
    let mut app = signed_in().await;
    app.logout();
    assert_eq!(app.view, View::Login);
    assert!(!app.session().is_authenticated());
    assert_eq!(app.status_message, "Logged out");
}

#[tokio::test(start_paused = true)]
async fn test_panel_shows_loading_while_fetch_pending() {
    let mut app = slow_signed_in_app();
    let started = tokio::time::Instant::now();

    app.navigate(Section::Commands);
    assert_eq!(started.elapsed(), Duration::ZERO);
    assert_eq!(app.commands.state(), PanelState::Loading);
    assert!(app.is_busy());
    assert_eq!(app.apply_finished(), 0);
    assert_eq!(app.commands.state(), PanelState::Loading);

    app.wait_for_tasks().await;
    assert!(started.elapsed() >= Duration::from_millis(500));
    assert_eq!(app.commands.state(), PanelState::Ready);
    assert_eq!(app.commands.rows().len(), 4);
    assert!(!app.is_busy());
}

#[tokio::test(start_paused = true)]
async fn test_home_shows_loading_while_stats_pending() {
    let mut app = slow_signed_in_app();
    app.enter_dashboard();
    assert_eq!(app.home.state(), PanelState::Loading);
    assert!(app.user.is_none());

    app.wait_for_tasks().await;
    assert_eq!(app.home.state(), PanelState::Ready);
    assert!(app.user.is_some());
}

#[tokio::test(start_paused = true)]
async fn test_login_shows_submitting_while_pending() {
    let session = Session::in_memory();
    let backend: Arc<dyn DashboardBackend> = Arc::new(
        InMemoryBackend::new(session)
            .with_latency(Duration::from_millis(500), Duration::from_millis(300)),
    );
    let mut app = App::new(backend, None);
    for c in "admin".chars() {
        app.login.push_char(c);
    }
    app.login.toggle_focus();
    for c in "password".chars() {
        app.login.push_char(c);
    }

    app.submit_login();
    assert_eq!(app.login.state(), LoginState::Submitting);
    assert_eq!(app.view, View::Login);

    app.wait_for_tasks().await;
    assert_eq!(app.view, View::Dashboard);
    assert_eq!(app.home.state(), PanelState::Ready);
}

#[tokio::test(start_paused = true)]
async fn test_toggle_patches_row_only_when_call_returns() {
    let mut app = slow_signed_in_app();
    app.navigate(Section::Logging);
    app.wait_for_tasks().await;
    assert!(app.logs.rows()[0].enabled);

    app.toggle_selected();
    assert!(app.is_busy());
    assert!(app.logs.rows()[0].enabled);

    app.wait_for_tasks().await;
    assert!(!app.logs.rows()[0].enabled);
    assert_eq!(app.status_message, "Updated");
}
