//! TUI runner: terminal setup, the main loop and key handling.

use crate::{App, Event, EventHandler, Section, View};
use botcommand_error::{DashboardResult, TuiError, TuiErrorKind, TuiResult};
use botcommand_interface::DashboardBackend;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

type DashboardTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Run the dashboard until the operator quits.
///
/// # Arguments
///
/// * `backend` - Backend serving every panel
/// * `settings_path` - Where the settings panel saves
/// * `tick_rate_ms` - Event poll interval
pub async fn run_tui(
    backend: Arc<dyn DashboardBackend>,
    settings_path: Option<PathBuf>,
    tick_rate_ms: u64,
) -> DashboardResult<()> {
    info!(backend = %backend.kind(), "Starting dashboard");
    let mut terminal = setup_terminal()?;

    let result = run_loop(&mut terminal, backend, settings_path, tick_rate_ms).await;

    // Restore even when the loop failed, then report the first error
    let restored = restore_terminal(&mut terminal);
    result?;
    restored?;
    info!("Dashboard closed");
    Ok(())
}

fn setup_terminal() -> TuiResult<DashboardTerminal> {
    enable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to enable raw mode: {}",
            e
        )))
    })?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to setup terminal: {}",
            e
        )))
    })?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to create terminal: {}",
            e
        )))
    })
}

fn restore_terminal(terminal: &mut DashboardTerminal) -> TuiResult<()> {
    disable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to disable raw mode: {}",
            e
        )))
    })?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to cleanup terminal: {}",
            e
        )))
    })?;
    terminal.show_cursor().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to show cursor: {}",
            e
        )))
    })
}

async fn run_loop(
    terminal: &mut DashboardTerminal,
    backend: Arc<dyn DashboardBackend>,
    settings_path: Option<PathBuf>,
    tick_rate_ms: u64,
) -> DashboardResult<()> {
    let mut app = App::new(backend, settings_path);
    let events = EventHandler::new(tick_rate_ms);

    if app.view == View::Dashboard {
        app.enter_dashboard();
    }

    while !app.should_quit {
        app.apply_finished();
        terminal
            .draw(|f| crate::ui::draw(f, &app))
            .map_err(|e| TuiError::new(TuiErrorKind::Rendering(format!("Failed to draw: {}", e))))?;

        if let Some(event) = events.next()? {
            handle_event(&mut app, event);
        }
        // Let spawned backend calls progress between polls
        tokio::task::yield_now().await;
    }
    Ok(())
}

/// Handle a single event.
pub(crate) fn handle_event(app: &mut App, event: Event) {
    let Event::Key(key) = event else {
        return;
    };
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }
    match app.view {
        View::Login => handle_login_key(app, key),
        View::Dashboard => {
            if app.form().is_some() {
                handle_form_key(app, key);
            } else {
                handle_dashboard_key(app, key);
            }
        }
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.login.toggle_focus()
        }
        KeyCode::Enter => app.submit_login(),
        KeyCode::F(2) => {
            app.direct_login();
        }
        KeyCode::Backspace => app.login.backspace(),
        KeyCode::Char(c) => app.login.push_char(c),
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_form(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab | KeyCode::Down => {
            if let Some(form) = app.form_mut() {
                form.focus_next();
            }
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(form) = app.form_mut() {
                form.focus_previous();
            }
        }
        KeyCode::Backspace => {
            if let Some(form) = app.form_mut() {
                form.backspace();
            }
        }
        KeyCode::Char(c) => {
            if let Some(form) = app.form_mut() {
                form.push_char(c);
            }
        }
        _ => {}
    }
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    if app.section == Section::Settings {
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            app.save_settings();
            return;
        }
        match key.code {
            KeyCode::Backspace => return app.settings.backspace(),
            KeyCode::Char(c) if app.settings.focused() == crate::SettingsField::Prefix => {
                return app.settings.push_char(c);
            }
            KeyCode::Enter | KeyCode::Char(' ') => return app.settings.activate(),
            _ => {}
        }
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Tab | KeyCode::Right => app.next_section(),
        KeyCode::BackTab | KeyCode::Left => app.previous_section(),
        KeyCode::Char(c @ '1'..='7') => {
            if let Some(section) = c.to_digit(10).and_then(|n| Section::nth(n as usize)) {
                app.navigate(section);
            }
        }
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Char('a') => app.open_create_form(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_form(),
        KeyCode::Char('d') => app.delete_selected(),
        KeyCode::Char(' ') => app.toggle_selected(),
        KeyCode::Char('m') => app.toggle_secondary(),
        KeyCode::Char('r') => app.load_current(),
        KeyCode::Char('L') => app.logout(),
        _ => {
            debug!(?key, "Unhandled key");
        }
    }
}
