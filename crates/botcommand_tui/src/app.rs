//! Application state for the dashboard shell.

use crate::{EditForm, HomeView, LoginForm, Mutation, Panel, PanelRecord, SettingsPanel};
use botcommand_core::{AutoModRule, Command, LogConfig, ReactionRole, Session, User, YouTubeFeed};
use botcommand_error::AuthErrorKind;
use botcommand_interface::{AuthBackend, BackendKind, DashboardBackend};
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Sidebar entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
pub enum Section {
    /// Stats, bot status and welcome message
    #[strum(to_string = "Dashboard")]
    Home,
    /// Custom commands
    #[strum(to_string = "Custom Commands")]
    Commands,
    /// Reaction roles
    #[strum(to_string = "Reaction Roles")]
    ReactionRoles,
    /// YouTube feeds
    #[strum(to_string = "YouTube Feeds")]
    YouTubeFeeds,
    /// Auto-moderation rules
    #[strum(to_string = "Auto-Moderation")]
    AutoMod,
    /// Logging configuration
    #[strum(to_string = "Logging")]
    Logging,
    /// General settings
    #[strum(to_string = "Settings")]
    Settings,
}

impl Section {
    /// Section at 1-based sidebar position `n`.
    pub fn nth(n: usize) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Self::iter().nth(i))
    }
}

/// Top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Signed out
    Login,
    /// Signed in
    Dashboard,
}

/// Run `$body` against the CRUD panel of the current section, if it has one.
macro_rules! with_panel {
    ($app:expr, $panel:ident => $body:expr, else $fallback:expr) => {
        match $app.section {
            Section::Commands => {
                let $panel = &mut $app.commands;
                $body
            }
            Section::ReactionRoles => {
                let $panel = &mut $app.reaction_roles;
                $body
            }
            Section::YouTubeFeeds => {
                let $panel = &mut $app.youtube_feeds;
                $body
            }
            Section::AutoMod => {
                let $panel = &mut $app.automod_rules;
                $body
            }
            Section::Logging => {
                let $panel = &mut $app.logs;
                $body
            }
            Section::Home | Section::Settings => $fallback,
        }
    };
}

/// Run `$body` with `$record` naming the record type of the current section, if it has a panel.
macro_rules! with_record {
    ($app:expr, $record:ident => $body:expr, else $fallback:expr) => {
        match $app.section {
            Section::Commands => {
                type $record = Command;
                $body
            }
            Section::ReactionRoles => {
                type $record = ReactionRole;
                $body
            }
            Section::YouTubeFeeds => {
                type $record = YouTubeFeed;
                $body
            }
            Section::AutoMod => {
                type $record = AutoModRule;
                $body
            }
            Section::Logging => {
                type $record = LogConfig;
                $body
            }
            Section::Home | Section::Settings => $fallback,
        }
    };
}

/// Record types with a panel in the shell.
trait Routed: PanelRecord {
    fn panel(app: &mut App) -> &mut Panel<Self>;
}

impl Routed for Command {
    fn panel(app: &mut App) -> &mut Panel<Self> {
        &mut app.commands
    }
}

impl Routed for ReactionRole {
    fn panel(app: &mut App) -> &mut Panel<Self> {
        &mut app.reaction_roles
    }
}

impl Routed for YouTubeFeed {
    fn panel(app: &mut App) -> &mut Panel<Self> {
        &mut app.youtube_feeds
    }
}

impl Routed for LogConfig {
    fn panel(app: &mut App) -> &mut Panel<Self> {
        &mut app.logs
    }
}

impl Routed for AutoModRule {
    fn panel(app: &mut App) -> &mut Panel<Self> {
        &mut app.automod_rules
    }
}

/// Applies the result of a finished backend call to the shell.
type Completion = Box<dyn FnOnce(&mut App) + Send>;

/// Dashboard state: the login form, every panel and navigation.
///
/// Backend calls run on spawned tasks so the screen keeps drawing while they
/// are in flight. Each finished call is queued and applied by
/// [`App::apply_finished`] or [`App::wait_for_tasks`].
pub struct App {
    backend: Arc<dyn DashboardBackend>,
    done_tx: mpsc::UnboundedSender<Completion>,
    done_rx: mpsc::UnboundedReceiver<Completion>,
    pending: usize,
    /// Current screen
    pub view: View,
    /// Current sidebar section
    pub section: Section,
    /// Login form
    pub login: LoginForm,
    /// Home view
    pub home: HomeView,
    /// Custom commands panel
    pub commands: Panel<Command>,
    /// Reaction roles panel
    pub reaction_roles: Panel<ReactionRole>,
    /// YouTube feeds panel
    pub youtube_feeds: Panel<YouTubeFeed>,
    /// Logging panel
    pub logs: Panel<LogConfig>,
    /// Auto-moderation panel
    pub automod_rules: Panel<AutoModRule>,
    /// Settings panel
    pub settings: SettingsPanel,
    /// Signed-in operator, once fetched
    pub user: Option<User>,
    /// Status message shown in the footer
    pub status_message: String,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Shell over `backend`. Starts on the dashboard when the session already holds a token.
    pub fn new(backend: Arc<dyn DashboardBackend>, settings_path: Option<PathBuf>) -> Self {
        let preview = backend.kind() == BackendKind::InMemory;
        let view = if backend.session().is_authenticated() {
            View::Dashboard
        } else {
            View::Login
        };
        let (done_tx, done_rx) = mpsc::unbounded_channel();
        Self {
            commands: Panel::new(Arc::new(backend.clone())),
            reaction_roles: Panel::new(Arc::new(backend.clone())),
            youtube_feeds: Panel::new(Arc::new(backend.clone())),
            logs: Panel::new(Arc::new(backend.clone())),
            automod_rules: Panel::new(Arc::new(backend.clone())),
            backend,
            done_tx,
            done_rx,
            pending: 0,
            view,
            section: Section::Home,
            login: LoginForm::new(preview),
            home: HomeView::new(),
            settings: SettingsPanel::open(settings_path),
            user: None,
            status_message: String::from("Ready"),
            should_quit: false,
        }
    }

    /// Backend serving every panel.
    pub fn backend(&self) -> &Arc<dyn DashboardBackend> {
        &self.backend
    }

    /// Session shared with the backend.
    pub fn session(&self) -> &Session {
        self.backend.session()
    }

    /// Whether the preview backend is in use.
    pub fn is_preview(&self) -> bool {
        self.backend.kind() == BackendKind::InMemory
    }

    /// Whether any backend call is still in flight.
    pub fn is_busy(&self) -> bool {
        self.pending > 0
    }

    /// Apply every backend call that has finished, without waiting.
    ///
    /// Returns how many were applied.
    pub fn apply_finished(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(done) = self.done_rx.try_recv() {
            self.complete(done);
            applied += 1;
        }
        applied
    }

    /// Wait for every backend call in flight, including calls started by
    /// earlier results, and apply them.
    pub async fn wait_for_tasks(&mut self) {
        while self.pending > 0 {
            match self.done_rx.recv().await {
                Some(done) => self.complete(done),
                None => break,
            }
        }
    }

    fn complete(&mut self, done: Completion) {
        self.pending = self.pending.saturating_sub(1);
        done(self);
    }

    fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = Completion> + Send + 'static,
    {
        self.pending += 1;
        let done_tx = self.done_tx.clone();
        tokio::spawn(async move {
            if done_tx.send(task.await).is_err() {
                debug!("Dashboard closed before a backend call finished");
            }
        });
    }

    fn spawn_load<R: Routed>(&mut self) {
        let panel = R::panel(self);
        panel.begin_load();
        let store = panel.store();
        self.spawn(async move {
            let result = store.list().await;
            Box::new(move |app: &mut App| {
                R::panel(app).finish_load(result);
                app.check_session();
            }) as Completion
        });
    }

    fn spawn_mutation<R: Routed>(&mut self, mutation: Mutation<R>, done_message: &'static str) {
        debug!(resource = R::PATH, action = mutation.action(), "Sending change");
        let store = R::panel(self).store();
        let action = mutation.action();
        self.spawn(async move {
            let result = mutation.send(&*store).await;
            Box::new(move |app: &mut App| {
                if R::panel(app).finish_mutation(action, result) {
                    app.status_message = done_message.to_string();
                }
                app.check_session();
            }) as Completion
        });
    }

    fn spawn_home_load(&mut self) {
        self.home.begin_load();
        let backend = Arc::clone(&self.backend);
        self.spawn(async move {
            let result = HomeView::fetch(&backend).await;
            Box::new(move |app: &mut App| {
                app.home.finish_load(result);
                app.check_session();
            }) as Completion
        });
    }

    /// Switch section and start loading its data.
    #[instrument(skip(self))]
    pub fn navigate(&mut self, section: Section) {
        debug!("Navigating");
        self.section = section;
        self.load_current();
    }

    /// Start fetching the data of the current section.
    pub fn load_current(&mut self) {
        match self.section {
            Section::Home => self.spawn_home_load(),
            Section::Settings => {}
            _ => with_record!(self, R => self.spawn_load::<R>(), else ()),
        }
    }

    /// Move to the next sidebar section.
    pub fn next_section(&mut self) {
        let sections: Vec<Section> = Section::iter().collect();
        let index = sections.iter().position(|s| *s == self.section).unwrap_or(0);
        self.navigate(sections[(index + 1) % sections.len()]);
    }

    /// Move to the previous sidebar section.
    pub fn previous_section(&mut self) {
        let sections: Vec<Section> = Section::iter().collect();
        let index = sections.iter().position(|s| *s == self.section).unwrap_or(0);
        self.navigate(sections[(index + sections.len() - 1) % sections.len()]);
    }

    /// Show the dashboard after sign-in, then fetch the operator and the home view.
    pub fn enter_dashboard(&mut self) {
        self.view = View::Dashboard;
        self.status_message = String::from("Logged in");

        let backend = Arc::clone(&self.backend);
        self.spawn(async move {
            let result = backend.current_user().await;
            Box::new(move |app: &mut App| match result {
                Ok(user) => app.user = Some(user),
                Err(e) => warn!("Could not fetch current user: {}", e),
            }) as Completion
        });
        self.navigate(Section::Home);
    }

    /// Send the login form. The form shows `Submitting` until the call returns.
    pub fn submit_login(&mut self) {
        if self.login.state() == crate::LoginState::Submitting {
            return;
        }
        self.login.begin_submit();
        let username = self.login.username().to_string();
        let password = self.login.password().to_string();
        let backend = Arc::clone(&self.backend);
        self.spawn(async move {
            let result = backend.login(&username, &password).await;
            Box::new(move |app: &mut App| {
                if app.login.finish_submit(result) {
                    app.login = LoginForm::new(app.is_preview());
                    app.enter_dashboard();
                }
            }) as Completion
        });
    }

    /// Sign in without credentials. Preview only.
    pub fn direct_login(&mut self) -> bool {
        let session = self.backend.session().clone();
        if self.login.direct_login(&session) {
            self.login = LoginForm::new(self.is_preview());
            self.enter_dashboard();
            true
        } else {
            false
        }
    }

    /// Return to the login view if the server rejected the session.
    pub fn check_session(&mut self) -> bool {
        if self.session().take_expired() {
            info!("Session expired, returning to login");
            self.view = View::Login;
            self.user = None;
            self.login = LoginForm::new(self.is_preview());
            self.login.set_notice(AuthErrorKind::Unauthorized.to_string());
            true
        } else {
            false
        }
    }

    /// Clear the session and return to the login view.
    #[instrument(skip(self))]
    pub fn logout(&mut self) {
        if let Err(e) = self.backend.logout() {
            warn!("Failed to clear session: {}", e);
        }
        self.view = View::Login;
        self.user = None;
        self.login = LoginForm::new(self.is_preview());
        self.status_message = String::from("Logged out");
    }

    /// Move selection down in the current panel.
    pub fn select_next(&mut self) {
        match self.section {
            Section::Settings => self.settings.focus_next(),
            _ => with_panel!(self, panel => panel.select_next(), else ()),
        }
    }

    /// Move selection up in the current panel.
    pub fn select_previous(&mut self) {
        match self.section {
            Section::Settings => self.settings.focus_previous(),
            _ => with_panel!(self, panel => panel.select_previous(), else ()),
        }
    }

    /// Open the add form of the current panel.
    pub fn open_create_form(&mut self) {
        with_panel!(self, panel => panel.open_create_form(), else ())
    }

    /// Open the edit form for the selection, or the welcome editor on the home view.
    pub fn open_edit_form(&mut self) {
        match self.section {
            Section::Home => self.home.open_welcome_form(),
            _ => with_panel!(self, panel => panel.open_edit_form(), else ()),
        }
    }

    /// The open form of the current section, if any.
    pub fn form(&self) -> Option<&EditForm> {
        match self.section {
            Section::Home => self.home.welcome_form(),
            Section::Commands => self.commands.form(),
            Section::ReactionRoles => self.reaction_roles.form(),
            Section::YouTubeFeeds => self.youtube_feeds.form(),
            Section::AutoMod => self.automod_rules.form(),
            Section::Logging => self.logs.form(),
            Section::Settings => None,
        }
    }

    /// The open form of the current section, mutably.
    pub fn form_mut(&mut self) -> Option<&mut EditForm> {
        match self.section {
            Section::Home => self.home.welcome_form_mut(),
            _ => with_panel!(self, panel => panel.form_mut(), else None),
        }
    }

    /// Discard the open form.
    pub fn close_form(&mut self) {
        match self.section {
            Section::Home => self.home.close_welcome_form(),
            _ => with_panel!(self, panel => panel.close_form(), else ()),
        }
    }

    /// Submit the open form. Panel forms stay open until the save succeeds.
    pub fn submit_form(&mut self) {
        match self.section {
            Section::Home => {
                if self.home.submit_welcome_form() {
                    self.status_message = String::from("Saved");
                }
            }
            _ => with_record!(self, R => {
                if let Some(mutation) = R::panel(self).form_mutation() {
                    self.spawn_mutation::<R>(mutation, "Saved");
                }
            }, else ()),
        }
    }

    /// Delete the selected row.
    pub fn delete_selected(&mut self) {
        with_record!(self, R => {
            if let Some(mutation) = R::panel(self).delete_selected_mutation() {
                self.spawn_mutation::<R>(mutation, "Deleted");
            }
        }, else ())
    }

    /// Flip the enabled switch of the selected row, or activate a settings field.
    pub fn toggle_selected(&mut self) {
        match self.section {
            Section::Settings => self.settings.activate(),
            _ => with_record!(self, R => {
                if let Some(mutation) = R::panel(self).toggle_mutation() {
                    self.spawn_mutation::<R>(mutation, "Updated");
                }
            }, else ()),
        }
    }

    /// Flip the secondary switch of the selected row.
    pub fn toggle_secondary(&mut self) {
        with_record!(self, R => {
            if let Some(mutation) = R::panel(self).secondary_toggle_mutation() {
                self.spawn_mutation::<R>(mutation, "Updated");
            }
        }, else ())
    }

    /// Save the settings panel.
    pub fn save_settings(&mut self) {
        if self.settings.save() {
            self.status_message = String::from("Settings saved");
        }
    }

    /// Error banner of the current section.
    pub fn banner(&self) -> Option<&str> {
        match self.section {
            Section::Home => self.home.error(),
            Section::Commands => self.commands.error(),
            Section::ReactionRoles => self.reaction_roles.error(),
            Section::YouTubeFeeds => self.youtube_feeds.error(),
            Section::AutoMod => self.automod_rules.error(),
            Section::Logging => self.logs.error(),
            Section::Settings => self.settings.error(),
        }
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
