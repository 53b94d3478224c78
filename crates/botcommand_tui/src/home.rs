//! Dashboard home view.

use crate::{EditForm, FormMode, PanelState};
use crate::form::{flag, optional, parse_flag, required};
use botcommand_core::{BotStatus, ServerStats, WelcomeConfig};
use botcommand_error::DashboardResult;
use botcommand_interface::StatsBackend;
use tracing::{debug, error, instrument};

/// Banner shown when stats cannot be fetched.
const LOAD_FAILED: &str = "Failed to load dashboard data. Using fallback data.";

const WELCOME_LABELS: &[&str] = &[
    "Welcome channel",
    "Message ({user}, {server}, {count})",
    "Send as DM (yes/no)",
    "Assign role (yes/no)",
    "Role",
];

/// Server stats, bot status and the welcome message editor.
#[derive(Debug, Clone)]
pub struct HomeView {
    stats: ServerStats,
    status: BotStatus,
    state: PanelState,
    error: Option<String>,
    welcome: WelcomeConfig,
    welcome_form: Option<EditForm>,
}

impl Default for HomeView {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeView {
    /// View showing fallback figures until [`HomeView::load`] runs.
    pub fn new() -> Self {
        Self {
            stats: ServerStats::fallback(),
            status: BotStatus::fallback(),
            state: PanelState::Loading,
            error: None,
            welcome: WelcomeConfig::default(),
            welcome_form: None,
        }
    }

    /// Server activity counters.
    pub fn stats(&self) -> &ServerStats {
        &self.stats
    }

    /// Bot status.
    pub fn status(&self) -> &BotStatus {
        &self.status
    }

    /// Loading state.
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Error banner, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Welcome message settings.
    pub fn welcome(&self) -> &WelcomeConfig {
        &self.welcome
    }

    /// Open welcome editor.
    pub fn welcome_form(&self) -> Option<&EditForm> {
        self.welcome_form.as_ref()
    }

    /// Open welcome editor, mutably.
    pub fn welcome_form_mut(&mut self) -> Option<&mut EditForm> {
        self.welcome_form.as_mut()
    }

    /// Fetch stats and status together.
    pub async fn fetch(backend: &dyn StatsBackend) -> DashboardResult<(ServerStats, BotStatus)> {
        tokio::try_join!(backend.server_stats(), backend.bot_status())
    }

    /// Enter `Loading` ahead of a fetch.
    pub fn begin_load(&mut self) {
        self.state = PanelState::Loading;
        self.error = None;
    }

    /// Apply fetched figures. Either call failing falls back for both.
    pub fn finish_load(&mut self, result: DashboardResult<(ServerStats, BotStatus)>) {
        match result {
            Ok((stats, status)) => {
                debug!("Dashboard data loaded");
                self.stats = stats;
                self.status = status;
                self.state = PanelState::Ready;
            }
            Err(e) => {
                error!("Failed to load dashboard data: {}", e);
                self.stats = ServerStats::fallback();
                self.status = BotStatus::fallback();
                self.error = Some(LOAD_FAILED.to_string());
                self.state = PanelState::ReadyWithError;
            }
        }
    }

    /// Fetch stats and status, falling back for both if either fails.
    #[instrument(skip_all)]
    pub async fn load(&mut self, backend: &dyn StatsBackend) {
        self.begin_load();
        let result = Self::fetch(backend).await;
        self.finish_load(result);
    }

    /// Greeting as a new member would see it.
    pub fn welcome_preview(&self) -> String {
        self.welcome
            .render("@NewMember", "My Server", self.status.servers.max(1))
    }

    /// Open the welcome editor prefilled from the current settings.
    pub fn open_welcome_form(&mut self) {
        let w = &self.welcome;
        self.welcome_form = Some(EditForm::new(
            FormMode::Edit("welcome".to_string()),
            WELCOME_LABELS,
            vec![
                w.channel.clone(),
                w.message.clone(),
                flag(w.send_dm),
                flag(w.assign_role),
                w.role.clone(),
            ],
        ));
    }

    /// Discard the welcome editor.
    pub fn close_welcome_form(&mut self) {
        self.welcome_form = None;
    }

    /// Apply the welcome editor. The form stays open on validation errors.
    pub fn submit_welcome_form(&mut self) -> bool {
        let Some(form) = self.welcome_form.as_mut() else {
            return false;
        };
        let values = form.values();
        let parsed = required(&values, 0, "Welcome channel").and_then(|channel| {
            Ok(WelcomeConfig {
                channel,
                message: required(&values, 1, "Message")?,
                send_dm: parse_flag(&optional(&values, 2)),
                assign_role: parse_flag(&optional(&values, 3)),
                role: optional(&values, 4),
            })
        });
        match parsed {
            Ok(welcome) => {
                self.welcome = welcome;
                self.welcome_form = None;
                true
            }
            Err(message) => {
                form.set_error(message);
                false
            }
        }
    }
}
