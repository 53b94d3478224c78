//! TUI launch command handler.

use botcommand::{BotSettings, DashboardBackend, DashboardConfig, DashboardResult, run_tui};
use std::sync::Arc;

/// Launch the terminal dashboard.
pub async fn launch_tui(
    config: &DashboardConfig,
    backend: Arc<dyn DashboardBackend>,
) -> DashboardResult<()> {
    tracing::info!(backend = %backend.kind(), "Launching TUI");

    run_tui(backend, BotSettings::default_path(), config.tui.tick_rate_ms).await
}
