//! Startup wiring: session and backend selection.

use botcommand_client::{ClientConfig, RemoteBackend};
use botcommand_core::{DashboardConfig, Environment, Session};
use botcommand_error::DashboardResult;
use botcommand_interface::DashboardBackend;
use botcommand_store::InMemoryBackend;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Open the session, restoring a persisted token when configured to.
#[instrument(skip_all, fields(persist = config.session.persist))]
pub fn open_session(config: &DashboardConfig) -> DashboardResult<Session> {
    if !config.session.persist {
        return Ok(Session::in_memory());
    }
    match Session::default_token_path() {
        Some(path) => Session::persistent(path),
        None => {
            warn!("No config directory; session will not persist");
            Ok(Session::in_memory())
        }
    }
}

/// Pick the backend for the resolved environment.
///
/// Preview deployments get the seeded in-memory backend; production talks
/// to the REST API. The choice is made once, here.
#[instrument(skip_all)]
pub fn select_backend(
    config: &DashboardConfig,
    session: Session,
) -> DashboardResult<Arc<dyn DashboardBackend>> {
    let environment = config.environment();
    info!(
        %environment,
        hostname = %config.environment.hostname,
        "Selecting backend"
    );
    match environment {
        Environment::Preview => Ok(Arc::new(InMemoryBackend::from_config(
            &config.preview,
            session,
        ))),
        Environment::Production => {
            let client = ClientConfig::from(&config.api);
            Ok(Arc::new(RemoteBackend::new(client, session)?))
        }
    }
}
