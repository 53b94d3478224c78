//! In-memory implementation of the dashboard backend.

use crate::Collection;
use crate::seed;
use async_trait::async_trait;
use botcommand_core::{
    AutoModRule, BotStatus, Command, DeleteAck, LogConfig, PreviewConfig, ReactionRole, Resource,
    ServerStats, Session, Token, User, YouTubeFeed,
};
use botcommand_error::{AuthError, AuthErrorKind, DashboardResult};
use botcommand_interface::{
    AuthBackend, BackendKind, DashboardBackend, ResourceStore, StatsBackend,
};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Token issued by a successful preview login.
pub const MOCK_TOKEN: &str = "mock-token-12345";
/// Username accepted by the preview backend.
pub const MOCK_USERNAME: &str = "admin";
/// Password accepted by the preview backend.
pub const MOCK_PASSWORD: &str = "password";

/// Seeded substitute for the REST API.
///
/// Every call waits for a configurable simulated latency before answering,
/// so the dashboard shows the same loading states it would against the
/// network. Latency is zero unless set with [`InMemoryBackend::with_latency`].
///
/// # Example
/// ```
/// use botcommand_core::{Command, Session};
/// use botcommand_interface::ResourceStore;
/// use botcommand_store::InMemoryBackend;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let backend = InMemoryBackend::new(Session::in_memory());
/// let commands: Vec<Command> = backend.list().await.unwrap();
/// assert_eq!(commands[0].trigger, "!help");
/// # }
/// ```
#[derive(Debug)]
pub struct InMemoryBackend {
    commands: Collection<Command>,
    reaction_roles: Collection<ReactionRole>,
    youtube_feeds: Collection<YouTubeFeed>,
    logs: Collection<LogConfig>,
    automod_rules: Collection<AutoModRule>,
    stats: ServerStats,
    status: BotStatus,
    session: Session,
    latency: Duration,
    lookup_latency: Duration,
}

impl InMemoryBackend {
    /// Backend seeded with sample data and no simulated latency.
    pub fn new(session: Session) -> Self {
        Self {
            commands: Collection::new(seed::seed_commands()),
            reaction_roles: Collection::new(seed::seed_reaction_roles()),
            youtube_feeds: Collection::new(seed::seed_youtube_feeds()),
            logs: Collection::new(seed::seed_logs()),
            automod_rules: Collection::new(seed::seed_automod_rules()),
            stats: seed::seed_server_stats(),
            status: seed::seed_bot_status(),
            session,
            latency: Duration::ZERO,
            lookup_latency: Duration::ZERO,
        }
    }

    /// Backend with the latency configured for preview deployments.
    pub fn from_config(config: &PreviewConfig, session: Session) -> Self {
        Self::new(session).with_latency(
            Duration::from_millis(config.latency_ms),
            Duration::from_millis(config.lookup_latency_ms),
        )
    }

    /// Set the delay for list, create, update, delete, login and stats calls,
    /// and the delay for single-record lookups.
    pub fn with_latency(mut self, latency: Duration, lookup_latency: Duration) -> Self {
        self.latency = latency;
        self.lookup_latency = lookup_latency;
        self
    }

    async fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Records the in-memory backend keeps a collection for.
pub trait StoredRecord: Resource {
    /// The backend's collection of this record type.
    fn collection(backend: &InMemoryBackend) -> &Collection<Self>;
}

impl StoredRecord for Command {
    fn collection(backend: &InMemoryBackend) -> &Collection<Self> {
        &backend.commands
    }
}

impl StoredRecord for ReactionRole {
    fn collection(backend: &InMemoryBackend) -> &Collection<Self> {
        &backend.reaction_roles
    }
}

impl StoredRecord for YouTubeFeed {
    fn collection(backend: &InMemoryBackend) -> &Collection<Self> {
        &backend.youtube_feeds
    }
}

impl StoredRecord for LogConfig {
    fn collection(backend: &InMemoryBackend) -> &Collection<Self> {
        &backend.logs
    }
}

impl StoredRecord for AutoModRule {
    fn collection(backend: &InMemoryBackend) -> &Collection<Self> {
        &backend.automod_rules
    }
}

#[async_trait]
impl<R: StoredRecord> ResourceStore<R> for InMemoryBackend {
    #[instrument(skip(self), fields(resource = R::PATH))]
    async fn list(&self) -> DashboardResult<Vec<R>> {
        self.pause(self.latency).await;
        Ok(R::collection(self).list().await)
    }

    #[instrument(skip(self), fields(resource = R::PATH))]
    async fn get(&self, id: &str) -> DashboardResult<R> {
        self.pause(self.lookup_latency).await;
        R::collection(self).get(id).await
    }

    #[instrument(skip(self, record), fields(resource = R::PATH))]
    async fn create(&self, record: R) -> DashboardResult<R> {
        self.pause(self.latency).await;
        Ok(R::collection(self).insert(record).await)
    }

    #[instrument(skip(self, record), fields(resource = R::PATH))]
    async fn update(&self, id: &str, record: R) -> DashboardResult<R> {
        self.pause(self.latency).await;
        R::collection(self).replace(id, record).await
    }

    #[instrument(skip(self), fields(resource = R::PATH))]
    async fn delete(&self, id: &str) -> DashboardResult<DeleteAck> {
        self.pause(self.latency).await;
        R::collection(self).remove(id).await
    }
}

#[async_trait]
impl AuthBackend for InMemoryBackend {
    #[instrument(skip(self, password))]
    async fn login(&self, username: &str, password: &str) -> DashboardResult<Token> {
        debug!("Preview environment, using mock login");
        self.pause(self.latency).await;

        if username == MOCK_USERNAME && password == MOCK_PASSWORD {
            self.session.store_token(MOCK_TOKEN)?;
            info!("Mock login succeeded");
            Ok(Token::bearer(MOCK_TOKEN))
        } else {
            warn!("Mock login rejected");
            Err(AuthError::new(AuthErrorKind::InvalidCredentials).into())
        }
    }

    async fn current_user(&self) -> DashboardResult<User> {
        Ok(seed::seed_user())
    }

    fn session(&self) -> &Session {
        &self.session
    }
}

#[async_trait]
impl StatsBackend for InMemoryBackend {
    async fn server_stats(&self) -> DashboardResult<ServerStats> {
        self.pause(self.latency).await;
        Ok(self.stats.clone())
    }

    async fn bot_status(&self) -> DashboardResult<BotStatus> {
        self.pause(self.latency).await;
        Ok(self.status.clone())
    }
}

impl DashboardBackend for InMemoryBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::InMemory
    }
}
