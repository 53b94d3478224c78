//! Capability traits implemented by dashboard backends.

use async_trait::async_trait;
use botcommand_core::{
    AutoModRule, BotStatus, Command, DeleteAck, LogConfig, ReactionRole, Resource, ServerStats,
    Session, Token, User, YouTubeFeed,
};
use botcommand_error::DashboardResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Id-keyed CRUD over one record collection.
///
/// Implementations never deduplicate: creating two records with the same
/// trigger or emoji is allowed.
#[async_trait]
pub trait ResourceStore<R: Resource>: Send + Sync {
    /// All records, in insertion order.
    async fn list(&self) -> DashboardResult<Vec<R>>;

    /// One record by id.
    async fn get(&self, id: &str) -> DashboardResult<R>;

    /// Store a new record and return it with its assigned id.
    async fn create(&self, record: R) -> DashboardResult<R>;

    /// Replace the record with `id`. The id inside `record` is ignored.
    async fn update(&self, id: &str, record: R) -> DashboardResult<R>;

    /// Remove the record with `id`.
    async fn delete(&self, id: &str) -> DashboardResult<DeleteAck>;
}

/// Credential exchange and the signed-in user.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Exchange credentials for a token. On success the token is stored in the session.
    async fn login(&self, username: &str, password: &str) -> DashboardResult<Token>;

    /// The signed-in user.
    async fn current_user(&self) -> DashboardResult<User>;

    /// Session shared with the rest of the dashboard.
    fn session(&self) -> &Session;

    /// Forget the token, in memory and on disk.
    fn logout(&self) -> DashboardResult<()> {
        self.session().clear()
    }
}

/// Read-only aggregates for the home view.
#[async_trait]
pub trait StatsBackend: Send + Sync {
    /// Server activity counters.
    async fn server_stats(&self) -> DashboardResult<ServerStats>;

    /// Bot feature flags and build information.
    async fn bot_status(&self) -> DashboardResult<BotStatus>;
}

/// Which implementation serves the dashboard.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum BackendKind {
    /// REST API over HTTP
    #[strum(serialize = "remote")]
    Remote,
    /// Seeded in-memory store
    #[strum(serialize = "in-memory")]
    InMemory,
}

/// Everything the dashboard needs from a backend.
///
/// Calls on a `dyn DashboardBackend` that exist on several stores are
/// disambiguated by naming the store, e.g. `ResourceStore::<Command>::list(&*backend)`.
pub trait DashboardBackend:
    ResourceStore<Command>
    + ResourceStore<ReactionRole>
    + ResourceStore<YouTubeFeed>
    + ResourceStore<LogConfig>
    + ResourceStore<AutoModRule>
    + AuthBackend
    + StatsBackend
{
    /// Which implementation this is.
    fn kind(&self) -> BackendKind;
}

#[async_trait]
impl<R, T> ResourceStore<R> for Arc<T>
where
    R: Resource,
    T: ResourceStore<R> + ?Sized,
{
    async fn list(&self) -> DashboardResult<Vec<R>> {
        (**self).list().await
    }

    async fn get(&self, id: &str) -> DashboardResult<R> {
        (**self).get(id).await
    }

    async fn create(&self, record: R) -> DashboardResult<R> {
        (**self).create(record).await
    }

    async fn update(&self, id: &str, record: R) -> DashboardResult<R> {
        (**self).update(id, record).await
    }

    async fn delete(&self, id: &str) -> DashboardResult<DeleteAck> {
        (**self).delete(id).await
    }
}

#[async_trait]
impl<T: AuthBackend + ?Sized> AuthBackend for Arc<T> {
    async fn login(&self, username: &str, password: &str) -> DashboardResult<Token> {
        (**self).login(username, password).await
    }

    async fn current_user(&self) -> DashboardResult<User> {
        (**self).current_user().await
    }

    fn session(&self) -> &Session {
        (**self).session()
    }

    fn logout(&self) -> DashboardResult<()> {
        (**self).logout()
    }
}

#[async_trait]
impl<T: StatsBackend + ?Sized> StatsBackend for Arc<T> {
    async fn server_stats(&self) -> DashboardResult<ServerStats> {
        (**self).server_stats().await
    }

    async fn bot_status(&self) -> DashboardResult<BotStatus> {
        (**self).bot_status().await
    }
}
