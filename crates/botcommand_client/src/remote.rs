//! Dashboard backend that talks to the REST API.

use crate::{ClientConfig, Transport};
use async_trait::async_trait;
use botcommand_core::{BotStatus, DeleteAck, Resource, ServerStats, Session, Token, User};
use botcommand_error::DashboardResult;
use botcommand_interface::{
    AuthBackend, BackendKind, DashboardBackend, ResourceStore, StatsBackend,
};
use tracing::instrument;

/// Backend serving every call from the bot's REST API.
#[derive(Debug, Clone)]
pub struct RemoteBackend {
    transport: Transport,
}

impl RemoteBackend {
    /// Create a backend for `config` acting for `session`.
    pub fn new(config: ClientConfig, session: Session) -> DashboardResult<Self> {
        Ok(Self {
            transport: Transport::new(config, session)?,
        })
    }

    /// Underlying transport.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }
}

#[async_trait]
impl<R: Resource> ResourceStore<R> for RemoteBackend {
    #[instrument(skip(self), fields(resource = R::PATH))]
    async fn list(&self) -> DashboardResult<Vec<R>> {
        self.transport.get(&R::collection_path()).await
    }

    #[instrument(skip(self), fields(resource = R::PATH))]
    async fn get(&self, id: &str) -> DashboardResult<R> {
        self.transport.get(&R::item_path(id)).await
    }

    #[instrument(skip(self, record), fields(resource = R::PATH))]
    async fn create(&self, record: R) -> DashboardResult<R> {
        self.transport.post(&R::collection_path(), &record).await
    }

    #[instrument(skip(self, record), fields(resource = R::PATH))]
    async fn update(&self, id: &str, record: R) -> DashboardResult<R> {
        self.transport.put(&R::item_path(id), &record).await
    }

    #[instrument(skip(self), fields(resource = R::PATH))]
    async fn delete(&self, id: &str) -> DashboardResult<DeleteAck> {
        self.transport.delete(&R::item_path(id)).await
    }
}

#[async_trait]
impl AuthBackend for RemoteBackend {
    async fn login(&self, username: &str, password: &str) -> DashboardResult<Token> {
        self.transport.login_form(username, password).await
    }

    async fn current_user(&self) -> DashboardResult<User> {
        self.transport.get("/users/me").await
    }

    fn session(&self) -> &Session {
        self.transport.session()
    }
}

#[async_trait]
impl StatsBackend for RemoteBackend {
    async fn server_stats(&self) -> DashboardResult<ServerStats> {
        self.transport.get("/server-stats").await
    }

    async fn bot_status(&self) -> DashboardResult<BotStatus> {
        self.transport.get("/bot-status").await
    }
}

impl DashboardBackend for RemoteBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Remote
    }
}
