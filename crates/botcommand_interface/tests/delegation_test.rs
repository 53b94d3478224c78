//! Tests that shared handles forward to the underlying store.

use async_trait::async_trait;
use botcommand_core::{DeleteAck, LogConfig, Resource};
use botcommand_error::{DashboardResult, StoreError};
use botcommand_interface::{BackendKind, ResourceStore};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Logs(Mutex<Vec<LogConfig>>);

#[async_trait]
impl ResourceStore<LogConfig> for Logs {
    async fn list(&self) -> DashboardResult<Vec<LogConfig>> {
        Ok(self.0.lock().unwrap().clone())
    }

    async fn get(&self, id: &str) -> DashboardResult<LogConfig> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(LogConfig::LABEL).into())
    }

    async fn create(&self, mut record: LogConfig) -> DashboardResult<LogConfig> {
        let mut logs = self.0.lock().unwrap();
        record.set_id((logs.len() + 1).to_string());
        logs.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &str, mut record: LogConfig) -> DashboardResult<LogConfig> {
        record.set_id(id.to_string());
        Ok(record)
    }

    async fn delete(&self, _id: &str) -> DashboardResult<DeleteAck> {
        Ok(DeleteAck::new(LogConfig::deleted_message()))
    }
}

#[tokio::test]
async fn test_arc_handle_forwards_calls() {
    let store: Arc<dyn ResourceStore<LogConfig>> = Arc::new(Logs::default());
    let shared: Arc<dyn ResourceStore<LogConfig>> = Arc::new(store.clone());

    let created = shared
        .create(LogConfig {
            event_type: "Member Join".into(),
            channel: "logs".into(),
            ..LogConfig::default()
        })
        .await
        .unwrap();
    assert_eq!(created.id, "1");
    assert_eq!(store.list().await.unwrap().len(), 1);

    let err = shared.get("42").await.unwrap_err();
    assert_eq!(err.user_message(), "Log not found");

    let ack = shared.delete("1").await.unwrap();
    assert_eq!(ack.message, "Log deleted successfully");
}

#[test]
fn test_backend_kind_names() {
    assert_eq!(BackendKind::Remote.to_string(), "remote");
    assert_eq!(BackendKind::InMemory.to_string(), "in-memory");
}
