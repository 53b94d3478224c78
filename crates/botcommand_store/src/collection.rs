//! One id-keyed record collection.

use botcommand_core::{DeleteAck, Resource};
use botcommand_error::{DashboardResult, StoreError};
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug)]
struct CollectionState<R> {
    records: Vec<R>,
    next_id: u64,
}

/// Records of one type in insertion order.
///
/// Each call takes the lock once, so every operation is atomic with respect
/// to the others.
#[derive(Debug)]
pub struct Collection<R> {
    state: RwLock<CollectionState<R>>,
}

impl<R: Resource> Collection<R> {
    /// Collection holding `records`. New ids continue after the largest numeric seed id.
    pub fn new(records: Vec<R>) -> Self {
        let next_id = records
            .iter()
            .filter_map(|r| r.id().parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            state: RwLock::new(CollectionState { records, next_id }),
        }
    }

    /// All records.
    pub async fn list(&self) -> Vec<R> {
        self.state.read().await.records.clone()
    }

    /// One record by id.
    pub async fn get(&self, id: &str) -> DashboardResult<R> {
        self.state
            .read()
            .await
            .records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(R::LABEL).into())
    }

    /// Append `record` under a fresh id distinct from every stored id.
    pub async fn insert(&self, mut record: R) -> R {
        let mut state = self.state.write().await;
        let id = loop {
            let candidate = state.next_id.to_string();
            state.next_id += 1;
            if !state.records.iter().any(|r| r.id() == candidate) {
                break candidate;
            }
        };
        record.set_id(id);
        debug!(resource = R::PATH, id = record.id(), "Record created");
        state.records.push(record.clone());
        record
    }

    /// Replace the record with `id`, keeping `id`.
    pub async fn replace(&self, id: &str, mut record: R) -> DashboardResult<R> {
        let mut state = self.state.write().await;
        let slot = state
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| StoreError::not_found(R::LABEL))?;
        record.set_id(id.to_string());
        *slot = record.clone();
        debug!(resource = R::PATH, id, "Record updated");
        Ok(record)
    }

    /// Remove the record with `id`.
    pub async fn remove(&self, id: &str) -> DashboardResult<DeleteAck> {
        let mut state = self.state.write().await;
        let index = state
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| StoreError::not_found(R::LABEL))?;
        state.records.remove(index);
        debug!(resource = R::PATH, id, "Record deleted");
        Ok(DeleteAck::new(R::deleted_message()))
    }
}
