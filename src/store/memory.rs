//! In-memory record store
//!
//! Used by tests and by `serve --store memory` for local runs. Contents are
//! lost when the process exits.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::errors::{StoreError, StoreResult};
use super::record::{Attributes, Movie};
use super::RecordStore;

/// Record store backed by a hash map
#[derive(Debug, Default)]
pub struct InMemoryStore {
    /// Records by ID
    records: RwLock<HashMap<String, Movie>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::backend("Lock poisoned")
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn get(&self, id: &str) -> StoreResult<Option<Movie>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.get(id).cloned())
    }

    async fn put(&self, movie: Movie) -> StoreResult<Movie> {
        let mut records = self.records.write().map_err(poisoned)?;
        debug!(id = movie.id(), "in-memory put");
        records.insert(movie.id().to_string(), movie.clone());
        Ok(movie)
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let mut records = self.records.write().map_err(poisoned)?;
        debug!(id, "in-memory delete");
        records.remove(id);
        Ok(())
    }

    async fn scan_all(&self) -> StoreResult<Vec<Movie>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.values().cloned().collect())
    }

    async fn scan_filtered(
        &self,
        field: &str,
        value: &str,
        projection: &[&str],
    ) -> StoreResult<Vec<Attributes>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records
            .values()
            .filter(|m| matches!(m.get(field), Some(Value::String(s)) if s == value))
            .map(|m| m.project(projection))
            .collect())
    }
}
