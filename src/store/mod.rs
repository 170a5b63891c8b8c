//! # Record Store Gateway
//!
//! The primitive operations the backing collection offers, keyed by `id`.
//! Handlers hold no state of their own; the store is the single source of
//! truth.

pub mod codec;
pub mod dynamodb;
pub mod errors;
pub mod memory;
pub mod record;

use async_trait::async_trait;

pub use dynamodb::{DynamoOptions, DynamoStore};
pub use errors::{StoreError, StoreResult};
pub use memory::InMemoryStore;
pub use record::{Attributes, Movie, ID_FIELD};

/// Name of the collection holding movie records
pub const DEFAULT_TABLE_NAME: &str = "MovieMaster";

/// Gateway to the movie collection.
///
/// Scans are unordered and unbounded: every matching record is returned.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch a record. Absence is `Ok(None)`, never an error.
    async fn get(&self, id: &str) -> StoreResult<Option<Movie>>;

    /// Unconditional upsert. Returns the written record.
    async fn put(&self, movie: Movie) -> StoreResult<Movie>;

    /// Unconditional delete. Deleting an absent key is a no-op.
    async fn delete(&self, id: &str) -> StoreResult<()>;

    /// Every record in the collection.
    async fn scan_all(&self) -> StoreResult<Vec<Movie>>;

    /// Every record whose `field` equals `value` exactly (case-sensitive),
    /// projected to `projection`.
    async fn scan_filtered(
        &self,
        field: &str,
        value: &str,
        projection: &[&str],
    ) -> StoreResult<Vec<Attributes>>;
}
