use addrbook_core::error::Result;
use addrbook_core::models::{LocationRecord, NewRecord, RecordId, RecordPatch};
use async_trait::async_trait;

/// Port for location record storage
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Store a new record and return it with its assigned ID
    async fn create(&self, record: &NewRecord) -> Result<LocationRecord>;

    /// Retrieve a record by ID
    async fn get(&self, id: RecordId) -> Result<Option<LocationRecord>>;

    /// List records ordered by ID, skipping `skip` and returning at most `limit`
    async fn list(&self, skip: usize, limit: usize) -> Result<Vec<LocationRecord>>;

    /// Apply a partial update; returns `None` when the record does not exist
    async fn update(&self, id: RecordId, patch: &RecordPatch) -> Result<Option<LocationRecord>>;

    /// Remove a record, returning it if it existed
    async fn delete(&self, id: RecordId) -> Result<Option<LocationRecord>>;

    /// Snapshot of every stored record, ordered by ID
    async fn all(&self) -> Result<Vec<LocationRecord>>;
}
