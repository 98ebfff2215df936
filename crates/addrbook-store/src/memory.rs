//! In-memory record storage for development and testing.
//!
//! This implementation uses `RwLock::unwrap()` intentionally. Lock poisoning
//! only occurs when another thread panicked while holding the lock, which is
//! an unrecoverable state. For durable storage, use the PostgreSQL backend.

use addrbook_core::error::Result;
use addrbook_core::models::{LocationRecord, NewRecord, RecordId, RecordPatch};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::ports::RecordStore;

#[derive(Debug)]
struct MemoryState {
    records: BTreeMap<RecordId, LocationRecord>,
    next_id: i64,
}

impl Default for MemoryState {
    fn default() -> Self {
        Self { records: BTreeMap::new(), next_id: 1 }
    }
}

/// In-memory implementation of RecordStore
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryRecordStore {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.state.read().unwrap().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn create(&self, record: &NewRecord) -> Result<LocationRecord> {
        record.validate()?;

        let mut state = self.state.write().unwrap();
        let id = RecordId(state.next_id);
        state.next_id += 1;

        let stored = record.clone().into_record(id);
        state.records.insert(id, stored.clone());
        Ok(stored)
    }

    async fn get(&self, id: RecordId) -> Result<Option<LocationRecord>> {
        let state = self.state.read().unwrap();
        Ok(state.records.get(&id).cloned())
    }

    async fn list(&self, skip: usize, limit: usize) -> Result<Vec<LocationRecord>> {
        let state = self.state.read().unwrap();
        Ok(state.records.values().skip(skip).take(limit).cloned().collect())
    }

    async fn update(&self, id: RecordId, patch: &RecordPatch) -> Result<Option<LocationRecord>> {
        patch.validate()?;

        let mut state = self.state.write().unwrap();
        Ok(state.records.get_mut(&id).map(|record| {
            patch.apply(record);
            record.clone()
        }))
    }

    async fn delete(&self, id: RecordId) -> Result<Option<LocationRecord>> {
        let mut state = self.state.write().unwrap();
        Ok(state.records.remove(&id))
    }

    async fn all(&self) -> Result<Vec<LocationRecord>> {
        let state = self.state.read().unwrap();
        Ok(state.records.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use addrbook_core::error::AddrbookError;
    use addrbook_core::models::CoordinateInput;

    fn new_record(name: &str) -> NewRecord {
        NewRecord::new(name, "22.705435° N", "75.84361° E")
    }

    #[tokio::test]
    async fn test_ids_are_assigned_in_order() {
        let store = MemoryRecordStore::new();

        let first = store.create(&new_record("Home")).await.unwrap();
        let second = store.create(&new_record("Office")).await.unwrap();

        assert_eq!(first.id, RecordId(1));
        assert_eq!(second.id, RecordId(2));
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let store = MemoryRecordStore::new();
        let first = store.create(&new_record("Home")).await.unwrap();
        store.delete(first.id).await.unwrap();

        let next = store.create(&new_record("Office")).await.unwrap();
        assert_eq!(next.id, RecordId(2));
    }

    #[tokio::test]
    async fn test_coordinates_are_stored_raw() {
        let store = MemoryRecordStore::new();
        let created = store.create(&new_record("Home")).await.unwrap();

        let fetched = store.get(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.latitude, CoordinateInput::text("22.705435° N"));
        assert_eq!(fetched.longitude, CoordinateInput::text("75.84361° E"));
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let store = MemoryRecordStore::new();
        assert!(store.get(RecordId(9999)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let store = MemoryRecordStore::new();
        let err = store.create(&new_record("")).await.unwrap_err();
        assert!(matches!(err, AddrbookError::Validation { .. }));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_list_pagination() {
        let store = MemoryRecordStore::new();
        for i in 0..5 {
            store.create(&new_record(&format!("Location {}", i))).await.unwrap();
        }

        let page = store.list(1, 2).await.unwrap();
        let names: Vec<&str> = page.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Location 1", "Location 2"]);

        assert_eq!(store.list(0, 100).await.unwrap().len(), 5);
        assert!(store.list(10, 100).await.unwrap().is_empty());
        assert!(store.list(0, 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_partial_update() {
        let store = MemoryRecordStore::new();
        let created = store.create(&new_record("Home")).await.unwrap();

        let patch = RecordPatch {
            latitude: Some(CoordinateInput::text("22.710000")),
            ..Default::default()
        };
        let updated = store.update(created.id, &patch).await.unwrap().unwrap();

        assert_eq!(updated.name, "Home");
        assert_eq!(updated.latitude, CoordinateInput::text("22.710000"));
        assert_eq!(updated.longitude, CoordinateInput::text("75.84361° E"));
        assert_eq!(store.get(created.id).await.unwrap().unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let store = MemoryRecordStore::new();
        let patch = RecordPatch { name: Some("Nobody".to_string()), ..Default::default() };
        assert!(store.update(RecordId(9999), &patch).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_returns_removed_record() {
        let store = MemoryRecordStore::new();
        let created = store.create(&new_record("To Delete")).await.unwrap();

        let removed = store.delete(created.id).await.unwrap();
        assert_eq!(removed, Some(created.clone()));
        assert!(store.get(created.id).await.unwrap().is_none());
        assert!(store.delete(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_all_is_ordered_snapshot() {
        let store = MemoryRecordStore::new();
        store.create(&new_record("a")).await.unwrap();
        store.create(&new_record("b")).await.unwrap();

        let snapshot = store.all().await.unwrap();
        store.create(&new_record("c")).await.unwrap();

        let names: Vec<&str> = snapshot.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
