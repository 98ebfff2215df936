use addrbook_geo::ProximityEngine;
use addrbook_store::ports::RecordStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub engine: ProximityEngine,
    /// Name of the active storage backend, reported by `/health`
    pub storage_backend: &'static str,
    /// Page size used when `GET /addresses` omits `limit`
    pub default_page_limit: usize,
}

impl AppState {
    pub fn new(
        store: Arc<dyn RecordStore>,
        engine: ProximityEngine,
        storage_backend: &'static str,
        default_page_limit: usize,
    ) -> Self {
        Self {
            store,
            engine,
            storage_backend,
            default_page_limit,
        }
    }
}
