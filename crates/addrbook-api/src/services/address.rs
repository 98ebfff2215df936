use addrbook_core::error::AddrbookError;
use addrbook_core::models::{LocationRecord, NewRecord, RecordId, RecordPatch};
use addrbook_geo::QueryPoint;

use crate::dto::NearbyParams;
use crate::error::ApiError;
use crate::state::AppState;

/// Address book operations shared by the HTTP handlers
pub struct AddressService;

impl AddressService {
    pub async fn create(state: &AppState, record: NewRecord) -> Result<LocationRecord, ApiError> {
        let created = state.store.create(&record).await.map_err(log_failure("create"))?;
        tracing::info!(id = %created.id, name = %created.name, "Address created");
        Ok(created)
    }

    pub async fn get(state: &AppState, id: RecordId) -> Result<LocationRecord, ApiError> {
        state
            .store
            .get(id)
            .await
            .map_err(log_failure("get"))?
            .ok_or_else(|| not_found(id))
    }

    pub async fn list(
        state: &AppState,
        skip: usize,
        limit: Option<usize>,
    ) -> Result<Vec<LocationRecord>, ApiError> {
        let limit = limit.unwrap_or(state.default_page_limit);
        let records = state.store.list(skip, limit).await.map_err(log_failure("list"))?;
        tracing::debug!(skip, limit, returned = records.len(), "Listed addresses");
        Ok(records)
    }

    pub async fn update(
        state: &AppState,
        id: RecordId,
        patch: RecordPatch,
    ) -> Result<LocationRecord, ApiError> {
        let updated = state
            .store
            .update(id, &patch)
            .await
            .map_err(log_failure("update"))?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(id = %id, "Address updated");
        Ok(updated)
    }

    pub async fn delete(state: &AppState, id: RecordId) -> Result<RecordId, ApiError> {
        let removed = state
            .store
            .delete(id)
            .await
            .map_err(log_failure("delete"))?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(id = %removed.id, "Address deleted");
        Ok(removed.id)
    }

    /// Stored addresses within `distance_km` of the query point, nearest first
    pub async fn find_nearby(
        state: &AppState,
        params: NearbyParams,
    ) -> Result<Vec<LocationRecord>, ApiError> {
        tracing::info!(
            latitude = %params.latitude,
            longitude = %params.longitude,
            distance_km = params.distance_km,
            "Searching nearby addresses"
        );

        let center = QueryPoint::new(params.latitude, params.longitude);
        let snapshot = state.store.all().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to load addresses for nearby search");
            ApiError::internal("Failed to search nearby addresses")
        })?;
        let candidates = snapshot.len();

        let found = state
            .engine
            .within_radius(&center, snapshot, params.distance_km)
            .map_err(|e| {
                tracing::warn!(error = %e, "Rejected nearby search");
                ApiError::from(e)
            })?;

        tracing::info!(candidates, found = found.len(), "Nearby search finished");

        Ok(found)
    }
}

fn not_found(id: RecordId) -> ApiError {
    tracing::warn!(id = %id, "Address not found");
    ApiError::from(AddrbookError::RecordNotFound { id })
}

fn log_failure(action: &'static str) -> impl Fn(AddrbookError) -> ApiError {
    move |e| {
        if !matches!(e, AddrbookError::Validation { .. }) {
            tracing::error!(error = %e, action, "Address store operation failed");
        }
        ApiError::from(e)
    }
}
