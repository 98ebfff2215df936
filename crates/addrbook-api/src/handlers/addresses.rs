use std::sync::Arc;

use addrbook_core::models::RecordId;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::dto::{
    AddressResponse, CreateAddressRequest, DeleteResponse, ListParams, NearbyParams,
    UpdateAddressRequest,
};
use crate::error::ApiError;
use crate::services::AddressService;
use crate::state::AppState;

pub async fn create_address(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateAddressRequest>,
) -> Result<(StatusCode, Json<AddressResponse>), ApiError> {
    tracing::info!(name = %request.name, "Creating address");

    let record = AddressService::create(&state, request.into()).await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

pub async fn list_addresses(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<AddressResponse>>, ApiError> {
    let records = AddressService::list(&state, params.skip, params.limit).await?;
    Ok(Json(records.into_iter().map(AddressResponse::from).collect()))
}

pub async fn find_nearby_addresses(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NearbyParams>,
) -> Result<Json<Vec<AddressResponse>>, ApiError> {
    let records = AddressService::find_nearby(&state, params).await?;
    Ok(Json(records.into_iter().map(AddressResponse::from).collect()))
}

pub async fn get_address(
    State(state): State<Arc<AppState>>,
    Path(address_id): Path<i64>,
) -> Result<Json<AddressResponse>, ApiError> {
    let record = AddressService::get(&state, RecordId(address_id)).await?;
    Ok(Json(record.into()))
}

pub async fn update_address(
    State(state): State<Arc<AppState>>,
    Path(address_id): Path<i64>,
    Json(request): Json<UpdateAddressRequest>,
) -> Result<Json<AddressResponse>, ApiError> {
    tracing::info!(id = address_id, "Updating address");

    let record = AddressService::update(&state, RecordId(address_id), request.into()).await?;
    Ok(Json(record.into()))
}

pub async fn delete_address(
    State(state): State<Arc<AppState>>,
    Path(address_id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    tracing::info!(id = address_id, "Deleting address");

    let id = AddressService::delete(&state, RecordId(address_id)).await?;
    Ok(Json(DeleteResponse::deleted(id)))
}
