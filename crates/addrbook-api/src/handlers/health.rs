use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};

use crate::dto::{HealthResponse, RootResponse};
use crate::state::AppState;

pub async fn root() -> impl IntoResponse {
    Json(RootResponse::default())
}

pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse::ok(state.storage_backend))
}
