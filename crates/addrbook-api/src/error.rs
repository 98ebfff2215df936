use addrbook_core::error::AddrbookError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Unified API error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.message };
        (self.status, Json(body)).into_response()
    }
}

/// Failures outside the caller's control carry a fixed message; the cause is
/// logged where it occurs and never reaches the response body.
impl From<AddrbookError> for ApiError {
    fn from(err: AddrbookError) -> Self {
        match &err {
            _ if err.is_query_input() => Self::bad_request(err.to_string()),
            AddrbookError::Validation { .. } => Self::unprocessable(err.to_string()),
            AddrbookError::RecordNotFound { .. } => Self::not_found(err.to_string()),
            _ => Self::internal("Internal error"),
        }
    }
}
