//! API error taxonomy.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::repository::DieselError;

/// Error surfaced to API callers as `{"error": message}`.
///
/// Each request fails independently; nothing here is fatal to the process.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or missing required field.
    #[error("{0}")]
    Validation(String),
    /// An id did not resolve.
    #[error("{0}")]
    NotFound(String),
    /// Upload with the wrong file extension.
    #[error("{0}")]
    UnsupportedMediaType(String),
    /// Storage failure.
    #[error(transparent)]
    Database(#[from] DieselError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::UnsupportedMediaType(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Database(e) => {
                tracing::error!("database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
