//! Root greeting and legacy status-check endpoints.

use axum::extract::State;
use axum::Json;

use super::super::error::ApiError;
use super::super::AppState;
use crate::models::{StatusCheck, StatusCheckCreate};

/// API greeting.
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Text sample quality annotation API"
    }))
}

/// Record a status check.
pub async fn create_status_check(
    State(state): State<AppState>,
    Json(body): Json<StatusCheckCreate>,
) -> Result<Json<StatusCheck>, ApiError> {
    let check = StatusCheck::from(body);
    state.status_checks.save(&check).await?;
    Ok(Json(check))
}

/// List recorded status checks (up to 1000).
pub async fn list_status_checks(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheck>>, ApiError> {
    let checks = state.status_checks.list(1000).await?;
    Ok(Json(checks))
}
