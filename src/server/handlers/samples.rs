//! Text sample endpoints.

use axum::extract::{Path, Query, State};
use axum::Json;

use super::super::error::ApiError;
use super::super::AppState;
use super::PageQuery;
use crate::models::{TextSample, TextSampleCreate};

/// Create a text sample.
pub async fn create_sample(
    State(state): State<AppState>,
    Json(body): Json<TextSampleCreate>,
) -> Result<Json<TextSample>, ApiError> {
    if body.text.trim().is_empty() {
        return Err(ApiError::Validation("text must not be empty".to_string()));
    }

    let sample = TextSample::from(body);
    state.samples.save(&sample).await?;
    Ok(Json(sample))
}

/// List a page of text samples in storage-native order.
pub async fn list_samples(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Vec<TextSample>>, ApiError> {
    let samples = state.samples.list(page.skip, page.limit).await?;
    Ok(Json(samples))
}

/// Get a text sample by id.
pub async fn get_sample(
    State(state): State<AppState>,
    Path(sample_id): Path<String>,
) -> Result<Json<TextSample>, ApiError> {
    match state.samples.get(&sample_id).await? {
        Some(sample) => Ok(Json(sample)),
        None => Err(ApiError::NotFound("Text sample not found".to_string())),
    }
}

/// Delete a text sample by id. No cascade: dependent annotations and
/// comparisons are orphaned.
pub async fn delete_sample(
    State(state): State<AppState>,
    Path(sample_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !state.samples.delete(&sample_id).await? {
        return Err(ApiError::NotFound("Text sample not found".to_string()));
    }

    Ok(Json(serde_json::json!({
        "message": "Text sample deleted successfully"
    })))
}

/// Pick two distinct samples uniformly at random for a pairwise comparison.
pub async fn random_pair(
    State(state): State<AppState>,
) -> Result<Json<Vec<TextSample>>, ApiError> {
    let pair = state.samples.sample(2).await?;
    if pair.len() < 2 {
        return Err(ApiError::NotFound(
            "Not enough text samples for pairwise comparison".to_string(),
        ));
    }

    Ok(Json(pair))
}
