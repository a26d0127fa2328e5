//! Pairwise comparison endpoints.

use axum::extract::{Query, State};
use axum::Json;

use super::super::error::ApiError;
use super::super::AppState;
use super::PageQuery;
use crate::models::{PairwiseComparison, PairwiseComparisonCreate};

/// Create a pairwise comparison. Both referenced samples must exist at
/// write time. There is no check that `better_text_id` is one of the two.
pub async fn create_comparison(
    State(state): State<AppState>,
    Json(body): Json<PairwiseComparisonCreate>,
) -> Result<Json<PairwiseComparison>, ApiError> {
    let a_exists = state.samples.exists(&body.text_a_id).await?;
    let b_exists = state.samples.exists(&body.text_b_id).await?;
    if !a_exists || !b_exists {
        return Err(ApiError::NotFound(
            "One or both text samples not found".to_string(),
        ));
    }

    let comparison = PairwiseComparison::from(body);
    state.comparisons.save(&comparison).await?;
    Ok(Json(comparison))
}

/// List a page of comparisons in storage-native order.
pub async fn list_comparisons(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Vec<PairwiseComparison>>, ApiError> {
    let comparisons = state.comparisons.list(page.skip, page.limit).await?;
    Ok(Json(comparisons))
}
