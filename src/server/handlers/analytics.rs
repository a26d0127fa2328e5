//! Aggregate analytics endpoint.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::super::error::ApiError;
use super::super::AppState;
use crate::models::{IssueTag, QualityLevel};

/// Summary counts over all three collections.
///
/// The per-collection queries are issued independently with no snapshot
/// isolation across them; concurrent writes can make the counts momentarily
/// inconsistent with each other.
#[derive(Debug, Serialize)]
pub struct AnalyticsSummary {
    pub total_samples: u64,
    pub total_annotations: u64,
    pub total_comparisons: u64,
    pub quality_distribution: BTreeMap<String, u64>,
    pub issue_distribution: BTreeMap<String, u64>,
    pub annotation_progress: String,
}

/// Compute collection totals, quality/issue distributions, and the
/// "annotated/total" progress string.
pub async fn analytics_summary(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsSummary>, ApiError> {
    let total_samples = state.samples.count().await?;
    let total_annotations = state.annotations.count().await?;
    let total_comparisons = state.comparisons.count().await?;

    let mut quality_distribution = BTreeMap::new();
    for level in QualityLevel::ALL {
        let count = state.annotations.count_by_quality(level).await?;
        quality_distribution.insert(level.as_str().to_string(), count);
    }

    let mut issue_distribution = BTreeMap::new();
    for tag in IssueTag::ALL {
        let count = state.annotations.count_with_tag(tag).await?;
        issue_distribution.insert(tag.as_str().to_string(), count);
    }

    let annotation_progress = if total_samples > 0 {
        format!("{}/{}", total_annotations, total_samples)
    } else {
        "0/0".to_string()
    };

    Ok(Json(AnalyticsSummary {
        total_samples,
        total_annotations,
        total_comparisons,
        quality_distribution,
        issue_distribution,
        annotation_progress,
    }))
}
