//! Annotation endpoints.

use axum::extract::{Path, Query, State};
use axum::Json;

use super::super::error::ApiError;
use super::super::AppState;
use super::PageQuery;
use crate::models::{Annotation, AnnotationCreate};

/// Create an annotation. The referenced sample must exist at write time;
/// the reference is not enforced by storage afterwards.
pub async fn create_annotation(
    State(state): State<AppState>,
    Json(body): Json<AnnotationCreate>,
) -> Result<Json<Annotation>, ApiError> {
    if !state.samples.exists(&body.text_sample_id).await? {
        return Err(ApiError::NotFound("Text sample not found".to_string()));
    }

    let annotation = Annotation::from(body);
    state.annotations.save(&annotation).await?;
    Ok(Json(annotation))
}

/// List a page of annotations in storage-native order.
pub async fn list_annotations(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Vec<Annotation>>, ApiError> {
    let annotations = state.annotations.list(page.skip, page.limit).await?;
    Ok(Json(annotations))
}

/// List all annotations for one text sample.
pub async fn list_annotations_for_sample(
    State(state): State<AppState>,
    Path(sample_id): Path<String>,
) -> Result<Json<Vec<Annotation>>, ApiError> {
    let annotations = state.annotations.list_for_sample(&sample_id).await?;
    Ok(Json(annotations))
}
