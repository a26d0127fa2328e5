//! CSV export endpoints.

use std::collections::HashMap;
use std::io::Write;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::Response;

use super::super::error::ApiError;
use super::super::AppState;
use crate::models::Annotation;
use crate::repository::encode_datetime;
use crate::utils::csv::escape_field;

/// Build a CSV attachment response.
fn csv_response(output: Vec<u8>, filename: &str) -> Response {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/csv")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        )
        .body(Body::from(output))
        .unwrap()
}

fn join_tags(annotation: &Annotation) -> String {
    annotation
        .issue_tags
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// Export all annotations, one row per annotation.
pub async fn export_annotations_csv(
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let annotations = state.annotations.get_all().await?;

    let mut output = Vec::new();
    writeln!(
        output,
        "id,text_sample_id,quality_level,issue_tags,notes,annotator_id,created_at"
    )
    .ok();

    for annotation in &annotations {
        writeln!(
            output,
            "{},{},{},{},{},{},{}",
            annotation.id,
            annotation.text_sample_id,
            annotation.quality_level.as_str(),
            escape_field(&join_tags(annotation)),
            escape_field(annotation.notes.as_deref().unwrap_or("")),
            escape_field(&annotation.annotator_id),
            encode_datetime(&annotation.created_at),
        )
        .ok();
    }

    Ok(csv_response(output, "annotations.csv"))
}

/// Export the full dataset: samples left-joined to their annotations.
///
/// The join happens in application code — both collections are fetched and
/// merged by sample id. One row per annotation; a sample with no
/// annotations emits a single row with empty annotation fields. The
/// `created_at` column carries the sample's timestamp.
pub async fn export_full_dataset_csv(
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let samples = state.samples.get_all().await?;
    let annotations = state.annotations.get_all().await?;

    let mut by_sample: HashMap<&str, Vec<&Annotation>> = HashMap::new();
    for annotation in &annotations {
        by_sample
            .entry(annotation.text_sample_id.as_str())
            .or_default()
            .push(annotation);
    }

    let mut output = Vec::new();
    writeln!(
        output,
        "sample_id,text,source,topic,quality_level,issue_tags,notes,created_at"
    )
    .ok();

    for sample in &samples {
        let created_at = encode_datetime(&sample.created_at);
        let sample_fields = format!(
            "{},{},{},{}",
            sample.id,
            escape_field(&sample.text),
            escape_field(sample.source.as_deref().unwrap_or("")),
            escape_field(sample.topic.as_deref().unwrap_or("")),
        );

        match by_sample.get(sample.id.as_str()) {
            Some(sample_annotations) => {
                for annotation in sample_annotations {
                    writeln!(
                        output,
                        "{},{},{},{},{}",
                        sample_fields,
                        annotation.quality_level.as_str(),
                        escape_field(&join_tags(annotation)),
                        escape_field(annotation.notes.as_deref().unwrap_or("")),
                        created_at,
                    )
                    .ok();
                }
            }
            None => {
                writeln!(output, "{},,,,{}", sample_fields, created_at).ok();
            }
        }
    }

    Ok(csv_response(output, "full_dataset.csv"))
}
