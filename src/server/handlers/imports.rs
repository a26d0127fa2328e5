//! Bulk import endpoints (multipart CSV/JSON uploads).

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;

use super::super::error::ApiError;
use super::super::AppState;
use crate::models::TextSample;
use crate::utils::csv;

/// Response for both upload endpoints.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub count: usize,
}

/// Pull the `file` part out of a multipart body.
async fn read_upload(multipart: &mut Multipart) -> Result<(String, Vec<u8>), ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::Validation(format!("Failed to read upload: {e}")))?;
            return Ok((filename, data.to_vec()));
        }
    }

    Err(ApiError::Validation("Missing file field".to_string()))
}

/// Treat empty strings as absent for the optional columns.
fn optional_field(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_string)
}

/// Import text samples from a CSV upload with a header row.
///
/// Rows missing a `text` column or with blank text are silently skipped;
/// the returned count may be less than the row count.
pub async fn upload_csv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let (filename, data) = read_upload(&mut multipart).await?;
    if !filename.ends_with(".csv") {
        return Err(ApiError::UnsupportedMediaType(
            "File must be a CSV".to_string(),
        ));
    }

    let text = String::from_utf8(data)
        .map_err(|_| ApiError::Validation("File must be UTF-8 encoded".to_string()))?;

    let mut records = csv::parse_records(&text).into_iter();
    let header = records.next().unwrap_or_default();
    let column = |name: &str| header.iter().position(|h| h == name);
    let text_col = column("text");
    let source_col = column("source");
    let topic_col = column("topic");

    let mut created = 0;
    for row in records {
        let Some(text_value) = text_col.and_then(|i| row.get(i)) else {
            continue;
        };
        if text_value.trim().is_empty() {
            continue;
        }

        let sample = TextSample::new(
            text_value.clone(),
            optional_field(source_col.and_then(|i| row.get(i)).map(String::as_str)),
            optional_field(topic_col.and_then(|i| row.get(i)).map(String::as_str)),
        );
        state.samples.save(&sample).await?;
        created += 1;
    }

    Ok(Json(UploadResponse {
        message: format!("Successfully uploaded {created} text samples"),
        count: created,
    }))
}

/// Import text samples from a JSON upload containing a list of objects.
///
/// Items without a non-blank string `text` field are silently skipped; a
/// document that is not a list creates nothing.
pub async fn upload_json(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let (filename, data) = read_upload(&mut multipart).await?;
    if !filename.ends_with(".json") {
        return Err(ApiError::UnsupportedMediaType(
            "File must be JSON".to_string(),
        ));
    }

    let document: serde_json::Value = serde_json::from_slice(&data)
        .map_err(|_| ApiError::Validation("File must be valid JSON".to_string()))?;

    let mut created = 0;
    if let Some(items) = document.as_array() {
        for item in items {
            let Some(text_value) = item.get("text").and_then(|v| v.as_str()) else {
                continue;
            };
            if text_value.trim().is_empty() {
                continue;
            }

            let sample = TextSample::new(
                text_value.to_string(),
                optional_field(item.get("source").and_then(|v| v.as_str())),
                optional_field(item.get("topic").and_then(|v| v.as_str())),
            );
            state.samples.save(&sample).await?;
            created += 1;
        }
    }

    Ok(Json(UploadResponse {
        message: format!("Successfully uploaded {created} text samples"),
        count: created,
    }))
}
