//! Seed data endpoint.

use axum::extract::State;
use axum::Json;

use super::super::error::ApiError;
use super::super::AppState;
use crate::services::seed::{self, SeedOutcome};

/// Insert the fixed demonstration samples. Idempotent: if any sample
/// already exists, reports the existing count and inserts nothing.
pub async fn initialize_sample_data(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let message = match seed::initialize_samples(&state.samples).await? {
        SeedOutcome::AlreadyInitialized(count) => {
            format!("Sample data already exists ({count} samples)")
        }
        SeedOutcome::Created(count) => {
            format!("Successfully created {count} sample text entries")
        }
    };

    Ok(Json(serde_json::json!({ "message": message })))
}
