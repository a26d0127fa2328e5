//! Web server exposing the annotation management API.
//!
//! Provides CRUD endpoints for text samples, annotations, and pairwise
//! comparisons, plus bulk import/export, aggregate analytics, and the
//! idempotent seed-data route. All routes live under the /api prefix.

mod error;
mod handlers;
mod routes;

pub use error::ApiError;
pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;
use crate::repository::{
    AnnotationRepository, ComparisonRepository, StatusCheckRepository, TextSampleRepository,
};

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub samples: Arc<TextSampleRepository>,
    pub annotations: Arc<AnnotationRepository>,
    pub comparisons: Arc<ComparisonRepository>,
    pub status_checks: Arc<StatusCheckRepository>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        let ctx = settings.create_db_context();

        Self {
            samples: Arc::new(ctx.text_samples()),
            annotations: Arc::new(ctx.annotations()),
            comparisons: Arc::new(ctx.comparisons()),
            status_checks: Arc::new(ctx.status_checks()),
        }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings);
    let app = create_router(state, &settings.cors_origins);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
