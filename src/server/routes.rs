//! Router configuration for the API server.

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::handlers;
use super::AppState;

/// Create the main router with all routes under the /api prefix.
pub fn create_router(state: AppState, cors_origins: &[String]) -> Router {
    let api = Router::new()
        .route("/", get(handlers::root))
        // Text samples
        .route(
            "/text-samples",
            post(handlers::create_sample).get(handlers::list_samples),
        )
        .route("/text-samples/random-pair", get(handlers::random_pair))
        .route("/text-samples/upload-csv", post(handlers::upload_csv))
        .route("/text-samples/upload-json", post(handlers::upload_json))
        .route(
            "/text-samples/:sample_id",
            get(handlers::get_sample).delete(handlers::delete_sample),
        )
        // Annotations
        .route(
            "/annotations",
            post(handlers::create_annotation).get(handlers::list_annotations),
        )
        .route(
            "/annotations/text-sample/:sample_id",
            get(handlers::list_annotations_for_sample),
        )
        // Pairwise comparisons
        .route(
            "/pairwise-comparisons",
            post(handlers::create_comparison).get(handlers::list_comparisons),
        )
        // Analytics and exports
        .route("/analytics/summary", get(handlers::analytics_summary))
        .route(
            "/export/annotations-csv",
            get(handlers::export_annotations_csv),
        )
        .route(
            "/export/full-dataset-csv",
            get(handlers::export_full_dataset_csv),
        )
        // Seed data
        .route(
            "/initialize-sample-data",
            post(handlers::initialize_sample_data),
        )
        // Legacy status checks
        .route(
            "/status",
            post(handlers::create_status_check).get(handlers::list_status_checks),
        );

    Router::new()
        .nest("/api", api)
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

/// Build the CORS layer from the configured origins. A `*` entry (the
/// default) is fully permissive.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let list: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(list))
        .allow_methods(Any)
        .allow_headers(Any)
}
