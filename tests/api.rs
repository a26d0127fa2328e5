//! End-to-end API tests.
//!
//! Drives the full router the way a client would: creating samples,
//! annotating and comparing them, importing and exporting, and reading the
//! analytics summary back.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use tempfile::tempdir;
use tower::ServiceExt;

use annotext::repository::DbContext;
use annotext::server::{create_router, AppState};

async fn setup_app() -> (Router, tempfile::TempDir) {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("annotext.db");

    let ctx = DbContext::new(&db_path);
    ctx.init_schema().await.unwrap();

    let state = AppState {
        samples: Arc::new(ctx.text_samples()),
        annotations: Arc::new(ctx.annotations()),
        comparisons: Arc::new(ctx.comparisons()),
        status_checks: Arc::new(ctx.status_checks()),
    };

    (create_router(state, &["*".to_string()]), dir)
}

async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn annotation_workflow_end_to_end() {
    let (app, _dir) = setup_app().await;

    // Seed the demo samples.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/initialize-sample-data")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Pick a random pair and record a preference.
    let response = get(&app, "/api/text-samples/random-pair").await;
    assert_eq!(response.status(), StatusCode::OK);
    let pair = body_json(response).await;
    let a = pair[0]["id"].as_str().unwrap().to_string();
    let b = pair[1]["id"].as_str().unwrap().to_string();
    assert_ne!(a, b);

    let response = post_json(
        &app,
        "/api/pairwise-comparisons",
        serde_json::json!({
            "text_a_id": a,
            "text_b_id": b,
            "better_text_id": a,
            "notes": "more fluent"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Annotate one of the pair.
    let response = post_json(
        &app,
        "/api/annotations",
        serde_json::json!({
            "text_sample_id": a,
            "quality_level": "average",
            "issue_tags": ["irrelevant_content"],
            "annotator_id": "rater-7"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let annotation = body_json(response).await;
    assert_eq!(annotation["annotator_id"], "rater-7");

    // The summary reflects every write made above.
    let response = get(&app, "/api/analytics/summary").await;
    let summary = body_json(response).await;
    assert_eq!(summary["total_samples"], 15);
    assert_eq!(summary["total_annotations"], 1);
    assert_eq!(summary["total_comparisons"], 1);
    assert_eq!(summary["quality_distribution"]["average"], 1);
    assert_eq!(summary["issue_distribution"]["irrelevant_content"], 1);
    assert_eq!(summary["annotation_progress"], "1/15");

    // Exports include the annotation row.
    let response = get(&app, "/api/export/annotations-csv").await;
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let csv = String::from_utf8(bytes.to_vec()).unwrap();
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.contains(&a));

    // Full dataset: one row per sample (only one sample is annotated once).
    let response = get(&app, "/api/export/full-dataset-csv").await;
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let csv = String::from_utf8(bytes.to_vec()).unwrap();
    assert_eq!(csv.lines().count(), 1 + 15);
}

#[tokio::test]
async fn deleted_sample_is_gone_but_collections_are_independent() {
    let (app, _dir) = setup_app().await;

    let response = post_json(
        &app,
        "/api/text-samples",
        serde_json::json!({ "text": "ephemeral", "topic": "test" }),
    )
    .await;
    let id = body_json(response).await["id"].as_str().unwrap().to_string();

    let response = post_json(
        &app,
        "/api/annotations",
        serde_json::json!({ "text_sample_id": id, "quality_level": "good" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/text-samples/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&app, &format!("/api/text-samples/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The annotation still counts; references are soft.
    let response = get(&app, "/api/analytics/summary").await;
    let summary = body_json(response).await;
    assert_eq!(summary["total_samples"], 0);
    assert_eq!(summary["total_annotations"], 1);
    assert_eq!(summary["annotation_progress"], "0/0");
}
