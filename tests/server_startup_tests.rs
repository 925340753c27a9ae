//! Server Startup Tests
//!
//! Tests for configuration handling and startup behavior: building the full
//! production state from a hand-built config (no network needed — client
//! construction and presigning are local operations) and serving the basic
//! routes.

use std::sync::Arc;

use axum::{Router, body::Body, http::Request, routing::get};
use tower::util::ServiceExt;

use scribe_gateway::config::DEFAULT_MAX_FETCH_BYTES;
use scribe_gateway::{ServerConfig, handlers, routes, state::AppState};

/// Helper function to create a minimal test configuration
fn create_minimal_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 8080,
        s3_endpoint: Some("http://localhost:9000".to_string()),
        s3_region: "auto".to_string(),
        s3_access_key_id: "test_access_key".to_string(),
        s3_secret_access_key: "test_secret_key".to_string(),
        s3_bucket: "test-bucket".to_string(),
        transcription_api_key: "test_transcription_key".to_string(),
        summarization_api_key: "test_summarization_key".to_string(),
        transcription_model: "whisper-1".to_string(),
        summary_model: "gpt-4o".to_string(),
        summary_style: None,
        transcription_api_base: None,
        summarization_api_base: None,
        max_fetch_bytes: DEFAULT_MAX_FETCH_BYTES,
        cors_allowed_origins: None,
    }
}

fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::api::health_check))
        .merge(routes::api::create_api_router())
        .with_state(state)
}

/// The production state builds from a minimal config without any network.
#[tokio::test]
async fn test_minimal_config_boot() {
    let state = AppState::new(create_minimal_config()).expect("state should build");
    let app = build_app(Arc::new(state));

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), axum::http::StatusCode::OK);
}

/// The real issuer signs upload URLs locally, so the endpoint works end to
/// end on a freshly booted state with placeholder credentials.
#[tokio::test]
async fn test_upload_url_available_after_boot() {
    let state = AppState::new(create_minimal_config()).expect("state should build");
    let app = build_app(Arc::new(state));

    let request = Request::builder()
        .uri("/generate-upload-url?filename=clip.mp3&contentType=audio/mpeg")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), axum::http::StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let state = AppState::new(create_minimal_config()).expect("state should build");
    let app = build_app(Arc::new(state));

    let request = Request::builder()
        .uri("/does-not-exist")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_address_formatting() {
    let config = create_minimal_config();
    assert_eq!(config.address(), "127.0.0.1:8080");
}

#[tokio::test]
async fn test_config_validation_rejects_missing_bucket() {
    let mut config = create_minimal_config();
    config.s3_bucket = String::new();
    assert!(config.validate().is_err());
}

#[tokio::test]
async fn test_config_validation_accepts_minimal_config() {
    assert!(create_minimal_config().validate().is_ok());
}

/// Unknown transcription model names fall back to the default model rather
/// than failing startup.
#[tokio::test]
async fn test_unknown_transcription_model_falls_back() {
    let mut config = create_minimal_config();
    config.transcription_model = "future-model-9000".to_string();
    assert!(AppState::new(config).is_ok());
}

#[tokio::test]
async fn test_concurrent_request_handling() {
    let state = Arc::new(AppState::new(create_minimal_config()).expect("state should build"));
    let app = build_app(state);

    let tasks: Vec<_> = (0..10)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move {
                let request = Request::builder().uri("/").body(Body::empty()).unwrap();
                let response = app.oneshot(request).await.unwrap();
                response.status()
            })
        })
        .collect();

    for task in tasks {
        let status = task.await.expect("Task should complete");
        assert_eq!(status, axum::http::StatusCode::OK);
    }
}
