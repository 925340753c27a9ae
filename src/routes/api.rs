use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{process, upload_url};
use crate::state::AppState;
use std::sync::Arc;

/// Create the API router.
///
/// Wrong-method requests to these paths get a 405 from axum's method routing
/// before any handler (or the credential issuer) runs.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/generate-upload-url", get(upload_url::generate_upload_url))
        .route("/process-file", post(process::process_file))
        .layer(TraceLayer::new_for_http())
}
