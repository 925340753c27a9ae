//! Health check endpoint.

use axum::Json;
use serde_json::{Value, json};

/// Liveness probe. No dependencies are exercised.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "scribe-gateway",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
