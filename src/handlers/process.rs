//! Pipeline trigger endpoint.
//!
//! `POST /process-file {"key": <s>}` runs fetch → transcribe → summarize for
//! an object the client previously uploaded, and returns both artifacts. The
//! upload is a precondition the client must have satisfied; the server does
//! not poll or wait for it.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;
use tracing::info;

use crate::core::pipeline::PipelineOutcome;
use crate::errors::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProcessRequest {
    #[serde(default)]
    key: Option<String>,
}

pub async fn process_file(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ProcessRequest>, JsonRejection>,
) -> AppResult<Json<PipelineOutcome>> {
    let Json(request) = payload
        .map_err(|e| AppError::InvalidRequest(format!("invalid request body: {e}")))?;

    let key = request.key.as_deref().unwrap_or("").trim();
    if key.is_empty() {
        return Err(AppError::InvalidRequest(
            "Missing file key in request body.".to_string(),
        ));
    }

    info!(key, "processing requested");
    let outcome = state.pipeline.process(key).await?;
    Ok(Json(outcome))
}
