//! Upload URL issuance endpoint.
//!
//! `GET /generate-upload-url?filename=<s>&contentType=<s>` returns a
//! presigned PUT URL plus the storage key the object will live under. No
//! object exists yet at this point; the client performs the upload directly
//! against storage, bypassing this server entirely.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::info;

use crate::core::storage::UploadCredential;
use crate::errors::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UploadUrlParams {
    #[serde(default)]
    filename: Option<String>,
    #[serde(default, rename = "contentType")]
    content_type: Option<String>,
}

pub async fn generate_upload_url(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UploadUrlParams>,
) -> AppResult<Json<UploadCredential>> {
    let filename = params.filename.as_deref().unwrap_or("").trim();
    let content_type = params.content_type.as_deref().unwrap_or("").trim();

    // Validate before touching the issuer so a malformed request never
    // reaches the storage backend.
    if filename.is_empty() || content_type.is_empty() {
        return Err(AppError::InvalidRequest(
            "Missing filename or contentType query parameters.".to_string(),
        ));
    }

    let credential = state.issuer.issue(filename, content_type).await?;

    info!(key = %credential.key, filename, content_type, "upload URL issued");
    Ok(Json(credential))
}
