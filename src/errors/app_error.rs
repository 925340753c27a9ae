//! Application-level error type and HTTP response mapping.
//!
//! Every failure a handler can produce is normalized into [`AppError`] and
//! rendered as a JSON body with the appropriate status code:
//!
//! - `InvalidRequest` → 400 `{"error"}` (caller input malformed or missing)
//! - `CredentialIssuance` → 500 with a generic body; the underlying signing
//!   failure is logged server-side and never echoed to the caller, so backend
//!   credentials cannot leak through error text
//! - `Pipeline` → 500 `{"error", "stage", "details"}` with the failing
//!   pipeline stage named for diagnostics

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::core::pipeline::PipelineError;
use crate::core::storage::CredentialError;

/// Convenience alias for handler results.
pub type AppResult<T> = Result<T, AppError>;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller input is malformed or missing. Always a client-facing 400.
    #[error("{0}")]
    InvalidRequest(String),

    /// The storage backend refused to sign an upload credential.
    #[error("failed to generate upload URL")]
    CredentialIssuance(#[source] CredentialError),

    /// A pipeline stage failed; the stage tag travels with the error.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl From<CredentialError> for AppError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::InvalidRequest(message) => AppError::InvalidRequest(message),
            other => AppError::CredentialIssuance(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": message })),
            )
                .into_response(),
            AppError::CredentialIssuance(source) => {
                error!(error = %source, "failed to generate upload URL");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to generate upload URL." })),
                )
                    .into_response()
            }
            AppError::Pipeline(err) => {
                let stage = err.stage();
                error!(stage = stage.as_str(), error = %err, "failed to process file");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Failed to process file.",
                        "stage": stage.as_str(),
                        "details": err.to_string(),
                    })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pipeline::Stage;
    use crate::core::storage::StorageError;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_request_maps_to_400() {
        let response =
            AppError::InvalidRequest("Missing filename or contentType query parameters.".into())
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .contains("filename or contentType")
        );
    }

    #[tokio::test]
    async fn test_credential_issuance_hides_details() {
        let source = CredentialError::Signing("secret key material in here".into());
        let response = AppError::CredentialIssuance(source).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Failed to generate upload URL.");
        assert!(!body.to_string().contains("secret key material"));
    }

    #[tokio::test]
    async fn test_pipeline_error_carries_stage() {
        let err = PipelineError::Fetch(StorageError::NotFound("abc-key".into()));
        assert_eq!(err.stage(), Stage::Fetch);

        let response = AppError::Pipeline(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["stage"], "fetch");
        assert!(body["details"].as_str().unwrap().contains("abc-key"));
    }

    #[test]
    fn test_credential_invalid_request_becomes_400_variant() {
        let err: AppError = CredentialError::InvalidRequest("filename must not be empty".into()).into();
        assert!(matches!(err, AppError::InvalidRequest(_)));

        let err: AppError = CredentialError::Signing("boom".into()).into();
        assert!(matches!(err, AppError::CredentialIssuance(_)));
    }
}
