//! Shared wire plumbing for OpenAI-compatible HTTP APIs.
//!
//! Both the transcription adapter (audio/transcriptions) and the
//! summarization adapter (chat/completions) speak the same error envelope,
//! so its parsing lives here instead of per adapter.

use reqwest::StatusCode;
use serde::Deserialize;

/// Error envelope returned by OpenAI-compatible APIs.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ApiError,
}

/// Error details inside the envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// Human-readable error message.
    pub message: String,

    /// Error type identifier.
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,

    /// Parameter that caused the error (if applicable).
    #[serde(default)]
    pub param: Option<String>,

    /// Error code (if applicable).
    #[serde(default)]
    pub code: Option<String>,
}

/// Extract a diagnostic message from a non-success provider response.
///
/// Falls back to the raw body when it is not a recognizable error envelope.
pub fn error_message(body: &str, status: StatusCode) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(parsed) => match parsed.error.error_type {
            Some(kind) => format!("{} ({})", parsed.error.message, kind),
            None => parsed.error.message,
        },
        Err(_) => format!("HTTP {status}: {body}"),
    }
}
