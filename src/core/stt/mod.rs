//! Speech-to-text adapters.
//!
//! The pipeline depends on the [`Transcriber`] trait only; the concrete
//! OpenAI Whisper REST adapter lives in [`openai`]. Tests substitute stub
//! implementations.

pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

pub use openai::{AudioFormat, OpenAITranscriber, TranscriberConfig, WhisperModel};

/// Turns an audio buffer into a plain-text transcript.
///
/// The buffer is borrowed for the duration of the call; callers keep
/// ownership and decide when to release it. An empty transcript is a valid
/// result (the clip contained no detected speech), not an error.
///
/// Audio is assumed to already be in a provider-compatible format. No video
/// demuxing or audio extraction happens here; uploads that need it must be
/// converted before they reach storage.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe `audio`. `filename_hint` is the original filename and helps
    /// the provider detect the container format.
    async fn transcribe(
        &self,
        audio: &[u8],
        filename_hint: &str,
    ) -> Result<String, TranscribeError>;
}

/// Transcription failure, normalized across provider and transport faults.
#[derive(Debug, Clone, Error)]
pub enum TranscribeError {
    #[error("invalid transcriber configuration: {0}")]
    Configuration(String),

    #[error("transcription authentication failed: {0}")]
    Authentication(String),

    /// The provider rejected the payload itself (unsupported codec, empty or
    /// oversized audio, malformed container).
    #[error("audio rejected: {0}")]
    InvalidAudio(String),

    /// Provider-side failure carrying the HTTP status for classification.
    #[error("transcription provider error ({status}): {message}")]
    Provider { status: u16, message: String },

    /// Transport-level failure before a provider response was received.
    #[error("transcription request failed: {0}")]
    Network(String),

    #[error("malformed transcription response: {0}")]
    MalformedResponse(String),
}

impl TranscribeError {
    /// Whether a retry could plausibly succeed. Rate limiting and server-side
    /// failures are transient; rejected input and bad credentials are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            TranscribeError::Network(_) => true,
            TranscribeError::Provider { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}
