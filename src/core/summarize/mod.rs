//! Text summarization adapters.
//!
//! The pipeline depends on the [`Summarizer`] trait only; the concrete
//! OpenAI chat-completions adapter lives in [`openai`].

pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

pub use openai::{OpenAISummarizer, SummarizerConfig};

/// Condenses a transcript into a summary in a fixed target style/language.
///
/// Empty-input policy: an empty transcript is rejected with
/// [`SummarizeError::EmptyTranscript`] — a summary of nothing is not
/// meaningful. The pipeline short-circuits before calling the summarizer for
/// empty transcripts, so the provider is never invoked for silence.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, transcript: &str) -> Result<String, SummarizeError>;
}

/// Summarization failure, normalized across provider and transport faults.
#[derive(Debug, Clone, Error)]
pub enum SummarizeError {
    /// The transcript was empty; see the trait-level policy.
    #[error("transcript is empty, nothing to summarize")]
    EmptyTranscript,

    #[error("invalid summarizer configuration: {0}")]
    Configuration(String),

    #[error("summarization authentication failed: {0}")]
    Authentication(String),

    /// Provider-side failure carrying the HTTP status for classification.
    #[error("summarization provider error ({status}): {message}")]
    Provider { status: u16, message: String },

    /// Transport-level failure before a provider response was received.
    #[error("summarization request failed: {0}")]
    Network(String),

    #[error("malformed summarization response: {0}")]
    MalformedResponse(String),
}

impl SummarizeError {
    /// Whether a retry could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            SummarizeError::Network(_) => true,
            SummarizeError::Provider { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(SummarizeError::Network("timeout".into()).is_retryable());
        assert!(
            SummarizeError::Provider {
                status: 500,
                message: "server error".into(),
            }
            .is_retryable()
        );
        assert!(
            !SummarizeError::Provider {
                status: 400,
                message: "bad request".into(),
            }
            .is_retryable()
        );
        assert!(!SummarizeError::EmptyTranscript.is_retryable());
        assert!(!SummarizeError::Authentication("bad key".into()).is_retryable());
    }
}
