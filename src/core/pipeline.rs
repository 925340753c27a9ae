//! Pipeline orchestrator: fetch → transcribe → summarize.
//!
//! One invocation per inbound request, each independent and stateless. The
//! state machine is linear — `Fetching → Transcribing → Summarizing → Done`
//! with `Failed(stage)` reachable from any non-terminal state — and strictly
//! sequential: no stage starts before the previous stage's single output
//! exists. A failure at any stage aborts the request with one stage-tagged
//! error; upstream outputs are discarded, never surfaced as partial results.
//!
//! Each stage call goes through the retry policy so transient faults get a
//! bounded number of attempts while permanent ones fail immediately (the
//! classification lives on each error type, see [`crate::core::retry`]).

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use super::retry::RetryPolicy;
use super::storage::{ObjectFetcher, StorageError, StorageKey};
use super::stt::{TranscribeError, Transcriber};
use super::summarize::{SummarizeError, Summarizer};

/// The three sequential pipeline steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Transcribe,
    Summarize,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Fetch => "fetch",
            Stage::Transcribe => "transcribe",
            Stage::Summarize => "summarize",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Both pipeline artifacts, produced transiently per request.
///
/// Never persisted by the core; the only durable artifact is the stored
/// object itself, whose retention belongs to the storage backend.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutcome {
    pub transcription: String,
    pub summary: String,
}

/// A stage-tagged pipeline failure.
#[derive(Debug, Clone, Error)]
pub enum PipelineError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] StorageError),

    #[error("transcription failed: {0}")]
    Transcribe(#[from] TranscribeError),

    #[error("summarization failed: {0}")]
    Summarize(#[from] SummarizeError),
}

impl PipelineError {
    /// Which stage failed.
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::Fetch(_) => Stage::Fetch,
            PipelineError::Transcribe(_) => Stage::Transcribe,
            PipelineError::Summarize(_) => Stage::Summarize,
        }
    }
}

/// Sequences the three stages for one storage key.
pub struct Pipeline {
    fetcher: ObjectFetcher,
    transcriber: Arc<dyn Transcriber>,
    summarizer: Arc<dyn Summarizer>,
    retry: RetryPolicy,
}

impl Pipeline {
    pub fn new(
        fetcher: ObjectFetcher,
        transcriber: Arc<dyn Transcriber>,
        summarizer: Arc<dyn Summarizer>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            fetcher,
            transcriber,
            summarizer,
            retry,
        }
    }

    /// Run the full pipeline for the object under `key`.
    ///
    /// Empty-transcript policy: when transcription yields no speech, the
    /// summarizer is not invoked and the summary comes back empty. The
    /// whole-request outcome is atomic either way — both artifacts or one
    /// stage-tagged error.
    pub async fn process(&self, key: &str) -> Result<PipelineOutcome, PipelineError> {
        info!(key, "pipeline started");

        // The original filename travels inside the key; recover it as a
        // format hint for the transcription provider. Keys minted elsewhere
        // fall back to the raw key.
        let filename_hint = StorageKey::parse(key)
            .map(|k| k.original_filename().to_string())
            .unwrap_or_else(|| key.to_string());

        // Fetch. The buffer is exclusively owned by this invocation and
        // scoped so it is released as soon as transcription returns.
        let transcription = {
            let audio = self
                .retry
                .run(|| self.fetcher.fetch(key), StorageError::is_retryable)
                .await?;

            debug!(key, bytes = audio.len(), "fetched, transcribing");

            self.retry
                .run(
                    || self.transcriber.transcribe(&audio, &filename_hint),
                    TranscribeError::is_retryable,
                )
                .await?
        };

        if transcription.trim().is_empty() {
            info!(key, "no speech detected, skipping summarization");
            return Ok(PipelineOutcome {
                transcription,
                summary: String::new(),
            });
        }

        let summary = self
            .retry
            .run(
                || self.summarizer.summarize(&transcription),
                SummarizeError::is_retryable,
            )
            .await?;

        info!(
            key,
            transcript_chars = transcription.len(),
            summary_chars = summary.len(),
            "pipeline complete"
        );

        Ok(PipelineOutcome {
            transcription,
            summary,
        })
    }
}
