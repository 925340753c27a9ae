//! Bounded retry with exponential backoff for pipeline stage calls.
//!
//! Every external call the pipeline makes (storage fetch, transcription,
//! summarization) goes through [`RetryPolicy::run`]. Which failures are worth
//! retrying is not decided here: the caller injects a classifier, typically
//! the error type's `is_retryable()` hook, so transient classes (network
//! failures, provider 429/5xx) get another attempt while permanent classes
//! (invalid input, auth, 4xx, not-found) fail immediately.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

/// Maximum attempts per stage call (first try included).
const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Base delay for exponential backoff.
const DEFAULT_BASE_DELAY_MS: u64 = 500;

/// Retry policy shared by all pipeline stages.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts, including the first one. Never less than 1.
    pub max_attempts: u32,
    /// Delay before the first retry; doubles on each subsequent retry.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: Duration::from_millis(DEFAULT_BASE_DELAY_MS),
        }
    }
}

impl RetryPolicy {
    /// A policy that performs exactly one attempt.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            base_delay: Duration::ZERO,
        }
    }

    /// Run `op`, retrying failures the classifier marks as retryable.
    ///
    /// `op` is invoked up to `max_attempts` times; between attempts the task
    /// sleeps `base_delay * 2^(attempt-1)`. The final error is returned
    /// unchanged, so stage tagging happens at the call site.
    pub async fn run<T, E, Fut>(
        &self,
        mut op: impl FnMut() -> Fut,
        is_retryable: impl Fn(&E) -> bool,
    ) -> Result<T, E>
    where
        E: std::fmt::Display,
        Fut: Future<Output = Result<T, E>>,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) if attempt < max_attempts && is_retryable(&err) => {
                    let delay = self.base_delay * 2u32.saturating_pow(attempt - 1);
                    warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "transient failure, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
