//! OpenAI summarization client.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use tracing::{debug, info};

use super::super::{SummarizeError, Summarizer};
use super::config::SummarizerConfig;
use super::messages::{ChatMessage, ChatRequest, ChatResponse};
use crate::core::openai;

/// OpenAI chat-completions summarization adapter.
pub struct OpenAISummarizer {
    config: SummarizerConfig,
    http_client: Client,
}

impl OpenAISummarizer {
    /// Create a new summarizer, validating the configuration.
    pub fn new(config: SummarizerConfig) -> Result<Self, SummarizeError> {
        config.validate().map_err(SummarizeError::Configuration)?;

        let http_client = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| {
                SummarizeError::Configuration(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }
}

#[async_trait]
impl Summarizer for OpenAISummarizer {
    async fn summarize(&self, transcript: &str) -> Result<String, SummarizeError> {
        if transcript.trim().is_empty() {
            return Err(SummarizeError::EmptyTranscript);
        }

        debug!(
            chars = transcript.len(),
            model = %self.config.model,
            "sending transcript for summarization"
        );

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &self.config.style_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: transcript,
                },
            ],
            temperature: self.config.temperature,
        };

        let response = self
            .http_client
            .post(self.config.chat_completions_url())
            .header(AUTHORIZATION, format!("Bearer {}", self.config.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| SummarizeError::Network(format!("request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SummarizeError::Network(format!("failed to read response: {e}")))?;

        if !status.is_success() {
            let message = openai::error_message(&body, status);
            return Err(match status.as_u16() {
                401 | 403 => SummarizeError::Authentication(message),
                code => SummarizeError::Provider {
                    status: code,
                    message,
                },
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| SummarizeError::MalformedResponse(e.to_string()))?;

        let summary = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                SummarizeError::MalformedResponse("response contains no choices".to_string())
            })?;

        info!(chars = summary.len(), "summary complete");
        Ok(summary)
    }
}
