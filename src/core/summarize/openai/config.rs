//! Configuration types for the OpenAI summarization adapter.

use std::time::Duration;

/// Default API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default summarization model.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Default sampling temperature. Summaries are generation, not extraction,
/// so output is not guaranteed reproducible across calls.
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Fixed target style for summaries: concise, action-item-highlighting,
/// Japanese output.
pub const DEFAULT_STYLE_PROMPT: &str = "You are a highly skilled assistant that summarizes \
texts. Please provide a concise summary of the following transcript, highlighting the key \
points and any action items. Format the output in Japanese.";

/// Configuration for the OpenAI summarization adapter.
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    /// API key (bearer token).
    pub api_key: String,

    /// API base URL. Overridable for self-hosted OpenAI-compatible gateways
    /// and for tests pointing at a mock server.
    pub api_base: String,

    /// Chat model to use.
    pub model: String,

    /// System prompt fixing the summary style and output language.
    pub style_prompt: String,

    /// Sampling temperature.
    pub temperature: f32,

    /// HTTP request timeout.
    pub timeout: Duration,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            style_prompt: DEFAULT_STYLE_PROMPT.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SummarizerConfig {
    /// Get the chat-completions endpoint URL.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.is_empty() {
            return Err("API key is required".to_string());
        }
        if self.model.is_empty() {
            return Err("model name must not be empty".to_string());
        }
        if self.style_prompt.is_empty() {
            return Err("style prompt must not be empty".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "Temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            ));
        }
        Ok(())
    }
}
