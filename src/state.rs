//! Shared application state.
//!
//! All client handles are constructed once at process start from the
//! read-only configuration and passed by reference into each component —
//! never accessed as ambient globals — so tests can substitute fake backends
//! through [`AppState::with_components`].

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::core::pipeline::Pipeline;
use crate::core::retry::RetryPolicy;
use crate::core::storage::{CredentialIssuer, ObjectFetcher, S3CredentialIssuer};
use crate::core::stt::{OpenAITranscriber, Transcriber, TranscriberConfig, WhisperModel};
use crate::core::summarize::{OpenAISummarizer, Summarizer, SummarizerConfig};

/// Application state shared across request handlers.
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub issuer: Arc<dyn CredentialIssuer>,
    pub pipeline: Arc<Pipeline>,
}

impl AppState {
    /// Build the full production state from configuration.
    pub fn new(config: ServerConfig) -> anyhow::Result<Self> {
        let config = Arc::new(config);

        let issuer: Arc<dyn CredentialIssuer> = Arc::new(S3CredentialIssuer::from_config(&config));

        let fetcher = ObjectFetcher::from_config(&config)
            .map_err(|e| anyhow::anyhow!("failed to build object store: {e}"))?;

        let transcriber_config = TranscriberConfig {
            api_key: config.transcription_api_key.clone(),
            model: WhisperModel::from_str_or_default(&config.transcription_model),
            api_base: config
                .transcription_api_base
                .clone()
                .unwrap_or_else(|| TranscriberConfig::default().api_base),
            ..Default::default()
        };
        let transcriber: Arc<dyn Transcriber> =
            Arc::new(OpenAITranscriber::new(transcriber_config)?);

        let mut summarizer_config = SummarizerConfig {
            api_key: config.summarization_api_key.clone(),
            model: config.summary_model.clone(),
            ..Default::default()
        };
        if let Some(ref base) = config.summarization_api_base {
            summarizer_config.api_base = base.clone();
        }
        if let Some(ref style) = config.summary_style {
            summarizer_config.style_prompt = style.clone();
        }
        let summarizer: Arc<dyn Summarizer> = Arc::new(OpenAISummarizer::new(summarizer_config)?);

        let pipeline = Arc::new(Pipeline::new(
            fetcher,
            transcriber,
            summarizer,
            RetryPolicy::default(),
        ));

        Ok(Self {
            config,
            issuer,
            pipeline,
        })
    }

    /// Assemble state from pre-built components. Test doubles enter here.
    pub fn with_components(
        config: Arc<ServerConfig>,
        issuer: Arc<dyn CredentialIssuer>,
        pipeline: Arc<Pipeline>,
    ) -> Self {
        Self {
            config,
            issuer,
            pipeline,
        }
    }
}
