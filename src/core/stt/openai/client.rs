//! OpenAI transcription client.
//!
//! Whisper is a batch REST API: the whole clip goes out as one multipart
//! upload and the transcript comes back in one response. The HTTP client is
//! reused across requests for connection pooling; the audio buffer is only
//! borrowed and copied into the request body, never retained.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use tracing::{debug, info};

use super::super::{TranscribeError, Transcriber};
use super::config::{AudioFormat, TranscriberConfig};
use super::messages::TranscriptionResponse;
use crate::core::openai;

/// OpenAI Whisper transcription adapter.
pub struct OpenAITranscriber {
    config: TranscriberConfig,
    http_client: Client,
}

impl OpenAITranscriber {
    /// Create a new transcriber, validating the configuration.
    pub fn new(config: TranscriberConfig) -> Result<Self, TranscribeError> {
        config.validate().map_err(TranscribeError::Configuration)?;

        let http_client = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| {
                TranscribeError::Configuration(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Build the multipart form for one transcription request.
    fn build_form(&self, audio: &[u8], filename_hint: &str) -> Result<Form, TranscribeError> {
        let file_name = if filename_hint.is_empty() {
            "audio".to_string()
        } else {
            filename_hint.to_string()
        };

        let mut file_part = Part::bytes(audio.to_vec()).file_name(file_name);
        if let Some(format) = AudioFormat::from_filename(filename_hint) {
            file_part = file_part.mime_str(format.mime_type()).map_err(|e| {
                TranscribeError::Configuration(format!("invalid MIME type: {e}"))
            })?;
        }

        let mut form = Form::new()
            .part("file", file_part)
            .text("model", self.config.model.as_str().to_string())
            .text("response_format", "json");

        if let Some(ref language) = self.config.language
            && !language.is_empty()
        {
            form = form.text("language", language.clone());
        }

        if let Some(temp) = self.config.temperature {
            form = form.text("temperature", temp.to_string());
        }

        Ok(form)
    }
}

#[async_trait]
impl Transcriber for OpenAITranscriber {
    async fn transcribe(
        &self,
        audio: &[u8],
        filename_hint: &str,
    ) -> Result<String, TranscribeError> {
        if audio.is_empty() {
            return Err(TranscribeError::InvalidAudio(
                "audio payload is empty".to_string(),
            ));
        }
        if audio.len() > self.config.max_payload_bytes {
            return Err(TranscribeError::InvalidAudio(format!(
                "audio payload ({} bytes) exceeds provider limit ({} bytes)",
                audio.len(),
                self.config.max_payload_bytes
            )));
        }

        debug!(
            bytes = audio.len(),
            model = %self.config.model,
            hint = filename_hint,
            "sending audio for transcription"
        );

        let form = self.build_form(audio, filename_hint)?;

        let response = self
            .http_client
            .post(self.config.transcriptions_url())
            .header(AUTHORIZATION, format!("Bearer {}", self.config.api_key))
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscribeError::Network(format!("request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TranscribeError::Network(format!("failed to read response: {e}")))?;

        if !status.is_success() {
            let message = openai::error_message(&body, status);
            return Err(match status.as_u16() {
                400 | 413 | 415 | 422 => TranscribeError::InvalidAudio(message),
                401 | 403 => TranscribeError::Authentication(message),
                code => TranscribeError::Provider {
                    status: code,
                    message,
                },
            });
        }

        let parsed: TranscriptionResponse = serde_json::from_str(&body)
            .map_err(|e| TranscribeError::MalformedResponse(e.to_string()))?;

        info!(chars = parsed.text.len(), "transcription complete");
        Ok(parsed.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> TranscriberConfig {
        TranscriberConfig {
            api_key: "test_key".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_creation_with_valid_config() {
        assert!(OpenAITranscriber::new(test_config()).is_ok());
    }

    #[test]
    fn test_creation_rejects_empty_api_key() {
        let result = OpenAITranscriber::new(TranscriberConfig::default());
        assert!(matches!(result, Err(TranscribeError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_empty_audio_rejected_locally() {
        let transcriber = OpenAITranscriber::new(test_config()).unwrap();
        let result = transcriber.transcribe(&[], "clip.wav").await;
        assert!(matches!(result, Err(TranscribeError::InvalidAudio(_))));
    }

    #[tokio::test]
    async fn test_oversized_audio_rejected_locally() {
        let config = TranscriberConfig {
            max_payload_bytes: 16,
            ..test_config()
        };
        let transcriber = OpenAITranscriber::new(config).unwrap();

        let result = transcriber.transcribe(&[0u8; 32], "clip.wav").await;
        match result {
            Err(TranscribeError::InvalidAudio(message)) => {
                assert!(message.contains("exceeds provider limit"));
            }
            other => panic!("expected InvalidAudio, got {other:?}"),
        }
    }

    #[test]
    fn test_form_construction_accepts_unknown_extension() {
        let transcriber = OpenAITranscriber::new(test_config()).unwrap();
        // Unknown extension means no MIME hint, which must not be an error.
        assert!(transcriber.build_form(&[1, 2, 3], "mystery.bin").is_ok());
        assert!(transcriber.build_form(&[1, 2, 3], "").is_ok());
    }
}
