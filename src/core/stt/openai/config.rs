//! Configuration types for the OpenAI transcription API.

use std::time::Duration;

// =============================================================================
// Models
// =============================================================================

/// Supported OpenAI transcription models.
///
/// - `whisper-1`: original Whisper model, good balance of speed and accuracy
/// - `gpt-4o-transcribe`: enhanced transcription, best accuracy
/// - `gpt-4o-mini-transcribe`: faster, cost-effective transcription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WhisperModel {
    #[default]
    Whisper1,
    Gpt4oTranscribe,
    Gpt4oMiniTranscribe,
}

impl WhisperModel {
    /// Convert to the API parameter value.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Whisper1 => "whisper-1",
            Self::Gpt4oTranscribe => "gpt-4o-transcribe",
            Self::Gpt4oMiniTranscribe => "gpt-4o-mini-transcribe",
        }
    }

    /// Parse from string, with fallback to default.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "whisper-1" | "whisper1" | "whisper" => Self::Whisper1,
            "gpt-4o-transcribe" | "gpt4o-transcribe" => Self::Gpt4oTranscribe,
            "gpt-4o-mini-transcribe" | "gpt4o-mini-transcribe" => Self::Gpt4oMiniTranscribe,
            _ => Self::default(),
        }
    }
}

impl std::fmt::Display for WhisperModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Audio Format Hints
// =============================================================================

/// Audio container formats the transcription API accepts.
///
/// The client never inspects audio bytes; the format is inferred from the
/// filename the uploader supplied, purely as a MIME hint on the multipart
/// part. Unknown extensions simply omit the hint and let the provider sniff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Wav,
    Mp3,
    Mp4,
    M4a,
    Webm,
    Ogg,
    Flac,
}

impl AudioFormat {
    /// Infer the format from a filename's extension.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let extension = filename.rsplit_once('.')?.1;
        match extension.to_lowercase().as_str() {
            "wav" => Some(Self::Wav),
            "mp3" | "mpeg" | "mpga" => Some(Self::Mp3),
            "mp4" => Some(Self::Mp4),
            "m4a" => Some(Self::M4a),
            "webm" => Some(Self::Webm),
            "ogg" | "oga" => Some(Self::Ogg),
            "flac" => Some(Self::Flac),
            _ => None,
        }
    }

    /// Get the MIME type for this format.
    #[inline]
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mp3 => "audio/mpeg",
            Self::Mp4 => "audio/mp4",
            Self::M4a => "audio/m4a",
            Self::Webm => "audio/webm",
            Self::Ogg => "audio/ogg",
            Self::Flac => "audio/flac",
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Default API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default request timeout. Whisper can take a while for long clips.
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Provider file size limit (25MB).
const DEFAULT_MAX_PAYLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Configuration for the OpenAI transcription adapter.
#[derive(Debug, Clone)]
pub struct TranscriberConfig {
    /// API key (bearer token).
    pub api_key: String,

    /// API base URL. Overridable for self-hosted OpenAI-compatible gateways
    /// and for tests pointing at a mock server.
    pub api_base: String,

    /// Transcription model to use.
    pub model: WhisperModel,

    /// Optional ISO-639-1 language hint forwarded to the provider.
    pub language: Option<String>,

    /// Sampling temperature (0.0 to 1.0). Lower is more deterministic.
    pub temperature: Option<f32>,

    /// HTTP request timeout.
    pub timeout: Duration,

    /// Maximum payload size accepted before any network call (provider limit).
    pub max_payload_bytes: usize,
}

impl Default for TranscriberConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            model: WhisperModel::default(),
            language: None,
            temperature: Some(0.0),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
        }
    }
}

impl TranscriberConfig {
    /// Get the transcription endpoint URL.
    pub fn transcriptions_url(&self) -> String {
        format!(
            "{}/audio/transcriptions",
            self.api_base.trim_end_matches('/')
        )
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.is_empty() {
            return Err("API key is required".to_string());
        }

        if let Some(temp) = self.temperature
            && !(0.0..=1.0).contains(&temp)
        {
            return Err(format!(
                "Temperature must be between 0.0 and 1.0, got {temp}"
            ));
        }

        if self.max_payload_bytes == 0 {
            return Err("max payload size must be greater than zero".to_string());
        }

        Ok(())
    }
}
