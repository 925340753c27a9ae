//! Configuration module for the Scribe Gateway server
//!
//! Configuration is loaded from environment variables (with an optional .env
//! file loaded at startup). Actual environment variables override .env values,
//! which override defaults. All values are read once at process start and are
//! read-only afterwards; secret fields are zeroized when the config is dropped.
//!
//! # Example
//! ```rust,no_run
//! use scribe_gateway::config::ServerConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! println!("Server listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

mod env;

/// Default ceiling for buffered object fetches (25 MiB).
///
/// Matches the transcription provider's file size limit; objects larger than
/// this are rejected before they are read into memory.
pub const DEFAULT_MAX_FETCH_BYTES: u64 = 25 * 1024 * 1024;

/// Server configuration
///
/// Contains all configuration needed to run the Scribe Gateway server:
/// - Server settings (host, port, CORS)
/// - Object storage settings (endpoint, credentials, bucket)
/// - AI provider credentials and model selection
/// - Pipeline limits (fetch size ceiling)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    // Object storage settings
    /// Custom endpoint URL for S3-compatible providers (Cloudflare R2, MinIO,
    /// DigitalOcean Spaces). When unset, the standard AWS S3 endpoint for
    /// `s3_region` is used.
    pub s3_endpoint: Option<String>,
    /// Storage region identifier. S3-compatible providers commonly use "auto".
    pub s3_region: String,
    pub s3_access_key_id: String,
    pub s3_secret_access_key: String,
    pub s3_bucket: String,

    // Provider credentials
    /// API key for the transcription provider (Whisper-compatible REST API).
    pub transcription_api_key: String,
    /// API key for the summarization provider (chat-completions REST API).
    pub summarization_api_key: String,

    // Provider settings
    /// Transcription model name (e.g. "whisper-1", "gpt-4o-transcribe").
    pub transcription_model: String,
    /// Summarization model name (e.g. "gpt-4o").
    pub summary_model: String,
    /// Override for the fixed summary style/system prompt.
    pub summary_style: Option<String>,
    /// Override for the transcription API base URL (self-hosted or
    /// OpenAI-compatible gateways).
    pub transcription_api_base: Option<String>,
    /// Override for the summarization API base URL.
    pub summarization_api_base: Option<String>,

    // Pipeline limits
    /// Maximum object size the fetcher will buffer into memory.
    pub max_fetch_bytes: u64,

    // Security configuration
    /// CORS allowed origins (comma-separated list or "*" for all)
    /// Default: None (CORS disabled, same-origin only)
    pub cors_allowed_origins: Option<String>,
}

/// Implement Drop to zeroize all secret fields when ServerConfig is dropped.
/// This ensures sensitive data is cleared from memory immediately after use.
impl Drop for ServerConfig {
    fn drop(&mut self) {
        use zeroize::Zeroize;

        self.s3_access_key_id.zeroize();
        self.s3_secret_access_key.zeroize();
        self.transcription_api_key.zeroize();
        self.summarization_api_key.zeroize();
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Required variables: `S3_ACCESS_KEY_ID`, `S3_SECRET_ACCESS_KEY`,
    /// `S3_BUCKET`, and a provider key (`TRANSCRIPTION_API_KEY` /
    /// `SUMMARIZATION_API_KEY`, each falling back to `OPENAI_API_KEY`).
    /// Everything else has defaults. Note: a .env file, if any, must be
    /// loaded before calling this (done in main.rs at startup).
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let config = env::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the server address as a string in the format "host:port".
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validate the configuration.
    ///
    /// Checks the invariants that the rest of the server relies on; called by
    /// `from_env` and usable directly on hand-built configs in tests.
    pub fn validate(&self) -> Result<(), String> {
        if self.s3_bucket.is_empty() {
            return Err("storage bucket name must not be empty".to_string());
        }
        if self.s3_access_key_id.is_empty() || self.s3_secret_access_key.is_empty() {
            return Err("storage access key pair must not be empty".to_string());
        }
        if self.s3_region.is_empty() {
            return Err("storage region must not be empty".to_string());
        }
        if self.transcription_api_key.is_empty() {
            return Err("transcription provider API key must not be empty".to_string());
        }
        if self.summarization_api_key.is_empty() {
            return Err("summarization provider API key must not be empty".to_string());
        }
        if self.max_fetch_bytes == 0 {
            return Err("max fetch size must be greater than zero".to_string());
        }
        Ok(())
    }
}
