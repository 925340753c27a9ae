//! Environment variable loading for server configuration.

use std::env;

use super::{DEFAULT_MAX_FETCH_BYTES, ServerConfig};

/// Read a variable, falling back to a default when unset or empty.
fn env_or(name: &str, default: &str) -> String {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

/// Read an optional variable; empty values count as unset.
fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Read a required variable; unset or empty is an error naming the variable.
fn required(name: &str) -> Result<String, String> {
    optional(name).ok_or_else(|| format!("{name} environment variable must be set"))
}

/// Read a parseable variable with a default.
fn parse_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T, String> {
    match optional(name) {
        Some(value) => value
            .parse()
            .map_err(|_| format!("{name} has invalid value '{value}'")),
        None => Ok(default),
    }
}

pub(super) fn load() -> Result<ServerConfig, Box<dyn std::error::Error>> {
    // A single OPENAI_API_KEY can serve both providers; per-provider
    // variables override it.
    let openai_api_key = optional("OPENAI_API_KEY");
    let transcription_api_key = optional("TRANSCRIPTION_API_KEY")
        .or_else(|| openai_api_key.clone())
        .ok_or("TRANSCRIPTION_API_KEY or OPENAI_API_KEY environment variable must be set")?;
    let summarization_api_key = optional("SUMMARIZATION_API_KEY")
        .or(openai_api_key)
        .ok_or("SUMMARIZATION_API_KEY or OPENAI_API_KEY environment variable must be set")?;

    Ok(ServerConfig {
        host: env_or("HOST", "0.0.0.0"),
        port: parse_or("PORT", 8080u16)?,
        s3_endpoint: optional("S3_ENDPOINT"),
        s3_region: env_or("S3_REGION", "auto"),
        s3_access_key_id: required("S3_ACCESS_KEY_ID")?,
        s3_secret_access_key: required("S3_SECRET_ACCESS_KEY")?,
        s3_bucket: required("S3_BUCKET")?,
        transcription_api_key,
        summarization_api_key,
        transcription_model: env_or("TRANSCRIPTION_MODEL", "whisper-1"),
        summary_model: env_or("SUMMARY_MODEL", "gpt-4o"),
        summary_style: optional("SUMMARY_STYLE"),
        transcription_api_base: optional("TRANSCRIPTION_API_BASE"),
        summarization_api_base: optional("SUMMARIZATION_API_BASE"),
        max_fetch_bytes: parse_or("MAX_FETCH_BYTES", DEFAULT_MAX_FETCH_BYTES)?,
        cors_allowed_origins: optional("CORS_ALLOWED_ORIGINS"),
    })
}
