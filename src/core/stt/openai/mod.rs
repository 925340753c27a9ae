//! OpenAI Whisper transcription adapter.

mod client;
mod config;
mod messages;

pub use client::OpenAITranscriber;
pub use config::{AudioFormat, TranscriberConfig, WhisperModel};
pub use messages::TranscriptionResponse;
