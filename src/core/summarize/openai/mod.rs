//! OpenAI chat-completions summarization adapter.

mod client;
mod config;
mod messages;

pub use client::OpenAISummarizer;
pub use config::SummarizerConfig;
pub use messages::{ChatMessage, ChatRequest, ChatResponse};
