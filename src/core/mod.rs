pub mod openai;
pub mod pipeline;
pub mod retry;
pub mod storage;
pub mod stt;
pub mod summarize;

// Re-export commonly used types for convenience
pub use pipeline::{Pipeline, PipelineError, PipelineOutcome, Stage};
pub use retry::RetryPolicy;
pub use storage::{
    CredentialError, CredentialIssuer, ObjectFetcher, S3CredentialIssuer, StorageError, StorageKey,
    UploadCredential,
};
pub use stt::{OpenAITranscriber, TranscribeError, Transcriber, TranscriberConfig, WhisperModel};
pub use summarize::{OpenAISummarizer, SummarizeError, Summarizer, SummarizerConfig};
