use async_trait::async_trait;

use crate::domain::AudioFormat;

/// Remote speech-to-text capability: audio bytes plus their container
/// format in, plain text out. Implementations never panic; every failure
/// mode maps to a `TranscriptionError` variant.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(
        &self,
        audio: &[u8],
        format: AudioFormat,
    ) -> Result<String, TranscriptionError>;
}

/// Closed set of user-facing transcription failure categories. The
/// `Display` messages are part of the HTTP contract and carried verbatim
/// into error response bodies.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("Invalid OpenAI API key. Please check your API key.")]
    InvalidApiKey,
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,
    #[error("OpenAI API error: {0}")]
    ApiError(String),
    #[error("Error during transcription: {0}")]
    RequestFailed(String),
    #[error("OPENAI_API_KEY environment variable is required")]
    MissingApiKey,
}
