use async_trait::async_trait;
use reqwest::multipart;
use reqwest::StatusCode;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::AudioFormat;

const PROXY_ENV_VARS: [&str; 4] = ["HTTP_PROXY", "HTTPS_PROXY", "http_proxy", "https_proxy"];

/// OpenAI Whisper transcription client. Constructed once at startup and
/// shared across requests; a missing API key is surfaced per call rather
/// than failing process start.
pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl OpenAiWhisperEngine {
    pub fn new(api_key: Option<String>, base_url: Option<String>, model: Option<String>) -> Self {
        warn_on_proxy_vars();
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.filter(|k| !k.is_empty()),
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: model.unwrap_or_else(|| "whisper-1".to_string()),
        }
    }
}

/// Ambient proxy configuration can interfere with the remote call; it is
/// reported but never acted on.
fn warn_on_proxy_vars() {
    for var in PROXY_ENV_VARS {
        if let Ok(value) = std::env::var(var) {
            tracing::warn!(var, value = %value, "Proxy environment variable found");
        }
    }
}

#[async_trait]
impl TranscriptionEngine for OpenAiWhisperEngine {
    async fn transcribe(
        &self,
        audio: &[u8],
        format: AudioFormat,
    ) -> Result<String, TranscriptionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(TranscriptionError::MissingApiKey)?;

        let url = format!("{}/audio/transcriptions", self.base_url);

        let file_part = multipart::Part::bytes(audio.to_vec())
            .file_name(format!("audio.{}", format.as_str()))
            .mime_str(format.mime_type())
            .map_err(|e| TranscriptionError::RequestFailed(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "text")
            .part("file", file_part);

        tracing::debug!(model = %self.model, format = format.as_str(), "Sending audio to OpenAI Whisper API");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::RequestFailed(format!("request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(match status {
                StatusCode::UNAUTHORIZED => TranscriptionError::InvalidApiKey,
                StatusCode::TOO_MANY_REQUESTS => TranscriptionError::RateLimited,
                _ => TranscriptionError::ApiError(format!("status {}: {}", status, body)),
            });
        }

        let transcript = response
            .text()
            .await
            .map_err(|e| TranscriptionError::RequestFailed(format!("body: {}", e)))?;

        tracing::info!(
            chars = transcript.len(),
            "OpenAI Whisper transcription completed"
        );

        Ok(transcript.trim().to_string())
    }
}
