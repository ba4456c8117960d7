use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::ports::{AudioNormalizer, TranscriptionEngine, TranscriptionError};
use crate::application::services::PipelineError;
use crate::domain::AudioFormat;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct UploadResponse {
    pub transcription: String,
    pub filename: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `POST /upload`: accepts one multipart `file` field, runs it through the
/// transcription pipeline, and maps the pipeline's error categories to
/// status codes. This is the only place that translation happens.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<E, N>(
    State(state): State<AppState<E, N>>,
    mut multipart: Multipart,
) -> Response
where
    E: TranscriptionEngine + 'static,
    N: AudioNormalizer + 'static,
{
    let (filename, format, data) = loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => {
                tracing::warn!("Upload request with no file part");
                return client_error("No file part");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart body");
                return client_error(&format!("Failed to read multipart body: {}", e));
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("").to_string();
        if filename.is_empty() {
            tracing::warn!("Upload request with empty filename");
            return client_error("No selected file");
        }

        let Some(format) = AudioFormat::from_filename(&filename) else {
            tracing::warn!(filename = %filename, "Rejected upload with disallowed extension");
            return client_error("Invalid file type");
        };

        match field.bytes().await {
            Ok(data) => break (filename, format, data),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read upload bytes");
                return client_error(&format!("Failed to read file: {}", e));
            }
        }
    };

    tracing::debug!(filename = %filename, bytes = data.len(), "Processing audio upload");

    match state
        .transcription_service
        .transcribe_upload(data, &filename, format)
        .await
    {
        Ok(transcript) => (
            StatusCode::OK,
            Json(UploadResponse {
                transcription: transcript.text,
                filename: transcript.filename,
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(err: PipelineError) -> Response {
    match err {
        // Missing credentials are a server-side misconfiguration, not a
        // client fault; the detail stays in the logs.
        PipelineError::Transcription(e @ TranscriptionError::MissingApiKey) => {
            tracing::error!(error = %e, "Transcription attempted without credentials");
            server_error()
        }
        PipelineError::Transcription(e) => {
            tracing::warn!(error = %e, "Transcription failed");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
        PipelineError::Storage(e) => {
            tracing::error!(error = %e, "Upload pipeline storage failure");
            server_error()
        }
    }
}

fn client_error(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

fn server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Error processing file".to_string(),
        }),
    )
        .into_response()
}
