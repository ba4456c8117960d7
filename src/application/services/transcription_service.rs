use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{
    AudioNormalizer, StagingStore, StagingStoreError, TranscriptionEngine, TranscriptionError,
};
use crate::domain::{sanitize_filename, AudioFormat, StoragePath, UploadId};

/// Successful outcome of the upload pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub text: String,
    pub filename: String,
}

/// Upload-to-transcript orchestration.
///
/// One call per request: persist the upload under a fresh `UploadId`
/// prefix, normalize it to the engine's wire format, submit it, and
/// remove every staged artifact before returning, success or failure.
pub struct TranscriptionService<E, N>
where
    E: TranscriptionEngine,
    N: AudioNormalizer,
{
    engine: Arc<E>,
    normalizer: Arc<N>,
    staging: Arc<dyn StagingStore>,
}

impl<E, N> TranscriptionService<E, N>
where
    E: TranscriptionEngine,
    N: AudioNormalizer,
{
    pub fn new(engine: Arc<E>, normalizer: Arc<N>, staging: Arc<dyn StagingStore>) -> Self {
        Self {
            engine,
            normalizer,
            staging,
        }
    }

    pub async fn transcribe_upload(
        &self,
        data: Bytes,
        filename: &str,
        format: AudioFormat,
    ) -> Result<Transcript, PipelineError> {
        let filename = sanitize_filename(filename);
        let upload_id = UploadId::new();
        let original_path = StoragePath::new(&upload_id, &filename);

        if let Err(e) = self.staging.store(&original_path, data.clone()).await {
            self.remove_scope(&upload_id).await;
            return Err(e.into());
        }

        tracing::debug!(
            upload_id = %upload_id.as_uuid(),
            filename = %filename,
            bytes = data.len(),
            "Upload staged"
        );

        let (normalized_path, result) = self
            .normalize_and_transcribe(&original_path, &data, format)
            .await;

        // Cleanup happens on every path, whatever the transcription outcome.
        if let Some(path) = normalized_path {
            if path != original_path {
                self.remove_artifact(&path).await;
            }
        }
        self.remove_artifact(&original_path).await;
        self.remove_scope(&upload_id).await;

        let text = result?;
        Ok(Transcript { text, filename })
    }

    async fn normalize_and_transcribe(
        &self,
        original_path: &StoragePath,
        data: &[u8],
        format: AudioFormat,
    ) -> (Option<StoragePath>, Result<String, PipelineError>) {
        // Normalization failure never aborts the request: the original
        // bytes are submitted as-is in their declared format.
        let (audio_path, wire_format, normalized_path) = match self.normalizer.normalize(data) {
            Ok(normalized) => {
                let path = original_path.with_extension(AudioFormat::Wav.as_str());
                match self.staging.store(&path, Bytes::from(normalized)).await {
                    Ok(_) => (path.clone(), AudioFormat::Wav, Some(path)),
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to stage normalized audio, submitting original");
                        (original_path.clone(), format, None)
                    }
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Audio normalization failed, submitting original");
                (original_path.clone(), format, None)
            }
        };

        let audio = match self.staging.fetch(&audio_path).await {
            Ok(bytes) => bytes,
            Err(e) => return (normalized_path, Err(PipelineError::Storage(e))),
        };

        let result = self
            .engine
            .transcribe(&audio, wire_format)
            .await
            .map_err(PipelineError::Transcription);

        (normalized_path, result)
    }

    async fn remove_artifact(&self, path: &StoragePath) {
        if let Err(e) = self.staging.delete(path).await {
            tracing::warn!(error = %e, path = %path, "Failed to remove temporary artifact");
        }
    }

    async fn remove_scope(&self, upload_id: &UploadId) {
        if let Err(e) = self.staging.remove_scope(upload_id).await {
            tracing::warn!(
                error = %e,
                upload_id = %upload_id.as_uuid(),
                "Failed to remove staging scope"
            );
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Transcription(#[from] TranscriptionError),
    #[error("storage: {0}")]
    Storage(#[from] StagingStoreError),
}
