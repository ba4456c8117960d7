/// Re-encodes arbitrary audio bytes into the wire format the
/// transcription engine expects. The container format is probed from the
/// content, never from the filename.
pub trait AudioNormalizer: Send + Sync {
    fn normalize(&self, data: &[u8]) -> Result<Vec<u8>, NormalizerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NormalizerError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("audio encoding failed: {0}")]
    EncodingFailed(String),
}
