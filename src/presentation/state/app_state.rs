use std::sync::Arc;

use crate::application::ports::{AudioNormalizer, TranscriptionEngine};
use crate::application::services::TranscriptionService;

pub struct AppState<E, N>
where
    E: TranscriptionEngine,
    N: AudioNormalizer,
{
    pub transcription_service: Arc<TranscriptionService<E, N>>,
}

impl<E, N> Clone for AppState<E, N>
where
    E: TranscriptionEngine,
    N: AudioNormalizer,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
        }
    }
}
