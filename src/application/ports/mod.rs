mod audio_normalizer;
mod staging_store;
mod transcription_engine;

pub use audio_normalizer::{AudioNormalizer, NormalizerError};
pub use staging_store::{StagingStore, StagingStoreError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
