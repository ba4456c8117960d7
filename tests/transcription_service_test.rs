use std::path::Path;
use std::sync::{Arc, Mutex};

use bytes::Bytes;

use dictate::application::ports::{
    AudioNormalizer, NormalizerError, StagingStore, TranscriptionEngine, TranscriptionError,
};
use dictate::application::services::{PipelineError, TranscriptionService};
use dictate::domain::AudioFormat;
use dictate::infrastructure::storage::LocalStagingStore;

struct RecordingEngine {
    calls: Mutex<Vec<(Vec<u8>, AudioFormat)>>,
    fail: bool,
}

impl RecordingEngine {
    fn succeeding() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }
}

#[async_trait::async_trait]
impl TranscriptionEngine for RecordingEngine {
    async fn transcribe(
        &self,
        audio: &[u8],
        format: AudioFormat,
    ) -> Result<String, TranscriptionError> {
        self.calls.lock().unwrap().push((audio.to_vec(), format));
        if self.fail {
            Err(TranscriptionError::InvalidApiKey)
        } else {
            Ok("transcribed text".to_string())
        }
    }
}

struct FixedNormalizer {
    output: Option<&'static [u8]>,
}

impl AudioNormalizer for FixedNormalizer {
    fn normalize(&self, _data: &[u8]) -> Result<Vec<u8>, NormalizerError> {
        match self.output {
            Some(bytes) => Ok(bytes.to_vec()),
            None => Err(NormalizerError::DecodingFailed("not audio".to_string())),
        }
    }
}

fn create_service<E>(
    engine: Arc<E>,
    normalizer: FixedNormalizer,
    dir: &Path,
) -> TranscriptionService<E, FixedNormalizer>
where
    E: TranscriptionEngine,
{
    let staging: Arc<dyn StagingStore> =
        Arc::new(LocalStagingStore::new(dir.to_path_buf()).unwrap());
    TranscriptionService::new(engine, Arc::new(normalizer), staging)
}

// Counts files and directories alike; a leftover upload-id directory is
// residue too.
fn staged_entry_count(dir: &Path) -> usize {
    let mut count = 0;
    for entry in std::fs::read_dir(dir).unwrap() {
        let entry = entry.unwrap();
        count += 1;
        if entry.file_type().unwrap().is_dir() {
            count += staged_entry_count(&entry.path());
        }
    }
    count
}

#[tokio::test]
async fn given_successful_pipeline_when_transcribing_then_returns_transcript_and_cleans_up() {
    let dir = tempfile::TempDir::new().unwrap();
    let engine = Arc::new(RecordingEngine::succeeding());
    let service = create_service(
        Arc::clone(&engine),
        FixedNormalizer {
            output: Some(b"normalized wav"),
        },
        dir.path(),
    );

    let transcript = service
        .transcribe_upload(Bytes::from_static(b"mp3 bytes"), "clip.mp3", AudioFormat::Mp3)
        .await
        .unwrap();

    assert_eq!(transcript.text, "transcribed text");
    assert_eq!(transcript.filename, "clip.mp3");
    assert_eq!(staged_entry_count(dir.path()), 0);
}

#[tokio::test]
async fn given_normalization_success_when_transcribing_then_engine_gets_normalized_wav() {
    let dir = tempfile::TempDir::new().unwrap();
    let engine = Arc::new(RecordingEngine::succeeding());
    let service = create_service(
        Arc::clone(&engine),
        FixedNormalizer {
            output: Some(b"normalized wav"),
        },
        dir.path(),
    );

    service
        .transcribe_upload(Bytes::from_static(b"mp3 bytes"), "clip.mp3", AudioFormat::Mp3)
        .await
        .unwrap();

    let calls = engine.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, b"normalized wav");
    assert_eq!(calls[0].1, AudioFormat::Wav);
}

#[tokio::test]
async fn given_normalization_failure_when_transcribing_then_engine_gets_original_bytes() {
    let dir = tempfile::TempDir::new().unwrap();
    let engine = Arc::new(RecordingEngine::succeeding());
    let service = create_service(
        Arc::clone(&engine),
        FixedNormalizer { output: None },
        dir.path(),
    );

    let transcript = service
        .transcribe_upload(Bytes::from_static(b"opaque bytes"), "clip.ogg", AudioFormat::Ogg)
        .await
        .unwrap();

    assert_eq!(transcript.text, "transcribed text");

    let calls = engine.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, b"opaque bytes");
    assert_eq!(calls[0].1, AudioFormat::Ogg);
    assert_eq!(staged_entry_count(dir.path()), 0);
}

#[tokio::test]
async fn given_engine_failure_when_transcribing_then_error_returned_and_artifacts_removed() {
    let dir = tempfile::TempDir::new().unwrap();
    let engine = Arc::new(RecordingEngine::failing());
    let service = create_service(
        Arc::clone(&engine),
        FixedNormalizer {
            output: Some(b"normalized wav"),
        },
        dir.path(),
    );

    let result = service
        .transcribe_upload(Bytes::from_static(b"mp3 bytes"), "clip.mp3", AudioFormat::Mp3)
        .await;

    assert!(matches!(
        result,
        Err(PipelineError::Transcription(
            TranscriptionError::InvalidApiKey
        ))
    ));
    assert_eq!(staged_entry_count(dir.path()), 0);
}

#[tokio::test]
async fn given_wav_upload_when_normalizing_then_normalized_bytes_replace_original() {
    // A .wav upload normalizes onto its own path; the engine must see the
    // normalizer's output, and cleanup must still leave nothing behind.
    let dir = tempfile::TempDir::new().unwrap();
    let engine = Arc::new(RecordingEngine::succeeding());
    let service = create_service(
        Arc::clone(&engine),
        FixedNormalizer {
            output: Some(b"re-encoded"),
        },
        dir.path(),
    );

    service
        .transcribe_upload(Bytes::from_static(b"raw wav"), "clip.wav", AudioFormat::Wav)
        .await
        .unwrap();

    let calls = engine.calls.lock().unwrap();
    assert_eq!(calls[0].0, b"re-encoded");
    assert_eq!(staged_entry_count(dir.path()), 0);
}

#[tokio::test]
async fn given_repeated_uploads_when_pipeline_completes_then_upload_dir_is_left_empty() {
    // Each request creates its own upload-id directory; none may outlive it.
    let dir = tempfile::TempDir::new().unwrap();
    let engine = Arc::new(RecordingEngine::succeeding());
    let service = create_service(
        Arc::clone(&engine),
        FixedNormalizer {
            output: Some(b"normalized wav"),
        },
        dir.path(),
    );

    for _ in 0..3 {
        service
            .transcribe_upload(Bytes::from_static(b"mp3 bytes"), "clip.mp3", AudioFormat::Mp3)
            .await
            .unwrap();
    }

    assert_eq!(staged_entry_count(dir.path()), 0);
}

#[tokio::test]
async fn given_unsafe_filename_when_transcribing_then_transcript_carries_sanitized_name() {
    let dir = tempfile::TempDir::new().unwrap();
    let engine = Arc::new(RecordingEngine::succeeding());
    let service = create_service(
        Arc::clone(&engine),
        FixedNormalizer {
            output: Some(b"normalized wav"),
        },
        dir.path(),
    );

    let transcript = service
        .transcribe_upload(
            Bytes::from_static(b"bytes"),
            "../../../etc/pass wd.wav",
            AudioFormat::Wav,
        )
        .await
        .unwrap();

    assert_eq!(transcript.filename, "passwd.wav");
    assert_eq!(staged_entry_count(dir.path()), 0);
}
