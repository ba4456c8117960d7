use std::path::PathBuf;

/// Maximum accepted request body size. Matches the remote transcription
/// API's per-file limit; enforced at the HTTP layer before any handler
/// logic runs.
pub const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub upload: UploadSettings,
    pub transcription: TranscriptionSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct TranscriptionSettings {
    /// Absence is not a startup error; it surfaces per transcription call.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(5000),
            },
            upload: UploadSettings {
                dir: std::env::var("UPLOAD_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("uploads")),
            },
            transcription: TranscriptionSettings {
                api_key: std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
                base_url: std::env::var("OPENAI_BASE_URL")
                    .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
                model: std::env::var("WHISPER_MODEL").unwrap_or_else(|_| "whisper-1".to_string()),
            },
        }
    }
}
