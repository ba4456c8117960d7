mod settings;

pub use settings::{
    ServerSettings, Settings, TranscriptionSettings, UploadSettings, MAX_UPLOAD_BYTES,
};
