mod audio_format;
mod filename;
mod storage_path;
mod upload;

pub use audio_format::AudioFormat;
pub use filename::sanitize_filename;
pub use storage_path::StoragePath;
pub use upload::UploadId;
