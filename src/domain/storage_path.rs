use std::fmt;

use super::upload::UploadId;

/// Store-relative location of a temporary artifact: `{upload_id}/{filename}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn new(upload_id: &UploadId, filename: &str) -> Self {
        Self(format!("{}/{}", upload_id.as_uuid(), filename))
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Derives a sibling path with the extension replaced. Used for the
    /// normalized artifact, which sits next to the original upload.
    pub fn with_extension(&self, ext: &str) -> Self {
        match self.0.rsplit_once('.') {
            Some((stem, _)) => Self(format!("{stem}.{ext}")),
            None => Self(format!("{}.{ext}", self.0)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
