use std::io;

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::{StoragePath, UploadId};

/// Scoped temporary storage for per-request artifacts. Entries live only
/// for the duration of one upload and are deleted before the response is
/// produced.
#[async_trait]
pub trait StagingStore: Send + Sync {
    async fn store(&self, path: &StoragePath, data: Bytes) -> Result<u64, StagingStoreError>;

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, StagingStoreError>;

    async fn delete(&self, path: &StoragePath) -> Result<(), StagingStoreError>;

    /// Removes the upload's emptied scope itself once its entries are gone.
    /// A scope that never materialized is not an error.
    async fn remove_scope(&self, upload_id: &UploadId) -> Result<(), StagingStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StagingStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
