use async_trait::async_trait;
use std::sync::Arc;
use tracing::error;

use crate::files::application::ports::outgoing::{ByteStream, ObjectStore, ObjectStoreError};

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

// ========================= Download Error =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum DownloadFileError {
    #[error("File not found")]
    NotFound,

    #[error("Failed to download file")]
    Storage,
}

// ========================= Download Result =========================

/// Response envelope for a resolved blob. The stream is handed to the HTTP
/// layer untouched; headers are reconstructed here from blob metadata, the
/// only place the original filename survives.
pub struct FileDownload {
    pub stream: ByteStream,
    pub content_type: String,
    pub content_length: Option<u64>,
    pub content_disposition: String,
}

impl std::fmt::Debug for FileDownload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileDownload")
            .field("stream", &"<ByteStream>")
            .field("content_type", &self.content_type)
            .field("content_length", &self.content_length)
            .field("content_disposition", &self.content_disposition)
            .finish()
    }
}

// ========================= Download File Use Case =========================

#[async_trait]
pub trait IDownloadFileUseCase: Send + Sync {
    async fn execute(&self, key: &str) -> Result<FileDownload, DownloadFileError>;
}

pub struct DownloadFileUseCase {
    store: Arc<dyn ObjectStore>,
}

impl DownloadFileUseCase {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl IDownloadFileUseCase for DownloadFileUseCase {
    async fn execute(&self, key: &str) -> Result<FileDownload, DownloadFileError> {
        let object = self.store.get(key).await.map_err(|e| match e {
            ObjectStoreError::NotFound => DownloadFileError::NotFound,
            ObjectStoreError::Backend(cause) => {
                error!(error = %cause, key = %key, "Object store get failed");
                DownloadFileError::Storage
            }
        })?;

        let file_name = object
            .original_name
            .unwrap_or_else(|| key.to_string());

        Ok(FileDownload {
            stream: object.stream,
            content_type: object
                .content_type
                .filter(|ct| !ct.is_empty())
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
            content_length: object.size_bytes,
            content_disposition: format!("attachment; filename=\"{file_name}\""),
        })
    }
}
