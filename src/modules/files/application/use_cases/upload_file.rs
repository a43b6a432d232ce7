use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::error;

use crate::files::application::domain::object_key::generate_object_key;
use crate::files::application::domain::policies::upload_policy::{
    UploadPolicy, UploadValidationError,
};
use crate::files::application::ports::outgoing::ObjectStore;

// ========================= Upload Command =========================

/// A received upload: declared name plus the actual payload.
pub struct UploadFileCommand {
    pub file_name: String,
    pub size_bytes: u64,
    pub bytes: Vec<u8>,
}

// ========================= Upload Error =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum UploadFileError {
    #[error("No file provided")]
    NoFile,

    #[error(transparent)]
    Validation(#[from] UploadValidationError),

    /// The backend cause is logged where it is observed; callers only ever
    /// see this generic message.
    #[error("Failed to upload file")]
    Storage,
}

// ========================= Upload Result =========================

#[derive(Debug, Clone, Serialize)]
pub struct UploadedFile {
    pub key: String,
    pub original_name: String,
    pub size_bytes: u64,
    pub bucket: String,
}

// ========================= Upload File Use Case =========================

#[async_trait]
pub trait IUploadFileUseCase: Send + Sync {
    async fn execute(&self, command: UploadFileCommand) -> Result<UploadedFile, UploadFileError>;
}

pub struct UploadFileUseCase {
    policy: Arc<UploadPolicy>,
    store: Arc<dyn ObjectStore>,
}

impl UploadFileUseCase {
    pub fn new(policy: Arc<UploadPolicy>, store: Arc<dyn ObjectStore>) -> Self {
        Self { policy, store }
    }
}

#[async_trait]
impl IUploadFileUseCase for UploadFileUseCase {
    async fn execute(&self, command: UploadFileCommand) -> Result<UploadedFile, UploadFileError> {
        let UploadFileCommand {
            file_name,
            size_bytes,
            bytes,
        } = command;

        if bytes.is_empty() {
            return Err(UploadFileError::NoFile);
        }

        // Authoritative check; any client-side mirror of these rules is
        // advisory only.
        self.policy.validate(&file_name, size_bytes)?;

        let key = generate_object_key(&file_name);

        self.store
            .put(&key, bytes, &file_name)
            .await
            .map_err(|e| {
                error!(error = %e, key = %key, "Object store put failed");
                UploadFileError::Storage
            })?;

        Ok(UploadedFile {
            key,
            original_name: file_name,
            size_bytes,
            bucket: self.store.bucket_name().to_string(),
        })
    }
}
