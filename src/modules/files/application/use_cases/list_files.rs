use async_trait::async_trait;
use std::sync::Arc;
use tracing::error;

use crate::files::application::domain::entities::FileDescriptor;
use crate::files::application::ports::outgoing::ObjectStore;

// ========================= List Error =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListFilesError {
    #[error("Failed to list files")]
    Storage,
}

// ========================= List Files Use Case =========================

#[async_trait]
pub trait IListFilesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<FileDescriptor>, ListFilesError>;
}

pub struct ListFilesUseCase {
    store: Arc<dyn ObjectStore>,
}

impl ListFilesUseCase {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl IListFilesUseCase for ListFilesUseCase {
    async fn execute(&self) -> Result<Vec<FileDescriptor>, ListFilesError> {
        let entries = self.store.list().await.map_err(|e| {
            error!(error = %e, "Object store list failed");
            ListFilesError::Storage
        })?;

        // Blobs uploaded out of band may lack metadata: fall back to the key
        // as display name and 0 as size, like the store enumeration itself.
        Ok(entries
            .into_iter()
            .map(|entry| FileDescriptor {
                original_name: entry.original_name.unwrap_or_else(|| entry.key.clone()),
                size_bytes: entry.size_bytes.unwrap_or(0),
                key: entry.key,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::application::ports::outgoing::{
        ObjectEntry, ObjectStoreError, StoredObject,
    };

    struct FixedListStore {
        entries: Vec<ObjectEntry>,
        fail: bool,
    }

    #[async_trait]
    impl ObjectStore for FixedListStore {
        fn bucket_name(&self) -> &str {
            "test-bucket"
        }

        async fn put(
            &self,
            _key: &str,
            _bytes: Vec<u8>,
            _original_name: &str,
        ) -> Result<(), ObjectStoreError> {
            unimplemented!("not used by list tests")
        }

        async fn get(&self, _key: &str) -> Result<StoredObject, ObjectStoreError> {
            unimplemented!("not used by list tests")
        }

        async fn list(&self) -> Result<Vec<ObjectEntry>, ObjectStoreError> {
            if self.fail {
                return Err(ObjectStoreError::Backend("credentials refused".to_string()));
            }
            Ok(self.entries.clone())
        }
    }

    #[tokio::test]
    async fn test_entries_map_to_descriptors_with_fallbacks() {
        let store = FixedListStore {
            entries: vec![
                ObjectEntry {
                    key: "id1_report.pdf".to_string(),
                    original_name: Some("report.pdf".to_string()),
                    size_bytes: Some(1234),
                },
                ObjectEntry {
                    key: "stray-object".to_string(),
                    original_name: None,
                    size_bytes: None,
                },
            ],
            fail: false,
        };

        let descriptors = ListFilesUseCase::new(Arc::new(store)).execute().await.unwrap();

        assert_eq!(
            descriptors,
            vec![
                FileDescriptor {
                    key: "id1_report.pdf".to_string(),
                    original_name: "report.pdf".to_string(),
                    size_bytes: 1234,
                },
                FileDescriptor {
                    key: "stray-object".to_string(),
                    original_name: "stray-object".to_string(),
                    size_bytes: 0,
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_bucket_yields_empty_listing() {
        let store = FixedListStore {
            entries: Vec::new(),
            fail: false,
        };

        let descriptors = ListFilesUseCase::new(Arc::new(store)).execute().await.unwrap();
        assert!(descriptors.is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_surfaces_generic_message() {
        let store = FixedListStore {
            entries: Vec::new(),
            fail: true,
        };

        let err = ListFilesUseCase::new(Arc::new(store)).execute().await.unwrap_err();
        assert!(matches!(err, ListFilesError::Storage));
        assert_eq!(err.to_string(), "Failed to list files");
    }
}
