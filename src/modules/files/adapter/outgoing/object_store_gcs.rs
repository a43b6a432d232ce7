use async_trait::async_trait;
use futures::TryStreamExt;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::files::application::ports::outgoing::{
    ByteStream, ObjectEntry, ObjectStore, ObjectStoreError, StoredObject,
};

/// Metadata key carrying the user-supplied filename on every stored blob.
const ORIGINAL_NAME_METADATA_KEY: &str = "originalName";

// ============================================================================
// Internal seam
// ============================================================================

/// Blob metadata as reported by the bucket, without the payload.
#[derive(Debug, Clone, Default)]
struct ObjectMetadata {
    content_type: Option<String>,
    size_bytes: Option<u64>,
    original_name: Option<String>,
}

/// One page of a bucket enumeration.
#[derive(Debug, Clone, Default)]
struct ObjectPage {
    entries: Vec<ObjectEntry>,
    next_page_token: Option<String>,
}

/// Internal seam to make the adapter testable without mocking
/// google-cloud-storage types/streams.
///
/// Errors are classified here, at the point where the storage response is
/// observed: only a structured 404 becomes `NotFound`, everything else is
/// `Backend` with the cause preserved for logging.
#[async_trait]
trait GcsApi: Send + Sync {
    async fn upload_object(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        original_name: &str,
    ) -> Result<(), ObjectStoreError>;

    async fn object_metadata(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<ObjectMetadata, ObjectStoreError>;

    async fn stream_object(&self, bucket: &str, key: &str)
        -> Result<ByteStream, ObjectStoreError>;

    async fn list_page(
        &self,
        bucket: &str,
        page_token: Option<String>,
    ) -> Result<ObjectPage, ObjectStoreError>;
}

#[cfg(test)]
struct ArcGcsApi(Arc<dyn GcsApi>);

#[cfg(test)]
#[async_trait]
impl GcsApi for ArcGcsApi {
    async fn upload_object(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        original_name: &str,
    ) -> Result<(), ObjectStoreError> {
        self.0.upload_object(bucket, key, bytes, original_name).await
    }

    async fn object_metadata(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<ObjectMetadata, ObjectStoreError> {
        self.0.object_metadata(bucket, key).await
    }

    async fn stream_object(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<ByteStream, ObjectStoreError> {
        self.0.stream_object(bucket, key).await
    }

    async fn list_page(
        &self,
        bucket: &str,
        page_token: Option<String>,
    ) -> Result<ObjectPage, ObjectStoreError> {
        self.0.list_page(bucket, page_token).await
    }
}

// ============================================================================
// Production adapter
// ============================================================================

/// Object store backed by a Google Cloud Storage bucket.
#[derive(Clone)]
pub struct GcsObjectStore {
    bucket: String,
    client: Arc<OnceCell<Box<dyn GcsApi>>>,
}

impl GcsObjectStore {
    /// Synchronous constructor - the GCS client is initialized lazily on
    /// first use, with application default credentials.
    pub fn new(bucket: String) -> Self {
        Self {
            bucket,
            client: Arc::new(OnceCell::new()),
        }
    }

    async fn get_client(&self) -> Result<&dyn GcsApi, ObjectStoreError> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealGcsApi::new().await?;
                Ok(Box::new(real_client) as Box<dyn GcsApi>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    /// Test-friendly constructor with a pre-initialized client.
    #[cfg(test)]
    fn with_client(bucket: &str, client: Arc<dyn GcsApi>) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcGcsApi(client)) as Box<dyn GcsApi>);

        Self {
            bucket: bucket.to_string(),
            client: Arc::new(once),
        }
    }
}

#[async_trait]
impl ObjectStore for GcsObjectStore {
    fn bucket_name(&self) -> &str {
        &self.bucket
    }

    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        original_name: &str,
    ) -> Result<(), ObjectStoreError> {
        let client = self.get_client().await?;
        client
            .upload_object(&self.bucket, key, bytes, original_name)
            .await
    }

    async fn get(&self, key: &str) -> Result<StoredObject, ObjectStoreError> {
        let client = self.get_client().await?;

        let metadata = client.object_metadata(&self.bucket, key).await?;
        let stream = client.stream_object(&self.bucket, key).await?;

        Ok(StoredObject {
            stream,
            content_type: metadata.content_type,
            size_bytes: metadata.size_bytes,
            original_name: metadata.original_name,
        })
    }

    async fn list(&self) -> Result<Vec<ObjectEntry>, ObjectStoreError> {
        let client = self.get_client().await?;

        let mut entries = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = client.list_page(&self.bucket, page_token).await?;
            entries.extend(page.entries);

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(entries)
    }
}

// ============================================================================
// Real Google Cloud Storage client (google-cloud-storage)
// ============================================================================

struct RealGcsApi {
    client: google_cloud_storage::client::Client,
}

impl RealGcsApi {
    async fn new() -> Result<Self, ObjectStoreError> {
        tracing::info!("Initializing GCS client...");

        let config = google_cloud_storage::client::ClientConfig::default()
            .with_auth()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS client config: {:?}", e);
                ObjectStoreError::Backend(e.to_string())
            })?;

        tracing::info!("GCS client credentials resolved");

        Ok(Self {
            client: google_cloud_storage::client::Client::new(config),
        })
    }
}

fn map_gcs_error(err: google_cloud_storage::http::Error) -> ObjectStoreError {
    use google_cloud_storage::http::Error;

    match &err {
        Error::Response(resp) if resp.code == 404 => ObjectStoreError::NotFound,
        Error::HttpClient(e) if e.status().map(|s| s.as_u16()) == Some(404) => {
            ObjectStoreError::NotFound
        }
        _ => ObjectStoreError::Backend(err.to_string()),
    }
}

fn object_metadata_from(object: google_cloud_storage::http::objects::Object) -> ObjectMetadata {
    ObjectMetadata {
        content_type: object.content_type,
        size_bytes: u64::try_from(object.size).ok(),
        original_name: object
            .metadata
            .and_then(|m| m.get(ORIGINAL_NAME_METADATA_KEY).cloned()),
    }
}

#[async_trait]
impl GcsApi for RealGcsApi {
    async fn upload_object(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        original_name: &str,
    ) -> Result<(), ObjectStoreError> {
        use google_cloud_storage::http::objects::upload::{UploadObjectRequest, UploadType};
        use google_cloud_storage::http::objects::Object;

        let resource = Object {
            name: key.to_string(),
            metadata: Some(HashMap::from([(
                ORIGINAL_NAME_METADATA_KEY.to_string(),
                original_name.to_string(),
            )])),
            ..Default::default()
        };

        self.client
            .upload_object(
                &UploadObjectRequest {
                    bucket: bucket.to_string(),
                    ..Default::default()
                },
                bytes,
                &UploadType::Multipart(Box::new(resource)),
            )
            .await
            .map_err(map_gcs_error)?;

        Ok(())
    }

    async fn object_metadata(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<ObjectMetadata, ObjectStoreError> {
        use google_cloud_storage::http::objects::get::GetObjectRequest;

        let object = self
            .client
            .get_object(&GetObjectRequest {
                bucket: bucket.to_string(),
                object: key.to_string(),
                ..Default::default()
            })
            .await
            .map_err(map_gcs_error)?;

        Ok(object_metadata_from(object))
    }

    async fn stream_object(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<ByteStream, ObjectStoreError> {
        use google_cloud_storage::http::objects::download::Range;
        use google_cloud_storage::http::objects::get::GetObjectRequest;

        let stream = self
            .client
            .download_streamed_object(
                &GetObjectRequest {
                    bucket: bucket.to_string(),
                    object: key.to_string(),
                    ..Default::default()
                },
                &Range::default(),
            )
            .await
            .map_err(map_gcs_error)?;

        Ok(Box::pin(stream.map_err(map_gcs_error)))
    }

    async fn list_page(
        &self,
        bucket: &str,
        page_token: Option<String>,
    ) -> Result<ObjectPage, ObjectStoreError> {
        use google_cloud_storage::http::objects::list::ListObjectsRequest;

        let response = self
            .client
            .list_objects(&ListObjectsRequest {
                bucket: bucket.to_string(),
                page_token,
                ..Default::default()
            })
            .await
            .map_err(map_gcs_error)?;

        let entries = response
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|object| {
                let key = object.name.clone();
                let metadata = object_metadata_from(object);
                ObjectEntry {
                    key,
                    original_name: metadata.original_name,
                    size_bytes: metadata.size_bytes,
                }
            })
            .collect();

        Ok(ObjectPage {
            entries,
            next_page_token: response.next_page_token,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
