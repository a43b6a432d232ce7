use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;

// ============================================================================
// Domain Types
// ============================================================================

/// Blob bytes as they arrive from the backing store.
///
/// Downloads are piped straight to the response; no full in-memory copy of
/// the payload exists on this side.
pub type ByteStream = BoxStream<'static, Result<Bytes, ObjectStoreError>>;

/// A stored blob resolved by key: its byte stream plus the small metadata
/// the store keeps alongside it.
pub struct StoredObject {
    pub stream: ByteStream,
    pub content_type: Option<String>,
    pub size_bytes: Option<u64>,
    /// User-supplied filename at upload time, if the blob carries one. The
    /// blob metadata is the only persistence of this name.
    pub original_name: Option<String>,
}

impl std::fmt::Debug for StoredObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredObject")
            .field("stream", &"<ByteStream>")
            .field("content_type", &self.content_type)
            .field("size_bytes", &self.size_bytes)
            .field("original_name", &self.original_name)
            .finish()
    }
}

/// One entry of a bucket enumeration. Ordering is whatever the store yields;
/// callers must not depend on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectEntry {
    pub key: String,
    pub original_name: Option<String>,
    pub size_bytes: Option<u64>,
}

// ============================================================================
// Error Types
// ============================================================================

/// Errors reported by the object store.
///
/// The variant is decided where the failure is observed (the adapter inspects
/// the store's structured response), never by inspecting message text later.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ObjectStoreError {
    #[error("object not found")]
    NotFound,

    #[error("storage backend error: {0}")]
    Backend(String),
}

// ============================================================================
// Port Interface
// ============================================================================

/// Port for the bucket that owns blob bytes.
///
/// Keys are opaque strings; a `put` either commits the whole blob or leaves
/// nothing behind. Concurrent puts to distinct keys need no coordination
/// here, and key collisions are ruled out by generator entropy upstream.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Identity of the backing bucket, reported in upload responses.
    fn bucket_name(&self) -> &str;

    /// Store a blob under `key`, recording `original_name` in its metadata.
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        original_name: &str,
    ) -> Result<(), ObjectStoreError>;

    /// Resolve a blob by key, returning its stream and metadata.
    async fn get(&self, key: &str) -> Result<StoredObject, ObjectStoreError>;

    /// Enumerate every blob in the bucket.
    async fn list(&self) -> Result<Vec<ObjectEntry>, ObjectStoreError>;
}
