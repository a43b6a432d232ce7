use serde::Serialize;

/// Canonical record describing a stored file.
///
/// Never persisted on its own: it is reconstructed from the blob's metadata,
/// where the original name lives under the `originalName` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDescriptor {
    pub key: String,
    pub original_name: String,
    pub size_bytes: u64,
}
