use async_trait::async_trait;

use crate::{Blob, BlobPut, BlobResult};

/// Core blob storage operations - must be implemented by all storage backends
///
/// Neither operation coordinates with concurrent callers: two writers of the
/// same key race and the last one wins.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Fetch a blob. `Ok(None)` means the key does not exist.
    async fn get(&self, key: &str) -> BlobResult<Option<Blob>>;

    /// Store a blob, replacing anything already under `key`.
    async fn put(&self, key: &str, blob: BlobPut) -> BlobResult<PutResult>;
}

/// Result of a successful put operation
#[derive(Debug, Clone)]
pub struct PutResult {
    pub etag: Option<String>,
    pub size_bytes: u64,
}

#[async_trait]
impl<S: BlobStore + ?Sized> BlobStore for std::sync::Arc<S> {
    async fn get(&self, key: &str) -> BlobResult<Option<Blob>> {
        (**self).get(key).await
    }

    async fn put(&self, key: &str, blob: BlobPut) -> BlobResult<PutResult> {
        (**self).put(key, blob).await
    }
}
