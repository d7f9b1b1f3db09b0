use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{Blob, BlobPut, BlobResult, BlobStore, PutResult};

#[derive(Debug, Clone)]
struct StoredObject {
    blob: Blob,
    cache_control: Option<String>,
}

/// In-memory store for tests and local runs.
///
/// Counts every `get` and `put` so callers can assert how much I/O a request
/// performed.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    objects: RwLock<HashMap<String, StoredObject>>,
    gets: AtomicUsize,
    puts: AtomicUsize,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an object without counting it as a `put`.
    pub async fn insert<S: Into<String>>(&self, key: S, blob: Blob) {
        self.objects.write().await.insert(
            key.into(),
            StoredObject {
                blob,
                cache_control: None,
            },
        );
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.objects.read().await.contains_key(key)
    }

    /// Cache-control metadata recorded for `key`, if any.
    pub async fn cache_control(&self, key: &str) -> Option<String> {
        self.objects
            .read()
            .await
            .get(key)
            .and_then(|o| o.cache_control.clone())
    }

    pub async fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.objects.read().await.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn get(&self, key: &str) -> BlobResult<Option<Blob>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        Ok(self.objects.read().await.get(key).map(|o| o.blob.clone()))
    }

    async fn put(&self, key: &str, blob: BlobPut) -> BlobResult<PutResult> {
        self.puts.fetch_add(1, Ordering::SeqCst);

        let size_bytes = blob.body.len() as u64;
        let stored = StoredObject {
            blob: Blob::new(blob.body.clone(), blob.content_type_or_default()),
            cache_control: blob.cache_control,
        };
        self.objects.write().await.insert(key.to_string(), stored);

        Ok(PutResult {
            etag: None,
            size_bytes,
        })
    }
}
