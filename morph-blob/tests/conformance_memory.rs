use std::sync::Arc;

use morph_blob::{Blob, BlobPut, BlobStore, MemoryBlobStore};

/// Test factory functions
fn jpeg_put(bytes: &[u8]) -> BlobPut {
    BlobPut::new(bytes.to_vec())
        .with_content_type("image/jpeg")
        .with_cache_control("public, max-age=86400")
}

/// A1. Stores are usable behind a shared trait object
#[tokio::test]
async fn test_store_behind_trait_object() {
    let memory = Arc::new(MemoryBlobStore::new());
    let store: Arc<dyn BlobStore> = memory.clone();

    store.put("photos/cat.jpg", jpeg_put(b"cat")).await.unwrap();

    let blob = store.get("photos/cat.jpg").await.unwrap().unwrap();
    assert_eq!(blob, Blob::new(&b"cat"[..], "image/jpeg"));
    assert_eq!(memory.get_count(), 1);
    assert_eq!(memory.put_count(), 1);
}

/// A2. Absent keys are a value, not an error
#[tokio::test]
async fn test_absent_key_is_not_an_error() {
    let store = MemoryBlobStore::new();
    let result = store.get("photos/dog.jpg").await;
    assert!(matches!(result, Ok(None)));
}

/// A3. Concurrent writers of one key: last write wins, nothing fails
#[tokio::test]
async fn test_concurrent_writers_last_write_wins() {
    let store = Arc::new(MemoryBlobStore::new());

    let mut handles = Vec::new();
    for _ in 0..8 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store
                .put("photos/200x200/cat.jpg", jpeg_put(b"same-bytes"))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(store.put_count(), 8);
    let blob = store.get("photos/200x200/cat.jpg").await.unwrap().unwrap();
    assert_eq!(&blob.body[..], b"same-bytes");
    assert_eq!(store.keys().await.len(), 1);
}
