//! # morph-blob: object-store capability for morph
//!
//! `morph-blob` is the storage seam of the resizer. The request pipeline only
//! ever needs two primitives, so that is all a backend has to provide:
//!
//! - `get(key)`: fetch a blob and its content type, or learn that it is absent
//! - `put(key, blob)`: write (or overwrite) a blob with content type and
//!   cache-control metadata
//!
//! ```rust
//! use morph_blob::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> BlobResult<()> {
//! let store = MemoryBlobStore::new();
//!
//! let put = BlobPut::new(&b"GIF89a"[..])
//!     .with_content_type("image/gif")
//!     .with_cache_control("public, max-age=86400");
//! store.put("icons/dot.gif", put).await?;
//!
//! let blob = store.get("icons/dot.gif").await?.expect("stored above");
//! assert_eq!(blob.content_type, "image/gif");
//! assert!(store.get("icons/missing.gif").await?.is_none());
//! # Ok(())
//! # }
//! ```
//!
//! The store is also the only cache: there is no in-process layer in front
//! of it, and nothing here locks or compares-and-swaps.

mod config;
mod error;
mod memory_store;
mod s3_store;
pub mod store;
mod types;

pub use config::S3Config;
pub use error::{BlobError, BlobResult};
pub use memory_store::MemoryBlobStore;
pub use s3_store::S3CompatibleStore;
pub use store::{BlobStore, PutResult};
pub use types::{Blob, BlobPut, DEFAULT_CONTENT_TYPE};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Blob, BlobError, BlobPut, BlobResult, BlobStore, MemoryBlobStore};
}
