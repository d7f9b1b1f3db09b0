//! # morph-core
//!
//! The request pipeline of morph, an on-demand image resizer that fronts an
//! object store. Given an original's key, an option string like
//! `200x200_cover` and a response mode, a [`Resizer`]:
//!
//! 1. derives the original and variant keys ([`derive_keys`]),
//! 2. validates the options ([`parse_options`]) before any I/O,
//! 3. serves an existing variant, or fetches the original, transforms it
//!    and writes the variant back ([`Resolver`]),
//! 4. shapes the outcome into a [`ShapedResponse`].
//!
//! The store is the only cache. Writes are unconditional overwrites, and two
//! concurrent misses for the same variant both generate and both write.
//!
//! ```rust
//! use std::sync::Arc;
//! use morph_core::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let store = Arc::new(MemoryBlobStore::new());
//! let resizer = Resizer::with_store(store, ResizerConfig::default());
//!
//! let response = resizer
//!     .handle(ResizeRequest::new("photos/cat.jpg").with_options("100x100_zoom"))
//!     .await;
//! assert_eq!(response.status_code, 400);
//! # }
//! ```

pub mod config;
pub mod errors;
pub mod key;
pub mod media;
pub mod options;
pub mod request;
pub mod resizer;
pub mod resolver;
pub mod response;
pub mod transform;

pub use config::{ResizerConfig, DEFAULT_CACHE_CONTROL, PRIVATE_CACHE_CONTROL};
pub use errors::{ResizeError, ResizeResult, TransformError};
pub use key::{derive_keys, ResourceKeys};
pub use media::{MediaType, ALLOWED_MEDIA_TYPES};
pub use options::{parse_options, Dimension, FitMode, ResizeSpec};
pub use request::{ResizeRequest, ResponseMode};
pub use resizer::Resizer;
pub use resolver::{Resolution, Resolver};
pub use response::{shape_error, shape_resolution, ShapedResponse, VariantDescriptor};
pub use transform::{ImageTransformer, MorphTransformer};

pub mod prelude {
    pub use crate::{
        ImageTransformer, MorphTransformer, ResizeError, ResizeRequest, ResizeSpec, Resizer,
        ResizerConfig, ResponseMode, ShapedResponse,
    };
    pub use morph_blob::{Blob, BlobPut, BlobStore, MemoryBlobStore};
}
