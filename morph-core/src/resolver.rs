//! Cache probe, original fetch, type checks, transform and store.
//!
//! ```text
//! PROBE_DERIVED ── hit ──────────────────────────────▶ CacheHit
//!      │ miss
//! FETCH_ORIGINAL ── absent ──────────────────────────▶ NotFound
//!      │ present
//! VALIDATE_TYPE ── not allowed ──────────────────────▶ UnsupportedMediaType
//!      │          └─ allowed, not transformable ─────▶ Passthrough
//!      │ transformable
//! TRANSFORM ─▶ STORE ────────────────────────────────▶ Generated
//! ```

use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use morph_blob::{Blob, BlobPut, BlobStore};

use crate::errors::{ResizeError, ResizeResult};
use crate::key::ResourceKeys;
use crate::media::MediaType;
use crate::options::ResizeSpec;
use crate::transform::ImageTransformer;

/// How a request was satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Served straight from the store; nothing was recomputed.
    CacheHit(Blob),
    /// Freshly transformed and written to the derived key.
    Generated(Blob),
    /// Original bytes of a type the engine cannot transform; nothing written.
    Passthrough(Blob),
}

impl Resolution {
    pub fn blob(&self) -> &Blob {
        match self {
            Resolution::CacheHit(blob)
            | Resolution::Generated(blob)
            | Resolution::Passthrough(blob) => blob,
        }
    }

    pub fn is_cache_hit(&self) -> bool {
        matches!(self, Resolution::CacheHit(_))
    }
}

pub struct Resolver {
    store: Arc<dyn BlobStore>,
    transformer: Arc<dyn ImageTransformer>,
    cache_control: String,
}

impl Resolver {
    pub fn new(
        store: Arc<dyn BlobStore>,
        transformer: Arc<dyn ImageTransformer>,
        cache_control: impl Into<String>,
    ) -> Self {
        Self {
            store,
            transformer,
            cache_control: cache_control.into(),
        }
    }

    pub async fn resolve(
        &self,
        keys: &ResourceKeys,
        spec: Option<&ResizeSpec>,
    ) -> ResizeResult<Resolution> {
        let probe_key = keys.probe_key();
        if let Some(blob) = self.store.get(probe_key).await? {
            tracing::debug!(key = %probe_key, bytes = blob.len(), "cache hit");
            return Ok(Resolution::CacheHit(blob));
        }
        tracing::debug!(key = %probe_key, "cache miss");

        let original = self
            .store
            .get(&keys.original)
            .await?
            .ok_or_else(|| ResizeError::not_found(&keys.original))?;

        let media_type = MediaType::require(&original.content_type)?;
        if !media_type.is_transformable() {
            tracing::info!(
                key = %keys.original,
                content_type = %original.content_type,
                "serving original without transform"
            );
            return Ok(Resolution::Passthrough(original));
        }

        // no options: the original is its own variant
        let Some(spec) = spec.copied() else {
            return Ok(Resolution::CacheHit(original));
        };

        let content_type = original.content_type.clone();
        let transformer = Arc::clone(&self.transformer);
        let started = Instant::now();
        let output = tokio::task::spawn_blocking(move || {
            transformer.transform(&original.body, media_type, &spec)
        })
        .await??;

        tracing::info!(
            key = %keys.derived,
            spec = %spec,
            bytes = output.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "generated variant"
        );

        let body = Bytes::from(output);
        let put = BlobPut::new(body.clone())
            .with_content_type(content_type.as_str())
            .with_cache_control(self.cache_control.as_str());
        self.store.put(&keys.derived, put).await?;

        Ok(Resolution::Generated(Blob { body, content_type }))
    }
}
