use std::sync::Arc;

use morph_blob::BlobStore;

use crate::config::ResizerConfig;
use crate::errors::{ResizeError, ResizeResult};
use crate::key::derive_keys;
use crate::options::parse_options;
use crate::request::ResizeRequest;
use crate::resolver::{Resolution, Resolver};
use crate::response::{shape_error, shape_resolution, ShapedResponse};
use crate::transform::{ImageTransformer, MorphTransformer};

/// One request in, one shaped response out.
///
/// Validation (keys and options) always completes before the store is
/// touched, so malformed requests are rejected without any I/O.
pub struct Resizer {
    resolver: Resolver,
    config: ResizerConfig,
}

impl Resizer {
    pub fn new(
        store: Arc<dyn BlobStore>,
        transformer: Arc<dyn ImageTransformer>,
        config: ResizerConfig,
    ) -> Self {
        let resolver = Resolver::new(store, transformer, config.cache_control.clone());
        Self { resolver, config }
    }

    /// Resizer using the built-in transform engine.
    pub fn with_store(store: Arc<dyn BlobStore>, config: ResizerConfig) -> Self {
        let transformer = Arc::new(MorphTransformer::new(&config));
        Self::new(store, transformer, config)
    }

    pub async fn handle(&self, request: ResizeRequest) -> ShapedResponse {
        match self.resolve(&request).await {
            Ok(resolution) => {
                tracing::debug!(
                    path = %request.path,
                    options = %request.options,
                    cache_hit = resolution.is_cache_hit(),
                    "request resolved"
                );
                shape_resolution(&resolution, request.response, &self.config)
            }
            Err(err) => {
                log_failure(&request, &err);
                shape_error(&err, &self.config)
            }
        }
    }

    /// Resolve without shaping. Useful to callers that want the blob itself.
    pub async fn resolve(&self, request: &ResizeRequest) -> ResizeResult<Resolution> {
        let keys = derive_keys(&request.path, &request.options)?;
        let spec = parse_options(&request.options)?;
        self.resolver.resolve(&keys, spec.as_ref()).await
    }
}

fn log_failure(request: &ResizeRequest, err: &ResizeError) {
    match err {
        ResizeError::Internal { source } => tracing::error!(
            path = %request.path,
            options = %request.options,
            error = %source,
            "request failed"
        ),
        _ => tracing::warn!(
            path = %request.path,
            options = %request.options,
            status = err.status_code(),
            "request rejected: {err}"
        ),
    }
}
