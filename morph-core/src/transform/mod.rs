//! Transform engine.
//!
//! The resolver only sees the [`ImageTransformer`] trait; [`MorphTransformer`]
//! is the stock implementation (raster codecs via `image`, vector sizing via
//! `quick-xml`). Output is always in the input's format.

pub mod geometry;
pub mod orientation;
mod raster;
mod svg;

pub use geometry::{layout, Layout, Size};
pub use orientation::{read_orientation, Orientation};
pub use raster::transform_raster;
pub use svg::transform_svg;

use crate::config::ResizerConfig;
use crate::errors::TransformError;
use crate::media::MediaType;
use crate::options::ResizeSpec;

/// Resize capability consumed by the resolver.
///
/// Implementations are synchronous and CPU-bound; the resolver runs them on
/// the blocking pool.
pub trait ImageTransformer: Send + Sync {
    fn transform(
        &self,
        input: &[u8],
        media_type: MediaType,
        spec: &ResizeSpec,
    ) -> Result<Vec<u8>, TransformError>;
}

/// Default engine: never enlarges, applies EXIF orientation, keeps format.
#[derive(Debug, Clone)]
pub struct MorphTransformer {
    jpeg_quality: u8,
    max_source_pixels: u64,
}

impl MorphTransformer {
    pub fn new(config: &ResizerConfig) -> Self {
        Self {
            jpeg_quality: config.jpeg_quality,
            max_source_pixels: config.max_source_pixels,
        }
    }
}

impl Default for MorphTransformer {
    fn default() -> Self {
        Self::new(&ResizerConfig::default())
    }
}

impl ImageTransformer for MorphTransformer {
    fn transform(
        &self,
        input: &[u8],
        media_type: MediaType,
        spec: &ResizeSpec,
    ) -> Result<Vec<u8>, TransformError> {
        if !media_type.is_transformable() {
            return Err(TransformError::Unsupported(media_type.content_type().to_string()));
        }

        match media_type.raster_format() {
            Some(format) => {
                transform_raster(input, format, spec, self.jpeg_quality, self.max_source_pixels)
            }
            None => transform_svg(input, spec),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::parse_options;

    #[test]
    fn bmp_is_refused() {
        let spec = parse_options("10x10").unwrap().unwrap();
        let err = MorphTransformer::default()
            .transform(b"BM", MediaType::Bmp, &spec)
            .unwrap_err();
        assert!(matches!(err, TransformError::Unsupported(_)));
    }

    #[test]
    fn svg_goes_through_the_vector_path() {
        let spec = parse_options("10x10_fill").unwrap().unwrap();
        let out = MorphTransformer::default()
            .transform(br#"<svg width="20" height="20"/>"#, MediaType::Svg, &spec)
            .unwrap();
        assert!(String::from_utf8(out).unwrap().contains(r#"width="10""#));
    }
}
