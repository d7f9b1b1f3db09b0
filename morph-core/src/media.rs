//! Accepted media types and the subset the transform engine can handle.

use image::ImageFormat;

use crate::errors::{ResizeError, ResizeResult};

/// Content types accepted as originals, in the order they are reported.
pub const ALLOWED_MEDIA_TYPES: &[&str] = &[
    "image/jpeg",
    "image/gif",
    "image/png",
    "image/svg+xml",
    "image/tiff",
    "image/bmp",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Jpeg,
    Gif,
    Png,
    Svg,
    Tiff,
    Bmp,
}

impl MediaType {
    /// Match a stored content type, ignoring parameters and case.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "image/jpeg" => Some(Self::Jpeg),
            "image/gif" => Some(Self::Gif),
            "image/png" => Some(Self::Png),
            "image/svg+xml" => Some(Self::Svg),
            "image/tiff" => Some(Self::Tiff),
            "image/bmp" => Some(Self::Bmp),
            _ => None,
        }
    }

    /// Like [`MediaType::from_content_type`], but rejects with
    /// `UnsupportedMediaType`.
    pub fn require(content_type: &str) -> ResizeResult<Self> {
        Self::from_content_type(content_type)
            .ok_or_else(|| ResizeError::unsupported_media_type(content_type))
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Png => "image/png",
            Self::Svg => "image/svg+xml",
            Self::Tiff => "image/tiff",
            Self::Bmp => "image/bmp",
        }
    }

    /// BMP is accepted but served untouched.
    pub fn is_transformable(&self) -> bool {
        !matches!(self, Self::Bmp)
    }

    /// Raster codec used for decode and re-encode. `None` for vector input
    /// and for passthrough types, which are never decoded.
    pub fn raster_format(&self) -> Option<ImageFormat> {
        match self {
            Self::Jpeg => Some(ImageFormat::Jpeg),
            Self::Gif => Some(ImageFormat::Gif),
            Self::Png => Some(ImageFormat::Png),
            Self::Tiff => Some(ImageFormat::Tiff),
            Self::Svg | Self::Bmp => None,
        }
    }
}
