/// Shared-cacheable directive for image payloads and stored variants (24h).
pub const DEFAULT_CACHE_CONTROL: &str = "public, max-age=86400";

/// Directive for descriptors and error bodies.
pub const PRIVATE_CACHE_CONTROL: &str = "private, nocache";

/// Default JPEG re-encode quality (1-100)
pub const DEFAULT_JPEG_QUALITY: u8 = 80;

/// Decoded sources above this many pixels are refused.
pub const DEFAULT_MAX_SOURCE_PIXELS: u64 = 100_000_000;

/// Configuration for the resizer pipeline
#[derive(Debug, Clone)]
pub struct ResizerConfig {
    /// Cache-Control for file payloads and written variants
    pub cache_control: String,

    /// Cache-Control for json descriptors and non-validation errors
    pub private_cache_control: String,

    pub jpeg_quality: u8,

    pub max_source_pixels: u64,
}

impl Default for ResizerConfig {
    fn default() -> Self {
        Self {
            cache_control: DEFAULT_CACHE_CONTROL.to_string(),
            private_cache_control: PRIVATE_CACHE_CONTROL.to_string(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            max_source_pixels: DEFAULT_MAX_SOURCE_PIXELS,
        }
    }
}

impl ResizerConfig {
    /// Create a new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache_control<S: Into<String>>(mut self, value: S) -> Self {
        self.cache_control = value.into();
        self
    }

    pub fn with_private_cache_control<S: Into<String>>(mut self, value: S) -> Self {
        self.private_cache_control = value.into();
        self
    }

    /// Set JPEG quality, clamped to 1-100
    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }

    pub fn with_max_source_pixels(mut self, pixels: u64) -> Self {
        self.max_source_pixels = pixels;
        self
    }
}
