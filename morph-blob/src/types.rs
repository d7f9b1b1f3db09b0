use bytes::Bytes;

/// Content type reported for objects stored without one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// A blob as read back from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub body: Bytes,
    pub content_type: String,
}

impl Blob {
    pub fn new<B: Into<Bytes>, S: Into<String>>(body: B, content_type: S) -> Self {
        Self {
            body: body.into(),
            content_type: content_type.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Request to store a blob
#[derive(Debug, Clone)]
pub struct BlobPut {
    pub body: Bytes,
    pub content_type: Option<String>,
    pub cache_control: Option<String>,
}

impl BlobPut {
    pub fn new<B: Into<Bytes>>(body: B) -> Self {
        Self {
            body: body.into(),
            content_type: None,
            cache_control: None,
        }
    }

    pub fn with_content_type<S: Into<String>>(mut self, content_type: S) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_cache_control<S: Into<String>>(mut self, cache_control: S) -> Self {
        self.cache_control = Some(cache_control.into());
        self
    }

    /// Content type to record, falling back to `application/octet-stream`.
    pub fn content_type_or_default(&self) -> &str {
        self.content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE)
    }
}

impl From<Blob> for BlobPut {
    fn from(blob: Blob) -> Self {
        Self::new(blob.body).with_content_type(blob.content_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_defaults_to_octet_stream() {
        let put = BlobPut::new(vec![1u8, 2, 3]);
        assert_eq!(put.content_type_or_default(), DEFAULT_CONTENT_TYPE);
        assert!(put.cache_control.is_none());
    }

    #[test]
    fn put_from_blob_keeps_content_type() {
        let blob = Blob::new(&b"abc"[..], "image/png");
        let put = BlobPut::from(blob).with_cache_control("public, max-age=60");
        assert_eq!(put.content_type_or_default(), "image/png");
        assert_eq!(put.cache_control.as_deref(), Some("public, max-age=60"));
        assert_eq!(&put.body[..], b"abc");
    }
}
