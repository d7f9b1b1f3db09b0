//! # Errors
//!
//! Every request ends either in a resolved blob or in exactly one
//! [`ResizeError`]. The variants map one-to-one onto response statuses, and
//! their `Display` text is what the caller sees (except `Internal`, whose
//! cause is only logged).

use thiserror::Error;

use crate::media::ALLOWED_MEDIA_TYPES;
use crate::options::FitMode;

pub type ResizeResult<T> = std::result::Result<T, ResizeError>;

#[derive(Debug, Error)]
pub enum ResizeError {
    /// Malformed path or resize options.
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error(
        "Unknown Fit action parameter \"{action}\"\nAvailable Fit actions: {}.",
        FitMode::names().join(", ")
    )]
    UnknownFitAction { action: String },

    /// The original object does not exist.
    #[error("Resource not found. Could not find resource: {key}.")]
    NotFound { key: String },

    #[error(
        "Unsupported MIME type: {content_type}. Supported types: {}",
        ALLOWED_MEDIA_TYPES.join(", ")
    )]
    UnsupportedMediaType { content_type: String },

    /// Anything unanticipated during fetch, transform or store.
    #[error("Internal server error")]
    Internal {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ResizeError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    pub fn unknown_fit_action(action: impl Into<String>) -> Self {
        Self::UnknownFitAction {
            action: action.into(),
        }
    }

    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    pub fn unsupported_media_type(content_type: impl Into<String>) -> Self {
        Self::UnsupportedMediaType {
            content_type: content_type.into(),
        }
    }

    pub fn internal<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Internal {
            source: Box::new(error),
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ResizeError::InvalidRequest { .. } => 400,
            ResizeError::UnknownFitAction { .. } => 400,
            ResizeError::NotFound { .. } => 404,
            ResizeError::UnsupportedMediaType { .. } => 400,
            ResizeError::Internal { .. } => 500,
        }
    }

    /// Errors raised before any store access.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ResizeError::InvalidRequest { .. } | ResizeError::UnknownFitAction { .. }
        )
    }
}

impl From<morph_blob::BlobError> for ResizeError {
    fn from(err: morph_blob::BlobError) -> Self {
        Self::internal(err)
    }
}

impl From<TransformError> for ResizeError {
    fn from(err: TransformError) -> Self {
        Self::internal(err)
    }
}

impl From<tokio::task::JoinError> for ResizeError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::internal(err)
    }
}

/// Failures inside the transform engine.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("media type {0} cannot be transformed")]
    Unsupported(String),

    #[error("decode failed: {0}")]
    Decode(String),

    #[error("encode failed: {0}")]
    Encode(String),

    #[error("image resolution exceeds maximum ({width}x{height})")]
    ResolutionTooLarge { width: u32, height: u32 },

    #[error("svg rewrite failed: {0}")]
    Svg(String),

    #[error("processing failed: {0}")]
    Processing(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_fit_message_lists_every_mode() {
        let msg = ResizeError::unknown_fit_action("zoom").to_string();
        assert_eq!(
            msg,
            "Unknown Fit action parameter \"zoom\"\nAvailable Fit actions: cover, contain, fill, inside, outside."
        );
    }

    #[test]
    fn unsupported_message_lists_allowed_types() {
        let msg = ResizeError::unsupported_media_type("text/plain").to_string();
        assert_eq!(
            msg,
            "Unsupported MIME type: text/plain. Supported types: image/jpeg, image/gif, image/png, image/svg+xml, image/tiff, image/bmp"
        );
    }

    #[test]
    fn internal_hides_its_cause() {
        let err = ResizeError::from(TransformError::Decode("corrupt header".into()));
        assert_eq!(err.to_string(), "Internal server error");
        assert_eq!(err.status_code(), 500);

        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("corrupt header"));
    }

    #[test]
    fn status_codes() {
        assert_eq!(ResizeError::invalid_request("x").status_code(), 400);
        assert_eq!(ResizeError::unknown_fit_action("x").status_code(), 400);
        assert_eq!(ResizeError::not_found("x").status_code(), 404);
        assert_eq!(ResizeError::unsupported_media_type("x").status_code(), 400);
    }
}
