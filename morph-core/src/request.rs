use std::collections::HashMap;

/// Payload shape selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseMode {
    /// Raw image bytes.
    File,
    /// `{"resized": bool, "exists": bool}` descriptor.
    #[default]
    Json,
}

impl ResponseMode {
    /// `file` selects file mode; anything else, or nothing, selects json.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("file") => ResponseMode::File,
            _ => ResponseMode::Json,
        }
    }
}

/// A transport-independent resize request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResizeRequest {
    /// Original key, without a leading `/`.
    pub path: String,
    /// Raw option string; empty when absent.
    pub options: String,
    pub response: ResponseMode,
}

impl ResizeRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_options(mut self, options: impl Into<String>) -> Self {
        self.options = options.into();
        self
    }

    pub fn with_response(mut self, response: ResponseMode) -> Self {
        self.response = response;
        self
    }

    /// Build from a request path and its query parameters (`options`,
    /// `response`).
    pub fn from_parts(path: &str, query: &HashMap<String, String>) -> Self {
        Self {
            path: path.strip_prefix('/').unwrap_or(path).to_string(),
            options: query.get("options").cloned().unwrap_or_default(),
            response: ResponseMode::from_query(query.get("response").map(String::as_str)),
        }
    }
}
