//! Response shaping.
//!
//! Produces the `{statusCode, headers, body, isBase64Encoded}` triple handed
//! to the transport. File payloads are base64 text; the transport decides
//! whether to decode them before writing to the wire.

use std::collections::BTreeMap;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;

use crate::config::ResizerConfig;
use crate::errors::ResizeError;
use crate::request::ResponseMode;
use crate::resolver::Resolution;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const CACHE_CONTROL: &str = "Cache-Control";
pub const AGE: &str = "Age";

const TEXT_PLAIN: &str = "text/plain";
const APPLICATION_JSON: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapedResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl ShapedResponse {
    fn new(status_code: u16) -> Self {
        Self {
            status_code,
            headers: BTreeMap::new(),
            body: String::new(),
            is_base64_encoded: false,
        }
    }

    fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_string(), value.into());
        self
    }

    fn text(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Body bytes as they should go on the wire.
    pub fn body_bytes(&self) -> Result<Vec<u8>, base64::DecodeError> {
        if self.is_base64_encoded {
            STANDARD.decode(&self.body)
        } else {
            Ok(self.body.clone().into_bytes())
        }
    }
}

/// Point-in-time outcome reported in json mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantDescriptor {
    pub resized: bool,
    pub exists: bool,
}

impl VariantDescriptor {
    pub fn as_json(&self) -> &'static str {
        match (self.resized, self.exists) {
            (true, true) => r#"{"resized":true,"exists":true}"#,
            (true, false) => r#"{"resized":true,"exists":false}"#,
            (false, true) => r#"{"resized":false,"exists":true}"#,
            (false, false) => r#"{"resized":false,"exists":false}"#,
        }
    }
}

pub fn shape_resolution(
    resolution: &Resolution,
    mode: ResponseMode,
    config: &ResizerConfig,
) -> ShapedResponse {
    match (resolution, mode) {
        (Resolution::CacheHit(blob), ResponseMode::File) => file_payload(blob, config),
        (Resolution::Generated(blob), ResponseMode::File) | (Resolution::Passthrough(blob), _) => {
            file_payload(blob, config).header(AGE, "0")
        }
        (Resolution::CacheHit(_), ResponseMode::Json) => descriptor(
            VariantDescriptor {
                resized: false,
                exists: true,
            },
            config,
        ),
        (Resolution::Generated(_), ResponseMode::Json) => descriptor(
            VariantDescriptor {
                resized: true,
                exists: false,
            },
            config,
        ),
    }
}

pub fn shape_error(err: &ResizeError, config: &ResizerConfig) -> ShapedResponse {
    let response = ShapedResponse::new(err.status_code())
        .header(CONTENT_TYPE, TEXT_PLAIN)
        .text(err.to_string());

    if err.is_validation() {
        response
    } else {
        response.header(CACHE_CONTROL, config.private_cache_control.as_str())
    }
}

fn file_payload(blob: &morph_blob::Blob, config: &ResizerConfig) -> ShapedResponse {
    let mut response = ShapedResponse::new(200)
        .header(CONTENT_TYPE, blob.content_type.as_str())
        .header(CACHE_CONTROL, config.cache_control.as_str())
        .text(STANDARD.encode(&blob.body));
    response.is_base64_encoded = true;
    response
}

fn descriptor(descriptor: VariantDescriptor, config: &ResizerConfig) -> ShapedResponse {
    ShapedResponse::new(200)
        .header(CONTENT_TYPE, APPLICATION_JSON)
        .header(CACHE_CONTROL, config.private_cache_control.as_str())
        .text(descriptor.as_json())
}

#[cfg(test)]
mod tests {
    use super::*;
    use morph_blob::Blob;

    fn blob() -> Blob {
        Blob::new(vec![0xFFu8, 0xD8, 0xFF], "image/jpeg")
    }

    #[test]
    fn cache_hit_file() {
        let res = shape_resolution(
            &Resolution::CacheHit(blob()),
            ResponseMode::File,
            &ResizerConfig::default(),
        );
        assert_eq!(res.status_code, 200);
        assert!(res.is_base64_encoded);
        assert_eq!(res.body, "/9j/");
        assert_eq!(res.header_value(CONTENT_TYPE), Some("image/jpeg"));
        assert_eq!(res.header_value(CACHE_CONTROL), Some("public, max-age=86400"));
        assert_eq!(res.header_value(AGE), None);
        assert_eq!(res.body_bytes().unwrap(), vec![0xFF, 0xD8, 0xFF]);
    }

    #[test]
    fn generated_file_carries_age() {
        let res = shape_resolution(
            &Resolution::Generated(blob()),
            ResponseMode::File,
            &ResizerConfig::default(),
        );
        assert_eq!(res.header_value(AGE), Some("0"));
    }

    #[test]
    fn passthrough_is_always_a_file() {
        let bmp = Blob::new(&b"BM\x00\x00"[..], "image/bmp");
        let res = shape_resolution(
            &Resolution::Passthrough(bmp),
            ResponseMode::Json,
            &ResizerConfig::default(),
        );
        assert!(res.is_base64_encoded);
        assert_eq!(res.header_value(CONTENT_TYPE), Some("image/bmp"));
        assert_eq!(res.header_value(AGE), Some("0"));
    }

    #[test]
    fn json_descriptors() {
        let config = ResizerConfig::default();

        let hit = shape_resolution(&Resolution::CacheHit(blob()), ResponseMode::Json, &config);
        assert_eq!(hit.body, r#"{"resized":false,"exists":true}"#);
        assert_eq!(hit.header_value(CONTENT_TYPE), Some("application/json"));
        assert_eq!(hit.header_value(CACHE_CONTROL), Some("private, nocache"));
        assert!(!hit.is_base64_encoded);

        let fresh = shape_resolution(&Resolution::Generated(blob()), ResponseMode::Json, &config);
        assert_eq!(fresh.body, r#"{"resized":true,"exists":false}"#);
    }

    #[test]
    fn descriptor_json_is_well_formed() {
        for resized in [true, false] {
            for exists in [true, false] {
                let descriptor = VariantDescriptor { resized, exists };
                let value: serde_json::Value =
                    serde_json::from_str(descriptor.as_json()).unwrap();
                assert_eq!(value["resized"], resized);
                assert_eq!(value["exists"], exists);
            }
        }
    }

    #[test]
    fn validation_errors_carry_no_cache_control() {
        let res = shape_error(&ResizeError::unknown_fit_action("zoom"), &ResizerConfig::default());
        assert_eq!(res.status_code, 400);
        assert_eq!(res.header_value(CONTENT_TYPE), Some("text/plain"));
        assert_eq!(res.header_value(CACHE_CONTROL), None);
        assert!(res.body.contains("cover, contain, fill, inside, outside"));
    }

    #[test]
    fn other_errors_are_private() {
        let config = ResizerConfig::default();

        let not_found = shape_error(&ResizeError::not_found("photos/cat.jpg"), &config);
        assert_eq!(not_found.status_code, 404);
        assert_eq!(
            not_found.body,
            "Resource not found. Could not find resource: photos/cat.jpg."
        );
        assert_eq!(not_found.header_value(CACHE_CONTROL), Some("private, nocache"));

        let internal = shape_error(
            &ResizeError::internal(std::io::Error::other("disk on fire")),
            &config,
        );
        assert_eq!(internal.status_code, 500);
        assert_eq!(internal.body, "Internal server error");
    }

    #[test]
    fn serialises_as_proxy_response() {
        let res = shape_error(&ResizeError::invalid_request("bad"), &ResizerConfig::default());
        let value = serde_json::to_value(&res).unwrap();
        assert_eq!(value["statusCode"], 400);
        assert_eq!(value["isBase64Encoded"], false);
        assert_eq!(value["headers"]["Content-Type"], "text/plain");
    }
}
