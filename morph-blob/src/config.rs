use std::env;

use crate::{BlobError, BlobResult};

/// Connection settings for an S3-compatible bucket.
///
/// `region`, `endpoint_url` and the static credentials are optional: when
/// absent the AWS default provider chain decides.
#[derive(Debug, Clone, Default)]
pub struct S3Config {
    pub bucket: String,
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    /// Address buckets as `endpoint/bucket/key` (needed by most non-AWS stores)
    pub force_path_style: bool,
}

impl S3Config {
    /// Read settings from the environment.
    ///
    /// Required: `BUCKET`.
    /// Optional: `AWS_REGION`, `S3_ENDPOINT_URL`, `S3_ACCESS_KEY_ID`,
    /// `S3_SECRET_ACCESS_KEY`, `S3_FORCE_PATH_STYLE`.
    pub fn from_env() -> BlobResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> BlobResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bucket = lookup("BUCKET")
            .filter(|b| !b.trim().is_empty())
            .ok_or_else(|| BlobError::invalid("BUCKET environment variable required"))?;

        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            bucket,
            region: non_empty("AWS_REGION"),
            endpoint_url: non_empty("S3_ENDPOINT_URL"),
            access_key_id: non_empty("S3_ACCESS_KEY_ID"),
            secret_access_key: non_empty("S3_SECRET_ACCESS_KEY"),
            force_path_style: non_empty("S3_FORCE_PATH_STYLE")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn bucket_is_required() {
        let err = S3Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, BlobError::Invalid { .. }));

        let err = S3Config::from_lookup(lookup_from(&[("BUCKET", "  ")])).unwrap_err();
        assert!(matches!(err, BlobError::Invalid { .. }));
    }

    #[test]
    fn optional_settings_are_read() {
        let config = S3Config::from_lookup(lookup_from(&[
            ("BUCKET", "images"),
            ("AWS_REGION", "eu-west-1"),
            ("S3_ENDPOINT_URL", "http://localhost:9000"),
            ("S3_ACCESS_KEY_ID", "key"),
            ("S3_SECRET_ACCESS_KEY", "secret"),
            ("S3_FORCE_PATH_STYLE", "true"),
        ]))
        .unwrap();

        assert_eq!(config.bucket, "images");
        assert_eq!(config.region.as_deref(), Some("eu-west-1"));
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(config.access_key_id.as_deref(), Some("key"));
        assert!(config.force_path_style);
    }

    #[test]
    fn path_style_defaults_off() {
        let config = S3Config::from_lookup(lookup_from(&[("BUCKET", "images")])).unwrap();
        assert!(!config.force_path_style);
        assert!(config.region.is_none());
    }
}
