use std::env;
use std::str::FromStr;

use anyhow::Context;
use morph_core::ResizerConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Listener and resizer settings read from `MORPH_*` variables.
///
/// Store settings are read separately by `morph_blob::S3Config::from_env`.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub resizer: ResizerConfig,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            resizer: ResizerConfig::default(),
        }
    }
}

impl ServerSettings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let mut resizer = defaults.resizer;

        if let Some(quality) = parsed::<u8, _>(&lookup, "MORPH_JPEG_QUALITY")? {
            resizer = resizer.with_jpeg_quality(quality);
        }
        if let Some(pixels) = parsed::<u64, _>(&lookup, "MORPH_MAX_SOURCE_PIXELS")? {
            resizer = resizer.with_max_source_pixels(pixels);
        }

        Ok(Self {
            host: lookup("MORPH_HOST")
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(defaults.host),
            port: parsed(&lookup, "MORPH_PORT")?.unwrap_or(defaults.port),
            resizer,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parsed<T, F>(lookup: &F, key: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("{key}={raw:?} is not valid")),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_apply_when_unset() {
        let settings = ServerSettings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings.addr(), "0.0.0.0:3000");
        assert_eq!(settings.resizer.jpeg_quality, 80);
    }

    #[test]
    fn reads_overrides() {
        let settings = ServerSettings::from_lookup(lookup(&[
            ("MORPH_HOST", "127.0.0.1"),
            ("MORPH_PORT", "8080"),
            ("MORPH_JPEG_QUALITY", "65"),
            ("MORPH_MAX_SOURCE_PIXELS", "4000000"),
        ]))
        .unwrap();

        assert_eq!(settings.addr(), "127.0.0.1:8080");
        assert_eq!(settings.resizer.jpeg_quality, 65);
        assert_eq!(settings.resizer.max_source_pixels, 4_000_000);
    }

    #[test]
    fn rejects_garbage_port() {
        let err = ServerSettings::from_lookup(lookup(&[("MORPH_PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("MORPH_PORT"));
    }
}
