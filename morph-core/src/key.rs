//! Key derivation.
//!
//! Originals live at `{subfolder}/{filename}`; variants at
//! `{subfolder}/{raw options}/{filename}`. Derivation is pure, so identical
//! `(path, options)` pairs always address the same cache slot.

use crate::errors::{ResizeError, ResizeResult};

/// Original and derived store keys for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceKeys {
    pub original: String,
    pub derived: String,
    pub subfolder: String,
    pub filename: String,
    resized: bool,
}

impl ResourceKeys {
    /// Whether a resize was requested (non-empty option string).
    pub fn is_resized(&self) -> bool {
        self.resized
    }

    /// Key checked before any generation work.
    pub fn probe_key(&self) -> &str {
        if self.resized {
            &self.derived
        } else {
            &self.original
        }
    }
}

/// Split `path` into subfolder and filename and compute the derived key for
/// `raw_options`.
pub fn derive_keys(path: &str, raw_options: &str) -> ResizeResult<ResourceKeys> {
    if path.is_empty() {
        return Err(ResizeError::invalid_request("missing resource path"));
    }

    let (subfolder, filename) = match path.rsplit_once('/') {
        Some((subfolder, filename)) => (subfolder, filename),
        None => ("", path),
    };
    if filename.is_empty() {
        return Err(ResizeError::invalid_request(format!(
            "resource path \"{path}\" does not name a file"
        )));
    }

    let resized = !raw_options.is_empty();
    let derived = if resized {
        let folder = [subfolder, raw_options]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("/");
        format!("{folder}/{filename}")
    } else {
        path.to_string()
    };

    Ok(ResourceKeys {
        original: path.to_string(),
        derived,
        subfolder: subfolder.to_string(),
        filename: filename.to_string(),
        resized,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_path_with_options() {
        let keys = derive_keys("photos/2024/cat.jpg", "200x200_cover").unwrap();
        assert_eq!(keys.original, "photos/2024/cat.jpg");
        assert_eq!(keys.subfolder, "photos/2024");
        assert_eq!(keys.filename, "cat.jpg");
        assert_eq!(keys.derived, "photos/2024/200x200_cover/cat.jpg");
        assert_eq!(keys.probe_key(), "photos/2024/200x200_cover/cat.jpg");
        assert!(keys.is_resized());
    }

    #[test]
    fn root_level_file_skips_empty_subfolder() {
        let keys = derive_keys("cat.jpg", "400xauto").unwrap();
        assert_eq!(keys.subfolder, "");
        assert_eq!(keys.derived, "400xauto/cat.jpg");
    }

    #[test]
    fn no_options_derives_the_original() {
        let keys = derive_keys("photos/cat.jpg", "").unwrap();
        assert_eq!(keys.derived, "photos/cat.jpg");
        assert_eq!(keys.probe_key(), "photos/cat.jpg");
        assert!(!keys.is_resized());
    }

    #[test]
    fn derivation_is_deterministic() {
        let inputs = [
            ("photos/cat.jpg", "200x200_cover"),
            ("a/b/c/d.png", "autox100_inside"),
            ("x.gif", ""),
        ];
        for (path, options) in inputs {
            assert_eq!(
                derive_keys(path, options).unwrap(),
                derive_keys(path, options).unwrap()
            );
        }
    }

    #[test]
    fn empty_path_is_invalid() {
        let err = derive_keys("", "200x200").unwrap_err();
        assert!(matches!(err, ResizeError::InvalidRequest { .. }));
    }

    #[test]
    fn trailing_slash_is_invalid() {
        let err = derive_keys("photos/", "").unwrap_err();
        assert!(matches!(err, ResizeError::InvalidRequest { .. }));
    }
}
