//! Resize option parsing.
//!
//! The option string has the compact form `<w>x<h>[_<fit>]`, where each axis
//! is a positive integer or `auto`. Parsing performs no I/O and is the only
//! place a malformed request can be rejected before the store is touched.

use std::fmt;
use std::str::FromStr;

use crate::errors::{ResizeError, ResizeResult};

/// Policy for reaching the target box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FitMode {
    /// Keep aspect, cover both dimensions, crop the overflow.
    #[default]
    Cover,
    /// Keep aspect, fit within both dimensions, letterbox the rest.
    Contain,
    /// Ignore aspect and stretch to both dimensions.
    Fill,
    /// Keep aspect, as large as possible while within both dimensions.
    Inside,
    /// Keep aspect, as small as possible while covering both dimensions.
    Outside,
}

impl FitMode {
    pub const ALL: [FitMode; 5] = [
        FitMode::Cover,
        FitMode::Contain,
        FitMode::Fill,
        FitMode::Inside,
        FitMode::Outside,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FitMode::Cover => "cover",
            FitMode::Contain => "contain",
            FitMode::Fill => "fill",
            FitMode::Inside => "inside",
            FitMode::Outside => "outside",
        }
    }

    pub fn names() -> [&'static str; 5] {
        Self::ALL.map(|fit| fit.as_str())
    }
}

impl fmt::Display for FitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitMode {
    type Err = ResizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|fit| fit.as_str() == s)
            .ok_or_else(|| ResizeError::unknown_fit_action(s))
    }
}

/// One axis of the requested box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Unconstrained; the axis follows the aspect ratio.
    Auto,
    Fixed(u32),
}

impl Dimension {
    pub fn fixed(&self) -> Option<u32> {
        match self {
            Dimension::Auto => None,
            Dimension::Fixed(px) => Some(*px),
        }
    }

    fn parse(token: &str, axis: &str) -> ResizeResult<Self> {
        if token == "auto" {
            return Ok(Dimension::Auto);
        }
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ResizeError::invalid_request(format!(
                "{axis} must be a positive integer or \"auto\", got \"{token}\""
            )));
        }
        match token.parse::<u32>() {
            Ok(0) => Err(ResizeError::invalid_request(format!(
                "{axis} must be greater than zero"
            ))),
            Ok(px) => Ok(Dimension::Fixed(px)),
            Err(_) => Err(ResizeError::invalid_request(format!(
                "{axis} \"{token}\" is out of range"
            ))),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Auto => f.write_str("auto"),
            Dimension::Fixed(px) => write!(f, "{px}"),
        }
    }
}

/// Parsed resize request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResizeSpec {
    pub width: Dimension,
    pub height: Dimension,
    pub fit: FitMode,
}

impl ResizeSpec {
    pub fn new(width: Dimension, height: Dimension, fit: FitMode) -> Self {
        Self { width, height, fit }
    }

    /// Both axes `auto`: orientation and re-encode only.
    pub fn is_unbounded(&self) -> bool {
        self.width == Dimension::Auto && self.height == Dimension::Auto
    }
}

impl fmt::Display for ResizeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}_{}", self.width, self.height, self.fit)
    }
}

/// Parse the raw option string.
///
/// Returns `Ok(None)` when no resize was requested. The fit action is checked
/// before the dimensions.
pub fn parse_options(raw: &str) -> ResizeResult<Option<ResizeSpec>> {
    if raw.is_empty() {
        return Ok(None);
    }

    let mut parts = raw.split('_');
    let size = parts.next().unwrap_or_default();
    let fit = match parts.next() {
        None | Some("") => FitMode::default(),
        Some(action) => action.parse::<FitMode>()?,
    };
    // stricter than "ignore anything after the fit": trailing parts would
    // otherwise address distinct cache keys for the same variant
    if parts.next().is_some() {
        return Err(ResizeError::invalid_request(format!(
            "options \"{raw}\" must have the form <width>x<height>[_<fit>]"
        )));
    }

    let (width, height) = size.split_once('x').ok_or_else(|| {
        ResizeError::invalid_request(format!(
            "size \"{size}\" must have the form <width>x<height>"
        ))
    })?;
    if height.contains('x') {
        return Err(ResizeError::invalid_request(format!(
            "size \"{size}\" must have exactly two dimensions"
        )));
    }

    Ok(Some(ResizeSpec {
        width: Dimension::parse(width, "width")?,
        height: Dimension::parse(height, "height")?,
        fit,
    }))
}
