//! SVG sizing.
//!
//! Vector sources are never rasterised. Only the root element is rewritten:
//! `width`/`height` become the computed box, a `viewBox` is added when the
//! document lacks one, and `preserveAspectRatio` encodes the fit mode. The
//! rest of the document is copied event by event.

use std::io::Cursor;

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

use super::geometry::{self, Layout, Size};
use crate::errors::TransformError;
use crate::options::{FitMode, ResizeSpec};

pub fn transform_svg(input: &[u8], spec: &ResizeSpec) -> Result<Vec<u8>, TransformError> {
    let mut reader = Reader::from_reader(input);
    let mut writer = Writer::new(Cursor::new(Vec::with_capacity(input.len() + 96)));
    let mut seen_root = false;

    loop {
        let event = reader.read_event().map_err(|e| {
            TransformError::Svg(format!("parse error at position {}: {e}", reader.error_position()))
        })?;

        let event = match event {
            Event::Eof => break,
            Event::Start(elem) if !seen_root && is_svg(&elem) => {
                seen_root = true;
                match resize_root(&elem, spec)? {
                    Some(root) => Event::Start(root),
                    None => return Ok(input.to_vec()),
                }
            }
            Event::Empty(elem) if !seen_root && is_svg(&elem) => {
                seen_root = true;
                match resize_root(&elem, spec)? {
                    Some(root) => Event::Empty(root),
                    None => return Ok(input.to_vec()),
                }
            }
            Event::Start(_) | Event::Empty(_) if !seen_root => {
                return Err(TransformError::Svg("root element is not <svg>".to_string()));
            }
            other => other,
        };

        writer
            .write_event(event)
            .map_err(|e| TransformError::Svg(e.to_string()))?;
    }

    if !seen_root {
        return Err(TransformError::Svg("no <svg> element found".to_string()));
    }
    Ok(writer.into_inner().into_inner())
}

fn is_svg(elem: &BytesStart<'_>) -> bool {
    elem.local_name().as_ref() == b"svg"
}

/// Rebuild the root element for `spec`. `None` when the document has no
/// resolvable intrinsic size.
fn resize_root(elem: &BytesStart<'_>, spec: &ResizeSpec) -> Result<Option<BytesStart<'static>>, TransformError> {
    let name = std::str::from_utf8(elem.name().as_ref())
        .map_err(|e| TransformError::Svg(e.to_string()))?
        .to_string();

    let mut width = None;
    let mut height = None;
    let mut view_box = None;
    for attr in elem.attributes() {
        let attr = attr.map_err(|e| TransformError::Svg(e.to_string()))?;
        let value = String::from_utf8_lossy(&attr.value);
        match attr.key.as_ref() {
            b"width" => width = parse_length(&value),
            b"height" => height = parse_length(&value),
            b"viewBox" => view_box = parse_view_box(&value),
            _ => {}
        }
    }

    let Some((intrinsic_w, intrinsic_h)) = intrinsic_size(width, height, view_box) else {
        return Ok(None);
    };

    let source = Size::new(
        (intrinsic_w.round() as u32).max(1),
        (intrinsic_h.round() as u32).max(1),
    );
    let layout = geometry::layout(source, spec);

    let mut root = BytesStart::new(name);
    for attr in elem.attributes() {
        let attr = attr.map_err(|e| TransformError::Svg(e.to_string()))?;
        if !matches!(attr.key.as_ref(), b"width" | b"height" | b"preserveAspectRatio") {
            root.push_attribute(attr);
        }
    }
    if view_box.is_none() {
        root.push_attribute(("viewBox", format!("0 0 {intrinsic_w} {intrinsic_h}").as_str()));
    }
    root.push_attribute(("width", layout.canvas.width.to_string().as_str()));
    root.push_attribute(("height", layout.canvas.height.to_string().as_str()));
    root.push_attribute(("preserveAspectRatio", aspect_policy(spec.fit, &layout)));

    Ok(Some(root.into_owned()))
}

fn aspect_policy(fit: FitMode, layout: &Layout) -> &'static str {
    if layout.crops() {
        "xMidYMid slice"
    } else if fit == FitMode::Fill {
        "none"
    } else {
        "xMidYMid meet"
    }
}

fn intrinsic_size(
    width: Option<f64>,
    height: Option<f64>,
    view_box: Option<(f64, f64)>,
) -> Option<(f64, f64)> {
    match (width, height, view_box) {
        (Some(w), Some(h), _) => Some((w, h)),
        (Some(w), None, Some((vw, vh))) => Some((w, w * vh / vw)),
        (None, Some(h), Some((vw, vh))) => Some((h * vw / vh, h)),
        (_, _, Some(size)) => Some(size),
        _ => None,
    }
}

/// Unitless or `px` lengths only; relative units carry no intrinsic size.
fn parse_length(value: &str) -> Option<f64> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    number.parse::<f64>().ok().filter(|n| n.is_finite() && *n > 0.0)
}

fn parse_view_box(value: &str) -> Option<(f64, f64)> {
    let parts: Vec<f64> = value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .map(|p| p.parse::<f64>())
        .collect::<Result<_, _>>()
        .ok()?;

    match parts.as_slice() {
        [_, _, w, h] if w.is_finite() && h.is_finite() && *w > 0.0 && *h > 0.0 => Some((*w, *h)),
        _ => None,
    }
}
