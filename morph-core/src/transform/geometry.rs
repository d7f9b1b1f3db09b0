//! Output geometry for each fit mode.
//!
//! Every mode scales by at most 1.0 (`withoutEnlargement`), and every
//! canvas is bounded by the source on each axis, so no output is ever
//! larger than its original in either dimension.

use crate::options::{FitMode, ResizeSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Where the scaled source lands on the output canvas.
///
/// `scaled` larger than `canvas` on an axis means a centred crop on that
/// axis; smaller means centred letterboxing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub scaled: Size,
    pub canvas: Size,
}

impl Layout {
    fn exact(size: Size) -> Self {
        Self {
            scaled: size,
            canvas: size,
        }
    }

    pub fn crops(&self) -> bool {
        self.scaled.width > self.canvas.width || self.scaled.height > self.canvas.height
    }

    pub fn pads(&self) -> bool {
        self.scaled.width < self.canvas.width || self.scaled.height < self.canvas.height
    }

    /// Centring offset between the scaled image and the canvas.
    pub fn offset(&self) -> (u32, u32) {
        (
            self.scaled.width.abs_diff(self.canvas.width) / 2,
            self.scaled.height.abs_diff(self.canvas.height) / 2,
        )
    }
}

fn apply_scale(source: Size, scale: f64) -> Size {
    let scale = scale.min(1.0);
    let width = (source.width as f64 * scale).round() as u32;
    let height = (source.height as f64 * scale).round() as u32;

    // at least 1px
    Size::new(width.max(1), height.max(1))
}

/// Compute the layout of `source` for `spec`.
pub fn layout(source: Size, spec: &ResizeSpec) -> Layout {
    let (sw, sh) = (source.width.max(1) as f64, source.height.max(1) as f64);

    match (spec.width.fixed(), spec.height.fixed()) {
        (None, None) => Layout::exact(source),
        (Some(w), None) => Layout::exact(apply_scale(source, w as f64 / sw)),
        (None, Some(h)) => Layout::exact(apply_scale(source, h as f64 / sh)),
        (Some(w), Some(h)) => {
            let scale_w = w as f64 / sw;
            let scale_h = h as f64 / sh;

            match spec.fit {
                FitMode::Cover => {
                    let scaled = apply_scale(source, scale_w.max(scale_h));
                    Layout {
                        scaled,
                        canvas: Size::new(w.min(scaled.width), h.min(scaled.height)),
                    }
                }
                FitMode::Contain => Layout {
                    scaled: apply_scale(source, scale_w.min(scale_h)),
                    canvas: Size::new(w.min(source.width), h.min(source.height)),
                },
                FitMode::Fill => {
                    Layout::exact(Size::new(w.min(source.width), h.min(source.height)))
                }
                FitMode::Inside => Layout::exact(apply_scale(source, scale_w.min(scale_h))),
                FitMode::Outside => Layout::exact(apply_scale(source, scale_w.max(scale_h))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::parse_options;

    fn layout_for(source: (u32, u32), raw: &str) -> Layout {
        let spec = parse_options(raw).unwrap().unwrap();
        layout(Size::new(source.0, source.1), &spec)
    }

    #[test]
    fn cover_scales_then_crops() {
        let l = layout_for((800, 600), "200x200_cover");
        assert_eq!(l.scaled, Size::new(267, 200));
        assert_eq!(l.canvas, Size::new(200, 200));
        assert!(l.crops());
        assert_eq!(l.offset(), (33, 0));
    }

    #[test]
    fn width_only_keeps_aspect() {
        let l = layout_for((800, 600), "400xauto");
        assert_eq!(l.canvas, Size::new(400, 300));
        assert!(!l.crops() && !l.pads());
    }

    #[test]
    fn height_only_keeps_aspect() {
        let l = layout_for((1920, 1080), "autox600");
        assert_eq!(l.canvas, Size::new(1067, 600));
    }

    #[test]
    fn unbounded_is_identity() {
        let l = layout_for((640, 480), "autoxauto");
        assert_eq!(l.canvas, Size::new(640, 480));
    }

    #[test]
    fn contain_letterboxes() {
        let l = layout_for((1000, 500), "400x400_contain");
        assert_eq!(l.scaled, Size::new(400, 200));
        assert_eq!(l.canvas, Size::new(400, 400));
        assert!(l.pads());
        assert_eq!(l.offset(), (0, 100));
    }

    #[test]
    fn fill_ignores_aspect() {
        let l = layout_for((800, 600), "100x500_fill");
        assert_eq!(l.canvas, Size::new(100, 500));
    }

    #[test]
    fn inside_and_outside() {
        let inside = layout_for((1920, 1080), "800x600_inside");
        assert_eq!(inside.canvas, Size::new(800, 450));

        let outside = layout_for((1920, 1080), "800x600_outside");
        assert_eq!(outside.canvas, Size::new(1067, 600));
    }

    #[test]
    fn never_enlarges_in_any_mode() {
        for fit in FitMode::names() {
            for raw in [
                format!("2000x2000_{fit}"),
                format!("2000x100_{fit}"),
                format!("100x2000_{fit}"),
                format!("2000xauto_{fit}"),
                format!("autox2000_{fit}"),
            ] {
                let l = layout_for((300, 200), &raw);
                assert!(l.canvas.width <= 300, "{raw}: {l:?}");
                assert!(l.canvas.height <= 200, "{raw}: {l:?}");
                assert!(l.scaled.width <= 300 && l.scaled.height <= 200, "{raw}: {l:?}");
            }
        }
    }

    #[test]
    fn minimum_one_pixel() {
        let l = layout_for((10, 1000), "1xauto");
        assert_eq!(l.canvas, Size::new(1, 100));

        let l = layout_for((1000, 10), "1xauto");
        assert_eq!(l.canvas, Size::new(1, 1));
    }
}
