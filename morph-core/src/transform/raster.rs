use std::io::Cursor;

use fast_image_resize::{images::Image, FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, ImageReader, Rgba, RgbaImage, RgbImage};

use super::geometry::{self, Layout, Size};
use super::orientation::read_orientation;
use crate::errors::TransformError;
use crate::options::ResizeSpec;

/// Letterbox colour for `contain` (opaque black).
const LETTERBOX: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Resize a raster image and re-encode it in its own format.
pub fn transform_raster(
    input: &[u8],
    format: ImageFormat,
    spec: &ResizeSpec,
    jpeg_quality: u8,
    max_source_pixels: u64,
) -> Result<Vec<u8>, TransformError> {
    check_source_pixels(input, format, max_source_pixels)?;

    let img = image::load_from_memory_with_format(input, format)
        .map_err(|e| TransformError::Decode(e.to_string()))?;

    // orientation first, so the requested box applies to the upright image
    let img = read_orientation(input).apply(img);

    let source = Size::new(img.width(), img.height());
    let layout = geometry::layout(source, spec);

    let scaled = if layout.scaled != source {
        resize_image(&img, layout.scaled)?
    } else {
        img
    };
    let output = place_on_canvas(scaled, &layout);

    encode_image(&output, format, jpeg_quality)
}

fn check_source_pixels(input: &[u8], format: ImageFormat, max: u64) -> Result<(), TransformError> {
    let (width, height) = ImageReader::with_format(Cursor::new(input), format)
        .into_dimensions()
        .map_err(|e| TransformError::Decode(e.to_string()))?;

    if width as u64 * height as u64 > max {
        return Err(TransformError::ResolutionTooLarge { width, height });
    }
    Ok(())
}

/// Lanczos3 resize, keeping an alpha channel when the source has one.
fn resize_image(img: &DynamicImage, target: Size) -> Result<DynamicImage, TransformError> {
    let has_alpha = img.color().has_alpha();
    let (pixel_type, raw) = if has_alpha {
        (PixelType::U8x4, img.to_rgba8().into_raw())
    } else {
        (PixelType::U8x3, img.to_rgb8().into_raw())
    };

    let src = Image::from_vec_u8(img.width(), img.height(), raw, pixel_type)
        .map_err(|e| TransformError::Processing(format!("failed to create source image: {e}")))?;
    let mut dst = Image::new(target.width, target.height, pixel_type);

    Resizer::new()
        .resize(
            &src,
            &mut dst,
            &ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3)),
        )
        .map_err(|e| TransformError::Processing(format!("resize failed: {e}")))?;

    let buf = dst.into_vec();
    let resized = if has_alpha {
        RgbaImage::from_raw(target.width, target.height, buf).map(DynamicImage::ImageRgba8)
    } else {
        RgbImage::from_raw(target.width, target.height, buf).map(DynamicImage::ImageRgb8)
    };

    resized.ok_or_else(|| TransformError::Processing("failed to convert resized image".to_string()))
}

/// Crop (cover) or letterbox (contain) the scaled image onto its canvas.
fn place_on_canvas(scaled: DynamicImage, layout: &Layout) -> DynamicImage {
    let (x, y) = layout.offset();

    if layout.crops() {
        return scaled.crop_imm(x, y, layout.canvas.width, layout.canvas.height);
    }
    if layout.pads() {
        let mut canvas = RgbaImage::from_pixel(layout.canvas.width, layout.canvas.height, LETTERBOX);
        image::imageops::overlay(&mut canvas, &scaled.to_rgba8(), x as i64, y as i64);
        return DynamicImage::ImageRgba8(canvas);
    }
    scaled
}

fn encode_image(img: &DynamicImage, format: ImageFormat, jpeg_quality: u8) -> Result<Vec<u8>, TransformError> {
    let mut buf = Cursor::new(Vec::new());

    match format {
        ImageFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut buf, jpeg_quality);
            img.to_rgb8()
                .write_with_encoder(encoder)
                .map_err(|e| TransformError::Encode(format!("JPEG encode failed: {e}")))?;
        }
        ImageFormat::Gif => {
            // single frame; animation is not preserved
            DynamicImage::ImageRgba8(img.to_rgba8())
                .write_to(&mut buf, ImageFormat::Gif)
                .map_err(|e| TransformError::Encode(format!("GIF encode failed: {e}")))?;
        }
        other => {
            img.write_to(&mut buf, other)
                .map_err(|e| TransformError::Encode(format!("{other:?} encode failed: {e}")))?;
        }
    }

    Ok(buf.into_inner())
}
