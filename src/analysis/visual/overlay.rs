//! Grid overlay rendering and JPEG encoding.
//!
//! The overlay proves a detection to a human: `warp_count` evenly spaced
//! vertical lines, `weft_count` horizontal lines, and three count labels,
//! drawn on a copy of the original photograph.

use std::io::Cursor;

use ab_glyph::{FontRef, PxScale};
use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, Rgb, RgbImage};
use imageproc::drawing::{draw_line_segment_mut, draw_text_mut};
use tracing::debug;

use crate::analysis::common::error::{AnalysisError, Result};

const FONT_BYTES: &[u8] = include_bytes!("../../../assets/DejaVuSans.ttf");

const LABEL_SCALE: f32 = 32.0;
const LABEL_X: i32 = 10;

const WARP_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
const WEFT_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const TOTAL_COLOR: Rgb<u8> = Rgb([0, 0, 255]);

/// Renders the detection overlay and returns it JPEG-encoded.
///
/// Line spacing is `dimension / (count + 1)` so the grid stays inside the
/// frame. The input image is not mutated; the decoded output has the same
/// pixel dimensions as the input.
pub fn render_overlay(
    image: &RgbImage,
    warp_count: u32,
    weft_count: u32,
    jpeg_quality: u8,
) -> Result<Vec<u8>> {
    let mut canvas = image.clone();
    let (width, height) = canvas.dimensions();

    // Counts can saturate to u32::MAX on extreme reference lengths, so the
    // +1 in the spacing divisor must not wrap.
    let warp_spacing = width / warp_count.saturating_add(1);
    if warp_spacing > 0 {
        for i in 1..=warp_count {
            let x = (i * warp_spacing) as f32;
            draw_line_segment_mut(&mut canvas, (x, 0.0), (x, height as f32 - 1.0), WARP_COLOR);
        }
    }

    let weft_spacing = height / weft_count.saturating_add(1);
    if weft_spacing > 0 {
        for i in 1..=weft_count {
            let y = (i * weft_spacing) as f32;
            draw_line_segment_mut(&mut canvas, (0.0, y), (width as f32 - 1.0, y), WEFT_COLOR);
        }
    }

    let font = FontRef::try_from_slice(FONT_BYTES)
        .map_err(|e| AnalysisError::EncodeError(format!("label font: {e}")))?;
    let scale = PxScale::from(LABEL_SCALE);
    let labels = [
        (format!("Warp: {warp_count}"), 30, WARP_COLOR),
        (format!("Weft: {weft_count}"), 70, WEFT_COLOR),
        (
            format!("Total: {}", warp_count as u64 + weft_count as u64),
            110,
            TOTAL_COLOR,
        ),
    ];
    for (text, y, color) in &labels {
        draw_text_mut(&mut canvas, *color, LABEL_X, *y, scale, &font, text);
    }

    let mut encoded = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut encoded, jpeg_quality)
        .encode(canvas.as_raw(), width, height, ExtendedColorType::Rgb8)
        .map_err(|e| AnalysisError::EncodeError(e.to_string()))?;

    debug!(
        warp_count,
        weft_count,
        bytes = encoded.get_ref().len(),
        "Overlay rendered"
    );

    Ok(encoded.into_inner())
}
