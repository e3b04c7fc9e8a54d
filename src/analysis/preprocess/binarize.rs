//! Photograph to binary thread map conversion.
//!
//! Three pure stages: luminance grayscale, Gaussian smoothing to suppress
//! sensor noise, and adaptive thresholding against the mean of a local
//! neighborhood. Threads photograph darker than the surrounding weave, so a
//! pixel below its neighborhood mean (minus a small offset) is foreground.

use image::{GrayImage, RgbImage, imageops};
use imageproc::filter::gaussian_blur_f32;
use tracing::debug;

use crate::analysis::common::error::{AnalysisError, Result};
use crate::analysis::preprocess::types::{BinaryThreadMap, FOREGROUND};

/// Smoothing kernel edge length. This bounds the finest thread spacing the
/// analyzer can resolve; not exposed to callers.
const BLUR_KERNEL_SIZE: u32 = 5;

/// Edge length of the adaptive threshold neighborhood, in pixels.
const THRESHOLD_BLOCK: usize = 11;

/// Offset subtracted from the neighborhood mean before comparison.
const THRESHOLD_OFFSET: i32 = 2;

/// Sigma for a given kernel size, following the OpenCV auto-sigma rule.
fn blur_sigma(kernel_size: u32) -> f32 {
    0.3 * ((kernel_size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Converts a color photograph into a [`BinaryThreadMap`] of the same
/// dimensions. Fails on empty input; never returns a partial map.
pub fn preprocess(image: &RgbImage) -> Result<BinaryThreadMap> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(AnalysisError::InvalidDimensions(
            width as usize,
            height as usize,
        ));
    }

    debug!("Preprocessing image: {}x{}", width, height);

    let gray = imageops::grayscale(image);
    let blurred = gaussian_blur_f32(&gray, blur_sigma(BLUR_KERNEL_SIZE));
    let map = adaptive_threshold(&blurred)?;

    debug!("Image preprocessing completed");

    Ok(map)
}

/// Inverse binary adaptive threshold over a square neighborhood mean.
///
/// Neighborhood sums come from a summed-area table so the cost is constant
/// per pixel regardless of block size. Windows are clamped at the borders.
fn adaptive_threshold(gray: &GrayImage) -> Result<BinaryThreadMap> {
    let width = gray.width() as usize;
    let height = gray.height() as usize;
    let pixels = gray.as_raw();

    // Summed-area table with a zero row/column of padding.
    let stride = width + 1;
    let mut integral = vec![0u64; stride * (height + 1)];
    for y in 0..height {
        let mut row_sum = 0u64;
        for x in 0..width {
            row_sum += pixels[y * width + x] as u64;
            integral[(y + 1) * stride + (x + 1)] = integral[y * stride + (x + 1)] + row_sum;
        }
    }

    let radius = THRESHOLD_BLOCK / 2;
    let mut data = vec![0u8; width * height];
    for y in 0..height {
        let y0 = y.saturating_sub(radius);
        let y1 = (y + radius + 1).min(height);
        for x in 0..width {
            let x0 = x.saturating_sub(radius);
            let x1 = (x + radius + 1).min(width);
            let area = ((y1 - y0) * (x1 - x0)) as u64;

            let sum = integral[y1 * stride + x1] + integral[y0 * stride + x0]
                - integral[y0 * stride + x1]
                - integral[y1 * stride + x0];
            let mean = (sum / area) as i32;

            if (pixels[y * width + x] as i32) < mean - THRESHOLD_OFFSET {
                data[y * width + x] = FOREGROUND;
            }
        }
    }

    BinaryThreadMap::from_raw(width, height, data)
}

#[cfg(test)]
mod tests {
    use image::Rgb;

    use super::*;

    fn striped_image(width: u32, height: u32, period: u32, stripe: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, _| {
            if x % period < stripe {
                Rgb([30, 30, 30])
            } else {
                Rgb([230, 230, 230])
            }
        })
    }

    #[test]
    fn test_preserves_dimensions() {
        let image = striped_image(120, 80, 8, 3);
        let map = preprocess(&image).unwrap();
        assert_eq!(map.width(), 120);
        assert_eq!(map.height(), 80);
    }

    #[test]
    fn test_output_is_strictly_binary() {
        let image = striped_image(64, 64, 6, 2);
        let map = preprocess(&image).unwrap();
        assert!(map.data().iter().all(|&v| v == 0 || v == FOREGROUND));
    }

    #[test]
    fn test_dark_stripes_become_foreground() {
        let image = striped_image(96, 48, 8, 3);
        let map = preprocess(&image).unwrap();

        // Centers of dark stripes must be foreground, centers of the light
        // gaps background. Sample the image interior to stay clear of the
        // clamped border windows.
        let y = 24;
        assert_eq!(map.get(41, y), FOREGROUND); // x % 8 == 1, stripe center
        assert_eq!(map.get(45, y), 0); // x % 8 == 5, gap center
    }

    #[test]
    fn test_flat_image_has_no_threads() {
        let image = RgbImage::from_pixel(50, 50, Rgb([180, 180, 180]));
        let map = preprocess(&image).unwrap();
        assert!(map.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_rejects_empty_image() {
        let image = RgbImage::new(0, 0);
        let err = preprocess(&image).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidDimensions(0, 0)));
    }
}
