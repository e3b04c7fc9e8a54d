//! 1-D intensity profiles of a sample region.

use crate::analysis::frequency::region::{Axis, PixelRect};
use crate::analysis::preprocess::types::BinaryThreadMap;

/// Collapses the region to one summed intensity per position along the
/// counting axis: per column for warp (summing over rows), per row for weft.
pub(crate) fn intensity_profile(
    map: &BinaryThreadMap,
    rect: &PixelRect,
    axis: Axis,
) -> Vec<f64> {
    match axis {
        Axis::Warp => {
            let mut profile = vec![0.0; rect.width()];
            for y in rect.y0..rect.y1 {
                for (i, x) in (rect.x0..rect.x1).enumerate() {
                    profile[i] += map.get(x, y) as f64;
                }
            }
            profile
        }
        Axis::Weft => {
            let mut profile = vec![0.0; rect.height()];
            for (i, y) in (rect.y0..rect.y1).enumerate() {
                for x in rect.x0..rect.x1 {
                    profile[i] += map.get(x, y) as f64;
                }
            }
            profile
        }
    }
}

/// Standard deviation of the gaps between successive thread positions in the
/// profile, in pixels. Thread positions are taken as the profile's rising
/// crossings of its own mean. Fewer than three crossings give no usable gap
/// statistics and report 0.
pub(crate) fn spacing_std(profile: &[f64]) -> f64 {
    if profile.len() < 3 {
        return 0.0;
    }

    let mean = profile.iter().sum::<f64>() / profile.len() as f64;
    let mut crossings = Vec::new();
    for i in 1..profile.len() {
        if profile[i] > mean && profile[i - 1] <= mean {
            crossings.push(i);
        }
    }
    if crossings.len() < 3 {
        return 0.0;
    }

    let gaps: Vec<f64> = crossings
        .windows(2)
        .map(|pair| (pair[1] - pair[0]) as f64)
        .collect();
    let gap_mean = gaps.iter().sum::<f64>() / gaps.len() as f64;
    let variance = gaps
        .iter()
        .map(|g| (g - gap_mean) * (g - gap_mean))
        .sum::<f64>()
        / gaps.len() as f64;

    variance.sqrt()
}
