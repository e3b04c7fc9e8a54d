//! Dominant-frequency extraction and thread count conversion.

use rustfft::{FftPlanner, num_complex::Complex};
use tracing::debug;

use crate::analysis::common::error::Result;
use crate::analysis::frequency::profile::{intensity_profile, spacing_std};
use crate::analysis::frequency::region::Axis;
use crate::analysis::preprocess::types::BinaryThreadMap;

/// Counts below this floor are treated as detection failure, not a fabric
/// property, and are raised to the floor rather than rejected.
pub const MIN_THREAD_COUNT: u32 = 10;

/// The strongest non-DC positive-frequency bin of a profile's spectrum.
#[derive(Debug, Clone, Copy)]
pub struct SpectrumPeak {
    /// Cycles per sample, in (0, 0.5).
    pub frequency: f64,
    pub amplitude: f64,
}

/// Per-axis counting outcome.
#[derive(Debug, Clone, Copy)]
pub struct AxisMeasurement {
    /// Thread count after the [`MIN_THREAD_COUNT`] floor.
    pub count: u32,
    /// Count before the floor; 0 when the spectrum was degenerate.
    pub raw_count: u32,
    /// Standard deviation of detected inter-thread spacing, in pixels.
    pub spacing_std: f64,
    /// True when the profile carried no periodic signal.
    pub degenerate: bool,
}

/// Counts threads along `axis` inside that axis' standard sample region.
///
/// Deterministic: identical map and reference length always produce the same
/// measurement.
pub fn count_threads(
    map: &BinaryThreadMap,
    axis: Axis,
    reference_length: f64,
) -> Result<AxisMeasurement> {
    let rect = axis.sample_region().to_pixels(map.width(), map.height())?;
    let profile = intensity_profile(map, &rect, axis);
    let measurement = measure_profile(&profile, reference_length);

    debug!(
        ?axis,
        count = measurement.count,
        raw_count = measurement.raw_count,
        degenerate = measurement.degenerate,
        "Axis measurement complete"
    );

    Ok(measurement)
}

/// Converts a profile's dominant frequency into a thread count:
/// `round(frequency x profile_length x reference_length)`, floored at
/// [`MIN_THREAD_COUNT`].
pub(crate) fn measure_profile(profile: &[f64], reference_length: f64) -> AxisMeasurement {
    let raw_count = match dominant_peak(profile) {
        Some(peak) => {
            let count = peak.frequency * profile.len() as f64 * reference_length;
            count.round() as u32
        }
        None => 0,
    };

    AxisMeasurement {
        count: raw_count.max(MIN_THREAD_COUNT),
        raw_count,
        spacing_std: spacing_std(profile),
        degenerate: raw_count == 0,
    }
}

/// Forward DFT of the profile, restricted to bins `1..len/2` (the DC term
/// and the negative-frequency mirror half are discarded). Returns `None`
/// when no retained bin carries energy.
pub(crate) fn dominant_peak(profile: &[f64]) -> Option<SpectrumPeak> {
    let n = profile.len();
    if n < 4 {
        return None;
    }

    let mut buffer: Vec<Complex<f64>> =
        profile.iter().map(|&v| Complex::new(v, 0.0)).collect();
    FftPlanner::new().plan_fft_forward(n).process(&mut buffer);

    let (peak_idx, peak_amp) = buffer[1..n / 2]
        .iter()
        .enumerate()
        .map(|(i, c)| (i + 1, c.norm()))
        .max_by(|a, b| a.1.total_cmp(&b.1))?;

    if peak_amp == 0.0 {
        return None;
    }

    Some(SpectrumPeak {
        frequency: peak_idx as f64 / n as f64,
        amplitude: peak_amp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::preprocess::types::FOREGROUND;

    /// Square-wave profile with exactly `stripes` periods over `len` samples.
    fn striped_profile(len: usize, stripes: usize) -> Vec<f64> {
        let period = len / stripes;
        (0..len)
            .map(|i| {
                if i % period < (period / 2).max(1) {
                    FOREGROUND as f64 * 40.0
                } else {
                    0.0
                }
            })
            .collect()
    }

    #[test]
    fn test_counts_evenly_spaced_stripes() {
        for stripes in [10usize, 25, 50, 100, 150, 200] {
            let profile = striped_profile(600, stripes);
            let measurement = measure_profile(&profile, 1.0);
            let error = measurement.count as i64 - stripes as i64;
            assert!(
                error.abs() <= 1,
                "expected ~{stripes} threads, got {}",
                measurement.count
            );
        }
    }

    #[test]
    fn test_reference_length_is_linear() {
        let profile = striped_profile(512, 32);
        let base = measure_profile(&profile, 1.0);
        let doubled = measure_profile(&profile, 2.0);
        assert_eq!(doubled.count, base.count * 2);
    }

    #[test]
    fn test_all_background_floors_to_minimum() {
        let profile = vec![0.0; 256];
        let measurement = measure_profile(&profile, 1.0);
        assert_eq!(measurement.count, MIN_THREAD_COUNT);
        assert_eq!(measurement.raw_count, 0);
        assert!(measurement.degenerate);
    }

    #[test]
    fn test_short_profile_is_degenerate() {
        let measurement = measure_profile(&[1.0, 2.0, 3.0], 1.0);
        assert_eq!(measurement.count, MIN_THREAD_COUNT);
        assert!(measurement.degenerate);
    }

    #[test]
    fn test_dc_component_is_ignored() {
        // Constant profile: all energy in the DC bin.
        let profile = vec![500.0; 128];
        assert!(dominant_peak(&profile).is_none());
    }

    #[test]
    fn test_peak_frequency_matches_stripe_count() {
        let profile = striped_profile(400, 20);
        let peak = dominant_peak(&profile).unwrap();
        assert!((peak.frequency - 20.0 / 400.0).abs() < 1e-9);
        assert!(peak.amplitude > 0.0);
    }

    #[test]
    fn test_count_threads_on_full_map() {
        // 1000-wide map; the warp window spans columns 400..600, so a
        // 10-pixel stripe period puts 20 threads inside the window.
        let (width, height) = (1000usize, 400usize);
        let mut data = vec![0u8; width * height];
        for y in 0..height {
            for x in 0..width {
                if x % 10 < 4 {
                    data[y * width + x] = FOREGROUND;
                }
            }
        }
        let map = BinaryThreadMap::from_raw(width, height, data).unwrap();

        let measurement = count_threads(&map, Axis::Warp, 1.0).unwrap();
        assert_eq!(measurement.count, 20);
        assert!(!measurement.degenerate);
    }

    #[test]
    fn test_determinism() {
        let profile = striped_profile(300, 15);
        let a = measure_profile(&profile, 1.0);
        let b = measure_profile(&profile, 1.0);
        assert_eq!(a.count, b.count);
        assert_eq!(a.spacing_std, b.spacing_std);
    }
}
