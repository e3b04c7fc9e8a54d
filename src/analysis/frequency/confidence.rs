//! Confidence scoring for a pair of axis measurements.
//!
//! The default model derives confidence from the consistency of detected
//! thread spacing; the legacy model reproduces the original placeholder
//! behavior of a bounded random score that ignores detection quality.

use rand_distr::{Distribution, Normal};
use serde::Serialize;

use crate::analysis::frequency::spectrum::AxisMeasurement;

/// Raw counts below this are unrealistic for woven fabric; both models treat
/// them as near-failures.
const LOW_COUNT_THRESHOLD: u32 = 5;

/// Confidence reported when either axis produced an unrealistically low or
/// degenerate count.
const LOW_COUNT_CONFIDENCE: f64 = 0.3;

const LEGACY_CENTER: f64 = 0.75;
const LEGACY_SPREAD: f64 = 0.1;

#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceModel {
    /// Deterministic: maps the coefficient of variation of thread spacing to
    /// a score; consistent spacing means high confidence.
    #[default]
    SpacingConsistency,
    /// Random score centered at 0.75 with spread 0.1, clamped to
    /// [0.5, 0.95], independent of detection quality. Kept only for parity
    /// with the original behavior.
    LegacyRandom,
}

pub(crate) fn score(model: ConfidenceModel, warp: &AxisMeasurement, weft: &AxisMeasurement) -> f64 {
    match model {
        ConfidenceModel::SpacingConsistency => spacing_consistency(warp, weft),
        ConfidenceModel::LegacyRandom => legacy_random(),
    }
}

fn spacing_consistency(warp: &AxisMeasurement, weft: &AxisMeasurement) -> f64 {
    if warp.raw_count < LOW_COUNT_THRESHOLD || weft.raw_count < LOW_COUNT_THRESHOLD {
        return LOW_COUNT_CONFIDENCE;
    }

    let axis_confidence = |m: &AxisMeasurement| {
        let cv = m.spacing_std / m.count as f64;
        (1.0 - cv).clamp(0.0, 1.0)
    };

    (axis_confidence(warp) + axis_confidence(weft)) / 2.0
}

fn legacy_random() -> f64 {
    let noise = Normal::new(0.0, LEGACY_SPREAD)
        .expect("spread is a finite positive constant")
        .sample(&mut rand::thread_rng());
    (LEGACY_CENTER + noise).clamp(0.5, 0.95)
}
