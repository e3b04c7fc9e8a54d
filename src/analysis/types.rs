use std::fmt;
use std::str::FromStr;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Serialize;

use crate::analysis::common::error::AnalysisError;
use crate::analysis::frequency::confidence::ConfidenceModel;

/// Physical unit the reference length is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementUnit {
    #[default]
    Cm,
    Inch,
}

impl fmt::Display for MeasurementUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasurementUnit::Cm => write!(f, "cm"),
            MeasurementUnit::Inch => write!(f, "inch"),
        }
    }
}

impl FromStr for MeasurementUnit {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cm" => Ok(MeasurementUnit::Cm),
            "inch" | "in" => Ok(MeasurementUnit::Inch),
            other => Err(AnalysisError::UnsupportedUnit(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub unit: MeasurementUnit,
    /// Physical length of the imaged sample along each axis, in `unit`.
    pub reference_length: f64,
    pub confidence: ConfidenceModel,
    pub jpeg_quality: u8,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            unit: MeasurementUnit::Cm,
            reference_length: 1.0,
            confidence: ConfidenceModel::SpacingConsistency,
            jpeg_quality: 90,
        }
    }
}

impl AnalysisConfig {
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    unit: Option<MeasurementUnit>,
    reference_length: Option<f64>,
    confidence: Option<ConfidenceModel>,
    jpeg_quality: Option<u8>,
}

impl AnalysisConfigBuilder {
    pub fn unit(mut self, unit: MeasurementUnit) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn reference_length(mut self, reference_length: f64) -> Self {
        self.reference_length = Some(reference_length);
        self
    }

    pub fn confidence(mut self, confidence: ConfidenceModel) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn jpeg_quality(mut self, jpeg_quality: u8) -> Self {
        self.jpeg_quality = Some(jpeg_quality);
        self
    }

    pub fn build(self) -> AnalysisConfig {
        let default = AnalysisConfig::default();
        AnalysisConfig {
            unit: self.unit.unwrap_or(default.unit),
            reference_length: self.reference_length.unwrap_or(default.reference_length),
            confidence: self.confidence.unwrap_or(default.confidence),
            jpeg_quality: self.jpeg_quality.unwrap_or(default.jpeg_quality),
        }
    }
}

/// Outcome of one analysis call. Immutable once constructed; ownership passes
/// to the caller, which may persist the scalar fields verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub warp_count: u32,
    pub weft_count: u32,
    /// `(warp_count + weft_count) / reference_length`.
    pub thread_density: f64,
    pub confidence_score: f64,
    pub measurement_unit: MeasurementUnit,
    /// JPEG-encoded overlay proving the detection.
    #[serde(skip)]
    pub visualization: Vec<u8>,
}

impl AnalysisResult {
    /// Overlay bytes base64-encoded for transport to a web front end.
    pub fn visualization_base64(&self) -> String {
        BASE64.encode(&self.visualization)
    }

    /// Scalar fields serialized under their stable persisted names.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
