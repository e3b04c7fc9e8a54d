//! Thread counting analysis module
//!
//! This module provides a structured approach to fabric thread counting,
//! with separate modules for image preprocessing, frequency-domain analysis,
//! overlay rendering, and pipeline orchestration.

pub mod common;
pub mod counting;
pub mod frequency;
pub mod preprocess;
pub mod types;
pub mod visual;

pub use common::{AnalysisError, Result};

pub use types::{
    AnalysisConfig, AnalysisConfigBuilder, AnalysisResult, MeasurementUnit,
};

pub use preprocess::{
    BinaryThreadMap, FileImageLoader, ImageLoader,
};

pub use frequency::{
    Axis, AxisMeasurement, ConfidenceModel, SampleRegion, SpectrumPeak, MIN_THREAD_COUNT,
};

pub use counting::ThreadCounter;
