use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Failed to load image {path}: {reason}")]
    ImageLoad { path: PathBuf, reason: String },

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Invalid sample region: {0}")]
    InvalidRegion(String),

    #[error("Reference length must be positive, got {0}")]
    InvalidReference(f64),

    #[error("Unsupported measurement unit: {0}")]
    UnsupportedUnit(String),

    #[error("Failed to encode visualization: {0}")]
    EncodeError(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
