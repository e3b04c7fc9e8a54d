use crate::analysis::common::error::{AnalysisError, Result};

/// Pixel value marking a thread in a [`BinaryThreadMap`].
pub const FOREGROUND: u8 = 255;

/// Two-valued thread map produced by preprocessing.
///
/// Same dimensions as the source photograph; every pixel is either 0
/// (background) or [`FOREGROUND`] (thread).
#[derive(Debug, Clone)]
pub struct BinaryThreadMap {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BinaryThreadMap {
    /// Builds a map from raw pixels. Any nonzero value is treated as
    /// foreground and normalized to [`FOREGROUND`].
    pub fn from_raw(width: usize, height: usize, mut data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(AnalysisError::InvalidDimensions(width, height));
        }
        if data.len() != width * height {
            return Err(AnalysisError::InvalidDimensions(width, height));
        }

        for value in &mut data {
            if *value != 0 {
                *value = FOREGROUND;
            }
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel value at (x, y); row-major, no bounds slack.
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
