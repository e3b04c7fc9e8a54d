//! Image loader backed by the `image` crate.
//!
//! Decodes any format the `image` crate supports (JPEG, PNG, WebP, ...).
//! A missing file and an undecodable file both surface as
//! [`AnalysisError::ImageLoad`] carrying the offending path; no partial
//! result is produced.

use std::path::Path;

use image::RgbImage;
use tracing::debug;

use crate::analysis::common::error::{AnalysisError, Result};
use crate::analysis::preprocess::loader::ImageLoader;

#[derive(Debug)]
pub struct FileImageLoader;

impl ImageLoader for FileImageLoader {
    fn load(&self, path: &Path) -> Result<RgbImage> {
        if !path.exists() {
            return Err(AnalysisError::ImageLoad {
                path: path.to_path_buf(),
                reason: "file not found".to_string(),
            });
        }

        let decoded = image::open(path).map_err(|e| AnalysisError::ImageLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let rgb = decoded.to_rgb8();
        debug!("Decoded image: {}x{}", rgb.width(), rgb.height());

        Ok(rgb)
    }
}
