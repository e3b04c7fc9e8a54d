use std::path::Path;

use image::RgbImage;
use tracing::{info, instrument};

use crate::analysis::{
    common::error::{AnalysisError, Result},
    frequency::{self, Axis, confidence},
    preprocess::{self, FileImageLoader, ImageLoader},
    types::{AnalysisConfig, AnalysisResult},
    visual,
};

/// End-to-end thread counting pipeline.
///
/// The loader is a seam: production code reads files through
/// [`FileImageLoader`], tests substitute a mock.
#[derive(Debug)]
pub struct ThreadCounter<L: ImageLoader> {
    loader: L,
    config: AnalysisConfig,
}

impl ThreadCounter<FileImageLoader> {
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        Self::with_loader(FileImageLoader, config)
    }
}

impl<L: ImageLoader> ThreadCounter<L> {
    pub fn with_loader(loader: L, config: AnalysisConfig) -> Result<Self> {
        validate(&config)?;
        Ok(Self { loader, config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: AnalysisConfig) -> Result<()> {
        validate(&config)?;
        self.config = config;
        Ok(())
    }

    /// Loads, preprocesses, and analyzes a fabric photograph.
    #[instrument(skip(self, path))]
    pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> Result<AnalysisResult> {
        let path = path.as_ref();
        info!(input = %path.display(), "Starting thread counting");

        let image = {
            let _span = tracing::info_span!("load_image").entered();
            self.loader.load(path)?
        };

        self.analyze_image(&image)
    }

    /// Analyzes an already-decoded photograph.
    ///
    /// The warp and weft analyses read disjoint regions of the same
    /// immutable thread map and run in parallel.
    #[instrument(skip(self, image), fields(width = image.width(), height = image.height()))]
    pub fn analyze_image(&self, image: &RgbImage) -> Result<AnalysisResult> {
        let reference = self.config.reference_length;

        let map = {
            let _span = tracing::info_span!("preprocess").entered();
            preprocess::preprocess(image)?
        };

        let (warp, weft) = {
            let _span = tracing::info_span!("frequency_analysis").entered();
            rayon::join(
                || frequency::count_threads(&map, Axis::Warp, reference),
                || frequency::count_threads(&map, Axis::Weft, reference),
            )
        };
        let warp = warp?;
        let weft = weft?;

        let confidence_score = confidence::score(self.config.confidence, &warp, &weft);

        let visualization = {
            let _span = tracing::info_span!("render_overlay").entered();
            visual::render_overlay(image, warp.count, weft.count, self.config.jpeg_quality)?
        };

        info!(
            warp = warp.count,
            weft = weft.count,
            confidence = confidence_score,
            "Thread counting completed"
        );

        Ok(AnalysisResult {
            warp_count: warp.count,
            weft_count: weft.count,
            thread_density: (warp.count as f64 + weft.count as f64) / reference,
            confidence_score,
            measurement_unit: self.config.unit,
            visualization,
        })
    }
}

fn validate(config: &AnalysisConfig) -> Result<()> {
    if !config.reference_length.is_finite() || config.reference_length <= 0.0 {
        return Err(AnalysisError::InvalidReference(config.reference_length));
    }
    Ok(())
}
