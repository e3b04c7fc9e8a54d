use crate::analysis::common::error::{AnalysisError, Result};

/// Thread direction being counted.
///
/// Warp threads run lengthwise (vertical in a standard photograph
/// orientation), weft threads crosswise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Warp,
    Weft,
}

impl Axis {
    /// The sample window used for this axis. The two windows are disjoint
    /// central sub-regions chosen to sample thread structure away from
    /// fabric edges.
    pub fn sample_region(self) -> SampleRegion {
        match self {
            Axis::Warp => SampleRegion {
                x0: 0.40,
                x1: 0.60,
                y0: 0.25,
                y1: 0.75,
            },
            Axis::Weft => SampleRegion {
                x0: 0.25,
                x1: 0.75,
                y0: 0.40,
                y1: 0.60,
            },
        }
    }
}

/// Rectangular sub-window of the thread map, as fractions of the full image
/// extent. Bounds lie within [0, 1] and describe a non-empty rectangle.
#[derive(Debug, Clone, Copy)]
pub struct SampleRegion {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl SampleRegion {
    pub fn new(x0: f64, x1: f64, y0: f64, y1: f64) -> Result<Self> {
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        if !(in_unit(x0) && in_unit(x1) && in_unit(y0) && in_unit(y1)) {
            return Err(AnalysisError::InvalidRegion(format!(
                "bounds outside [0,1]: x=[{x0},{x1}] y=[{y0},{y1}]"
            )));
        }
        if x0 >= x1 || y0 >= y1 {
            return Err(AnalysisError::InvalidRegion(format!(
                "empty region: x=[{x0},{x1}] y=[{y0},{y1}]"
            )));
        }
        Ok(Self { x0, x1, y0, y1 })
    }

    /// Resolves the fractional bounds against concrete map dimensions,
    /// producing half-open pixel bounds.
    pub(crate) fn to_pixels(&self, width: usize, height: usize) -> Result<PixelRect> {
        let rect = PixelRect {
            x0: (self.x0 * width as f64) as usize,
            x1: (self.x1 * width as f64) as usize,
            y0: (self.y0 * height as f64) as usize,
            y1: (self.y1 * height as f64) as usize,
        };
        if rect.x0 >= rect.x1 || rect.y0 >= rect.y1 {
            return Err(AnalysisError::InvalidRegion(format!(
                "region collapses to zero pixels on a {width}x{height} map"
            )));
        }
        Ok(rect)
    }
}

/// Half-open pixel bounds of a resolved sample region.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PixelRect {
    pub x0: usize,
    pub x1: usize,
    pub y0: usize,
    pub y1: usize,
}

impl PixelRect {
    pub fn width(&self) -> usize {
        self.x1 - self.x0
    }

    pub fn height(&self) -> usize {
        self.y1 - self.y0
    }
}
