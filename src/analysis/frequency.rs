//! Frequency-domain thread counting module
//!
//! Reduces a sample region of the binary thread map to a 1-D intensity
//! profile, finds the dominant non-DC spatial frequency with an FFT, and
//! converts it to a thread count along that axis.

pub mod confidence;
mod profile;
mod region;
mod spectrum;

pub use confidence::ConfidenceModel;
pub use region::{Axis, SampleRegion};
pub use spectrum::{AxisMeasurement, SpectrumPeak, count_threads, MIN_THREAD_COUNT};
