//! Image preprocessing module
//!
//! This module turns a raw fabric photograph into a noise-reduced binary
//! thread map: luminance grayscale, Gaussian smoothing, then adaptive
//! thresholding against the local neighborhood mean.

mod binarize;
mod file_loader;
mod loader;
pub mod types;

pub use binarize::preprocess;
pub use file_loader::FileImageLoader;
pub use loader::ImageLoader;
pub use types::BinaryThreadMap;
