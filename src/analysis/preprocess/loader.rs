use std::path::Path;

use image::RgbImage;

use crate::analysis::common::error::Result;

pub trait ImageLoader {
    fn load(&self, path: &Path) -> Result<RgbImage>;
}
