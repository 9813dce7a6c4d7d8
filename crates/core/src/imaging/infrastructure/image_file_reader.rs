use std::path::Path;

use crate::imaging::domain::image_reader::ImageReader;
use crate::imaging::infrastructure::conversion::frame_from_dynamic;
use crate::shared::frame::Frame;

/// Reads any format the `image` crate can decode.
///
/// Images with an alpha channel become RGBA frames, everything else RGB.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for ImageFileReader {
    fn read(&self, path: &Path) -> Result<Frame, Box<dyn std::error::Error>> {
        let img = image::open(path)
            .map_err(|e| format!("Failed to read image {}: {e}", path.display()))?;
        let frame = frame_from_dynamic(img);
        log::debug!(
            "Read {}x{} image with {} channels from {}",
            frame.width(),
            frame.height(),
            frame.channels(),
            path.display()
        );
        Ok(frame)
    }
}
