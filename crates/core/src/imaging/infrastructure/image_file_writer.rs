use std::path::Path;

use crate::imaging::domain::image_writer::ImageWriter;
use crate::imaging::infrastructure::conversion::dynamic_from_frame;
use crate::shared::frame::Frame;

/// Writes a frame with the `image` crate; the format follows the extension.
///
/// Formats without alpha support (e.g. JPEG) receive the RGB channels only.
pub struct ImageFileWriter;

impl ImageFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageWriter for ImageFileWriter {
    fn write(&self, path: &Path, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let img = dynamic_from_frame(frame).ok_or("Failed to create image from frame data")?;
        let img = if frame.has_alpha() && !supports_alpha(path) {
            image::DynamicImage::ImageRgb8(img.into_rgb8())
        } else {
            img
        };

        img.save(path)?;
        Ok(())
    }
}

fn supports_alpha(path: &Path) -> bool {
    match image::ImageFormat::from_path(path) {
        Ok(format) => !matches!(format, image::ImageFormat::Jpeg | image::ImageFormat::Bmp),
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        ImageFileWriter::new()
            .write(&path, &Frame::filled(100, 80, &[50, 100, 200]))
            .unwrap();
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_png_roundtrip_preserves_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        ImageFileWriter::new()
            .write(&path, &Frame::filled(50, 50, &[50, 100, 200, 77]))
            .unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (50, 50));
        assert_eq!(img.get_pixel(0, 0).0, [50, 100, 200, 77]);
    }

    #[test]
    fn test_rgba_frame_to_jpeg_drops_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        ImageFileWriter::new()
            .write(&path, &Frame::filled(16, 16, &[10, 10, 10, 255]))
            .unwrap();
        assert!(image::open(&path).is_ok());
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.png");
        ImageFileWriter::new()
            .write(&path, &Frame::filled(2, 2, &[0, 0, 0]))
            .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_unknown_extension_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.unknown");
        assert!(ImageFileWriter::new()
            .write(&path, &Frame::filled(2, 2, &[0, 0, 0]))
            .is_err());
    }
}
