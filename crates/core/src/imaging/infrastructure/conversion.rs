use image::{DynamicImage, RgbImage, RgbaImage};

use crate::shared::frame::Frame;

/// Decodes to RGBA when the source carries alpha, RGB otherwise.
pub fn frame_from_dynamic(img: DynamicImage) -> Frame {
    if img.color().has_alpha() {
        let rgba = img.into_rgba8();
        let (w, h) = rgba.dimensions();
        Frame::new(rgba.into_raw(), w, h, 4)
    } else {
        let rgb = img.into_rgb8();
        let (w, h) = rgb.dimensions();
        Frame::new(rgb.into_raw(), w, h, 3)
    }
}

/// `None` when the channel count is not 3 or 4 or the buffer is the wrong length.
pub fn dynamic_from_frame(frame: &Frame) -> Option<DynamicImage> {
    let data = frame.data().to_vec();
    match frame.channels() {
        3 => RgbImage::from_raw(frame.width(), frame.height(), data).map(DynamicImage::ImageRgb8),
        4 => RgbaImage::from_raw(frame.width(), frame.height(), data).map(DynamicImage::ImageRgba8),
        _ => None,
    }
}
