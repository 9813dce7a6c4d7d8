/// Smiling probability must exceed this to count as a smile.
pub const SMILE_THRESHOLD: f32 = 0.1;

/// Eye-open probability must exceed this to count as an open eye.
pub const EYE_OPEN_THRESHOLD: f32 = 0.5;

/// Overlay width as a fraction of the face width.
pub const EMOJI_SCALE_FACTOR: f32 = 0.9;

/// The overlay is raised by a third of its height instead of half, so it
/// sits over the eyes and mouth rather than the true face center.
pub const VERTICAL_PLACEMENT_DIVISOR: i64 = 3;

pub const NO_FACES_MESSAGE: &str = "No faces detected";

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];
