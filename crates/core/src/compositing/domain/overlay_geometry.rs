use crate::shared::constants::{EMOJI_SCALE_FACTOR, VERTICAL_PLACEMENT_DIVISOR};
use crate::shared::face::FaceObservation;

/// Size of the overlay once fitted to a face.
///
/// Width is the face width scaled by [`EMOJI_SCALE_FACTOR`]. Height keeps the
/// overlay's aspect ratio (integer division, as the pixel sizes are integral)
/// and is then scaled by the factor a second time, so fitted overlays come
/// out slightly squat. Both results truncate toward zero.
pub fn fitted_overlay_size(face_width: f32, overlay_width: u32, overlay_height: u32) -> (u32, u32) {
    let width = (face_width * EMOJI_SCALE_FACTOR) as u32;
    if overlay_width == 0 {
        return (width, 0);
    }
    let aspect_height = u64::from(overlay_height) * u64::from(width) / u64::from(overlay_width);
    let height = (aspect_height as f32 * EMOJI_SCALE_FACTOR) as u32;
    (width, height)
}

/// Top-left pixel at which a fitted overlay of `size` is drawn for `face`.
///
/// Horizontally centered on the face; vertically raised so that a third
/// of the overlay sits above the face center. May be negative or past the
/// image edge.
pub fn overlay_origin(face: &FaceObservation, size: (u32, u32)) -> (i64, i64) {
    let (cx, cy) = face.center();
    let half_width = i64::from(size.0) / 2;
    let upper_part = i64::from(size.1) / VERTICAL_PLACEMENT_DIVISOR;
    let x = (f64::from(cx) - half_width as f64).floor() as i64;
    let y = (f64::from(cy) - upper_part as f64).floor() as i64;
    (x, y)
}
