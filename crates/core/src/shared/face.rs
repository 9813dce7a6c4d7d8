use serde::{Deserialize, Serialize};

/// One detected face as reported by an external detector: an axis-aligned
/// box in image pixels and three independent expression probabilities.
///
/// Probabilities are nominally in `[0, 1]` but are not validated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaceObservation {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub smiling: f32,
    pub left_eye_open: f32,
    pub right_eye_open: f32,
}

impl FaceObservation {
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Width and height are finite and strictly positive.
    pub fn has_area(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}
