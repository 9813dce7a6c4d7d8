use crate::shared::face::FaceObservation;
use crate::shared::frame::Frame;

/// Domain interface for the external face detector.
///
/// Implementations may hold a native handle or other state, hence
/// `&mut self`. Faces are returned in the detector's own order, which the
/// pipeline preserves when compositing.
pub trait FaceDetector: Send {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<FaceObservation>, Box<dyn std::error::Error>>;
}
