use crate::shared::face::FaceObservation;
use crate::shared::frame::Frame;

/// Domain interface for drawing an overlay image over one detected face.
///
/// Returns a fresh frame with the same geometry and channel count as `base`;
/// `base` itself is left untouched.
pub trait FaceCompositor: Send {
    fn composite(
        &self,
        base: &Frame,
        overlay: &Frame,
        face: &FaceObservation,
    ) -> Result<Frame, Box<dyn std::error::Error>>;
}
