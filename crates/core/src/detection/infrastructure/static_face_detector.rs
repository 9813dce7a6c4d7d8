use crate::detection::domain::face_detector::FaceDetector;
use crate::shared::face::FaceObservation;
use crate::shared::frame::Frame;

/// Replays a fixed list of observations for every frame.
///
/// Used when faces were detected ahead of time by the host application,
/// which hands the results in rather than a live detector.
pub struct StaticFaceDetector {
    faces: Vec<FaceObservation>,
}

impl StaticFaceDetector {
    pub fn new(faces: Vec<FaceObservation>) -> Self {
        Self { faces }
    }
}

impl FaceDetector for StaticFaceDetector {
    fn detect(&mut self, _frame: &Frame) -> Result<Vec<FaceObservation>, Box<dyn std::error::Error>> {
        Ok(self.faces.clone())
    }
}
