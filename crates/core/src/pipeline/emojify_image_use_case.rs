use std::path::Path;

use crate::assets::domain::overlay_assets::OverlayAssets;
use crate::classification::domain::expression::{ExpressionCategory, ExpressionThresholds};
use crate::compositing::domain::face_compositor::FaceCompositor;
use crate::detection::domain::face_detector::FaceDetector;
use crate::imaging::domain::image_reader::ImageReader;
use crate::imaging::domain::image_writer::ImageWriter;
use crate::pipeline::notifier::Notifier;
use crate::shared::constants::NO_FACES_MESSAGE;
use crate::shared::frame::Frame;

/// What happened to one detected face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceOutcome {
    pub category: ExpressionCategory,
    pub overlay_applied: bool,
}

/// Per-face results of one run, in detector order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmojifyReport {
    pub faces: Vec<FaceOutcome>,
}

impl EmojifyReport {
    pub fn faces_detected(&self) -> usize {
        self.faces.len()
    }

    pub fn overlays_applied(&self) -> usize {
        self.faces.iter().filter(|f| f.overlay_applied).count()
    }
}

/// Single-image pipeline: read → detect → classify → composite → write.
pub struct EmojifyImageUseCase {
    reader: Box<dyn ImageReader>,
    image_writer: Box<dyn ImageWriter>,
    detector: Box<dyn FaceDetector>,
    compositor: Box<dyn FaceCompositor>,
    assets: OverlayAssets,
    notifier: Box<dyn Notifier>,
    thresholds: ExpressionThresholds,
}

impl EmojifyImageUseCase {
    pub fn new(
        reader: Box<dyn ImageReader>,
        image_writer: Box<dyn ImageWriter>,
        detector: Box<dyn FaceDetector>,
        compositor: Box<dyn FaceCompositor>,
        assets: OverlayAssets,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            reader,
            image_writer,
            detector,
            compositor,
            assets,
            notifier,
            thresholds: ExpressionThresholds::default(),
        }
    }

    #[must_use]
    pub fn with_thresholds(mut self, thresholds: ExpressionThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Reads a single image, overlays emoji on every face, and writes output.
    ///
    /// The output is written even when no faces are found.
    pub fn execute(
        &mut self,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<EmojifyReport, Box<dyn std::error::Error>> {
        let picture = self.reader.read(input_path)?;
        let (result, report) = self.emojify(picture)?;
        self.image_writer.write(output_path, &result)?;
        Ok(report)
    }

    /// Overlays emoji on every detected face of an in-memory picture.
    ///
    /// Each overlay is composited onto the result of the previous one, in
    /// detector order. Faces whose expression has no overlay are left as-is.
    /// With no faces the picture is handed back untouched and the notifier
    /// fires once.
    pub fn emojify(
        &mut self,
        picture: Frame,
    ) -> Result<(Frame, EmojifyReport), Box<dyn std::error::Error>> {
        let faces = self.detector.detect(&picture)?;
        log::info!("Detected {} faces", faces.len());

        let mut report = EmojifyReport::default();
        if faces.is_empty() {
            self.notifier.notify(NO_FACES_MESSAGE);
            return Ok((picture, report));
        }

        let mut result = picture;
        for (i, face) in faces.iter().enumerate() {
            let category = self.thresholds.classify_face(face);
            let overlay_applied = match self.assets.get(category) {
                Some(overlay) => {
                    result = self.compositor.composite(&result, overlay, face)?;
                    true
                }
                None => {
                    log::debug!("Face {i}: no overlay configured for {category}, skipping");
                    false
                }
            };
            report.faces.push(FaceOutcome {
                category,
                overlay_applied,
            });
        }

        log::info!(
            "Applied {} overlays to {} faces",
            report.overlays_applied(),
            report.faces_detected()
        );
        Ok((result, report))
    }
}
