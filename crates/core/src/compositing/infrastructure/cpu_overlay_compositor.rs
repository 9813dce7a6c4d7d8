use crate::compositing::domain::composite_error::CompositeError;
use crate::compositing::domain::face_compositor::FaceCompositor;
use crate::compositing::domain::overlay_geometry::{fitted_overlay_size, overlay_origin};
use crate::shared::face::FaceObservation;
use crate::shared::frame::Frame;

use super::alpha_blit::blit_scaled_source_over;

/// CPU compositor: nearest-neighbour scaling of the overlay fused with a
/// source-over blit onto a copy of the base.
#[derive(Clone, Copy, Debug, Default)]
pub struct CpuOverlayCompositor;

impl CpuOverlayCompositor {
    pub fn new() -> Self {
        Self
    }
}

impl FaceCompositor for CpuOverlayCompositor {
    fn composite(
        &self,
        base: &Frame,
        overlay: &Frame,
        face: &FaceObservation,
    ) -> Result<Frame, Box<dyn std::error::Error>> {
        Ok(composite(base, overlay, face)?)
    }
}

/// Draws `overlay` over `face` on a copy of `base`.
///
/// The copy keeps `base`'s dimensions and channel count; overlay pixels that
/// fall outside it are clipped and never materialised, so an oversized face
/// costs no more than the base itself.
pub fn composite(
    base: &Frame,
    overlay: &Frame,
    face: &FaceObservation,
) -> Result<Frame, CompositeError> {
    validate_frame("base", base)?;
    validate_frame("overlay", overlay)?;
    if !face.has_area() {
        return Err(CompositeError::invalid(format!(
            "face region must have positive size, got {}x{}",
            face.width, face.height
        )));
    }
    if !face.x.is_finite() || !face.y.is_finite() {
        return Err(CompositeError::invalid(format!(
            "face origin must be finite, got ({}, {})",
            face.x, face.y
        )));
    }

    let (width, height) = fitted_overlay_size(face.width, overlay.width(), overlay.height());
    if width == 0 || height == 0 {
        return Err(CompositeError::invalid(format!(
            "overlay scales to an empty {width}x{height} image for a face {} pixels wide",
            face.width
        )));
    }

    let origin = overlay_origin(face, (width, height));
    log::debug!(
        "composite: {width}x{height} overlay at ({}, {}) on {}x{} base",
        origin.0,
        origin.1,
        base.width(),
        base.height()
    );

    let mut output = base.clone();
    blit_scaled_source_over(&mut output, overlay, (width, height), origin);
    Ok(output)
}

fn validate_frame(role: &str, frame: &Frame) -> Result<(), CompositeError> {
    if frame.is_empty() {
        return Err(CompositeError::invalid(format!(
            "{role} image is empty ({}x{})",
            frame.width(),
            frame.height()
        )));
    }
    if !matches!(frame.channels(), 3 | 4) {
        return Err(CompositeError::invalid(format!(
            "{role} image must be RGB or RGBA, got {} channels",
            frame.channels()
        )));
    }
    if !frame.is_consistent() {
        return Err(CompositeError::invalid(format!(
            "{role} pixel data does not match {}x{}x{}",
            frame.width(),
            frame.height(),
            frame.channels()
        )));
    }
    Ok(())
}
