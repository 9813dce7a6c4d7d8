use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shared::constants::{EYE_OPEN_THRESHOLD, SMILE_THRESHOLD};
use crate::shared::face::FaceObservation;

/// The eight expressions an overlay can depict: smiling or not, crossed
/// with each eye open or closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpressionCategory {
    Smiling,
    Frowning,
    LeftWinkSmiling,
    RightWinkSmiling,
    LeftWinkFrowning,
    RightWinkFrowning,
    ClosedEyesSmiling,
    ClosedEyesFrowning,
}

impl ExpressionCategory {
    pub const ALL: &'static [ExpressionCategory] = &[
        ExpressionCategory::Smiling,
        ExpressionCategory::Frowning,
        ExpressionCategory::LeftWinkSmiling,
        ExpressionCategory::RightWinkSmiling,
        ExpressionCategory::LeftWinkFrowning,
        ExpressionCategory::RightWinkFrowning,
        ExpressionCategory::ClosedEyesSmiling,
        ExpressionCategory::ClosedEyesFrowning,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ExpressionCategory::Smiling => "smiling",
            ExpressionCategory::Frowning => "frowning",
            ExpressionCategory::LeftWinkSmiling => "left-wink-smiling",
            ExpressionCategory::RightWinkSmiling => "right-wink-smiling",
            ExpressionCategory::LeftWinkFrowning => "left-wink-frowning",
            ExpressionCategory::RightWinkFrowning => "right-wink-frowning",
            ExpressionCategory::ClosedEyesSmiling => "closed-eyes-smiling",
            ExpressionCategory::ClosedEyesFrowning => "closed-eyes-frowning",
        }
    }

    fn from_signals(smiling: bool, left_open: bool, right_open: bool) -> Self {
        match (smiling, left_open, right_open) {
            (true, true, true) => ExpressionCategory::Smiling,
            (true, true, false) => ExpressionCategory::RightWinkSmiling,
            (true, false, true) => ExpressionCategory::LeftWinkSmiling,
            (true, false, false) => ExpressionCategory::ClosedEyesSmiling,
            (false, true, true) => ExpressionCategory::Frowning,
            (false, true, false) => ExpressionCategory::RightWinkFrowning,
            (false, false, true) => ExpressionCategory::LeftWinkFrowning,
            (false, false, false) => ExpressionCategory::ClosedEyesFrowning,
        }
    }
}

impl fmt::Display for ExpressionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cut-offs turning expression probabilities into booleans.
///
/// Both comparisons are strict: a probability equal to its threshold
/// counts as "not smiling" / "eye closed".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExpressionThresholds {
    pub smile: f32,
    pub eye_open: f32,
}

impl Default for ExpressionThresholds {
    fn default() -> Self {
        Self {
            smile: SMILE_THRESHOLD,
            eye_open: EYE_OPEN_THRESHOLD,
        }
    }
}

impl ExpressionThresholds {
    pub fn new(smile: f32, eye_open: f32) -> Self {
        Self { smile, eye_open }
    }

    pub fn classify(
        &self,
        smiling_prob: f32,
        left_eye_open_prob: f32,
        right_eye_open_prob: f32,
    ) -> ExpressionCategory {
        log::debug!(
            "classify: smiling={smiling_prob} left_eye_open={left_eye_open_prob} \
             right_eye_open={right_eye_open_prob}"
        );
        let category = ExpressionCategory::from_signals(
            smiling_prob > self.smile,
            left_eye_open_prob > self.eye_open,
            right_eye_open_prob > self.eye_open,
        );
        log::debug!("classify: {category}");
        category
    }

    pub fn classify_face(&self, face: &FaceObservation) -> ExpressionCategory {
        self.classify(face.smiling, face.left_eye_open, face.right_eye_open)
    }
}

/// Classifies with the default thresholds.
pub fn classify(
    smiling_prob: f32,
    left_eye_open_prob: f32,
    right_eye_open_prob: f32,
) -> ExpressionCategory {
    ExpressionThresholds::default().classify(smiling_prob, left_eye_open_prob, right_eye_open_prob)
}
