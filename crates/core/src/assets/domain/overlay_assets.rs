use std::collections::HashMap;

use crate::classification::domain::expression::ExpressionCategory;
use crate::shared::frame::Frame;

/// Fixed mapping from expression to the overlay drawn for it.
///
/// Categories may be left unmapped; faces classified into them are drawn
/// without an overlay.
#[derive(Clone, Debug, Default)]
pub struct OverlayAssets {
    overlays: HashMap<ExpressionCategory, Frame>,
}

impl OverlayAssets {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, category: ExpressionCategory, overlay: Frame) -> Self {
        self.insert(category, overlay);
        self
    }

    pub fn insert(&mut self, category: ExpressionCategory, overlay: Frame) {
        self.overlays.insert(category, overlay);
    }

    pub fn get(&self, category: ExpressionCategory) -> Option<&Frame> {
        self.overlays.get(&category)
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    /// Categories with no overlay, in declaration order.
    pub fn missing(&self) -> Vec<ExpressionCategory> {
        ExpressionCategory::ALL
            .iter()
            .copied()
            .filter(|c| !self.overlays.contains_key(c))
            .collect()
    }
}
