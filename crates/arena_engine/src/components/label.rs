//! HUD label component

use crate::ecs::Component;
use crate::foundation::math::Vec3;

/// Screen-space text consumed by the render collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// RGB text color
    pub color: Vec3,
    /// Text to draw
    pub text: String,
}

impl Component for Label {}

impl Label {
    /// Create a label with the given text and color
    pub fn new(text: impl Into<String>, color: Vec3) -> Self {
        Self {
            color,
            text: text.into(),
        }
    }
}
