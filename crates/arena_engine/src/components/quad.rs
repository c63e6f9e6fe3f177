//! Render quad component

use crate::ecs::Component;
use crate::foundation::math::{Vec2, Vec3};

/// World-space quad consumed by the render collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    /// Width and height of the quad
    pub extent: Vec2,
    /// Facing normal
    pub normal: Vec3,
}

impl Component for Quad {}

impl Default for Quad {
    fn default() -> Self {
        Self {
            extent: Vec2::new(1.0, 1.0),
            normal: Vec3::new(0.0, 0.0, 1.0),
        }
    }
}

impl Quad {
    /// Create a quad of the given extent with the default facing normal
    pub fn new(extent: Vec2) -> Self {
        Self {
            extent,
            ..Default::default()
        }
    }
}
