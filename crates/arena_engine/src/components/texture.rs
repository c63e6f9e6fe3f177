//! Texture atlas region component

use crate::ecs::Component;
use crate::foundation::math::{Vec2, Vec3};

/// Atlas region and tint consumed by the render collaborator.
///
/// `position` and `size` are in atlas pixel space; the AI system slides
/// `position.x` to flip animation frames and facing direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Texture {
    /// Index of the atlas this region lives in
    pub texture_index: u32,
    /// Top-left corner of the sub-rectangle, in pixels
    pub position: Vec2,
    /// Size of the sub-rectangle, in pixels
    pub size: Vec2,
    /// RGB tint
    pub color: Vec3,
    /// Whether the arena lights affect this surface
    pub use_light: bool,
}

impl Component for Texture {}

impl Default for Texture {
    fn default() -> Self {
        Self {
            texture_index: 0,
            position: Vec2::zeros(),
            size: Vec2::new(256.0, 256.0),
            color: Vec3::new(1.0, 1.0, 1.0),
            use_light: false,
        }
    }
}
