//! Axis-aligned bounding box component

use crate::ecs::Component;
use crate::foundation::math::Vec3;

/// Collision extent of an entity, centered on its transform position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    /// Full extent (width, height, depth) of the box
    pub extent: Vec3,
}

impl Component for BoundingBox {}

impl BoundingBox {
    /// Create a box with the given full extent
    pub fn new(extent: Vec3) -> Self {
        Self { extent }
    }

    /// Half-extents, the form the swept-AABB math works in
    pub fn half_extents(&self) -> Vec3 {
        self.extent / 2.0
    }
}
