//! Spatial transform component

use crate::ecs::Component;
use crate::foundation::math::Vec3;

/// Position, orientation, and scale of an entity.
///
/// Rotation is Euler angles in degrees per axis, applied in Z-Y-X order;
/// the render collaborator builds its model matrices with the same
/// convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Position in world space
    pub position: Vec3,
    /// Euler angles in degrees (x, y, z), applied Z-Y-X
    pub rotation: Vec3,
    /// Per-axis scale factors
    pub scale: Vec3,
}

impl Component for Transform {}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Vec3::zeros(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a transform at `position` with default rotation and scale
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}
