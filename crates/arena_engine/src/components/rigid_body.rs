//! Rigid body component

use crate::ecs::Component;
use crate::foundation::math::Vec3;

/// Linear motion state of an entity.
///
/// Acceleration is a per-frame impulse: the integrator applies
/// `velocity += acceleration` once per frame, unscaled by delta time. This
/// matches the original game's tuning and is preserved deliberately.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RigidBody {
    /// Velocity in world units per second
    pub velocity: Vec3,
    /// Per-frame velocity impulse
    pub acceleration: Vec3,
}

impl Component for RigidBody {}

impl RigidBody {
    /// Create a body with an initial velocity and no pending impulse
    pub fn with_velocity(velocity: Vec3) -> Self {
        Self {
            velocity,
            acceleration: Vec3::zeros(),
        }
    }
}
