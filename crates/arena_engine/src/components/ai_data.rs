//! AI state component

use crate::ecs::Component;
use crate::foundation::math::Vec3;

/// Per-enemy AI state plus the setup-time snapshot used for respawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiData {
    /// Patrol speed in world units per second
    pub speed: f32,
    /// Cleared when a bullet connects; restored on restart
    pub alive: bool,
    /// Height the enemy patrols at
    pub initial_height: f32,
    /// Position snapshot taken at level setup
    pub initial_position: Vec3,
    /// Rotation snapshot taken at level setup (Euler degrees)
    pub initial_rotation: Vec3,
}

impl Component for AiData {}

impl Default for AiData {
    fn default() -> Self {
        Self {
            speed: 0.0,
            alive: true,
            initial_height: 0.0,
            initial_position: Vec3::zeros(),
            initial_rotation: Vec3::zeros(),
        }
    }
}
