//! Player state component

use crate::ecs::Component;
use crate::foundation::math::Vec3;

/// Game state machine driven by the player input system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    /// Waiting for the player to start the round
    #[default]
    Init,
    /// Round in progress
    Running,
    /// Round over (won or lost); waiting for restart
    GameOver,
}

/// Control and game state of the player entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerInput {
    /// Current state machine phase
    pub state: PlayerState,
    /// Enemies hit this round
    pub score: u32,
    /// Seconds left in the round
    pub timer: f32,
    /// Look yaw in degrees (rotation about Y)
    pub yaw: f32,
    /// Look pitch in degrees (rotation about X), clamped by the input system
    pub pitch: f32,
    /// Position snapshot taken at level setup, restored on restart
    pub initial_position: Vec3,
}

impl Component for PlayerInput {}

impl Default for PlayerInput {
    fn default() -> Self {
        Self {
            state: PlayerState::Init,
            score: 0,
            timer: 0.0,
            yaw: 0.0,
            pitch: 0.0,
            initial_position: Vec3::zeros(),
        }
    }
}
