//! Gameplay systems layered on the scheduling contract

pub mod ai;
pub mod player;

pub use ai::AiSystem;
pub use player::PlayerInputSystem;
