//! Sprite animation component

use crate::ecs::Component;

/// Frame-flipping state for an animated texture.
///
/// The counter accumulates delta time; each time it passes
/// `frame_interval` the current frame advances and the texture
/// sub-rectangle steps across the atlas row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Animation {
    /// Accumulated time since the last frame flip, in seconds
    pub counter: f32,
    /// Seconds between frame flips
    pub frame_interval: f32,
    /// Current frame index
    pub current_frame: u32,
    /// Total frames in the atlas row
    pub num_frames: u32,
}

impl Component for Animation {}

impl Animation {
    /// Create an animation with `num_frames` frames flipped every
    /// `frame_interval` seconds
    pub fn new(frame_interval: f32, num_frames: u32) -> Self {
        Self {
            counter: 0.0,
            frame_interval,
            current_frame: 0,
            num_frames,
        }
    }
}
