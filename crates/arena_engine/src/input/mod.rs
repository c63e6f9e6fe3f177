//! Input collaborator boundary
//!
//! The host captures OS key/mouse events and writes them into an
//! [`InputMap`]; the core only ever reads through [`InputSource`]. No
//! module-level singletons: systems that need input receive a shared handle
//! at construction.

use std::collections::HashMap;

/// Keys the game binds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// W key (move forward)
    W,
    /// A key (strafe left)
    A,
    /// S key (move backward)
    S,
    /// D key (strafe right)
    D,
    /// R key (restart after game over)
    R,
    /// Z key (zoom toggle)
    Z,
    /// X key (x-ray toggle)
    X,
    /// Space key (fire)
    Space,
    /// Enter key (start round)
    Enter,
    /// Escape key (quit)
    Escape,
    /// Up arrow (move forward)
    Up,
    /// Down arrow (move backward)
    Down,
    /// Left arrow (strafe left)
    Left,
    /// Right arrow (strafe right)
    Right,
}

/// Read side of the input boundary; everything the core may ask about input.
pub trait InputSource {
    /// Whether `key` is currently held down
    fn is_pressed(&self, key: KeyCode) -> bool;
    /// Mouse cursor X in screen coordinates
    fn mouse_pos_x(&self) -> f64;
    /// Mouse cursor Y in screen coordinates
    fn mouse_pos_y(&self) -> f64;
}

/// Concrete key/mouse state map, written by the host's event callbacks.
#[derive(Debug, Default)]
pub struct InputMap {
    pressed: HashMap<KeyCode, bool>,
    mouse_x: f64,
    mouse_y: f64,
}

impl InputMap {
    /// Create an empty map (no keys pressed, cursor at origin)
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press or release
    pub fn set_pressed(&mut self, key: KeyCode, pressed: bool) {
        self.pressed.insert(key, pressed);
    }

    /// Record the mouse cursor position
    pub fn set_mouse_pos(&mut self, x: f64, y: f64) {
        self.mouse_x = x;
        self.mouse_y = y;
    }
}

impl InputSource for InputMap {
    fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.get(&key).copied().unwrap_or(false)
    }

    fn mouse_pos_x(&self) -> f64 {
        self.mouse_x
    }

    fn mouse_pos_y(&self) -> f64 {
        self.mouse_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_keys_read_as_released() {
        let map = InputMap::new();
        assert!(!map.is_pressed(KeyCode::Space));
    }

    #[test]
    fn press_and_release_round_trip() {
        let mut map = InputMap::new();
        map.set_pressed(KeyCode::W, true);
        assert!(map.is_pressed(KeyCode::W));
        map.set_pressed(KeyCode::W, false);
        assert!(!map.is_pressed(KeyCode::W));
    }

    #[test]
    fn mouse_position_round_trips() {
        let mut map = InputMap::new();
        map.set_mouse_pos(320.5, 240.25);
        assert_eq!(map.mouse_pos_x(), 320.5);
        assert_eq!(map.mouse_pos_y(), 240.25);
    }
}
