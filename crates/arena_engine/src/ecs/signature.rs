//! System signature bitmasks
//!
//! An entity's signature encodes which systems apply to it. The invariant:
//! a bit is set if and only if every component that system reads is attached
//! and populated. Systems trust the bitmask and never re-check component
//! presence; [`crate::ecs::world::EntityBuilder`] validates the invariant
//! once when an entity is assembled.

use bitflags::bitflags;

bitflags! {
    /// Bitmask identifying which systems' required-component sets an entity
    /// satisfies.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Signature: u32 {
        /// Sprite animation frame advance
        const ANIMATION    = 0x0000_0001;
        /// Enemy patrol / death / respawn logic
        const AI           = 0x0000_0002;
        /// Velocity integration
        const PHYSICS      = 0x0000_0004;
        /// Swept-AABB collision participation
        const COLLISION    = 0x0000_0008;
        /// Player input handling and game state machine
        const PLAYER_INPUT = 0x0000_0010;
        /// World-space quad rendering (consumed by the render collaborator)
        const RENDER       = 0x0000_0020;
        /// Screen-space text rendering (consumed by the render collaborator)
        const HUD          = 0x0000_0040;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_requires_all_bits() {
        let entity = Signature::PHYSICS | Signature::COLLISION | Signature::RENDER;
        assert!(entity.contains(Signature::PHYSICS | Signature::COLLISION));
        assert!(!entity.contains(Signature::PHYSICS | Signature::AI));
    }

    #[test]
    fn default_is_empty() {
        assert!(Signature::default().is_empty());
    }
}
