//! Entity-component architecture
//!
//! Fixed-capacity entity table, type-indexed dense component storage, and
//! the bitmask-signature scheduling contract every gameplay system
//! implements.

pub mod component;
pub mod entity;
pub mod scheduler;
pub mod signature;
pub mod system;
pub mod world;

pub use component::{Component, ComponentStore};
pub use entity::{EntityId, EntityRegistry, EntityState};
pub use scheduler::Scheduler;
pub use signature::Signature;
pub use system::System;
pub use world::{EntityBuilder, World};
