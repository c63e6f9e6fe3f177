//! Physics and collision integration
//!
//! [`sweep`] holds the pure swept-AABB math; [`PhysicsSystem`] ties it into
//! the scheduling contract: integrate velocity, broadphase-prune candidate
//! pairs, resolve the earliest time of impact, slide along the contact
//! plane, and emit collision messages for the tag pairs gameplay cares
//! about.

pub mod sweep;
mod system;

pub use sweep::{broadphase_volume, sweep_aabb, Aabb, SweepHit};
pub use system::PhysicsSystem;
