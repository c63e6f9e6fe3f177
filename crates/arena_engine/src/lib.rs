//! # Arena Engine
//!
//! Simulation core for a small first-person arena shooter: a fixed-capacity
//! entity-component architecture, a frame-batched message bus, a swept-AABB
//! physics integrator, and the reactive AI / player systems built on top.
//!
//! The core is strictly single-threaded and frame-stepped: the host loop
//! drains the message bus, then runs every system to completion in a fixed
//! order. Window management, rendering, and level generation are external
//! collaborators that talk to the core through the narrow interfaces in
//! [`input`] and [`render`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use arena_engine::prelude::*;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let config = GameConfig::default();
//! let mut world = World::new(config.world.max_entities);
//! let mut bus = MessageBus::new(config.world.max_messages);
//! let input = Rc::new(RefCell::new(InputMap::new()));
//!
//! let mut scheduler = Scheduler::new();
//! scheduler.register(Box::new(AiSystem::new()));
//! scheduler.register(Box::new(PlayerInputSystem::new(input, config.player.clone())));
//! scheduler.register(Box::new(PhysicsSystem::new()));
//!
//! // ... level generation populates `world` here ...
//!
//! loop {
//!     let delta_time = 0.016;
//!     scheduler.run_frame(&mut world, &mut bus, delta_time);
//! }
//! ```

#![warn(missing_docs)]

pub mod components;
pub mod config;
pub mod ecs;
pub mod foundation;
pub mod input;
pub mod message;
pub mod physics;
pub mod render;
pub mod systems;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        components::{
            AiData, Animation, BoundingBox, Label, PlayerInput, PlayerState, Quad, RigidBody,
            Texture, Transform,
        },
        config::{ConfigError, EnemyConfig, GameConfig, PlayerConfig, WorldConfig},
        ecs::{
            Component, EntityId, EntityState, Scheduler, Signature, System, World,
        },
        foundation::math::{Vec2, Vec3},
        input::{InputMap, InputSource, KeyCode},
        message::{Message, MessageBus, MessageType},
        physics::PhysicsSystem,
        systems::{AiSystem, PlayerInputSystem},
    };
}
