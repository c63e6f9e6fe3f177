//! Enemy AI system
//!
//! Reactive patrol logic: enemies cruise along X at constant speed and the
//! physics system reports wall contacts on the bus; this system reverses
//! them, kills them when a bullet connects, and restores everything from
//! the per-entity setup snapshots on restart.

use crate::components::{AiData, Animation, RigidBody, Texture, Transform};
use crate::ecs::{EntityId, EntityState, Signature, System, World};
use crate::message::{Message, MessageBus, MessageType};

// Atlas layout constants: one 64px frame step per animation tick, facing
// rows at x = 0 (right) and x = 128 (left).
const FRAME_STEP_PX: f32 = 64.0;
const FACING_RIGHT_PX: f32 = 0.0;
const FACING_LEFT_PX: f32 = 128.0;

/// Enemy patrol / death / respawn state machine.
///
/// Per-enemy tunables (patrol speed, frame interval) live in [`AiData`] and
/// [`Animation`], captured at spawn time, so the system itself is stateless.
#[derive(Debug, Default)]
pub struct AiSystem;

impl AiSystem {
    /// Create the AI system
    pub fn new() -> Self {
        Self
    }

    fn reverse_patrol(&self, world: &mut World, enemy: EntityId) {
        let body = world.components.get_mut::<RigidBody>(enemy);
        body.velocity.x = -body.velocity.x;
        let facing = if body.velocity.x > 0.0 {
            FACING_RIGHT_PX
        } else {
            FACING_LEFT_PX
        };
        world.components.get_mut::<Texture>(enemy).position.x = facing;
    }

    fn kill(&self, world: &mut World, enemy: EntityId) {
        world.components.get_mut::<AiData>(enemy).alive = false;
        world.entities.set_state(enemy, EntityState::Inactive);
        log::info!("enemy {enemy} down");
    }

    /// Reset every AI entity (including dead, Inactive ones) to its setup
    /// snapshot. Runs on Restart, which is why the scan cannot go through
    /// the active-only update loop.
    fn respawn_all(&self, world: &mut World) {
        for entity in 0..world.entities.num_entities() {
            if !world.entities.signature(entity).contains(Signature::AI) {
                continue;
            }
            let ai = *world.components.get::<AiData>(entity);
            let transform = world.components.get_mut::<Transform>(entity);
            transform.position = ai.initial_position;
            transform.position.y = ai.initial_height;
            transform.rotation = ai.initial_rotation;

            let body = world.components.get_mut::<RigidBody>(entity);
            body.velocity.x = ai.speed;
            body.velocity.y = 0.0;
            body.velocity.z = 0.0;

            let animation = world.components.get_mut::<Animation>(entity);
            animation.counter = 0.0;
            animation.current_frame = 0;
            let texture = world.components.get_mut::<Texture>(entity);
            texture.position.x = FACING_RIGHT_PX;

            world.components.get_mut::<AiData>(entity).alive = true;
            world.entities.set_state(entity, EntityState::Active);
        }
        log::info!("AI entities respawned");
    }
}

impl System for AiSystem {
    fn signature(&self) -> Signature {
        Signature::AI
    }

    fn handle_message(&mut self, world: &mut World, _bus: &mut MessageBus, message: Message) {
        match message.message_type {
            MessageType::Collision => {
                let (mover, other) = message.collision_pair();
                let mover_tag = world.entities.tag(mover).unwrap_or("").to_string();
                let other_tag = world.entities.tag(other).unwrap_or("");
                if mover_tag == "enemy" && other_tag == "side_wall" {
                    self.reverse_patrol(world, mover);
                } else if mover_tag.starts_with("bullet") && other_tag == "enemy" {
                    self.kill(world, other);
                }
            }
            MessageType::Restart => self.respawn_all(world),
            _ => {}
        }
    }

    fn handle_entity(
        &mut self,
        world: &mut World,
        _bus: &mut MessageBus,
        entity: EntityId,
        delta_time: f32,
    ) {
        // Animation frame advance, gated by the accumulating counter. The
        // patrol motion itself is carried by the physics system; this system
        // only reacts to collision feedback.
        let mut animation = *world.components.get::<Animation>(entity);
        animation.counter += delta_time;
        if animation.counter > animation.frame_interval {
            animation.current_frame += 1;
            let moving_right = world.components.get::<RigidBody>(entity).velocity.x > 0.0;
            let texture = world.components.get_mut::<Texture>(entity);
            texture.position.x += FRAME_STEP_PX;
            if animation.current_frame >= animation.num_frames {
                animation.current_frame = 0;
                texture.position.x = if moving_right {
                    FACING_RIGHT_PX
                } else {
                    FACING_LEFT_PX
                };
            }
            animation.counter = 0.0;
        }
        *world.components.get_mut::<Animation>(entity) = animation;
    }
}
