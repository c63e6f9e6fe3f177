//! Physics system: per-entity integration and collision resolution

use crate::components::{BoundingBox, RigidBody, Transform};
use crate::ecs::{EntityId, EntityState, Signature, System, World};
use crate::foundation::math::Vec3;
use crate::message::{Message, MessageBus};

use super::sweep::{broadphase_volume, sweep_aabb, Aabb};

/// Velocity integrator and swept-AABB collision resolver.
///
/// Entities carrying only the PHYSICS bit integrate freely; those also
/// carrying COLLISION are swept against every other active collidable and
/// stopped (sliding along the contact plane) at the earliest time of
/// impact. Entities are processed in ascending id order, so a lower-id
/// mover settles its position before higher-id movers are tested against
/// it within the same frame.
pub struct PhysicsSystem;

impl PhysicsSystem {
    /// Create the physics system
    pub fn new() -> Self {
        Self
    }
}

impl Default for PhysicsSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Earliest accepted impact while scanning candidate pairs
struct Impact {
    entry_time: f32,
    normal: Vec3,
    other: EntityId,
}

impl System for PhysicsSystem {
    fn signature(&self) -> Signature {
        Signature::PHYSICS
    }

    fn handle_entity(
        &mut self,
        world: &mut World,
        bus: &mut MessageBus,
        entity: EntityId,
        delta_time: f32,
    ) {
        let mut body = *world.components.get::<RigidBody>(entity);
        // Acceleration is a per-frame impulse, deliberately unscaled by
        // delta time.
        body.velocity += body.acceleration;

        let mut transform = *world.components.get::<Transform>(entity);
        let displacement = body.velocity * delta_time;

        let impact = if world
            .entities
            .signature(entity)
            .contains(Signature::COLLISION)
        {
            find_earliest_impact(world, entity, transform.position, displacement)
        } else {
            None
        };

        match impact {
            Some(impact) => {
                // Slide response: drop the motion component along the
                // contact normal and advance only to the time of impact.
                let slide = body.velocity - impact.normal * body.velocity.dot(&impact.normal);
                transform.position += slide * impact.entry_time * delta_time;
                post_collision_message(world, bus, entity, impact.other);
            }
            None => {
                transform.position += displacement;
            }
        }

        *world.components.get_mut::<Transform>(entity) = transform;
        *world.components.get_mut::<RigidBody>(entity) = body;
    }
}

fn aabb_of(world: &World, entity: EntityId, position: Vec3) -> Aabb {
    let bounding_box = world.components.get::<BoundingBox>(entity);
    Aabb::new(position, bounding_box.half_extents())
}

/// Sweep `entity` against every other active collidable, keeping the
/// earliest accepted entry time. Broadphase: swept-volume overlap on all
/// three axes.
fn find_earliest_impact(
    world: &World,
    entity: EntityId,
    position: Vec3,
    displacement: Vec3,
) -> Option<Impact> {
    let moving = aabb_of(world, entity, position);
    let swept = broadphase_volume(&moving, displacement);

    let mut earliest: Option<Impact> = None;
    for other in 0..world.entities.num_entities() {
        if other == entity
            || world.entities.state(other) != EntityState::Active
            || !world
                .entities
                .signature(other)
                .contains(Signature::COLLISION)
        {
            continue;
        }
        let target = aabb_of(world, other, world.components.get::<Transform>(other).position);
        if !swept.overlaps(&target) {
            continue;
        }
        if let Some(hit) = sweep_aabb(&moving, displacement, &target) {
            let is_earlier = earliest
                .as_ref()
                .map_or(hit.entry_time < 1.0, |best| hit.entry_time < best.entry_time);
            if is_earlier {
                earliest = Some(Impact {
                    entry_time: hit.entry_time,
                    normal: hit.normal,
                    other,
                });
            }
        }
    }
    earliest
}

/// Gameplay only reacts to two pairings: an enemy running into a side wall
/// and a bullet striking an enemy. Everything else resolves silently.
fn post_collision_message(world: &World, bus: &mut MessageBus, mover: EntityId, other: EntityId) {
    let mover_tag = world.entities.tag(mover).unwrap_or("");
    let other_tag = world.entities.tag(other).unwrap_or("");

    let enemy_into_wall = mover_tag == "enemy" && other_tag == "side_wall";
    let bullet_into_enemy = mover_tag.starts_with("bullet") && other_tag == "enemy";
    if enemy_into_wall || bullet_into_enemy {
        log::debug!("collision: {mover} ({mover_tag}) into {other} ({other_tag})");
        bus.post(Message::collision(mover, other));
    }
}
