//! Arena level generation
//!
//! Assembles the fixed entity roster at startup: the player, the four
//! boundary walls, a handful of patrolling enemies, the recyclable bullet
//! pool, and the HUD labels. Entity slots are allocated once here; play
//! only ever flips them Active/Inactive.

use arena_engine::prelude::*;
use rand::Rng;

/// Enemies spawned into the arena
pub const NUM_ENEMIES: u32 = 4;

const WALL_HEIGHT: f32 = 2.5;
const ENEMY_FRAMES: u32 = 2;

/// Populate `world` with the arena roster. Returns the number of entity
/// slots consumed.
pub fn generate(world: &mut World, config: &GameConfig) -> u32 {
    let mut next_id = 0;
    let mut take = || {
        let id = next_id;
        next_id += 1;
        id
    };

    // Player: first-person viewpoint, collidable so walls contain it.
    let player_home = Vec3::new(0.0, 1.0, 8.0);
    world
        .assemble(take())
        .with(Transform::at(player_home))
        .with(RigidBody::default())
        .with(BoundingBox::new(Vec3::new(2.0, 2.0, 2.0)))
        .with(PlayerInput {
            initial_position: player_home,
            ..Default::default()
        })
        .tag("player")
        .signature(Signature::PLAYER_INPUT | Signature::PHYSICS | Signature::COLLISION)
        .build();

    // Back and front walls span the arena's width.
    for z in [-10.0, 10.0] {
        wall(
            world,
            take(),
            Vec3::new(0.0, 1.25, z),
            Vec3::new(0.0, 0.0, 0.0),
            Vec2::new(32.0, WALL_HEIGHT),
            Vec3::new(32.0, WALL_HEIGHT, 2.0),
            None,
        );
    }

    // Side walls are rotated a quarter turn; enemies bounce between them.
    for x in [16.0, -16.0] {
        wall(
            world,
            take(),
            Vec3::new(x, 1.25, 0.0),
            Vec3::new(0.0, 90.0, 0.0),
            Vec2::new(20.0, WALL_HEIGHT),
            Vec3::new(2.0, WALL_HEIGHT, 20.0),
            Some("side_wall"),
        );
    }

    // HUD: a standing hint plus the win/lose banners, which stay dormant
    // until the round ends.
    hud_label(world, take(), "ENTER TO START", None, EntityState::Active);
    hud_label(world, take(), "YOU WIN", Some("win"), EntityState::Inactive);
    hud_label(world, take(), "YOU LOSE", Some("lose"), EntityState::Inactive);

    let mut rng = rand::thread_rng();
    for _ in 0..NUM_ENEMIES {
        let position = Vec3::new(rng.gen_range(-10.0..10.0), 1.0, rng.gen_range(-8.0..-2.0));
        let speed = if rng.gen_bool(0.5) {
            config.enemy.patrol_speed
        } else {
            -config.enemy.patrol_speed
        };
        enemy(world, take(), position, speed, config.enemy.frame_interval);
    }

    for slot in 0..config.player.num_bullets {
        let id = world
            .assemble(take())
            .with(Transform::default())
            .with(RigidBody::default())
            .with(BoundingBox::new(Vec3::new(0.2, 0.2, 0.2)))
            .tag(format!("bullet_{slot}"))
            .build();
        world.entities.set_state(id, EntityState::Inactive);
    }

    log::info!("level generated: {next_id} entities");
    next_id
}

#[allow(clippy::too_many_arguments)]
fn wall(
    world: &mut World,
    id: EntityId,
    position: Vec3,
    rotation: Vec3,
    face: Vec2,
    extent: Vec3,
    tag: Option<&str>,
) {
    let mut builder = world
        .assemble(id)
        .with(Transform {
            position,
            rotation,
            ..Default::default()
        })
        .with(Quad {
            extent: face,
            ..Default::default()
        })
        .with(Texture {
            texture_index: 2,
            size: Vec2::new(256.0, 256.0),
            color: Vec3::new(0.0, 1.0, 0.0),
            ..Default::default()
        })
        .with(BoundingBox::new(extent))
        .signature(Signature::RENDER | Signature::COLLISION);
    if let Some(tag) = tag {
        builder = builder.tag(tag);
    }
    builder.build();
}

fn enemy(world: &mut World, id: EntityId, position: Vec3, speed: f32, frame_interval: f32) {
    world
        .assemble(id)
        .with(Transform::at(position))
        .with(RigidBody::with_velocity(Vec3::new(speed, 0.0, 0.0)))
        .with(BoundingBox::new(Vec3::new(1.0, 2.0, 1.0)))
        .with(AiData {
            speed,
            alive: true,
            initial_height: position.y,
            initial_position: position,
            initial_rotation: Vec3::zeros(),
        })
        .with(Animation::new(frame_interval, ENEMY_FRAMES))
        .with(Quad {
            extent: Vec2::new(1.0, 2.0),
            ..Default::default()
        })
        .with(Texture {
            texture_index: 1,
            size: Vec2::new(64.0, 128.0),
            color: Vec3::new(1.0, 1.0, 1.0),
            ..Default::default()
        })
        .tag("enemy")
        .signature(
            Signature::AI
                | Signature::PHYSICS
                | Signature::COLLISION
                | Signature::RENDER
                | Signature::ANIMATION,
        )
        .build();
}

fn hud_label(world: &mut World, id: EntityId, text: &str, tag: Option<&str>, state: EntityState) {
    let mut builder = world
        .assemble(id)
        .with(Transform {
            scale: Vec3::new(1.0, 1.0, 1.0),
            ..Default::default()
        })
        .with(Label::new(text, Vec3::new(0.0, 1.0, 0.0)))
        .signature(Signature::HUD);
    if let Some(tag) = tag {
        builder = builder.tag(tag);
    }
    let id = builder.build();
    world.entities.set_state(id, state);
}
