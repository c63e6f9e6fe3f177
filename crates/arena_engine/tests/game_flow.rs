//! End-to-end simulation tests: full scheduler frames over a small arena,
//! exercising the message round-trips between physics, AI, and the player
//! system.

use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_relative_eq;
use arena_engine::prelude::*;

const PLAYER: EntityId = 0;
const ENEMY: EntityId = 1;
const LEFT_WALL: EntityId = 2;
const RIGHT_WALL: EntityId = 3;
const WIN_BANNER: EntityId = 4;
const LOSE_BANNER: EntityId = 5;
const FIRST_BULLET: EntityId = 6;

struct Arena {
    world: World,
    bus: MessageBus,
    scheduler: Scheduler,
    input: Rc<RefCell<InputMap>>,
}

/// Build a one-enemy arena and register AI, player, and physics in the
/// canonical order.
fn arena(config: PlayerConfig, enemy_speed: f32) -> Arena {
    let mut world = World::new(16);
    let bus = MessageBus::new(64);

    world
        .assemble(PLAYER)
        .with(Transform::at(Vec3::new(0.0, 1.0, 8.0)))
        .with(RigidBody::default())
        .with(PlayerInput {
            initial_position: Vec3::new(0.0, 1.0, 8.0),
            ..Default::default()
        })
        .tag("player")
        .signature(Signature::PLAYER_INPUT | Signature::PHYSICS)
        .build();

    let enemy_home = Vec3::new(0.0, 1.0, 0.0);
    world
        .assemble(ENEMY)
        .with(Transform::at(enemy_home))
        .with(RigidBody::with_velocity(Vec3::new(enemy_speed, 0.0, 0.0)))
        .with(BoundingBox::new(Vec3::new(1.0, 2.0, 1.0)))
        .with(AiData {
            speed: enemy_speed,
            alive: true,
            initial_height: 1.0,
            initial_position: enemy_home,
            initial_rotation: Vec3::zeros(),
        })
        .with(Animation::new(0.25, 2))
        .with(Texture::default())
        .tag("enemy")
        .signature(Signature::AI | Signature::PHYSICS | Signature::COLLISION)
        .build();

    for (id, x) in [(LEFT_WALL, -16.0), (RIGHT_WALL, 16.0)] {
        world
            .assemble(id)
            .with(Transform::at(Vec3::new(x, 2.0, 0.0)))
            .with(BoundingBox::new(Vec3::new(1.0, 4.0, 40.0)))
            .tag("side_wall")
            .signature(Signature::COLLISION)
            .build();
    }

    for (id, tag) in [(WIN_BANNER, "win"), (LOSE_BANNER, "lose")] {
        world.assemble(id).tag(tag).build();
        world.entities.set_state(id, EntityState::Inactive);
    }

    for slot in 0..config.num_bullets {
        let id = FIRST_BULLET + slot;
        world
            .assemble(id)
            .with(Transform::default())
            .with(RigidBody::default())
            .with(BoundingBox::new(Vec3::new(0.2, 0.2, 0.2)))
            .tag(format!("bullet_{slot}"))
            .build();
        world.entities.set_state(id, EntityState::Inactive);
    }

    let input = Rc::new(RefCell::new(InputMap::new()));
    let mut scheduler = Scheduler::new();
    scheduler.register(Box::new(AiSystem::new()));
    scheduler.register(Box::new(PlayerInputSystem::new(
        Rc::clone(&input),
        config,
    )));
    scheduler.register(Box::new(PhysicsSystem::new()));

    Arena {
        world,
        bus,
        scheduler,
        input,
    }
}

fn press(arena: &Arena, key: KeyCode) {
    arena.input.borrow_mut().set_pressed(key, true);
}

fn release(arena: &Arena, key: KeyCode) {
    arena.input.borrow_mut().set_pressed(key, false);
}

fn frame(arena: &mut Arena, delta_time: f32) {
    arena
        .scheduler
        .run_frame(&mut arena.world, &mut arena.bus, delta_time);
}

/// Press Enter for one frame so the round is Running.
fn start_round(arena: &mut Arena, delta_time: f32) {
    press(arena, KeyCode::Enter);
    frame(arena, delta_time);
    release(arena, KeyCode::Enter);
}

#[test]
fn enemy_reverses_off_the_side_wall() {
    let mut arena = arena(PlayerConfig::default(), 2.0);
    arena.world.components.get_mut::<Transform>(ENEMY).position.x = 14.0;

    // Face gap to the right wall is 1.0; a displacement of 2.0 impacts at
    // t=0.5 and the slide response cancels all X motion, so the enemy holds
    // position this frame while the collision message goes out.
    frame(&mut arena, 1.0);
    let position = arena.world.components.get::<Transform>(ENEMY).position;
    assert_relative_eq!(position.x, 14.0);
    assert_eq!(arena.bus.pending_len(), 1);

    // Next frame the AI system reverses the patrol, then physics moves the
    // enemy back out.
    frame(&mut arena, 1.0);
    let body = arena.world.components.get::<RigidBody>(ENEMY);
    assert_relative_eq!(body.velocity.x, -2.0);
    let position = arena.world.components.get::<Transform>(ENEMY).position;
    assert_relative_eq!(position.x, 12.0);
}

#[test]
fn bullet_kills_enemy_and_wins_the_round() {
    let config = PlayerConfig {
        win_score: 1,
        ..Default::default()
    };
    let mut arena = arena(config, 0.0);
    let dt = 0.05;

    start_round(&mut arena, dt);
    press(&mut arena, KeyCode::Space);

    // Bullet launches from the player at z=8 toward -Z at 30 u/s; the enemy
    // face sits at z=0.5, so impact lands within a handful of frames.
    for _ in 0..10 {
        frame(&mut arena, dt);
        if arena.world.entities.state(ENEMY) == EntityState::Inactive {
            break;
        }
    }

    assert_eq!(arena.world.entities.state(ENEMY), EntityState::Inactive);
    assert!(!arena.world.components.get::<AiData>(ENEMY).alive);
    assert_eq!(
        arena.world.entities.state(FIRST_BULLET),
        EntityState::Inactive
    );

    let player = arena.world.components.get::<PlayerInput>(PLAYER);
    assert_eq!(player.score, 1);
    assert_eq!(player.state, PlayerState::GameOver);
    assert_eq!(arena.world.entities.state(WIN_BANNER), EntityState::Active);
    assert_eq!(
        arena.world.entities.state(LOSE_BANNER),
        EntityState::Inactive
    );
}

#[test]
fn running_out_the_clock_loses_without_winning() {
    let config = PlayerConfig {
        round_time: 1.0,
        ..Default::default()
    };
    let mut arena = arena(config, 0.0);

    start_round(&mut arena, 0.016);
    frame(&mut arena, 2.0);

    let player = arena.world.components.get::<PlayerInput>(PLAYER);
    assert_eq!(player.state, PlayerState::GameOver);
    assert_eq!(player.timer, 0.0);
    assert_eq!(arena.world.entities.state(LOSE_BANNER), EntityState::Active);
    assert_eq!(
        arena.world.entities.state(WIN_BANNER),
        EntityState::Inactive
    );
}

#[test]
fn restart_rebuilds_the_round_from_snapshots() {
    let config = PlayerConfig {
        win_score: 1,
        ..Default::default()
    };
    let mut arena = arena(config, 0.0);
    let dt = 0.05;

    start_round(&mut arena, dt);
    press(&mut arena, KeyCode::Space);
    for _ in 0..10 {
        frame(&mut arena, dt);
        if arena.world.components.get::<PlayerInput>(PLAYER).state == PlayerState::GameOver {
            break;
        }
    }
    release(&mut arena, KeyCode::Space);
    assert_eq!(
        arena.world.components.get::<PlayerInput>(PLAYER).state,
        PlayerState::GameOver
    );

    // R restarts; the Restart broadcast reaches the AI system one frame
    // later and revives the enemy from its setup snapshot.
    press(&mut arena, KeyCode::R);
    frame(&mut arena, dt);
    release(&mut arena, KeyCode::R);
    frame(&mut arena, dt);

    let player = arena.world.components.get::<PlayerInput>(PLAYER);
    assert_eq!(player.state, PlayerState::Running);
    assert_eq!(player.score, 0);
    assert_eq!(
        arena.world.components.get::<Transform>(PLAYER).position,
        Vec3::new(0.0, 1.0, 8.0)
    );
    assert_eq!(
        arena.world.entities.state(WIN_BANNER),
        EntityState::Inactive
    );

    assert_eq!(arena.world.entities.state(ENEMY), EntityState::Active);
    assert!(arena.world.components.get::<AiData>(ENEMY).alive);
    let enemy_position = arena.world.components.get::<Transform>(ENEMY).position;
    assert_eq!(enemy_position, Vec3::new(0.0, 1.0, 0.0));

    assert_eq!(
        arena.world.entities.state(FIRST_BULLET),
        EntityState::Inactive
    );
}

#[test]
fn distant_entities_exchange_no_messages() {
    let mut arena = arena(PlayerConfig::default(), 2.0);

    // Patrolling in open space: several frames, not a single message.
    for _ in 0..5 {
        frame(&mut arena, 0.016);
    }
    assert_eq!(arena.bus.pending_len(), 0);
    assert!(arena.world.components.get::<RigidBody>(ENEMY).velocity.x > 0.0);
}

#[test]
fn diagonal_motion_slides_along_the_wall_plane() {
    let mut arena = arena(PlayerConfig::default(), 0.0);
    // Aim the enemy diagonally at the right wall: face gap 15.0 on X with
    // displacement 30, so impact lands at t=0.5; Z motion survives.
    {
        let transform = arena.world.components.get_mut::<Transform>(ENEMY);
        transform.position = Vec3::new(0.0, 2.0, 0.0);
        let body = arena.world.components.get_mut::<RigidBody>(ENEMY);
        body.velocity = Vec3::new(30.0, 0.0, 4.0);
    }

    frame(&mut arena, 1.0);

    let position = arena.world.components.get::<Transform>(ENEMY).position;
    assert_relative_eq!(position.x, 0.0);
    assert_relative_eq!(position.z, 2.0);
}
