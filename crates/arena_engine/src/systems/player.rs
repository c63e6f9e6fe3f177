//! Player input system
//!
//! Turns host input into player motion and owns the round state machine:
//! Init until the player presses Enter, Running while the round timer
//! counts down, GameOver once the round is won or lost. The input
//! collaborator is injected as a shared handle; the system never touches
//! OS events directly.

use std::cell::RefCell;
use std::rc::Rc;

use crate::components::{PlayerInput, PlayerState, RigidBody, Transform};
use crate::config::PlayerConfig;
use crate::ecs::{EntityId, EntityState, Signature, System, World};
use crate::foundation::math::{rotate_euler_deg, Vec3};
use crate::input::{InputSource, KeyCode};
use crate::message::{Message, MessageBus, MessageType};

/// Input-to-motion system and round state machine.
pub struct PlayerInputSystem<I: InputSource> {
    input: Rc<RefCell<I>>,
    config: PlayerConfig,
    // Established on the first update pass; message handlers use it instead
    // of a per-message tag scan.
    player_entity: Option<EntityId>,
    prev_mouse: Option<(f64, f64)>,
    shoot_timer: f32,
    next_bullet: u32,
    zoom_on: bool,
    xray_on: bool,
    zoom_held: bool,
    xray_held: bool,
}

impl<I: InputSource> PlayerInputSystem<I> {
    /// Create the player system with its input handle and tunables
    pub fn new(input: Rc<RefCell<I>>, config: PlayerConfig) -> Self {
        Self {
            input,
            config,
            player_entity: None,
            prev_mouse: None,
            shoot_timer: 0.0,
            next_bullet: 0,
            zoom_on: false,
            xray_on: false,
            zoom_held: false,
            xray_held: false,
        }
    }

    fn start_round(&mut self, world: &mut World, entity: EntityId) {
        let player = world.components.get_mut::<PlayerInput>(entity);
        player.state = PlayerState::Running;
        player.score = 0;
        player.timer = self.config.round_time;
        self.shoot_timer = 0.0;
        // Swallow any mouse travel accumulated before the round began.
        let input = self.input.borrow();
        self.prev_mouse = Some((input.mouse_pos_x(), input.mouse_pos_y()));
        log::info!("round started");
    }

    fn end_round(&self, world: &mut World, entity: EntityId, banner_tag: &str) {
        world.components.get_mut::<PlayerInput>(entity).state = PlayerState::GameOver;
        world.components.get_mut::<RigidBody>(entity).velocity = Vec3::zeros();
        match world.entities.find_by_tag(banner_tag) {
            Some(banner) => world.entities.set_state(banner, EntityState::Active),
            None => log::warn!("no {banner_tag} entity to show"),
        }
        log::info!("round over: {banner_tag}");
    }

    fn restart(&mut self, world: &mut World, bus: &mut MessageBus, entity: EntityId) {
        let mut player = *world.components.get::<PlayerInput>(entity);
        player.state = PlayerState::Running;
        player.score = 0;
        player.timer = self.config.round_time;
        player.yaw = 0.0;
        player.pitch = 0.0;
        *world.components.get_mut::<PlayerInput>(entity) = player;

        let transform = world.components.get_mut::<Transform>(entity);
        transform.position = player.initial_position;
        transform.rotation = Vec3::zeros();
        world.components.get_mut::<RigidBody>(entity).velocity = Vec3::zeros();

        for tag in ["win", "lose"] {
            if let Some(banner) = world.entities.find_by_tag(tag) {
                world.entities.set_state(banner, EntityState::Inactive);
            }
        }
        for slot in 0..self.config.num_bullets {
            if let Some(bullet) = world.entities.find_by_tag(&format!("bullet_{slot}")) {
                world.entities.set_state(bullet, EntityState::Inactive);
            }
        }
        self.shoot_timer = 0.0;
        self.next_bullet = 0;
        let input = self.input.borrow();
        self.prev_mouse = Some((input.mouse_pos_x(), input.mouse_pos_y()));

        bus.post(Message::new(MessageType::Restart, 0));
        log::info!("round restarted");
    }

    fn apply_look(&mut self, player: &mut PlayerInput) {
        let input = self.input.borrow();
        let mouse = (input.mouse_pos_x(), input.mouse_pos_y());
        drop(input);
        if let Some((prev_x, prev_y)) = self.prev_mouse {
            let delta_x = (mouse.0 - prev_x) as f32;
            let delta_y = (mouse.1 - prev_y) as f32;
            player.yaw -= delta_x * self.config.look_sensitivity;
            player.pitch = (player.pitch - delta_y * self.config.look_sensitivity)
                .clamp(-self.config.pitch_limit, self.config.pitch_limit);
        }
        self.prev_mouse = Some(mouse);
    }

    fn apply_movement(&self, world: &mut World, entity: EntityId, yaw: f32) {
        let input = self.input.borrow();
        let mut axis_forward = 0.0;
        let mut axis_right = 0.0;
        if input.is_pressed(KeyCode::W) || input.is_pressed(KeyCode::Up) {
            axis_forward += 1.0;
        }
        if input.is_pressed(KeyCode::S) || input.is_pressed(KeyCode::Down) {
            axis_forward -= 1.0;
        }
        if input.is_pressed(KeyCode::D) || input.is_pressed(KeyCode::Right) {
            axis_right += 1.0;
        }
        if input.is_pressed(KeyCode::A) || input.is_pressed(KeyCode::Left) {
            axis_right -= 1.0;
        }
        drop(input);

        // Movement stays on the XZ plane: only yaw bends it, never pitch.
        let heading = Vec3::new(0.0, yaw, 0.0);
        let forward = rotate_euler_deg(Vec3::new(0.0, 0.0, -1.0), heading);
        let right = rotate_euler_deg(Vec3::new(1.0, 0.0, 0.0), heading);
        let mut direction = forward * axis_forward + right * axis_right;
        if direction.norm() > 0.0 {
            direction = direction.normalize();
        }

        let body = world.components.get_mut::<RigidBody>(entity);
        let velocity = direction * self.config.move_speed;
        body.velocity.x = velocity.x;
        body.velocity.z = velocity.z;
    }

    fn try_fire(&mut self, world: &mut World, entity: EntityId, delta_time: f32) {
        self.shoot_timer = (self.shoot_timer - delta_time).max(0.0);
        if !self.input.borrow().is_pressed(KeyCode::Space) || self.shoot_timer > 0.0 {
            return;
        }
        let tag = format!("bullet_{}", self.next_bullet);
        let Some(bullet) = world.entities.find_by_tag(&tag) else {
            log::warn!("no {tag} entity to fire");
            return;
        };
        self.next_bullet = (self.next_bullet + 1) % self.config.num_bullets.max(1);
        self.shoot_timer = self.config.shoot_cooldown;

        let player = *world.components.get::<PlayerInput>(entity);
        let origin = world.components.get::<Transform>(entity).position;
        let aim = Vec3::new(player.pitch, player.yaw, 0.0);
        let velocity = rotate_euler_deg(Vec3::new(0.0, 0.0, -1.0), aim) * self.config.bullet_speed;

        world.components.get_mut::<Transform>(bullet).position = origin;
        world.components.get_mut::<RigidBody>(bullet).velocity = velocity;
        world
            .entities
            .set_signature(bullet, Signature::PHYSICS | Signature::COLLISION);
        world.entities.set_state(bullet, EntityState::Active);
        log::debug!("fired {tag}");
    }

    fn post_toggles(&mut self, bus: &mut MessageBus) {
        let input = self.input.borrow();
        let zoom_pressed = input.is_pressed(KeyCode::Z);
        let xray_pressed = input.is_pressed(KeyCode::X);
        drop(input);

        if zoom_pressed && !self.zoom_held {
            self.zoom_on = !self.zoom_on;
            bus.post(Message::toggle(MessageType::Zoom, self.zoom_on));
        }
        self.zoom_held = zoom_pressed;

        if xray_pressed && !self.xray_held {
            self.xray_on = !self.xray_on;
            bus.post(Message::toggle(MessageType::Xray, self.xray_on));
        }
        self.xray_held = xray_pressed;
    }

    fn run_frame(
        &mut self,
        world: &mut World,
        bus: &mut MessageBus,
        entity: EntityId,
        delta_time: f32,
    ) {
        let mut player = *world.components.get::<PlayerInput>(entity);
        player.timer -= delta_time;

        self.apply_look(&mut player);
        let transform = world.components.get_mut::<Transform>(entity);
        transform.rotation = Vec3::new(player.pitch, player.yaw, 0.0);

        self.apply_movement(world, entity, player.yaw);
        *world.components.get_mut::<PlayerInput>(entity) = player;
        self.try_fire(world, entity, delta_time);
        self.post_toggles(bus);

        // Win takes priority when both conditions land on the same frame;
        // the round ends exactly once either way.
        let player = *world.components.get::<PlayerInput>(entity);
        if player.score >= self.config.win_score {
            self.end_round(world, entity, "win");
        } else if player.timer <= 0.0 {
            world.components.get_mut::<PlayerInput>(entity).timer = 0.0;
            self.end_round(world, entity, "lose");
        }
    }
}

impl<I: InputSource> System for PlayerInputSystem<I> {
    fn signature(&self) -> Signature {
        Signature::PLAYER_INPUT
    }

    fn handle_message(&mut self, world: &mut World, _bus: &mut MessageBus, message: Message) {
        if message.message_type != MessageType::Collision {
            return;
        }
        let (mover, other) = message.collision_pair();
        let mover_tag = world.entities.tag(mover).unwrap_or("").to_string();
        let other_tag = world.entities.tag(other).unwrap_or("");
        if !(mover_tag.starts_with("bullet") && other_tag == "enemy") {
            return;
        }
        world.entities.set_state(mover, EntityState::Inactive);
        let player_entity = self
            .player_entity
            .or_else(|| world.entities.find_by_tag("player"));
        if let Some(player) = player_entity {
            let data = world.components.get_mut::<PlayerInput>(player);
            if data.state == PlayerState::Running {
                data.score += 1;
                log::info!("score: {}", data.score);
            }
        }
    }

    fn handle_entity(
        &mut self,
        world: &mut World,
        bus: &mut MessageBus,
        entity: EntityId,
        delta_time: f32,
    ) {
        self.player_entity = Some(entity);
        if self.input.borrow().is_pressed(KeyCode::Escape) {
            bus.post(Message::new(MessageType::Quit, 0));
        }

        match world.components.get::<PlayerInput>(entity).state {
            PlayerState::Init => {
                if self.input.borrow().is_pressed(KeyCode::Enter) {
                    self.start_round(world, entity);
                }
            }
            PlayerState::Running => self.run_frame(world, bus, entity, delta_time),
            PlayerState::GameOver => {
                if self.input.borrow().is_pressed(KeyCode::R) {
                    self.restart(world, bus, entity);
                }
            }
        }
    }
}
