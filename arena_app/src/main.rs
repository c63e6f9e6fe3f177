//! Arena shooter demo application
//!
//! Headless host loop around the simulation core: builds the arena, wires
//! the systems in canonical order, and drives a scripted play session at a
//! fixed frame rate. A windowed host would replace the script with real
//! GLFW callbacks writing into the same [`InputMap`].

mod level;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use arena_engine::foundation::logging;
use arena_engine::foundation::time::{FrameLimiter, Timer};
use arena_engine::prelude::*;
use arena_engine::render::{collect_labels, collect_quads};

const MS_PER_FRAME: u64 = 16;
const MAX_FRAMES: u64 = 1200;

/// Host-side system that latches the Quit message so the outer loop can
/// exit; the core itself never terminates the process.
struct QuitWatcher {
    requested: Rc<Cell<bool>>,
}

impl System for QuitWatcher {
    fn signature(&self) -> Signature {
        Signature::empty()
    }

    fn handle_message(&mut self, _world: &mut World, _bus: &mut MessageBus, message: Message) {
        if message.message_type == MessageType::Quit {
            self.requested.set(true);
        }
    }

    fn handle_entity(
        &mut self,
        _world: &mut World,
        _bus: &mut MessageBus,
        _entity: EntityId,
        _delta_time: f32,
    ) {
    }

    fn update(&mut self, _world: &mut World, _bus: &mut MessageBus, _delta_time: f32) {}
}

/// Scripted stand-in for a human at the keyboard: start the round, pan the
/// view while holding fire, then quit.
fn script_inputs(frame: u64, input: &Rc<RefCell<InputMap>>) {
    let mut input = input.borrow_mut();
    match frame {
        30 => input.set_pressed(KeyCode::Enter, true),
        32 => input.set_pressed(KeyCode::Enter, false),
        60 => input.set_pressed(KeyCode::Space, true),
        1000 => input.set_pressed(KeyCode::Escape, true),
        _ => {}
    }
    if frame >= 60 {
        // Slow horizontal sweep so the spray covers the patrol lanes.
        input.set_mouse_pos(((frame - 60) as f64) * 0.4, 240.0);
    }
}

fn main() {
    logging::init();

    let config = match GameConfig::load("config.toml") {
        Ok(config) => config,
        Err(error) => {
            log::warn!("using default config: {error}");
            GameConfig::default()
        }
    };

    let mut world = World::new(config.world.max_entities);
    let mut bus = MessageBus::new(config.world.max_messages);
    level::generate(&mut world, &config);

    let input = Rc::new(RefCell::new(InputMap::new()));
    let quit = Rc::new(Cell::new(false));

    let mut scheduler = Scheduler::new();
    scheduler.register(Box::new(AiSystem::new()));
    scheduler.register(Box::new(PlayerInputSystem::new(
        Rc::clone(&input),
        config.player.clone(),
    )));
    scheduler.register(Box::new(PhysicsSystem::new()));
    scheduler.register(Box::new(QuitWatcher {
        requested: Rc::clone(&quit),
    }));

    let mut timer = Timer::new();
    let mut limiter = FrameLimiter::new(MS_PER_FRAME);
    let mut frame: u64 = 0;

    log::info!("arena demo starting");
    while !quit.get() && frame < MAX_FRAMES {
        limiter.begin_frame();
        timer.update();

        script_inputs(frame, &input);
        scheduler.run_frame(&mut world, &mut bus, timer.delta_time());

        // A windowed host would hand these snapshots to the renderer here.
        let _quads = collect_quads(&world);
        let _labels = collect_labels(&world);

        limiter.end_frame();
        frame += 1;
    }

    let player = world.entities.entity_by_tag("player");
    let state = *world.components.get::<PlayerInput>(player);
    log::info!(
        "arena demo finished after {frame} frames: score {}, state {:?}",
        state.score,
        state.state
    );
}
