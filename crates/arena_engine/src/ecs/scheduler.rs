//! Frame scheduler
//!
//! Owns the registered systems and runs one logical tick: drain the message
//! bus to every system, then run each system's update to completion in
//! registration order. Strictly single-threaded; component arrays are shared
//! mutable state and are safe only because nothing here preempts.

use crate::message::MessageBus;

use super::system::System;
use super::world::World;

/// Registration-ordered collection of systems plus the frame-step driver.
#[derive(Default)]
pub struct Scheduler {
    systems: Vec<Box<dyn System>>,
}

impl Scheduler {
    /// Create an empty scheduler
    pub fn new() -> Self {
        Self {
            systems: Vec::new(),
        }
    }

    /// Register a system. Registration order is update order; the caller
    /// decides it once (AI, player input, physics is the usual order).
    pub fn register(&mut self, system: Box<dyn System>) {
        self.systems.push(system);
    }

    /// Deliver the current message batch to every system, FIFO, broadcast.
    ///
    /// Messages posted by handlers during delivery are deferred to the next
    /// frame's batch by the bus.
    pub fn dispatch_messages(&mut self, world: &mut World, bus: &mut MessageBus) {
        let batch = bus.take_batch();
        for message in &batch {
            for system in &mut self.systems {
                system.handle_message(world, bus, *message);
            }
        }
        bus.recycle_batch(batch);
    }

    /// Run one frame: drain messages, then update every system in order
    pub fn run_frame(&mut self, world: &mut World, bus: &mut MessageBus, delta_time: f32) {
        self.dispatch_messages(world, bus);
        for system in &mut self.systems {
            system.update(world, bus, delta_time);
        }
    }
}
