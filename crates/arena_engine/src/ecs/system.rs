//! System scheduling contract

use crate::message::{Message, MessageBus};

use super::entity::{EntityId, EntityState};
use super::signature::Signature;
use super::world::World;

/// The polymorphic interface every gameplay system implements.
///
/// A system declares the signature bits it requires; the default `update`
/// walks every entity in ascending id order and dispatches
/// [`System::handle_entity`] for each Active entity whose signature contains
/// the system's. Systems may override `update` to add pre-/post-pass work
/// around the same loop, but the ascending-id visit order must be kept:
/// physics resolves lower-id entities first, so higher-id entities within
/// the same frame are evaluated against already-updated positions.
pub trait System {
    /// Signature bits an entity must carry for this system to visit it
    fn signature(&self) -> Signature;

    /// React to one message from the current frame's batch.
    ///
    /// Delivery is broadcast: every system sees every message and decides
    /// relevance internally. The default implementation ignores everything.
    fn handle_message(&mut self, _world: &mut World, _bus: &mut MessageBus, _message: Message) {}

    /// Per-entity update logic, invoked by [`System::update`]
    fn handle_entity(
        &mut self,
        world: &mut World,
        bus: &mut MessageBus,
        entity: EntityId,
        delta_time: f32,
    );

    /// Per-frame update: dispatch `handle_entity` over matching entities
    fn update(&mut self, world: &mut World, bus: &mut MessageBus, delta_time: f32) {
        let required = self.signature();
        for entity in 0..world.entities.num_entities() {
            if world.entities.state(entity) == EntityState::Active
                && world.entities.signature(entity).contains(required)
            {
                self.handle_entity(world, bus, entity, delta_time);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{RigidBody, Transform};

    struct Recorder {
        required: Signature,
        visited: Vec<EntityId>,
    }

    impl System for Recorder {
        fn signature(&self) -> Signature {
            self.required
        }

        fn handle_entity(
            &mut self,
            _world: &mut World,
            _bus: &mut MessageBus,
            entity: EntityId,
            _delta_time: f32,
        ) {
            self.visited.push(entity);
        }
    }

    fn physics_entity(world: &mut World, id: EntityId) {
        world
            .assemble(id)
            .with(Transform::default())
            .with(RigidBody::default())
            .signature(Signature::PHYSICS)
            .build();
    }

    #[test]
    fn update_visits_matching_entities_in_id_order() {
        let mut world = World::new(5);
        let mut bus = MessageBus::new(4);
        physics_entity(&mut world, 3);
        physics_entity(&mut world, 1);
        physics_entity(&mut world, 4);

        let mut recorder = Recorder {
            required: Signature::PHYSICS,
            visited: Vec::new(),
        };
        recorder.update(&mut world, &mut bus, 0.016);
        assert_eq!(recorder.visited, vec![1, 3, 4]);
    }

    #[test]
    fn update_skips_inactive_and_mismatched() {
        let mut world = World::new(4);
        let mut bus = MessageBus::new(4);
        physics_entity(&mut world, 0);
        physics_entity(&mut world, 1);
        world.entities.set_state(1, EntityState::Inactive);
        // Entity 2 has some other signature entirely.
        world.assemble(2).signature(Signature::empty()).build();

        let mut recorder = Recorder {
            required: Signature::PHYSICS,
            visited: Vec::new(),
        };
        recorder.update(&mut world, &mut bus, 0.016);
        assert_eq!(recorder.visited, vec![0]);
    }

    #[test]
    fn partial_signature_match_is_not_enough() {
        let mut world = World::new(2);
        let mut bus = MessageBus::new(4);
        physics_entity(&mut world, 0);

        let mut recorder = Recorder {
            required: Signature::PHYSICS | Signature::AI,
            visited: Vec::new(),
        };
        recorder.update(&mut world, &mut bus, 0.016);
        assert!(recorder.visited.is_empty());
    }
}
