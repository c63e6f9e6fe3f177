//! World: entity registry + component store, and validated entity assembly

use crate::components::{
    AiData, Animation, BoundingBox, Label, PlayerInput, Quad, RigidBody, Texture, Transform,
};

use super::component::{Component, ComponentStore};
use super::entity::{EntityId, EntityRegistry, EntityState};
use super::signature::Signature;

/// All simulation state: the entity table and every component column.
///
/// Both halves are plain data; systems receive `&mut World` for the duration
/// of a single update pass and may not retain borrows across frames.
pub struct World {
    /// Per-entity state, signature, and tag
    pub entities: EntityRegistry,
    /// Dense per-type component storage
    pub components: ComponentStore,
}

impl World {
    /// Create a world with a fixed entity capacity. No growth afterwards.
    pub fn new(capacity: u32) -> Self {
        Self {
            entities: EntityRegistry::new(capacity),
            components: ComponentStore::new(capacity),
        }
    }

    /// Begin assembling the entity in slot `entity`.
    ///
    /// The builder attaches components, tag, and signature together and
    /// validates on [`EntityBuilder::build`] that the signature invariant
    /// holds, so a bitmask can never drift out of sync with the attached
    /// components. Systems trust the bitmask unconditionally afterwards.
    pub fn assemble(&mut self, entity: EntityId) -> EntityBuilder<'_> {
        EntityBuilder {
            world: self,
            entity,
            signature: Signature::empty(),
        }
    }
}

/// Builder for initializing one pre-allocated entity slot at setup time.
pub struct EntityBuilder<'a> {
    world: &'a mut World,
    entity: EntityId,
    signature: Signature,
}

impl EntityBuilder<'_> {
    /// Attach a component.
    ///
    /// # Panics
    /// Panics if the entity already has one of this type.
    pub fn with<T: Component>(self, component: T) -> Self {
        self.world.components.add(self.entity, component);
        self
    }

    /// Set the semantic tag.
    pub fn tag(self, tag: impl Into<String>) -> Self {
        self.world.entities.set_tag(self.entity, tag);
        self
    }

    /// Set the signature bits this entity should carry.
    pub fn signature(mut self, signature: Signature) -> Self {
        self.signature = signature;
        self
    }

    /// Finish assembly: validate the signature, mark the entity Active.
    ///
    /// # Panics
    /// Panics if any signature bit's required components are missing.
    pub fn build(self) -> EntityId {
        self.validate();
        self.world
            .entities
            .set_signature(self.entity, self.signature);
        self.world
            .entities
            .set_state(self.entity, EntityState::Active);
        self.entity
    }

    fn validate(&self) {
        let store = &self.world.components;
        let entity = self.entity;

        let require = |bit: Signature, ok: bool, what: &str| {
            assert!(
                !self.signature.contains(bit) || ok,
                "entity {entity}: signature bit {bit:?} requires {what}"
            );
        };

        require(
            Signature::PHYSICS,
            store.has::<Transform>(entity) && store.has::<RigidBody>(entity),
            "Transform + RigidBody",
        );
        require(
            Signature::COLLISION,
            store.has::<Transform>(entity) && store.has::<BoundingBox>(entity),
            "Transform + BoundingBox",
        );
        require(
            Signature::AI,
            store.has::<AiData>(entity)
                && store.has::<Animation>(entity)
                && store.has::<Texture>(entity)
                && store.has::<RigidBody>(entity)
                && store.has::<Transform>(entity),
            "AiData + Animation + Texture + RigidBody + Transform",
        );
        require(
            Signature::PLAYER_INPUT,
            store.has::<PlayerInput>(entity)
                && store.has::<RigidBody>(entity)
                && store.has::<Transform>(entity),
            "PlayerInput + RigidBody + Transform",
        );
        require(
            Signature::RENDER,
            store.has::<Quad>(entity)
                && store.has::<Texture>(entity)
                && store.has::<Transform>(entity),
            "Quad + Texture + Transform",
        );
        require(
            Signature::ANIMATION,
            store.has::<Animation>(entity) && store.has::<Texture>(entity),
            "Animation + Texture",
        );
        require(
            Signature::HUD,
            store.has::<Label>(entity) && store.has::<Transform>(entity),
            "Label + Transform",
        );
    }
}
