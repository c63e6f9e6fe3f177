//! Entity registry
//!
//! A fixed-size table of entity slots allocated at startup. "Creation" is
//! initialization of a slot during level setup and "destruction" during play
//! is logical (flipping the slot to [`EntityState::Inactive`]); slots are
//! never freed or reallocated. Bullets are recycled by re-initializing the
//! same tagged slots.

use super::signature::Signature;

/// Entity identifier: an index into the registry's slot table
pub type EntityId = u32;

/// Whether an entity participates in the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityState {
    /// Visited by system update loops
    Active,
    /// Skipped by every system until re-activated
    Inactive,
}

struct EntitySlot {
    state: EntityState,
    signature: Signature,
    tag: Option<String>,
}

impl Default for EntitySlot {
    fn default() -> Self {
        Self {
            state: EntityState::Inactive,
            signature: Signature::empty(),
            tag: None,
        }
    }
}

/// Fixed-capacity table of per-entity state, signature, and tag.
///
/// No behavior beyond bookkeeping lives here; systems and the scheduler read
/// this table every frame.
pub struct EntityRegistry {
    slots: Vec<EntitySlot>,
}

impl EntityRegistry {
    /// Create a registry with `capacity` pre-allocated slots, all Inactive.
    pub fn new(capacity: u32) -> Self {
        let mut slots = Vec::with_capacity(capacity as usize);
        slots.resize_with(capacity as usize, EntitySlot::default);
        Self { slots }
    }

    /// Total slot count (not the active count; callers filter by state).
    pub fn num_entities(&self) -> u32 {
        self.slots.len() as u32
    }

    /// State of an entity.
    ///
    /// # Panics
    /// Panics if `entity` is out of range.
    pub fn state(&self, entity: EntityId) -> EntityState {
        self.slot(entity).state
    }

    /// Set the state of an entity.
    ///
    /// # Panics
    /// Panics if `entity` is out of range.
    pub fn set_state(&mut self, entity: EntityId, state: EntityState) {
        self.slot_mut(entity).state = state;
    }

    /// Signature bitmask of an entity.
    ///
    /// # Panics
    /// Panics if `entity` is out of range.
    pub fn signature(&self, entity: EntityId) -> Signature {
        self.slot(entity).signature
    }

    /// Set the signature bitmask of an entity.
    ///
    /// # Panics
    /// Panics if `entity` is out of range.
    pub fn set_signature(&mut self, entity: EntityId, signature: Signature) {
        self.slot_mut(entity).signature = signature;
    }

    /// Semantic tag of an entity, if one was assigned at setup.
    pub fn tag(&self, entity: EntityId) -> Option<&str> {
        self.slot(entity).tag.as_deref()
    }

    /// Assign a semantic tag ("player", "enemy", "side_wall", "bullet_0", ...).
    pub fn set_tag(&mut self, entity: EntityId, tag: impl Into<String>) {
        self.slot_mut(entity).tag = Some(tag.into());
    }

    /// Find the first entity carrying `tag`, scanning in id order.
    pub fn find_by_tag(&self, tag: &str) -> Option<EntityId> {
        self.slots
            .iter()
            .position(|slot| slot.tag.as_deref() == Some(tag))
            .map(|index| index as EntityId)
    }

    /// Look up an entity by tag.
    ///
    /// Tags are assigned once at setup; a miss means the caller and the level
    /// data disagree about what exists.
    ///
    /// # Panics
    /// Panics if no entity carries `tag`.
    pub fn entity_by_tag(&self, tag: &str) -> EntityId {
        self.find_by_tag(tag)
            .unwrap_or_else(|| panic!("no entity tagged {tag:?}"))
    }

    fn slot(&self, entity: EntityId) -> &EntitySlot {
        let capacity = self.num_entities();
        self.slots
            .get(entity as usize)
            .unwrap_or_else(|| panic!("entity id {entity} out of range (capacity {capacity})"))
    }

    fn slot_mut(&mut self, entity: EntityId) -> &mut EntitySlot {
        let capacity = self.num_entities();
        self.slots
            .get_mut(entity as usize)
            .unwrap_or_else(|| panic!("entity id {entity} out of range (capacity {capacity})"))
    }
}
