//! Component storage
//!
//! Typed, dense, fixed-capacity storage: one column per component type,
//! indexed directly by entity id. Trades memory for O(1) deterministic
//! access with no allocation during play (a column is allocated once, the
//! first time its type is seen, during level setup).
//!
//! The store exclusively owns all component memory. Systems borrow during a
//! single update pass and must not retain references across frames; the
//! borrow checker enforces this for free.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;

use super::entity::EntityId;

/// Marker trait for plain-data component types
pub trait Component: 'static {}

struct Column<T> {
    cells: Vec<Option<T>>,
}

impl<T> Column<T> {
    fn new(capacity: u32) -> Self {
        let mut cells = Vec::with_capacity(capacity as usize);
        cells.resize_with(capacity as usize, || None);
        Self { cells }
    }
}

/// Fixed-capacity, type-indexed component store.
///
/// At most one instance of a given component type per entity. There is no
/// removal operation; component lifetime equals entity-table lifetime.
pub struct ComponentStore {
    capacity: u32,
    columns: HashMap<TypeId, Box<dyn Any>>,
}

impl ComponentStore {
    /// Create a store sized for the same capacity as the entity registry.
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            columns: HashMap::new(),
        }
    }

    /// Attach a component to an entity.
    ///
    /// # Panics
    /// Panics if `entity` is out of range or already has a `T` attached;
    /// both are setup-time contract violations.
    pub fn add<T: Component>(&mut self, entity: EntityId, component: T) {
        assert!(
            entity < self.capacity,
            "entity id {entity} out of range (capacity {})",
            self.capacity
        );
        let capacity = self.capacity;
        let column = self
            .columns
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(Column::<T>::new(capacity)))
            .downcast_mut::<Column<T>>()
            .unwrap_or_else(|| unreachable!("column type mismatch"));
        let cell = &mut column.cells[entity as usize];
        assert!(
            cell.is_none(),
            "entity {entity} already has a {} component",
            type_name::<T>()
        );
        *cell = Some(component);
    }

    /// Whether `entity` has a `T` attached. Used by signature validation at
    /// entity-build time; systems rely on signatures instead.
    pub fn has<T: Component>(&self, entity: EntityId) -> bool {
        self.column::<T>()
            .and_then(|column| column.cells.get(entity as usize))
            .is_some_and(|cell| cell.is_some())
    }

    /// Borrow a component.
    ///
    /// # Panics
    /// Panics if the component is absent. A signature-matched entity missing
    /// a required component is a fatal contract violation, not a recoverable
    /// error.
    pub fn get<T: Component>(&self, entity: EntityId) -> &T {
        self.column::<T>()
            .and_then(|column| column.cells.get(entity as usize))
            .and_then(Option::as_ref)
            .unwrap_or_else(|| missing::<T>(entity))
    }

    /// Mutably borrow a component.
    ///
    /// # Panics
    /// Panics if the component is absent, as [`ComponentStore::get`].
    pub fn get_mut<T: Component>(&mut self, entity: EntityId) -> &mut T {
        self.column_mut::<T>()
            .and_then(|column| column.cells.get_mut(entity as usize))
            .and_then(Option::as_mut)
            .unwrap_or_else(|| missing::<T>(entity))
    }

    fn column<T: Component>(&self) -> Option<&Column<T>> {
        self.columns
            .get(&TypeId::of::<T>())
            .map(|column| column.downcast_ref::<Column<T>>().expect("column type"))
    }

    fn column_mut<T: Component>(&mut self) -> Option<&mut Column<T>> {
        self.columns
            .get_mut(&TypeId::of::<T>())
            .map(|column| column.downcast_mut::<Column<T>>().expect("column type"))
    }
}

fn missing<T>(entity: EntityId) -> ! {
    panic!(
        "entity {entity} has no {} component; its signature lied",
        type_name::<T>()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Health(u32);
    impl Component for Health {}

    #[derive(Debug, PartialEq)]
    struct Name(&'static str);
    impl Component for Name {}

    #[test]
    fn add_then_get_round_trips() {
        let mut store = ComponentStore::new(4);
        store.add(2, Health(10));
        assert_eq!(*store.get::<Health>(2), Health(10));
        store.get_mut::<Health>(2).0 = 7;
        assert_eq!(store.get::<Health>(2).0, 7);
    }

    #[test]
    fn columns_are_independent_per_type() {
        let mut store = ComponentStore::new(2);
        store.add(0, Health(1));
        store.add(0, Name("wall"));
        assert!(store.has::<Health>(0));
        assert!(store.has::<Name>(0));
        assert!(!store.has::<Health>(1));
    }

    #[test]
    #[should_panic(expected = "already has a")]
    fn double_add_is_fatal() {
        let mut store = ComponentStore::new(2);
        store.add(0, Health(1));
        store.add(0, Health(2));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn add_out_of_range_is_fatal() {
        let mut store = ComponentStore::new(2);
        store.add(2, Health(1));
    }

    #[test]
    #[should_panic(expected = "signature lied")]
    fn get_missing_is_fatal() {
        let store = ComponentStore::new(2);
        store.get::<Health>(0);
    }
}
