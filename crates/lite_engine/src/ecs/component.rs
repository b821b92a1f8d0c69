//! Component trait and per-kind storage

use std::ops::{Index, IndexMut};

use bitflags::bitflags;

use super::EntityId;

/// Marker trait for components
///
/// A component slot always exists for every entity id; `is_enabled` is the
/// only authority on whether the entity participates in systems that read
/// this kind.
pub trait Component: Default + Clone + 'static {
    /// The kind flag this component contributes to an entity's signature
    const KIND: ComponentKinds;

    /// Whether this slot is live
    fn is_enabled(&self) -> bool;
}

bitflags! {
    /// Set of component kinds, used as an entity signature
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ComponentKinds: u8 {
        /// Position, rotation and scale
        const TRANSFORM = 1 << 0;
        /// Integrated point mass
        const KINEMATIC_BODY = 1 << 1;
        /// Sphere collision bound
        const COLLIDER = 1 << 2;
        /// Surface textures and shininess
        const MATERIAL = 1 << 3;
        /// GPU mesh reference
        const MESH = 1 << 4;
        /// Point light source
        const POINT_LIGHT = 1 << 5;
        /// GPU shader program reference
        const SHADER = 1 << 6;
    }
}

/// Dense, fixed-length array of one component kind indexed by entity id
///
/// Every slot is allocated up front and starts at the kind's inert default.
/// Slot 0 exists so that `EntityId::index` maps straight onto the slice, but
/// it is never reachable through `Index<EntityId>`.
#[derive(Debug, Clone)]
pub struct ComponentArray<T> {
    slots: Box<[T]>,
}

impl<T: Default + Clone> ComponentArray<T> {
    /// Allocate `capacity` default slots
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![T::default(); capacity].into_boxed_slice(),
        }
    }
}

impl<T> ComponentArray<T> {
    /// Number of slots, including the unused null slot
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Look up a slot without panicking on an out-of-range id
    pub fn get(&self, entity: EntityId) -> Option<&T> {
        self.slots.get(entity.index())
    }

}

impl<T> Index<EntityId> for ComponentArray<T> {
    type Output = T;

    fn index(&self, entity: EntityId) -> &T {
        &self.slots[entity.index()]
    }
}

impl<T> IndexMut<EntityId> for ComponentArray<T> {
    fn index_mut(&mut self, entity: EntityId) -> &mut T {
        &mut self.slots[entity.index()]
    }
}
