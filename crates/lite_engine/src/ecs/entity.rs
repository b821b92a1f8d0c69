//! Entity implementation
//!
//! Entities are plain integer identities handed out in increasing order.
//! There is no destruction: once registered, an id is valid for the rest of
//! the run and is never issued again.

use std::fmt;
use std::num::NonZeroU32;

use super::EcsError;

/// Entity identifier
///
/// Id 0 is reserved as "null" and cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(NonZeroU32);

impl EntityId {
    /// Wrap a raw id, returning `None` for the reserved null id
    pub fn new(id: u32) -> Option<Self> {
        NonZeroU32::new(id).map(Self)
    }

    /// Get the raw entity id
    pub fn id(self) -> u32 {
        self.0.get()
    }

    /// Slot index into per-kind component arrays
    pub fn index(self) -> usize {
        self.0.get() as usize
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues monotonically increasing entity ids up to a fixed capacity
#[derive(Debug, Clone)]
pub struct EntityAllocator {
    count: u32,
    capacity: u32,
}

impl EntityAllocator {
    /// Create an allocator for ids in `[1, capacity)`
    pub fn new(capacity: u32) -> Self {
        Self { count: 0, capacity }
    }

    /// Issue the next id, or report exhaustion
    pub fn try_register(&mut self) -> Result<EntityId, EcsError> {
        let next = self.count + 1;
        if next >= self.capacity {
            return Err(EcsError::CapacityExhausted { capacity: self.capacity });
        }
        let id = EntityId::new(next).ok_or(EcsError::NullEntity)?;
        self.count = next;
        Ok(id)
    }

    /// Issue the next id
    ///
    /// # Panics
    ///
    /// Running out of ids is a setup bug, not a runtime condition, so this
    /// panics once the counter would reach the capacity.
    pub fn register(&mut self) -> EntityId {
        match self.try_register() {
            Ok(id) => id,
            Err(err) => panic!("entity registration failed: {err}"),
        }
    }

    /// Highest id issued so far (0 when none)
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Exclusive upper bound on ids
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Whether `entity` has been issued by this allocator
    pub fn contains(&self, entity: EntityId) -> bool {
        entity.id() <= self.count
    }

    /// Iterate every issued id in registration order
    pub fn iter(&self) -> impl Iterator<Item = EntityId> + Clone {
        (1..=self.count).filter_map(EntityId::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_id_is_unrepresentable() {
        assert!(EntityId::new(0).is_none());
        assert_eq!(EntityId::new(7).map(EntityId::index), Some(7));
    }

    #[test]
    fn test_ids_are_sequential_from_one() {
        let mut allocator = EntityAllocator::new(16);
        let ids: Vec<u32> = (0..15).map(|_| allocator.register().id()).collect();

        assert_eq!(ids, (1..=15).collect::<Vec<_>>());
        assert_eq!(allocator.count(), 15);
    }

    #[test]
    fn test_exhaustion_is_reported() {
        let mut allocator = EntityAllocator::new(3);
        assert!(allocator.try_register().is_ok());
        assert!(allocator.try_register().is_ok());
        assert_eq!(
            allocator.try_register(),
            Err(EcsError::CapacityExhausted { capacity: 3 })
        );
        // A failed attempt does not consume an id
        assert_eq!(allocator.count(), 2);
    }

    #[test]
    #[should_panic(expected = "entity registration failed")]
    fn test_register_past_capacity_panics() {
        let mut allocator = EntityAllocator::new(2);
        allocator.register();
        allocator.register();
    }

    #[test]
    fn test_iter_matches_issued_ids() {
        let mut allocator = EntityAllocator::new(8);
        let issued: Vec<EntityId> = (0..4).map(|_| allocator.register()).collect();
        assert_eq!(allocator.iter().collect::<Vec<_>>(), issued);
        assert!(allocator.contains(issued[3]));
        assert!(!allocator.contains(EntityId::new(5).unwrap()));
    }
}
