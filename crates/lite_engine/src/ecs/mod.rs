//! Entity-Component-System implementation
//!
//! A fixed-capacity, struct-of-arrays registry. Entities are append-only
//! integer ids; each component kind is a dense array indexed by id.

pub mod entity;
pub mod component;
pub mod components;
pub mod registry;

#[cfg(test)]
mod tests;

pub use entity::{EntityAllocator, EntityId};
pub use component::{Component, ComponentArray, ComponentKinds};
pub use registry::ComponentRegistry;

/// Errors from entity registration
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcsError {
    /// Every id below the capacity has been issued
    #[error("entity capacity of {capacity} exhausted")]
    CapacityExhausted {
        /// Exclusive upper bound on ids
        capacity: u32,
    },

    /// The reserved null id was produced or requested
    #[error("entity id 0 is reserved")]
    NullEntity,
}
