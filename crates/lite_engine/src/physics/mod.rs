//! Physics module: point-attractor gravity, kinematic integration and
//! freeze-on-contact sphere collisions

pub mod gravity;
pub mod integration;
pub mod collision;
pub mod step;

pub use collision::{resolve_collisions, BoundingSphere, CollisionPair};
pub use gravity::gravitational_acceleration;
pub use integration::integrate;
pub use step::{physics_step, PhysicsSystem, StepReport};
