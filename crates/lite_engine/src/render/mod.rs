//! Rendering boundary
//!
//! The simulation core does not talk to a graphics API. Once per frame the
//! engine hands each drawable entity to a [`RenderSubmit`] implementation,
//! together with the active camera's matrices. By then every enabled
//! transform's cached model matrix is current.

pub mod camera;

pub use camera::{Camera, MovementInput};

use crate::debug::DebugDrawSystem;
use crate::ecs::{ComponentRegistry, EntityId};
use crate::foundation::math::Mat4;

/// Backend that draws registry entities
pub trait RenderSubmit {
    /// Width over height of the target viewport
    fn aspect_ratio(&self) -> f32;

    /// Draw one entity's mesh with its material and model matrix
    ///
    /// Only called for registered entities whose transform and mesh slots
    /// are both enabled. The remaining slots (material, shader) are passed
    /// through as-is; check their `enabled` flags before use.
    fn draw_entity(
        &mut self,
        registry: &ComponentRegistry,
        entity: EntityId,
        view: &Mat4,
        projection: &Mat4,
    );

    /// Draw the debug shapes recorded this frame
    fn draw_debug(&mut self, _debug: &DebugDrawSystem, _view: &Mat4, _projection: &Mat4) {}
}
