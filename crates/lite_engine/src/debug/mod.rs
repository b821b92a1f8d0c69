//! Debug module for visualization and debugging tools
//!
//! Systems that want to show internal state (octree cells, collider bounds)
//! draw through the [`DebugDraw`] trait. The renderer behind it is free to
//! batch, tint or ignore the shapes; [`DebugDrawSystem`] simply records them.

pub mod draw;
pub mod collision_debug;

pub use draw::{DebugShape, DebugDrawSystem, DebugShapeId};
pub use collision_debug::{CollisionDebugColors, CollisionDebugVisualizer};

use crate::foundation::math::{Vec3, Vec4};

/// Immediate-mode sink for debug primitives
pub trait DebugDraw {
    /// Axis-aligned cube around `center` with edge length `2 * half_extent`
    fn draw_cube(&mut self, center: Vec3, half_extent: f32, wireframe: bool, color: Vec4);

    /// Sphere around `center`
    fn draw_sphere(&mut self, center: Vec3, radius: f32, wireframe: bool, color: Vec4);
}
