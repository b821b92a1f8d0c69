//! Debug drawing primitives and the recording draw system
//!
//! Shapes are either temporary, expiring after a duration in seconds, or
//! persistent under a string key until removed. A duration of zero lives for
//! exactly one frame: it is visible to the renderer until the next
//! [`DebugDrawSystem::update`].

use std::collections::HashMap;

use super::DebugDraw;
use crate::foundation::math::{Vec3, Vec4};

/// Unique identifier for persistent debug shapes
pub type DebugShapeId = String;

/// Debug shape primitives that can be rendered for visualization
#[derive(Clone, Debug, PartialEq)]
pub enum DebugShape {
    /// Sphere at center with radius
    Sphere {
        /// World-space center
        center: Vec3,
        /// Sphere radius
        radius: f32,
        /// RGBA color
        color: Vec4,
        /// Seconds left before a temporary shape expires
        duration: f32,
        /// Outline only when set, filled otherwise
        wireframe: bool,
    },

    /// Axis-aligned cube at center with half-extent
    Cube {
        /// World-space center
        center: Vec3,
        /// Distance from the center to each face
        half_extent: f32,
        /// RGBA color
        color: Vec4,
        /// Seconds left before a temporary shape expires
        duration: f32,
        /// Outline only when set, filled otherwise
        wireframe: bool,
    },
}

impl DebugShape {
    /// Decrease duration by delta_time, returns true if expired
    pub fn tick(&mut self, delta_time: f32) -> bool {
        match self {
            DebugShape::Sphere { duration, .. } | DebugShape::Cube { duration, .. } => {
                *duration -= delta_time;
                *duration <= 0.0
            }
        }
    }
}

/// Debug drawing system that records shapes for a renderer to consume
#[derive(Debug)]
pub struct DebugDrawSystem {
    /// Temporary shapes that expire after their duration
    temporary_shapes: Vec<DebugShape>,

    /// Persistent shapes that remain until manually removed
    persistent_shapes: HashMap<DebugShapeId, DebugShape>,

    /// Master enable/disable flag
    pub enabled: bool,
}

impl DebugDrawSystem {
    /// Create a new debug draw system
    pub fn new() -> Self {
        Self {
            temporary_shapes: Vec::new(),
            persistent_shapes: HashMap::new(),
            enabled: true,
        }
    }

    fn push(&mut self, shape: DebugShape) {
        if self.enabled {
            self.temporary_shapes.push(shape);
        }
    }

    /// Draw a persistent shape that remains until explicitly removed
    pub fn draw_persistent(&mut self, id: impl Into<String>, shape: DebugShape) {
        if !self.enabled {
            return;
        }

        self.persistent_shapes.insert(id.into(), shape);
    }

    /// Remove a persistent shape
    pub fn clear_persistent(&mut self, id: &str) {
        self.persistent_shapes.remove(id);
    }

    /// Update shape lifetimes and remove expired temporary shapes
    pub fn update(&mut self, delta_time: f32) {
        self.temporary_shapes.retain_mut(|shape| !shape.tick(delta_time));
    }

    /// Get all shapes for rendering (both temporary and persistent)
    pub fn shapes(&self) -> impl Iterator<Item = &DebugShape> {
        let visible = self.enabled;
        self.temporary_shapes
            .iter()
            .chain(self.persistent_shapes.values())
            .filter(move |_| visible)
    }

    /// Get the number of active shapes
    pub fn shape_count(&self) -> usize {
        self.temporary_shapes.len() + self.persistent_shapes.len()
    }

    /// Clear all shapes (temporary and persistent)
    pub fn clear(&mut self) {
        self.temporary_shapes.clear();
        self.persistent_shapes.clear();
    }
}

impl Default for DebugDrawSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl DebugDraw for DebugDrawSystem {
    fn draw_cube(&mut self, center: Vec3, half_extent: f32, wireframe: bool, color: Vec4) {
        self.push(DebugShape::Cube {
            center,
            half_extent,
            color,
            duration: 0.0,
            wireframe,
        });
    }

    fn draw_sphere(&mut self, center: Vec3, radius: f32, wireframe: bool, color: Vec4) {
        self.push(DebugShape::Sphere {
            center,
            radius,
            color,
            duration: 0.0,
            wireframe,
        });
    }
}
