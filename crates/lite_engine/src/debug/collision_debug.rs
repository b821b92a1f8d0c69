//! Collider overlay
//!
//! Draws every enabled collider sphere at its transform position. Bodies
//! that are still moving use one color and frozen bodies another, so
//! contacts are visible at a glance.

use super::DebugDraw;
use crate::ecs::ComponentRegistry;
use crate::foundation::math::Vec4;
use crate::physics::CollisionPair;

/// Color scheme for collision visualization
#[derive(Clone, Debug, PartialEq)]
pub struct CollisionDebugColors {
    /// Collider of a body still being integrated
    pub moving: Vec4,

    /// Collider of a frozen body
    pub frozen: Vec4,

    /// Marker at the midpoint of a contact found this frame
    pub contact: Vec4,
}

impl Default for CollisionDebugColors {
    fn default() -> Self {
        Self {
            moving: Vec4::new(0.0, 1.0, 0.0, 0.3),
            frozen: Vec4::new(1.0, 0.0, 0.0, 0.5),
            contact: Vec4::new(1.0, 1.0, 0.0, 0.8),
        }
    }
}

/// Draws collider bounds and contacts through any [`DebugDraw`] sink
#[derive(Clone, Debug, Default)]
pub struct CollisionDebugVisualizer {
    colors: CollisionDebugColors,
}

impl CollisionDebugVisualizer {
    /// Create a new collision debug visualizer
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw one wireframe sphere per enabled collider; returns how many were drawn
    pub fn draw_colliders(
        &self,
        registry: &ComponentRegistry,
        debug: &mut impl DebugDraw,
    ) -> usize {
        let mut drawn = 0;
        for entity in registry.entities() {
            let collider = &registry.colliders[entity];
            if !collider.enabled {
                continue;
            }

            let sphere = collider.bounding_sphere(registry.transforms[entity].position);
            let color = if registry.bodies[entity].enabled {
                self.colors.moving
            } else {
                self.colors.frozen
            };
            debug.draw_sphere(sphere.center, sphere.radius, true, color);
            drawn += 1;
        }
        drawn
    }

    /// Draw a small solid marker halfway between each contacting pair
    pub fn draw_contacts(
        &self,
        registry: &ComponentRegistry,
        contacts: &[CollisionPair],
        debug: &mut impl DebugDraw,
    ) {
        for pair in contacts {
            let a = registry.transforms[pair.entity_a].position;
            let b = registry.transforms[pair.entity_b].position;
            debug.draw_sphere((a + b) * 0.5, 0.1, false, self.colors.contact);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debug::{DebugDrawSystem, DebugShape};
    use crate::foundation::math::Vec3;

    #[test]
    fn test_frozen_bodies_use_frozen_color() {
        let mut registry = ComponentRegistry::with_capacity(8);
        let moving = registry.spawn_body(Vec3::new(5.0, 0.0, 0.0), Vec3::zeros(), 1.0, 0.5);
        let frozen = registry.spawn_body(Vec3::new(-5.0, 0.0, 0.0), Vec3::zeros(), 1.0, 0.5);
        registry.bodies[frozen].freeze();

        let visualizer = CollisionDebugVisualizer::new();
        let mut debug = DebugDrawSystem::new();
        assert_eq!(visualizer.draw_colliders(&registry, &mut debug), 2);

        let colors: Vec<Vec4> = debug
            .shapes()
            .map(|shape| match shape {
                DebugShape::Sphere { color, .. } | DebugShape::Cube { color, .. } => *color,
            })
            .collect();
        let expected = CollisionDebugColors::default();
        assert_eq!(colors, vec![expected.moving, expected.frozen]);
        assert!(registry.bodies[moving].enabled);
    }

    #[test]
    fn test_disabled_colliders_are_not_drawn() {
        let mut registry = ComponentRegistry::with_capacity(8);
        let entity = registry.spawn_body(Vec3::zeros(), Vec3::zeros(), 1.0, 0.5);
        registry.colliders[entity].enabled = false;

        let mut debug = DebugDrawSystem::new();
        assert_eq!(CollisionDebugVisualizer::new().draw_colliders(&registry, &mut debug), 0);
    }

    #[test]
    fn test_contact_marker_at_midpoint() {
        let mut registry = ComponentRegistry::with_capacity(8);
        let a = registry.spawn_body(Vec3::new(0.0, 0.0, 0.0), Vec3::zeros(), 1.0, 1.0);
        let b = registry.spawn_body(Vec3::new(1.0, 0.0, 0.0), Vec3::zeros(), 1.0, 1.0);

        let mut debug = DebugDrawSystem::new();
        let contacts = [CollisionPair::new(a, b)];
        CollisionDebugVisualizer::new().draw_contacts(&registry, &contacts, &mut debug);

        let shape = debug.shapes().next().unwrap();
        let midpoint = Vec3::new(0.5, 0.0, 0.0);
        assert!(matches!(
            shape,
            DebugShape::Sphere { center, wireframe: false, .. } if *center == midpoint
        ));
    }
}
