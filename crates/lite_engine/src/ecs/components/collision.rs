//! Collision detection components for ECS

use crate::ecs::{Component, ComponentKinds};
use crate::foundation::math::Vec3;
use crate::physics::BoundingSphere;

/// Spherical collision bound centered on the entity's transform position
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColliderSphere {
    /// Whether this collider takes part in the collision pass
    pub enabled: bool,

    /// Sphere radius
    pub radius: f32,
}

impl Component for ColliderSphere {
    const KIND: ComponentKinds = ComponentKinds::COLLIDER;

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl ColliderSphere {
    /// Create an enabled collider
    ///
    /// # Panics
    ///
    /// Panics if `radius` is negative or NaN.
    pub fn new(radius: f32) -> Self {
        assert!(radius >= 0.0, "collider radius must be non-negative, got {radius}");
        Self {
            enabled: true,
            radius,
        }
    }

    /// World-space bounding sphere for a collider at `center`
    pub fn bounding_sphere(&self, center: Vec3) -> BoundingSphere {
        BoundingSphere::new(center, self.radius)
    }
}
