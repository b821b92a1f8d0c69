//! Kinematic body component for entities under simulation
//!
//! A body carries its own copy of the entity's position. During a physics
//! step that copy is authoritative; the step writes it back into the
//! transform before anything else can observe the two diverging.

use crate::ecs::{Component, ComponentKinds};
use crate::foundation::math::Vec3;

/// Point mass integrated by the physics step
#[derive(Debug, Clone, PartialEq)]
pub struct KinematicBody {
    /// Whether the body is integrated; cleared permanently on collision
    pub enabled: bool,

    /// Mass; must be positive while enabled
    pub mass: f32,

    /// Physics-side mirror of the transform position
    pub position: Vec3,

    /// Linear velocity
    pub velocity: Vec3,

    /// Acceleration derived during the last integrated step
    pub acceleration: Vec3,
}

impl Component for KinematicBody {
    const KIND: ComponentKinds = ComponentKinds::KINEMATIC_BODY;

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for KinematicBody {
    fn default() -> Self {
        Self {
            enabled: false,
            mass: 0.0,
            position: Vec3::zeros(),
            velocity: Vec3::zeros(),
            acceleration: Vec3::zeros(),
        }
    }
}

impl KinematicBody {
    /// Create an enabled body
    ///
    /// # Panics
    ///
    /// Panics if `mass` is not positive.
    pub fn new(position: Vec3, velocity: Vec3, mass: f32) -> Self {
        assert!(mass > 0.0, "kinematic body mass must be positive, got {mass}");
        Self {
            enabled: true,
            mass,
            position,
            velocity,
            acceleration: Vec3::zeros(),
        }
    }

    /// Stop integrating this body for good
    ///
    /// Freezing an already frozen body changes nothing.
    pub fn freeze(&mut self) {
        self.enabled = false;
        self.velocity = Vec3::zeros();
    }

    /// A frozen body is a disabled one that has no velocity left
    pub fn is_frozen(&self) -> bool {
        !self.enabled && self.velocity == Vec3::zeros()
    }

    /// Kinetic energy, `½·m·|v|²`
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slot_is_inert() {
        let body = KinematicBody::default();
        assert!(!body.enabled);
        assert_eq!(body.mass, 0.0);
        assert_eq!(body.velocity, Vec3::zeros());
    }

    #[test]
    fn test_freeze_is_idempotent() {
        let mut body = KinematicBody::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 3.0, 0.0), 2.0);
        body.freeze();
        let once = body.clone();
        body.freeze();

        assert_eq!(body, once);
        assert!(body.is_frozen());
        assert_eq!(body.position, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_kinetic_energy() {
        let body = KinematicBody::new(Vec3::zeros(), Vec3::new(3.0, 4.0, 0.0), 2.0);
        assert_eq!(body.kinetic_energy(), 25.0);
    }

    #[test]
    #[should_panic(expected = "mass must be positive")]
    fn test_zero_mass_rejected() {
        let _ = KinematicBody::new(Vec3::zeros(), Vec3::zeros(), 0.0);
    }
}
