//! Point-attractor gravity
//!
//! Every body is pulled toward one fixed massive point described by
//! [`PhysicsConfig`]. Bodies do not attract each other.

use crate::core::config::PhysicsConfig;
use crate::foundation::math::Vec3;

/// Acceleration of a body of `mass` at `position` toward the attractor
///
/// Returns `None` when the body sits within the singularity threshold of the
/// attractor; such a body must not be integrated this frame.
///
/// # Panics
///
/// A non-positive `mass` is a setup bug and panics.
pub fn gravitational_acceleration(
    position: Vec3,
    mass: f32,
    config: &PhysicsConfig,
) -> Option<Vec3> {
    assert!(mass > 0.0, "cannot integrate body with non-positive mass {mass}");

    let offset = config.attractor_position - position;
    let distance_sq = offset.magnitude_squared();
    if distance_sq < config.singularity_threshold_sq {
        return None;
    }

    let direction = offset / distance_sq.sqrt();
    let force = config.gravitational_constant * mass * config.attractor_mass / distance_sq;
    Some(direction * (force / mass))
}
