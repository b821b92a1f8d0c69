//! Fixed-timestep kinematic integration
//!
//! Position advances with the closed-form `p + v·dt + ½·a·dt²` using the
//! velocity from *before* this step. Velocity then accumulates the raw
//! acceleration (`v += a`, no `dt` factor). The simulation is tuned around
//! this exact update; scaling the velocity term by `dt` changes every orbit.

use crate::ecs::components::KinematicBody;
use crate::foundation::math::Vec3;

/// Advance `body` by one fixed step under `acceleration`
pub fn integrate(body: &mut KinematicBody, acceleration: Vec3, dt: f32) {
    body.acceleration = acceleration;

    let half_dt_sq = 0.5 * dt * dt;
    for axis in 0..3 {
        body.position[axis] =
            half_dt_sq * acceleration[axis] + body.velocity[axis] * dt + body.position[axis];
    }

    body.velocity += acceleration;
}
