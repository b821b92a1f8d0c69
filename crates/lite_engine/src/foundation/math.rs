//! Math utilities and types
//!
//! Thin aliases over `nalgebra` so the rest of the engine speaks in
//! single-precision graphics types.

pub use nalgebra::{
    Vector3, Vector4,
    Matrix4,
    Quaternion,
    Unit,
};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type (RGBA colors in debug drawing)
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Wrap a value into `[0, length)`.
    ///
    /// Used for yaw angles, which spin freely and must never accumulate
    /// into large magnitudes that lose float precision.
    pub fn wrap(value: f32, length: f32) -> f32 {
        value.rem_euclid(length)
    }
}

/// Extension trait for Mat4 with additional convenience methods
pub trait Mat4Ext {
    /// Create a right-handed perspective projection matrix
    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::new_perspective(aspect, fov_y, near, far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_wrap_keeps_angles_in_range() {
        assert_relative_eq!(utils::wrap(constants::TAU + 1.0, constants::TAU), 1.0, epsilon = 1e-5);
        let wrapped = utils::wrap(-1.0, constants::TAU);
        assert_relative_eq!(wrapped, constants::TAU - 1.0, epsilon = 1e-5);
        assert_relative_eq!(utils::wrap(0.5, constants::TAU), 0.5);
    }

    #[test]
    fn test_degree_conversion() {
        assert_relative_eq!(utils::deg_to_rad(180.0), constants::PI);
        assert_relative_eq!(utils::deg_to_rad(90.0), constants::HALF_PI);
    }
}
