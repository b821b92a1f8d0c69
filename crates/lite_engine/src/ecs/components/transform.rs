//! Transform component for the ECS system
//!
//! Pure data component: position, rotation and scale are the source of
//! truth; `matrix` is a cache derived from them and refreshed before the
//! renderer reads it.
//!
//! Coordinate conventions are Y-up right-handed with -Z as "forward".

use crate::foundation::math::{Mat4, Quat, Vec3};
use crate::ecs::{Component, ComponentKinds};

/// ECS Transform component
#[derive(Debug, Clone, PartialEq)]
pub struct TransformComponent {
    /// World space position (Y-up right-handed)
    pub position: Vec3,

    /// World space rotation quaternion
    pub rotation: Quat,

    /// World space scale factors
    pub scale: Vec3,

    /// Cached model matrix; stale until [`TransformComponent::refresh_matrix`]
    pub matrix: Mat4,

    /// Whether this slot is live
    pub enabled: bool,
}

impl Component for TransformComponent {
    const KIND: ComponentKinds = ComponentKinds::TRANSFORM;

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for TransformComponent {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
            matrix: Mat4::identity(),
            enabled: false,
        }
    }
}

impl TransformComponent {
    /// Create an enabled identity transform
    pub fn identity() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    /// Create from position only
    pub fn from_position(position: Vec3) -> Self {
        Self::identity().with_position(position)
    }

    /// Convert to transformation matrix (TRS order)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Recompute the cached model matrix from position, rotation and scale
    pub fn refresh_matrix(&mut self) {
        self.matrix = self.to_matrix();
    }

    /// World-to-view matrix for a camera placed at this transform
    ///
    /// Scale is ignored; a camera is a rigid frame.
    pub fn view_matrix(&self) -> Mat4 {
        self.rotation.conjugate().to_homogeneous() * Mat4::new_translation(&-self.position)
    }

    /// Builder pattern: Set position
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Builder pattern: Set scale (uniform)
    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::new(scale, scale, scale);
        self
    }

    /// Local -Z rotated into world space, scaled to `magnitude`
    pub fn forward(&self, magnitude: f32) -> Vec3 {
        self.rotation * Vec3::new(0.0, 0.0, -magnitude)
    }

    /// Local +Y rotated into world space
    pub fn up(&self, magnitude: f32) -> Vec3 {
        self.rotation * Vec3::new(0.0, magnitude, 0.0)
    }

    /// Local +X rotated into world space
    pub fn right(&self, magnitude: f32) -> Vec3 {
        self.rotation * Vec3::new(magnitude, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{constants::HALF_PI, Vec4};
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_default_slot_is_inert() {
        let transform = TransformComponent::default();

        assert!(!transform.enabled);
        assert_eq!(transform.position, Vec3::zeros());
        assert_relative_eq!(transform.rotation, Quat::identity(), epsilon = EPSILON);
        assert_eq!(transform.scale, Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_refresh_matrix_places_origin_at_position() {
        let mut transform = TransformComponent::from_position(Vec3::new(1.0, 2.0, 3.0))
            .with_uniform_scale(2.0);
        transform.refresh_matrix();

        let origin = transform.matrix * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(origin, Vec4::new(1.0, 2.0, 3.0, 1.0), epsilon = EPSILON);

        let unit_x = transform.matrix * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(unit_x, Vec4::new(3.0, 2.0, 3.0, 1.0), epsilon = EPSILON);
    }

    #[test]
    fn test_view_matrix_inverts_model_matrix() {
        let mut transform = TransformComponent::from_position(Vec3::new(4.0, 2.0, -10.0));
        transform.rotation = Quat::from_euler_angles(0.3, 1.1, 0.0);

        let product = transform.view_matrix() * transform.to_matrix();
        assert_relative_eq!(product, Mat4::identity(), epsilon = EPSILON);
    }

    #[test]
    fn test_basis_vectors_follow_rotation() {
        let mut transform = TransformComponent::identity();
        transform.rotation = Quat::from_euler_angles(0.0, HALF_PI, 0.0);

        // Yawing +90 degrees about Y turns -Z into -X
        assert_relative_eq!(transform.forward(2.0), Vec3::new(-2.0, 0.0, 0.0), epsilon = EPSILON);
        assert_relative_eq!(transform.up(1.0), Vec3::new(0.0, 1.0, 0.0), epsilon = EPSILON);
        assert_relative_eq!(transform.right(1.0), Vec3::new(0.0, 0.0, -1.0), epsilon = EPSILON);
    }
}
