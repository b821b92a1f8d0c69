//! # Free-fly camera
//!
//! Mouse look plus WASD-style movement. Yaw wraps around a full turn and
//! pitch is clamped to straight up / straight down, so the camera can never
//! roll over. Both controls scale with the wall-clock frame delta; the
//! physics timestep plays no part here.

use crate::core::config::CameraConfig;
use crate::ecs::components::TransformComponent;
use crate::foundation::math::{constants, utils, Mat4, Mat4Ext, Quat, Vec3};

/// Movement axes for one frame, each nominally in `[-1, 1]`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementInput {
    /// Strafe: positive is right
    pub right: f32,
    /// Positive is up
    pub up: f32,
    /// Positive is along the view direction
    pub forward: f32,
}

impl MovementInput {
    /// Create a movement input from its three axes
    pub fn new(right: f32, up: f32, forward: f32) -> Self {
        Self { right, up, forward }
    }

    /// Whether any axis is active
    pub fn is_idle(&self) -> bool {
        self.right == 0.0 && self.up == 0.0 && self.forward == 0.0
    }
}

/// 3D perspective camera with mouse-look orientation
///
/// View space is right-handed and Y-up, looking down -Z.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Position and orientation; the view matrix is its inverse
    pub transform: TransformComponent,

    /// Rotation about the X axis in radians, within `[-π/2, π/2]`
    pitch: f32,
    /// Rotation about the Y axis in radians, within `[0, 2π)`
    yaw: f32,

    /// Vertical field of view in radians
    pub fov: f32,
    /// Distance to near clipping plane
    pub near: f32,
    /// Distance to far clipping plane
    pub far: f32,
    /// Radians per unit of cursor travel per second
    pub look_sensitivity: f32,
    /// Units per second
    pub move_speed: f32,
}

impl Camera {
    /// Build a camera from its configuration
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            transform: TransformComponent::from_position(config.position),
            pitch: 0.0,
            yaw: 0.0,
            fov: utils::deg_to_rad(config.fov_degrees),
            near: config.near,
            far: config.far,
            look_sensitivity: config.look_sensitivity,
            move_speed: config.move_speed,
        }
    }

    /// World-space position
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    /// Current pitch in radians
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current yaw in radians
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Rotate by a cursor offset
    ///
    /// `dx` turns about the vertical axis and `dy` about the horizontal one.
    pub fn apply_look(&mut self, dx: f32, dy: f32, delta_time: f32) {
        let scale = delta_time * self.look_sensitivity;
        self.pitch = (self.pitch + dy * scale).clamp(-constants::HALF_PI, constants::HALF_PI);
        self.yaw = utils::wrap(self.yaw + dx * scale, constants::TAU);
        self.transform.rotation = Quat::from_euler_angles(self.pitch, self.yaw, 0.0);
    }

    /// Move along the camera's own axes
    ///
    /// The input direction is normalized first, so diagonal movement is no
    /// faster than straight movement.
    pub fn apply_movement(&mut self, input: MovementInput, delta_time: f32) {
        if input.is_idle() {
            return;
        }

        let axes = Vec3::new(input.right, input.up, input.forward).normalize()
            * (self.move_speed * delta_time);
        self.transform.position += self.transform.right(axes.x)
            + self.transform.up(axes.y)
            + self.transform.forward(axes.z);
    }

    /// World-to-view matrix
    pub fn view_matrix(&self) -> Mat4 {
        self.transform.view_matrix()
    }

    /// Perspective projection for the given viewport aspect ratio
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective(self.fov, aspect, self.near, self.far)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}
