//! # Simulation Configuration
//!
//! All tunables of the simulation core live here, grouped by subsystem.
//! Every struct is serde-derived so a whole [`SimulationConfig`] can be
//! loaded from TOML or RON through the [`Config`] trait, and every struct
//! has a `Default` carrying the engine's built-in constants.
//!
//! ## Configuration Categories
//!
//! - **Engine Config**: registry capacity, logging, debug overlays
//! - **Physics Config**: attractor, gravitational constant, fixed timestep
//! - **Octree Config**: node capacity and depth limit
//! - **Camera Config**: projection and free-fly controls

use serde::{Serialize, Deserialize};

use crate::foundation::math::Vec3;

pub use crate::config::{Config, ConfigError};

/// Number of entity slots reserved per component kind
pub const MAX_ENTITIES: usize = 1024;

/// # Engine Configuration
///
/// Core engine behavior: registry sizing, logging and debug features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Slots per component kind; valid entity ids are `1..max_entities`
    pub max_entities: usize,
    /// Log level for the engine
    pub log_level: String,
    /// Draw the frame octree through the debug-draw interface
    pub debug_draw_octree: bool,
    /// Draw collider spheres through the debug-draw interface
    pub debug_draw_colliders: bool,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            max_entities: MAX_ENTITIES,
            log_level: "info".to_string(),
            debug_draw_octree: cfg!(debug_assertions),
            debug_draw_colliders: false,
        }
    }

    /// Set registry capacity
    pub fn with_max_entities(mut self, max_entities: usize) -> Self {
        self.max_entities = max_entities;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Physics Configuration
///
/// Every body is pulled toward a single massive attractor. The attractor
/// is not an entity; it is a fixed point with a fixed mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Scale factor of the inverse-square law
    pub gravitational_constant: f32,
    /// Mass of the attractor
    pub attractor_mass: f32,
    /// World position of the attractor
    pub attractor_position: Vec3,
    /// Integration step in seconds, independent of the frame delta
    pub fixed_timestep: f32,
    /// Bodies closer than this squared distance to the attractor are not integrated
    pub singularity_threshold_sq: f32,
    /// Half-extent of the per-frame octree root cube
    pub world_half_extent: f32,
}

impl PhysicsConfig {
    /// Create the default physics configuration
    pub fn new() -> Self {
        Self {
            gravitational_constant: 1.0,
            attractor_mass: 10_000.0,
            attractor_position: Vec3::zeros(),
            fixed_timestep: 0.01,
            singularity_threshold_sq: 0.1,
            world_half_extent: 512.0,
        }
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for octree behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OctreeConfig {
    /// Points a leaf holds before it subdivides
    pub max_points_per_node: usize,

    /// Maximum subdivision depth; full leaves at this depth just grow
    pub max_depth: u32,
}

impl Default for OctreeConfig {
    fn default() -> Self {
        Self {
            max_points_per_node: 8,
            max_depth: 10,
        }
    }
}

/// # Camera Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Radians of rotation per pixel per second of mouse travel
    pub look_sensitivity: f32,
    /// Units per second of free-fly movement
    pub move_speed: f32,
    /// Starting position
    pub position: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 90.0,
            near: 0.1,
            far: 1000.0,
            look_sensitivity: 10.0,
            move_speed: 15.0,
            position: Vec3::new(4.0, 2.0, -10.0),
        }
    }
}

/// # Complete Simulation Configuration
///
/// Top-level configuration that encompasses all subsystems.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Engine core configuration
    pub engine: EngineConfig,
    /// Physics configuration
    pub physics: PhysicsConfig,
    /// Spatial index configuration
    pub octree: OctreeConfig,
    /// Camera configuration
    pub camera: CameraConfig,
}

impl SimulationConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.max_entities < 2 {
            return Err(ConfigError::Invalid(
                "max_entities must leave room for at least one entity".to_string(),
            ));
        }
        if u32::try_from(self.engine.max_entities).is_err() {
            return Err(ConfigError::Invalid("max_entities must fit in a u32".to_string()));
        }
        if !is_positive(self.physics.fixed_timestep) {
            return Err(ConfigError::Invalid("fixed_timestep must be positive".to_string()));
        }
        if !is_positive(self.physics.world_half_extent) {
            return Err(ConfigError::Invalid("world_half_extent must be positive".to_string()));
        }
        if !is_positive(self.physics.attractor_mass) {
            return Err(ConfigError::Invalid("attractor_mass must be positive".to_string()));
        }
        let physics = &self.physics;
        if !physics.gravitational_constant.is_finite()
            || !physics.attractor_position.iter().all(|c| c.is_finite())
        {
            return Err(ConfigError::Invalid("attractor parameters must be finite".to_string()));
        }
        let threshold = self.physics.singularity_threshold_sq;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::Invalid(
                "singularity_threshold_sq must be non-negative".to_string(),
            ));
        }
        if self.octree.max_points_per_node == 0 {
            return Err(ConfigError::Invalid("max_points_per_node must be at least 1".to_string()));
        }
        let (near, far) = (self.camera.near, self.camera.far);
        if !is_positive(near) || !far.is_finite() || near >= far {
            return Err(ConfigError::Invalid(format!(
                "camera clip planes must satisfy 0 < near < far (near={near}, far={far})"
            )));
        }
        Ok(())
    }
}

impl Config for SimulationConfig {}

/// Strictly positive and finite; NaN fails
fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
