//! Core engine modules

pub mod config;

pub use config::{
    SimulationConfig, EngineConfig, PhysicsConfig, OctreeConfig, CameraConfig, MAX_ENTITIES,
};
