//! # Lite Engine
//!
//! Simulation core of a small 3D engine: a fixed-capacity struct-of-arrays
//! entity/component registry, a per-frame octree, and orbital physics with
//! freeze-on-contact sphere collisions.
//!
//! ## Features
//!
//! - **Struct-of-arrays ECS**: one dense array per component kind, indexed by entity id
//! - **Point-attractor physics**: inverse-square gravity with a fixed integration timestep
//! - **Per-frame octree**: rebuilt from body positions every frame, drawable as a debug overlay
//! - **Backend-agnostic**: rendering and debug drawing go through small traits
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lite_engine::prelude::*;
//!
//! struct Orbits;
//!
//! impl Application for Orbits {
//!     fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
//!         let position = Vec3::new(100.0, 0.0, 0.0);
//!         engine.registry.spawn_body(position, Vec3::new(0.0, 0.0, 10.0), 1.0, 0.5);
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, engine: &mut Engine, frame: &FrameReport) -> Result<(), AppError> {
//!         if frame.frame >= 600 {
//!             engine.quit();
//!         }
//!         Ok(())
//!     }
//! }
//!
//! struct NullRenderer;
//!
//! impl RenderSubmit for NullRenderer {
//!     fn aspect_ratio(&self) -> f32 {
//!         16.0 / 9.0
//!     }
//!
//!     fn draw_entity(&mut self, _: &ComponentRegistry, _: EntityId, _: &Mat4, _: &Mat4) {}
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut engine = Engine::new(SimulationConfig::default())?;
//!     engine.run(&mut Orbits, &mut NullRenderer)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;
pub mod config;

pub mod foundation;
pub mod ecs;
pub mod physics;
pub mod spatial;
pub mod debug;
pub mod render;

mod application;
mod engine;

pub use application::{Application, AppError};
pub use engine::{Engine, EngineError, FrameInput, FrameReport};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Application, AppError,
        Engine, EngineError, FrameInput, FrameReport,
        config::{Config, ConfigError},
        core::config::{SimulationConfig, EngineConfig, PhysicsConfig, OctreeConfig, CameraConfig},
        foundation::{
            math::{Vec3, Vec4, Mat4, Quat},
            time::{Timer, TimeSource, SystemClock},
        },
        ecs::{ComponentRegistry, ComponentKinds, EntityId, EcsError},
        ecs::components::{
            TransformComponent, KinematicBody, ColliderSphere, Material, MeshHandle,
            ShaderHandle, PointLight, GpuHandle,
        },
        physics::{PhysicsSystem, StepReport, CollisionPair},
        spatial::Octree,
        debug::{DebugDraw, DebugDrawSystem, DebugShape},
        render::{Camera, MovementInput, RenderSubmit},
    };
}
