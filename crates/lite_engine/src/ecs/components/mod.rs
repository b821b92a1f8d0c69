//! ECS Components module
//!
//! One file per component kind family. Every component is plain data with
//! an `enabled` flag; systems hold the logic.

pub mod transform;
pub mod kinematic_body;
pub mod collision;
pub mod renderable;
pub mod lighting;

pub use transform::TransformComponent;
pub use kinematic_body::KinematicBody;
pub use collision::ColliderSphere;
pub use renderable::{GpuHandle, MeshHandle, ShaderHandle, Material};
pub use lighting::PointLight;
