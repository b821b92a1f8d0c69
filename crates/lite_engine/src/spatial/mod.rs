//! Spatial partitioning data structures
//!
//! The octree is rebuilt from scratch every frame from body positions and
//! discarded once the frame has been drawn.

mod octree;

pub use octree::{Octree, OctreeEntry, OctreeNode};
pub use crate::core::config::OctreeConfig;
