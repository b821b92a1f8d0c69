//! Whole-frame tests spanning the registry, physics, octree and engine

mod frame_integration;
