//! Render-side components
//!
//! The simulation core never interprets these; they are opaque references
//! to GPU objects owned by the renderer, stored in the registry so the draw
//! pass can walk the same dense arrays the physics step uses.

use crate::ecs::{Component, ComponentKinds};

/// Opaque GPU object name (vertex array, texture, program)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GpuHandle(pub u32);

/// Reference to an uploaded mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeshHandle {
    /// Whether the entity is drawn
    pub enabled: bool,
    /// Renderer-owned mesh name
    pub handle: GpuHandle,
    /// Draw as wireframe instead of filled triangles
    pub use_wireframe: bool,
}

impl Component for MeshHandle {
    const KIND: ComponentKinds = ComponentKinds::MESH;

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl MeshHandle {
    /// Create an enabled, filled mesh reference
    pub fn new(handle: GpuHandle) -> Self {
        Self {
            enabled: true,
            handle,
            use_wireframe: false,
        }
    }

    /// Builder pattern: draw as wireframe
    pub fn wireframe(mut self) -> Self {
        self.use_wireframe = true;
        self
    }
}

/// Reference to a compiled shader program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShaderHandle {
    /// Whether the slot is live
    pub enabled: bool,
    /// Renderer-owned program name
    pub program: GpuHandle,
}

impl Component for ShaderHandle {
    const KIND: ComponentKinds = ComponentKinds::SHADER;

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl ShaderHandle {
    /// Create an enabled shader reference
    pub fn new(program: GpuHandle) -> Self {
        Self { enabled: true, program }
    }
}

/// Diffuse/specular textured surface
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Material {
    /// Whether the slot is live
    pub enabled: bool,
    /// Program used to shade this material
    pub shader: GpuHandle,
    /// Diffuse texture
    pub diffuse_map: GpuHandle,
    /// Specular texture
    pub specular_map: GpuHandle,
    /// Specular exponent
    pub shininess: f32,
}

impl Component for Material {
    const KIND: ComponentKinds = ComponentKinds::MATERIAL;

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Material {
    /// Create an enabled material with the default shininess of 32
    pub fn new(shader: GpuHandle, diffuse_map: GpuHandle, specular_map: GpuHandle) -> Self {
        Self {
            enabled: true,
            shader,
            diffuse_map,
            specular_map,
            shininess: 32.0,
        }
    }

    /// Builder pattern: Set shininess
    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }
}
