//! Struct-of-arrays component registry
//!
//! Every component kind gets its own dense array of `capacity` slots indexed
//! directly by [`EntityId`]. Nothing is ever removed: a component is "absent"
//! when its slot's `enabled` flag is false, and slots past the allocator's
//! high-water mark are never visited by systems, so they read as disabled
//! for every kind.

use super::components::{
    ColliderSphere, KinematicBody, Material, MeshHandle, PointLight, ShaderHandle,
    TransformComponent,
};
use super::{Component, ComponentArray, ComponentKinds, EcsError, EntityAllocator, EntityId};
use crate::core::config::MAX_ENTITIES;
use crate::foundation::math::Vec3;

/// Owner of every per-kind component array
///
/// The arrays are public so systems can borrow several kinds at once
/// (`registry.bodies` mutably while reading `registry.colliders`).
#[derive(Debug, Clone)]
pub struct ComponentRegistry {
    allocator: EntityAllocator,

    /// Position, rotation, scale and cached model matrix
    pub transforms: ComponentArray<TransformComponent>,
    /// Integrated point masses
    pub bodies: ComponentArray<KinematicBody>,
    /// Sphere collision bounds
    pub colliders: ComponentArray<ColliderSphere>,
    /// Surface materials
    pub materials: ComponentArray<Material>,
    /// Mesh references
    pub meshes: ComponentArray<MeshHandle>,
    /// Point lights
    pub lights: ComponentArray<PointLight>,
    /// Shader program references
    pub shaders: ComponentArray<ShaderHandle>,
}

impl ComponentRegistry {
    /// Allocate a registry with the default capacity
    pub fn new() -> Self {
        // MAX_ENTITIES is a small compile-time constant
        #[allow(clippy::cast_possible_truncation)]
        Self::with_capacity(MAX_ENTITIES as u32)
    }

    /// Allocate a registry whose valid ids are `1..capacity`
    ///
    /// Every slot of every kind starts inert: disabled, numerics zeroed.
    pub fn with_capacity(capacity: u32) -> Self {
        let slots = capacity as usize;
        log::info!("Allocating component registry with {capacity} slots per kind");
        Self {
            allocator: EntityAllocator::new(capacity),
            transforms: ComponentArray::new(slots),
            bodies: ComponentArray::new(slots),
            colliders: ComponentArray::new(slots),
            materials: ComponentArray::new(slots),
            meshes: ComponentArray::new(slots),
            lights: ComponentArray::new(slots),
            shaders: ComponentArray::new(slots),
        }
    }

    /// Register a new entity
    ///
    /// # Panics
    ///
    /// Panics once the registry is full; see [`ComponentRegistry::try_register_entity`].
    pub fn register_entity(&mut self) -> EntityId {
        let entity = self.allocator.register();
        log::trace!("Registered entity {entity}");
        entity
    }

    /// Register a new entity, reporting exhaustion instead of panicking
    pub fn try_register_entity(&mut self) -> Result<EntityId, EcsError> {
        self.allocator.try_register()
    }

    /// High-water mark of registered ids
    pub fn entity_count(&self) -> u32 {
        self.allocator.count()
    }

    /// Exclusive upper bound on entity ids
    pub fn capacity(&self) -> u32 {
        self.allocator.capacity()
    }

    /// Whether `entity` has been registered
    pub fn is_registered(&self, entity: EntityId) -> bool {
        self.allocator.contains(entity)
    }

    /// Every registered entity in id order
    pub fn entities(&self) -> impl Iterator<Item = EntityId> + Clone {
        self.allocator.iter()
    }

    /// Kinds whose slot is enabled for `entity`
    ///
    /// Unregistered ids have an empty signature regardless of slot contents.
    pub fn signature(&self, entity: EntityId) -> ComponentKinds {
        if !self.is_registered(entity) {
            return ComponentKinds::empty();
        }

        let mut kinds = ComponentKinds::empty();
        kinds |= kind_if_enabled(&self.transforms, entity);
        kinds |= kind_if_enabled(&self.bodies, entity);
        kinds |= kind_if_enabled(&self.colliders, entity);
        kinds |= kind_if_enabled(&self.materials, entity);
        kinds |= kind_if_enabled(&self.meshes, entity);
        kinds |= kind_if_enabled(&self.lights, entity);
        kinds |= kind_if_enabled(&self.shaders, entity);
        kinds
    }

    /// Registered entities whose signature contains all of `kinds`
    pub fn query(&self, kinds: ComponentKinds) -> impl Iterator<Item = EntityId> + '_ {
        self.entities()
            .filter(move |&entity| self.signature(entity).contains(kinds))
    }

    /// Copy the body's position into the transform
    pub fn sync_body_to_transform(&mut self, entity: EntityId) {
        self.transforms[entity].position = self.bodies[entity].position;
    }

    /// Recompute the cached model matrix of every enabled transform
    pub fn refresh_matrices(&mut self) {
        for entity in self.allocator.iter() {
            let transform = &mut self.transforms[entity];
            if transform.enabled {
                transform.refresh_matrix();
            }
        }
    }

    /// Register an entity with a transform, an enabled body and a sphere collider
    ///
    /// # Panics
    ///
    /// Panics if the registry is full, `mass` is not positive or `radius` is negative.
    pub fn spawn_body(
        &mut self,
        position: Vec3,
        velocity: Vec3,
        mass: f32,
        radius: f32,
    ) -> EntityId {
        let entity = self.register_entity();
        self.transforms[entity] = TransformComponent::from_position(position);
        self.bodies[entity] = KinematicBody::new(position, velocity, mass);
        self.colliders[entity] = ColliderSphere::new(radius);
        self.transforms[entity].refresh_matrix();
        entity
    }

    /// Register an entity with a transform and a point light
    pub fn spawn_point_light(&mut self, position: Vec3, light: PointLight) -> EntityId {
        let entity = self.register_entity();
        self.transforms[entity] = TransformComponent::from_position(position);
        self.lights[entity] = light;
        self.transforms[entity].refresh_matrix();
        entity
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ComponentRegistry {
    fn drop(&mut self) {
        log::info!(
            "Releasing component registry ({} of {} slots used)",
            self.entity_count(),
            self.capacity()
        );
    }
}

fn kind_if_enabled<T: Component>(array: &ComponentArray<T>, entity: EntityId) -> ComponentKinds {
    match array.get(entity) {
        Some(slot) if slot.is_enabled() => T::KIND,
        _ => ComponentKinds::empty(),
    }
}
