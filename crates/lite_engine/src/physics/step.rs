//! The per-frame physics step
//!
//! One call advances every enabled body by a single fixed timestep, rebuilds
//! the frame octree from the new positions and runs the collision pass. The
//! fixed timestep is independent of the wall-clock frame delta, so the
//! simulation behaves the same at any frame rate.

use super::collision::{resolve_collisions, CollisionPair};
use super::gravity::gravitational_acceleration;
use super::integration::integrate;
use crate::core::config::{OctreeConfig, PhysicsConfig};
use crate::ecs::ComponentRegistry;
use crate::spatial::Octree;

/// What one physics step did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Bodies advanced by the integrator
    pub integrated: usize,
    /// Enabled bodies left in place by the singularity guard
    pub singular: usize,
    /// Enabled bodies whose position fell outside the octree root
    pub unindexed: usize,
    /// Contacts found by the collision pass
    pub collisions: Vec<CollisionPair>,
    /// Bodies that went from enabled to frozen this step
    pub frozen: usize,
}

/// Owns the physics tunables and runs the per-frame step
#[derive(Debug, Clone, Default)]
pub struct PhysicsSystem {
    config: PhysicsConfig,
    octree_config: OctreeConfig,
    steps: u64,
}

impl PhysicsSystem {
    /// Create a physics system with the given tunables
    pub fn new(config: PhysicsConfig, octree_config: OctreeConfig) -> Self {
        Self {
            config,
            octree_config,
            steps: 0,
        }
    }

    /// Gravity and integration settings
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Settings used for each frame's octree
    pub fn octree_config(&self) -> &OctreeConfig {
        &self.octree_config
    }

    /// Steps run so far
    pub fn step_count(&self) -> u64 {
        self.steps
    }

    /// Advance the simulation by one fixed timestep
    ///
    /// See [`physics_step`] for the order of work. The returned octree
    /// belongs to this frame only.
    ///
    /// # Panics
    ///
    /// Panics if an enabled body has non-positive mass.
    pub fn step(&mut self, registry: &mut ComponentRegistry) -> (Octree, StepReport) {
        let (octree, report) = physics_step(registry, &self.config, &self.octree_config);
        self.steps += 1;

        log::debug!(
            "Physics step {}: {} integrated, {} singular, {} contacts, {} frozen, \
             octree {} points in {} nodes / depth {}",
            self.steps,
            report.integrated,
            report.singular,
            report.collisions.len(),
            report.frozen,
            octree.point_count(),
            octree.node_count(),
            octree.depth()
        );

        (octree, report)
    }
}

/// Advance every enabled body by one fixed timestep
///
/// Order: integrate enabled bodies and mirror their positions into the
/// transforms, build the octree from those positions, freeze colliding
/// bodies, then refresh model matrices for rendering.
///
/// # Panics
///
/// Panics if an enabled body has non-positive mass.
pub fn physics_step(
    registry: &mut ComponentRegistry,
    config: &PhysicsConfig,
    octree_config: &OctreeConfig,
) -> (Octree, StepReport) {
    let mut report = StepReport::default();
    let dt = config.fixed_timestep;

    for entity in registry.entities() {
        let body = &mut registry.bodies[entity];
        if !body.enabled {
            continue;
        }

        match gravitational_acceleration(body.position, body.mass, config) {
            Some(acceleration) => {
                integrate(body, acceleration, dt);
                report.integrated += 1;
            }
            None => {
                log::trace!("Entity {entity} inside singularity threshold, not integrated");
                report.singular += 1;
            }
        }
        registry.sync_body_to_transform(entity);
    }

    let mut octree = Octree::new(config.world_half_extent, octree_config.clone());
    for entity in registry.entities() {
        let body = &registry.bodies[entity];
        if body.enabled && !octree.insert(entity, body.position) {
            report.unindexed += 1;
        }
    }

    let enabled_before = count_enabled(registry);
    report.collisions = resolve_collisions(registry);
    report.frozen = enabled_before - count_enabled(registry);

    registry.refresh_matrices();
    (octree, report)
}

fn count_enabled(registry: &ComponentRegistry) -> usize {
    registry
        .entities()
        .filter(|&entity| registry.bodies[entity].enabled)
        .count()
}
