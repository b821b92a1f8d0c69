//! Sphere collision detection and the freeze-on-contact response
//!
//! The pass is brute force over every unordered pair of enabled colliders.
//! Contact does not bounce anything: both bodies stop dead and drop out of
//! integration permanently.

use crate::ecs::{ComponentRegistry, EntityId};
use crate::foundation::math::Vec3;

/// A bounding sphere for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// The center position of the sphere in world space
    pub center: Vec3,
    /// The radius of the sphere
    pub radius: f32,
}

impl BoundingSphere {
    /// Creates a new bounding sphere with the given center and radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if this sphere touches or overlaps another
    pub fn intersects(&self, other: &BoundingSphere) -> bool {
        let distance_squared = (self.center - other.center).magnitude_squared();
        let radius_sum = self.radius + other.radius;
        distance_squared <= radius_sum * radius_sum
    }
}

/// Collision pair representing two entities that are touching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollisionPair {
    /// Lower id of the pair
    pub entity_a: EntityId,
    /// Higher id of the pair
    pub entity_b: EntityId,
}

impl CollisionPair {
    /// Create a new collision pair (always stores smaller entity ID first for consistency)
    pub fn new(entity_a: EntityId, entity_b: EntityId) -> Self {
        if entity_a < entity_b {
            Self { entity_a, entity_b }
        } else {
            Self { entity_a: entity_b, entity_b: entity_a }
        }
    }
}

/// Test every unordered pair of enabled colliders and freeze both sides of each contact
///
/// Positions come from the transforms. An entity touching several others is
/// frozen once per pairing; freezing is idempotent, so the result does not
/// depend on pair order. Returns the contacts found, ordered by id.
pub fn resolve_collisions(registry: &mut ComponentRegistry) -> Vec<CollisionPair> {
    let candidates: Vec<(EntityId, BoundingSphere)> = registry
        .entities()
        .filter(|&entity| registry.colliders[entity].enabled)
        .map(|entity| {
            let position = registry.transforms[entity].position;
            let sphere = registry.colliders[entity].bounding_sphere(position);
            (entity, sphere)
        })
        .collect();

    let mut contacts = Vec::new();
    for (i, (entity_a, sphere_a)) in candidates.iter().enumerate() {
        for (entity_b, sphere_b) in &candidates[i + 1..] {
            if sphere_a.intersects(sphere_b) {
                contacts.push(CollisionPair::new(*entity_a, *entity_b));
            }
        }
    }

    for pair in &contacts {
        for entity in [pair.entity_a, pair.entity_b] {
            let body = &mut registry.bodies[entity];
            if body.enabled {
                log::trace!("Freezing entity {entity} on contact ({pair:?})");
            }
            body.freeze();
        }
    }

    contacts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_body_registry(separation: f32, radius: f32) -> (ComponentRegistry, EntityId, EntityId) {
        let mut registry = ComponentRegistry::with_capacity(8);
        let a =
            registry.spawn_body(Vec3::new(50.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0), 1.0, radius);
        let b = registry.spawn_body(
            Vec3::new(50.0 + separation, 0.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            1.0,
            radius,
        );
        (registry, a, b)
    }

    #[test]
    fn test_sphere_touching_counts_as_intersecting() {
        let a = BoundingSphere::new(Vec3::zeros(), 1.0);
        let b = BoundingSphere::new(Vec3::new(2.0, 0.0, 0.0), 1.0);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&BoundingSphere::new(Vec3::new(2.001, 0.0, 0.0), 1.0)));
    }

    #[test]
    fn test_separated_spheres_do_not_freeze() {
        // 2.5 apart with radii 1.0 each: gap of 0.5
        let (mut registry, a, b) = two_body_registry(2.5, 1.0);
        let contacts = resolve_collisions(&mut registry);

        assert!(contacts.is_empty());
        assert!(registry.bodies[a].enabled);
        assert!(registry.bodies[b].enabled);
    }

    #[test]
    fn test_overlapping_spheres_freeze_both() {
        // 1.8 apart with radii 1.0 each: sum 2.0 >= 1.8
        let (mut registry, a, b) = two_body_registry(1.8, 1.0);
        let contacts = resolve_collisions(&mut registry);

        assert_eq!(contacts, vec![CollisionPair::new(a, b)]);
        assert!(registry.bodies[a].is_frozen());
        assert!(registry.bodies[b].is_frozen());
    }

    #[test]
    fn test_disabled_collider_is_skipped() {
        let (mut registry, a, b) = two_body_registry(0.5, 1.0);
        registry.colliders[b].enabled = false;

        assert!(resolve_collisions(&mut registry).is_empty());
        assert!(registry.bodies[a].enabled);
    }

    #[test]
    fn test_multi_body_overlap_freezes_all() {
        let mut registry = ComponentRegistry::with_capacity(8);
        let hub =
            registry.spawn_body(Vec3::new(10.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), 1.0, 1.0);
        let left = registry.spawn_body(Vec3::new(8.5, 0.0, 0.0), Vec3::zeros(), 1.0, 1.0);
        let right = registry.spawn_body(Vec3::new(11.5, 0.0, 0.0), Vec3::zeros(), 1.0, 1.0);
        let far = registry.spawn_body(Vec3::new(40.0, 0.0, 0.0), Vec3::zeros(), 1.0, 1.0);

        let contacts = resolve_collisions(&mut registry);

        assert_eq!(contacts.len(), 2);
        assert!(contacts.iter().all(|pair| pair.entity_a == hub));
        for entity in [hub, left, right] {
            assert!(registry.bodies[entity].is_frozen());
        }
        assert!(registry.bodies[far].enabled);
    }

    #[test]
    fn test_rerunning_pass_keeps_bodies_frozen() {
        let (mut registry, a, b) = two_body_registry(1.0, 1.0);
        resolve_collisions(&mut registry);
        let after_first = (registry.bodies[a].clone(), registry.bodies[b].clone());

        let contacts = resolve_collisions(&mut registry);

        assert_eq!(contacts.len(), 1);
        assert_eq!(registry.bodies[a], after_first.0);
        assert_eq!(registry.bodies[b], after_first.1);
    }
}
