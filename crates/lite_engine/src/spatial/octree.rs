//! Octree spatial partitioning structure
//!
//! Recursively divides an axis-aligned cube into eight octants. Leaves hold
//! points until they reach the configured capacity; the next insertion
//! subdivides the leaf once and pushes every stored point, plus the new one,
//! straight into the matching child.
//!
//! The tree is frame-scoped scratch: build it from the current body
//! positions, query or draw it, then drop it. Each node owns its children
//! exclusively, so dropping the root releases the whole tree depth-first.

use crate::core::config::OctreeConfig;
use crate::debug::DebugDraw;
use crate::ecs::EntityId;
use crate::foundation::math::{Vec3, Vec4};

/// A point stored in the octree, tagged with the entity it came from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OctreeEntry {
    /// Entity whose position this is
    pub entity: EntityId,
    /// World-space position at insertion time
    pub position: Vec3,
}

/// Single node in the octree hierarchy
#[derive(Debug, Clone)]
pub struct OctreeNode {
    center: Vec3,
    half_extent: f32,
    depth: u32,
    points: Vec<OctreeEntry>,
    children: Option<Box<[OctreeNode; 8]>>,
}

/// Octant index (0-7) of `position` relative to `center`
///
/// Octant layout:
/// - bit 0: +X half
/// - bit 1: +Y half
/// - bit 2: +Z half
///
/// Points exactly on a splitting plane go to the positive side, so the
/// eight octants never overlap and always cover the parent.
fn octant_index(center: Vec3, position: Vec3) -> usize {
    let x_bit = usize::from(position.x >= center.x);
    let y_bit = usize::from(position.y >= center.y);
    let z_bit = usize::from(position.z >= center.z);
    (z_bit << 2) | (y_bit << 1) | x_bit
}

impl OctreeNode {
    fn new(center: Vec3, half_extent: f32, depth: u32) -> Self {
        Self {
            center,
            half_extent,
            depth,
            points: Vec::new(),
            children: None,
        }
    }

    /// Center of this node's cube
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Half the edge length of this node's cube
    pub fn half_extent(&self) -> f32 {
        self.half_extent
    }

    /// Depth in the tree (0 = root)
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Whether this node has been split into octants
    pub fn is_subdivided(&self) -> bool {
        self.children.is_some()
    }

    /// Points stored directly in this node (always empty once subdivided)
    pub fn points(&self) -> &[OctreeEntry] {
        &self.points
    }

    /// The eight octants, if subdivided
    pub fn children(&self) -> Option<&[OctreeNode; 8]> {
        self.children.as_deref()
    }

    /// Check if `point` lies inside this node's closed cube
    pub fn contains_point(&self, point: Vec3) -> bool {
        (point - self.center).iter().all(|offset| offset.abs() <= self.half_extent)
    }

    fn child_for_octant(&self, octant: usize) -> OctreeNode {
        let quarter = self.half_extent * 0.5;
        let sign = |bit: usize| if octant & bit != 0 { 1.0 } else { -1.0 };
        let child_center = self.center + Vec3::new(sign(1), sign(2), sign(4)) * quarter;
        OctreeNode::new(child_center, quarter, self.depth + 1)
    }

    /// Split into eight octants, moving stored points and `incoming` into them
    ///
    /// Children receive their points directly; none of them subdivides here
    /// even if it ends up over capacity.
    fn subdivide(&mut self, incoming: OctreeEntry) {
        let mut children: Box<[OctreeNode; 8]> =
            Box::new(std::array::from_fn(|octant| self.child_for_octant(octant)));

        let center = self.center;
        for entry in std::mem::take(&mut self.points).into_iter().chain(std::iter::once(incoming)) {
            children[octant_index(center, entry.position)].points.push(entry);
        }

        self.children = Some(children);
    }

    /// Insert an entry already known to lie within this node
    fn insert_within(&mut self, entry: OctreeEntry, config: &OctreeConfig) {
        let octant = octant_index(self.center, entry.position);
        if let Some(children) = self.children.as_mut() {
            children[octant].insert_within(entry, config);
            return;
        }

        let has_room = self.points.len() < config.max_points_per_node;
        if has_room || self.depth >= config.max_depth {
            self.points.push(entry);
        } else {
            self.subdivide(entry);
        }
    }

    /// Visit this node and every descendant, parents before children
    pub fn traverse<F: FnMut(&OctreeNode)>(&self, visitor: &mut F) {
        visitor(self);
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.traverse(visitor);
            }
        }
    }

    /// Query all entries within `radius` of `center`
    pub fn query_radius(&self, center: Vec3, radius: f32, results: &mut Vec<OctreeEntry>) {
        // Closest point of this cube to the query center
        let half = self.half_extent;
        let closest = center.zip_map(&self.center, |q, c| q.clamp(c - half, c + half));
        if (closest - center).magnitude_squared() > radius * radius {
            return;
        }

        results.extend(
            self.points
                .iter()
                .filter(|entry| (entry.position - center).magnitude_squared() <= radius * radius),
        );

        if let Some(children) = &self.children {
            for child in children.iter() {
                child.query_radius(center, radius, results);
            }
        }
    }

    /// Deepest node whose cube the point descends into
    pub fn leaf_for(&self, point: Vec3) -> &OctreeNode {
        match &self.children {
            Some(children) => children[octant_index(self.center, point)].leaf_for(point),
            None => self,
        }
    }
}

/// Octree spatial partitioning structure
#[derive(Debug, Clone)]
pub struct Octree {
    root: OctreeNode,
    config: OctreeConfig,
}

impl Octree {
    /// Create an empty, unsubdivided tree covering `[-half_extent, half_extent]³`
    pub fn new(half_extent: f32, config: OctreeConfig) -> Self {
        Self::with_center(Vec3::zeros(), half_extent, config)
    }

    /// Create an empty tree around an arbitrary center
    pub fn with_center(center: Vec3, half_extent: f32, config: OctreeConfig) -> Self {
        Self {
            root: OctreeNode::new(center, half_extent, 0),
            config,
        }
    }

    /// The root node
    pub fn root(&self) -> &OctreeNode {
        &self.root
    }

    /// Node capacity and depth limit in use
    pub fn config(&self) -> &OctreeConfig {
        &self.config
    }

    /// Insert an entity's position
    ///
    /// Points outside the root cube are dropped and `false` is returned; the
    /// tree never grows to fit them.
    pub fn insert(&mut self, entity: EntityId, position: Vec3) -> bool {
        if !self.root.contains_point(position) {
            log::trace!("Octree dropped {entity} at {position:?}: outside root bounds");
            return false;
        }
        self.root.insert_within(OctreeEntry { entity, position }, &self.config);
        true
    }

    /// Visit every node, parents before children
    pub fn traverse<F: FnMut(&OctreeNode)>(&self, mut visitor: F) {
        self.root.traverse(&mut visitor);
    }

    /// Draw every node's cube as a wireframe
    ///
    /// Empty nodes are drawn too, so an empty tree still shows the root bounds.
    pub fn draw(&self, debug: &mut impl DebugDraw, color: Vec4) {
        self.traverse(|node| debug.draw_cube(node.center(), node.half_extent(), true, color));
    }

    /// Query all entries within `radius` of `center`
    pub fn query_radius(&self, center: Vec3, radius: f32) -> Vec<OctreeEntry> {
        let mut results = Vec::new();
        self.root.query_radius(center, radius, &mut results);
        results
    }

    /// Find the entry stored for `entity`
    pub fn find(&self, entity: EntityId) -> Option<OctreeEntry> {
        let mut found = None;
        self.traverse(|node| {
            if found.is_none() {
                found = node.points().iter().find(|entry| entry.entity == entity).copied();
            }
        });
        found
    }

    /// Leaf that a point at `position` would live in, if inside the root
    pub fn leaf_for(&self, position: Vec3) -> Option<&OctreeNode> {
        self.root
            .contains_point(position)
            .then(|| self.root.leaf_for(position))
    }

    /// Total stored points
    pub fn point_count(&self) -> usize {
        let mut count = 0;
        self.traverse(|node| count += node.points().len());
        count
    }

    /// Total nodes, including the root
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.traverse(|_| count += 1);
        count
    }

    /// Nodes without children
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        self.traverse(|node| count += usize::from(!node.is_subdivided()));
        count
    }

    /// Depth of the deepest node (0 for an unsubdivided tree)
    pub fn depth(&self) -> u32 {
        let mut depth = 0;
        self.traverse(|node| depth = depth.max(node.depth()));
        depth
    }

    /// Drop every node below the root and every stored point
    pub fn clear(&mut self) {
        self.root = OctreeNode::new(self.root.center, self.root.half_extent, 0);
    }
}
