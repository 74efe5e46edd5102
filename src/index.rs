//! Hierarchical marker clustering over per-zoom R*-trees.
//!
//! Points are projected to the unit Web Mercator square and stored in a tree
//! for zoom `max_zoom + 1`, where nothing is merged. Each shallower level is
//! derived from the one below it: walking the nodes in order, an unvisited
//! node absorbs every unvisited neighbour within the cluster radius for that
//! zoom, and the group becomes a cluster at its count-weighted centroid once
//! it holds `min_points` points. Every level gets its own bulk-loaded tree, so
//! a viewport query is one envelope lookup.
//!
//! # Example
//!
//! ```rust
//! use geocluster::{ClusterIndex, FacilityPoint, Viewport};
//!
//! let points = vec![
//!     FacilityPoint::new("pool", 2.3522, 48.8566, ()),
//!     FacilityPoint::new("gym", 2.3530, 48.8570, ()),
//!     FacilityPoint::new("stadium", 5.3698, 43.2965, ()),
//! ];
//! let index = ClusterIndex::build(points)?;
//!
//! let markers = index.query(&Viewport::world(4));
//! assert_eq!(markers.len(), 2);
//!
//! let cluster = markers.iter().find_map(|m| m.cluster_id()).unwrap();
//! assert!(index.expansion_zoom(cluster)? > 4);
//! # Ok::<(), geocluster::ClusterError>(())
//! ```

use crate::compute::projection::{lat_y, lng_x, pixels_to_world, wrap_lng, x_lng, y_lat};
use crate::compute::validation::validate_facility_points;
use crate::config::ClusterConfig;
use crate::error::{ClusterError, Result};
use crate::marker::{AggregateMarker, ClusterId, ClusterNode};
use geo::Point;
use geocluster_types::bbox::BoundingBox2D;
use geocluster_types::point::FacilityPoint;
use geocluster_types::viewport::{MapRegion, Viewport};
use rstar::{AABB, Envelope, PointDistance, RTree, RTreeObject};
use smallvec::SmallVec;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeRef {
    /// Index into `ClusterIndex::points`
    Leaf(usize),
    /// Index into `ClusterIndex::clusters`
    Cluster(usize),
}

/// A node as stored in one zoom level's tree.
#[derive(Debug, Clone, Copy)]
struct LevelNode {
    x: f64,
    y: f64,
    weight: usize,
    node: NodeRef,
    /// Projected box around every point under this node
    members: AABB<[f64; 2]>,
    /// Position within the level, used for visit tracking and output order
    order: usize,
}

// The member box always contains the centroid, so envelope distances stay
// a lower bound for `distance_2` and radius searches prune correctly.
impl RTreeObject for LevelNode {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.members
    }
}

impl PointDistance for LevelNode {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.x - point[0];
        let dy = self.y - point[1];
        dx * dx + dy * dy
    }
}

#[derive(Debug, Clone)]
struct ClusterRecord {
    x: f64,
    y: f64,
    point_count: usize,
    members: AABB<[f64; 2]>,
    /// Zoom the cluster was formed at; it is replaced by its children one
    /// level deeper.
    zoom: u8,
    children: SmallVec<[NodeRef; 4]>,
}

/// Immutable clustering index over one set of facility points.
///
/// Rebuild to change the point set. Cluster ids handed out by one index are
/// rejected by every other one.
pub struct ClusterIndex<T> {
    points: Vec<FacilityPoint<T>>,
    clusters: Vec<ClusterRecord>,
    /// One tree per zoom from `min_zoom` to `max_zoom + 1`
    levels: Vec<RTree<LevelNode>>,
    config: ClusterConfig,
    generation: u64,
}

impl<T> ClusterIndex<T> {
    /// Build an index with the default configuration.
    ///
    /// Every point must have a finite longitude in [-180, 180] and latitude
    /// in [-90, 90]; the first offending point fails the build with
    /// [`ClusterError::InvalidPoint`]. Filter records without usable
    /// coordinates before calling this.
    pub fn build<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = FacilityPoint<T>>,
    {
        Self::build_with_config(points, ClusterConfig::default())
    }

    pub fn build_with_config<I>(points: I, config: ClusterConfig) -> Result<Self>
    where
        I: IntoIterator<Item = FacilityPoint<T>>,
    {
        config.validate().map_err(ClusterError::InvalidConfig)?;

        let points: Vec<FacilityPoint<T>> = points.into_iter().collect();
        validate_facility_points(&points)?;

        let mut clusters = Vec::new();

        let mut nodes: Vec<LevelNode> = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let (x, y) = project(p);
                LevelNode {
                    x,
                    y,
                    weight: 1,
                    node: NodeRef::Leaf(i),
                    members: AABB::from_point([x, y]),
                    order: i,
                }
            })
            .collect();

        let level_count = (config.max_zoom - config.min_zoom) as usize + 2;
        let mut levels = Vec::with_capacity(level_count);
        let mut tree = RTree::bulk_load(nodes.clone());

        for zoom in (config.min_zoom..=config.max_zoom).rev() {
            let next = cluster_level(&nodes, &tree, zoom, &config, &mut clusters);
            log::trace!(
                "zoom {}: {} nodes from {} ({} clusters so far)",
                zoom,
                next.len(),
                nodes.len(),
                clusters.len()
            );

            levels.push(tree);
            tree = RTree::bulk_load(next.clone());
            nodes = next;
        }
        levels.push(tree);
        levels.reverse();

        let generation = NEXT_GENERATION.fetch_add(1, Ordering::Relaxed);

        log::debug!(
            "Built cluster index generation {}: {} points, {} clusters, zooms {}..={}",
            generation,
            points.len(),
            clusters.len(),
            config.min_zoom,
            config.max_zoom + 1
        );

        Ok(Self {
            points,
            clusters,
            levels,
            config,
            generation,
        })
    }

    /// Markers to draw for `viewport`.
    ///
    /// The box is grown on every side by `viewport_buffer / extent` of its
    /// projected span, so the margin depends on the box and not on the zoom.
    /// A node is returned when at least one of its points lies in the grown
    /// box: every such point is represented exactly once, and a cluster
    /// straddling the edge also carries its members from outside. For a
    /// fixed viewport the number of nodes never decreases with zoom.
    ///
    /// Above `max_zoom` every point comes back as its own leaf. Degenerate
    /// viewports (empty, inverted or non-finite) give an empty result.
    /// Output order is fixed for a given index and viewport.
    pub fn query(&self, viewport: &Viewport) -> Vec<ClusterNode<'_, T>> {
        if !viewport.is_finite() {
            log::warn!("Rejecting cluster query with non-finite viewport {:?}", viewport);
            return Vec::new();
        }

        if viewport.is_degenerate() || self.points.is_empty() {
            return Vec::new();
        }

        let tree = self.level(viewport.zoom);
        let envelopes = self.search_envelopes(viewport);

        let mut hits: Vec<&LevelNode> = Vec::new();
        for envelope in &envelopes {
            hits.extend(
                tree.locate_in_envelope_intersecting(envelope)
                    .filter(|n| self.has_member_in(n.node, envelope)),
            );
        }

        hits.sort_unstable_by_key(|n| n.order);
        hits.dedup_by_key(|n| n.order);

        hits.into_iter().map(|n| self.node(n.node)).collect()
    }

    /// Convenience for map widgets that report a centre plus deltas.
    pub fn query_region(&self, region: &MapRegion) -> Vec<ClusterNode<'_, T>> {
        self.query(&region.to_viewport())
    }

    /// Smallest zoom at which the cluster is replaced by its children.
    ///
    /// Never exceeds `max_zoom + 1`, where every point is shown on its own.
    pub fn expansion_zoom(&self, id: ClusterId) -> Result<u8> {
        let record = self.record(id)?;
        Ok(record.zoom + 1)
    }

    /// Camera target for a tap on the cluster: centred on it and zoomed to
    /// its expansion zoom, capped at `max_expansion_zoom`.
    pub fn expansion_region(&self, id: ClusterId, current: &MapRegion) -> Result<MapRegion> {
        let marker = self.cluster(id)?;
        let zoom = self.expansion_zoom(id)?.min(self.config.max_expansion_zoom);
        Ok(current.zoomed_to(&marker.centroid, zoom))
    }

    /// The nodes the cluster splits into at its expansion zoom.
    pub fn children(&self, id: ClusterId) -> Result<Vec<ClusterNode<'_, T>>> {
        let record = self.record(id)?;
        Ok(record.children.iter().map(|&c| self.node(c)).collect())
    }

    /// Original points under a cluster, skipping `offset` and returning at
    /// most `limit`.
    pub fn leaves(
        &self,
        id: ClusterId,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<&FacilityPoint<T>>> {
        let record = self.record(id)?;
        let mut leaves = Vec::new();
        let mut skipped = 0;
        let mut stack: Vec<NodeRef> = record.children.iter().rev().copied().collect();

        while let Some(node) = stack.pop() {
            if leaves.len() >= limit {
                break;
            }

            match node {
                NodeRef::Leaf(i) => {
                    if skipped < offset {
                        skipped += 1;
                    } else {
                        leaves.push(&self.points[i]);
                    }
                }
                NodeRef::Cluster(slot) => {
                    let child = &self.clusters[slot];
                    if skipped + child.point_count <= offset {
                        skipped += child.point_count;
                    } else {
                        stack.extend(child.children.iter().rev().copied());
                    }
                }
            }
        }

        Ok(leaves)
    }

    /// Look up a cluster by id.
    pub fn cluster(&self, id: ClusterId) -> Result<AggregateMarker> {
        self.record(id)?;
        Ok(self.marker(id.slot()))
    }

    /// Smallest box enclosing every indexed point, `None` when empty.
    pub fn bounds(&self) -> Option<BoundingBox2D> {
        BoundingBox2D::from_points(self.points.iter().map(|p| p.location()))
    }

    pub fn points(&self) -> &[FacilityPoint<T>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total number of clusters formed across all zoom levels.
    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }

    /// The buffered viewport in projected units, split in two when it
    /// crosses the antimeridian.
    fn search_envelopes(&self, viewport: &Viewport) -> SmallVec<[AABB<[f64; 2]>; 2]> {
        let ratio = self.config.viewport_buffer / self.config.extent;

        let top = lat_y(viewport.max_lat.clamp(-90.0, 90.0));
        let bottom = lat_y(viewport.min_lat.clamp(-90.0, 90.0));
        let margin_y = (bottom - top) * ratio;
        let (top, bottom) = (top - margin_y, bottom + margin_y);

        let margin_lng = (viewport.max_lng - viewport.min_lng) * ratio;
        let min_lng = viewport.min_lng - margin_lng;
        let max_lng = viewport.max_lng + margin_lng;

        let mut envelopes = SmallVec::new();
        if max_lng - min_lng >= 360.0 {
            envelopes.push(AABB::from_corners([0.0, top], [1.0, bottom]));
            return envelopes;
        }

        let west = wrap_lng(min_lng);
        let east = if max_lng == 180.0 { 180.0 } else { wrap_lng(max_lng) };

        if west > east {
            // crosses the antimeridian
            envelopes.push(AABB::from_corners([lng_x(west), top], [1.0, bottom]));
            envelopes.push(AABB::from_corners([0.0, top], [lng_x(east), bottom]));
        } else {
            envelopes.push(AABB::from_corners([lng_x(west), top], [lng_x(east), bottom]));
        }
        envelopes
    }

    /// Whether any point under `node` lies in `envelope`.
    fn has_member_in(&self, node: NodeRef, envelope: &AABB<[f64; 2]>) -> bool {
        match node {
            NodeRef::Leaf(i) => {
                let (x, y) = project(&self.points[i]);
                envelope.contains_point(&[x, y])
            }
            NodeRef::Cluster(slot) => {
                let record = &self.clusters[slot];
                if !envelope.intersects(&record.members) {
                    false
                } else if envelope.contains_envelope(&record.members) {
                    true
                } else {
                    record
                        .children
                        .iter()
                        .any(|&child| self.has_member_in(child, envelope))
                }
            }
        }
    }

    fn level(&self, zoom: u8) -> &RTree<LevelNode> {
        let zoom = zoom.clamp(self.config.min_zoom, self.config.max_zoom + 1);
        &self.levels[(zoom - self.config.min_zoom) as usize]
    }

    fn record(&self, id: ClusterId) -> Result<&ClusterRecord> {
        if id.generation() != self.generation {
            return Err(ClusterError::ClusterNotFound(id));
        }
        self.clusters
            .get(id.slot())
            .ok_or(ClusterError::ClusterNotFound(id))
    }

    fn marker(&self, slot: usize) -> AggregateMarker {
        let record = &self.clusters[slot];
        AggregateMarker {
            id: ClusterId::new(self.generation, slot),
            centroid: Point::new(x_lng(record.x), y_lat(record.y)),
            point_count: record.point_count,
        }
    }

    fn node(&self, node: NodeRef) -> ClusterNode<'_, T> {
        match node {
            NodeRef::Leaf(i) => ClusterNode::Leaf(&self.points[i]),
            NodeRef::Cluster(slot) => ClusterNode::Aggregate(self.marker(slot)),
        }
    }
}

impl<T> std::fmt::Debug for ClusterIndex<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClusterIndex")
            .field("generation", &self.generation)
            .field("points", &self.points.len())
            .field("clusters", &self.clusters.len())
            .field("config", &self.config)
            .finish()
    }
}

fn project<T>(point: &FacilityPoint<T>) -> (f64, f64) {
    (lng_x(point.lng()), lat_y(point.lat()))
}

/// Merge the nodes of level `zoom + 1` into the nodes of level `zoom`.
fn cluster_level(
    nodes: &[LevelNode],
    tree: &RTree<LevelNode>,
    zoom: u8,
    config: &ClusterConfig,
    clusters: &mut Vec<ClusterRecord>,
) -> Vec<LevelNode> {
    let radius = pixels_to_world(config.radius, config.extent, zoom);
    let radius_2 = radius * radius;

    let mut visited = vec![false; nodes.len()];
    let mut next: Vec<LevelNode> = Vec::with_capacity(nodes.len());

    for (i, node) in nodes.iter().enumerate() {
        if visited[i] {
            continue;
        }
        visited[i] = true;

        let mut neighbors: Vec<usize> = tree
            .locate_within_distance([node.x, node.y], radius_2)
            .map(|n| n.order)
            .filter(|&j| !visited[j])
            .collect();
        neighbors.sort_unstable();

        let total = node.weight + neighbors.iter().map(|&j| nodes[j].weight).sum::<usize>();
        for &j in &neighbors {
            visited[j] = true;
        }

        if !neighbors.is_empty() && total >= config.min_points {
            let mut wx = node.x * node.weight as f64;
            let mut wy = node.y * node.weight as f64;
            let mut members = node.members;
            let mut children: SmallVec<[NodeRef; 4]> = SmallVec::with_capacity(neighbors.len() + 1);
            children.push(node.node);

            for &j in &neighbors {
                let b = &nodes[j];
                wx += b.x * b.weight as f64;
                wy += b.y * b.weight as f64;
                members.merge(&b.members);
                children.push(b.node);
            }

            let slot = clusters.len();
            let (x, y) = (wx / total as f64, wy / total as f64);
            clusters.push(ClusterRecord {
                x,
                y,
                point_count: total,
                members,
                zoom,
                children,
            });

            next.push(LevelNode {
                x,
                y,
                weight: total,
                node: NodeRef::Cluster(slot),
                members,
                order: next.len(),
            });
        } else {
            // Too few points to merge: everything carries down as-is.
            for n in std::iter::once(node).chain(neighbors.iter().map(|&j| &nodes[j])) {
                next.push(LevelNode {
                    order: next.len(),
                    ..*n
                });
            }
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paris_block() -> Vec<FacilityPoint<&'static str>> {
        // five facilities within ~100 m of each other
        vec![
            FacilityPoint::new("a", 2.35220, 48.85660, "pool"),
            FacilityPoint::new("b", 2.35280, 48.85690, "gym"),
            FacilityPoint::new("c", 2.35180, 48.85620, "dojo"),
            FacilityPoint::new("d", 2.35250, 48.85600, "court"),
            FacilityPoint::new("e", 2.35200, 48.85700, "track"),
        ]
    }

    fn around_paris(zoom: u8) -> Viewport {
        Viewport::new(2.0, 48.5, 2.7, 49.2, zoom)
    }

    #[test]
    fn test_build_empty() {
        let index: ClusterIndex<()> = ClusterIndex::build(Vec::new()).unwrap();
        assert!(index.is_empty());
        assert!(index.query(&Viewport::world(3)).is_empty());
        assert!(index.bounds().is_none());
    }

    #[test]
    fn test_level_count() {
        let config = ClusterConfig::default().with_min_zoom(2).with_max_zoom(10);
        let index = ClusterIndex::build_with_config(paris_block(), config).unwrap();
        assert_eq!(index.levels.len(), 10);
    }

    #[test]
    fn test_country_scale_zoom_collapses_block() {
        let index = ClusterIndex::build(paris_block()).unwrap();
        let nodes = index.query(&around_paris(5));

        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].is_cluster());
        assert_eq!(nodes[0].point_count(), 5);
    }

    #[test]
    fn test_above_max_zoom_all_leaves() {
        let index = ClusterIndex::build(paris_block()).unwrap();
        let nodes = index.query(&around_paris(18));

        assert_eq!(nodes.len(), 5);
        assert!(nodes.iter().all(|n| !n.is_cluster()));
        let ids: Vec<&str> = nodes.iter().filter_map(|n| n.as_leaf()).map(|p| p.id()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_invalid_latitude_rejected() {
        let mut points = paris_block();
        points.push(FacilityPoint::new("north", 2.0, 95.0, "nowhere"));

        match ClusterIndex::build(points) {
            Err(ClusterError::InvalidPoint { index, .. }) => assert_eq!(index, 5),
            other => panic!("expected InvalidPoint, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ClusterConfig::default().with_radius(-1.0);
        let result = ClusterIndex::build_with_config(paris_block(), config);
        assert!(matches!(result, Err(ClusterError::InvalidConfig(_))));
    }

    #[test]
    fn test_centroid_is_weighted_mean() {
        let points = vec![
            FacilityPoint::new("a", 10.0, 0.0, ()),
            FacilityPoint::new("b", 10.002, 0.0, ()),
        ];
        let index = ClusterIndex::build(points).unwrap();
        let nodes = index.query(&Viewport::world(3));

        assert_eq!(nodes.len(), 1);
        let c = nodes[0].coordinate();
        assert!((c.x() - 10.001).abs() < 1e-9);
        assert!(c.y().abs() < 1e-9);
    }

    #[test]
    fn test_expansion_zoom_splits_cluster() {
        let index = ClusterIndex::build(paris_block()).unwrap();
        let nodes = index.query(&around_paris(5));
        let id = nodes[0].cluster_id().unwrap();

        let zoom = index.expansion_zoom(id).unwrap();
        assert!(zoom > 5);
        assert!(zoom <= index.config().max_zoom + 1);
        assert!(index.query(&around_paris(zoom)).len() > 1);
        assert_eq!(index.query(&around_paris(zoom - 1)).len(), 1);
    }

    #[test]
    fn test_children_cover_cluster() {
        let index = ClusterIndex::build(paris_block()).unwrap();
        let id = index.query(&around_paris(5))[0].cluster_id().unwrap();

        let children = index.children(id).unwrap();
        assert!(children.len() >= 2);
        assert_eq!(children.iter().map(|c| c.point_count()).sum::<usize>(), 5);
    }

    #[test]
    fn test_leaves_pagination() {
        let index = ClusterIndex::build(paris_block()).unwrap();
        let id = index.query(&around_paris(5))[0].cluster_id().unwrap();

        let all = index.leaves(id, usize::MAX, 0).unwrap();
        assert_eq!(all.len(), 5);

        let mut ids: Vec<&str> = all.iter().map(|p| p.id()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);

        let page = index.leaves(id, 2, 2).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id(), all[2].id());
        assert_eq!(page[1].id(), all[3].id());

        assert!(index.leaves(id, 10, 5).unwrap().is_empty());
        assert!(index.leaves(id, 0, 0).unwrap().is_empty());
    }

    #[test]
    fn test_member_box_encloses_every_leaf() {
        let mut points = paris_block();
        points.push(FacilityPoint::new("f", 2.29, 48.87, "stadium"));
        points.push(FacilityPoint::new("g", 2.41, 48.83, "rink"));
        let index = ClusterIndex::build(points).unwrap();
        assert!(index.cluster_count() > 0);

        for slot in 0..index.cluster_count() {
            let record = &index.clusters[slot];
            assert!(record.members.contains_point(&[record.x, record.y]));

            let id = ClusterId::new(index.generation(), slot);
            for leaf in index.leaves(id, usize::MAX, 0).unwrap() {
                let (x, y) = project(leaf);
                assert!(record.members.contains_point(&[x, y]));
            }
        }
    }

    #[test]
    fn test_query_skips_cluster_whose_box_only_grazes_viewport() {
        // Members sit on opposite corners of the box; none is inside it
        let points = vec![
            FacilityPoint::new("sw", 1.9, 47.9, ()),
            FacilityPoint::new("ne", 2.1, 48.1, ()),
        ];
        let config = ClusterConfig::default().with_viewport_buffer(0.0);
        let index = ClusterIndex::build_with_config(points, config).unwrap();

        let viewport = Viewport::new(1.95, 48.02, 2.05, 48.08, 4);
        assert!(index.query(&viewport).is_empty());
    }

    #[test]
    fn test_unknown_slot_not_found() {
        let index = ClusterIndex::build(paris_block()).unwrap();
        let bogus = ClusterId::new(index.generation(), 10_000);
        assert_eq!(
            index.expansion_zoom(bogus),
            Err(ClusterError::ClusterNotFound(bogus))
        );
    }

    #[test]
    fn test_min_points_keeps_small_groups_apart() {
        let config = ClusterConfig::default().with_min_points(3);
        let points = vec![
            FacilityPoint::new("a", 2.0, 45.0, ()),
            FacilityPoint::new("b", 2.0001, 45.0, ()),
        ];
        let index = ClusterIndex::build_with_config(points, config).unwrap();

        let nodes = index.query(&Viewport::world(0));
        assert_eq!(nodes.len(), 2);
        assert_eq!(index.cluster_count(), 0);
    }

    #[test]
    fn test_coincident_points_expand_past_max_zoom() {
        let points = vec![
            FacilityPoint::new("a", 4.0, 44.0, ()),
            FacilityPoint::new("b", 4.0, 44.0, ()),
        ];
        let index = ClusterIndex::build(points).unwrap();

        let id = index.query(&Viewport::world(16))[0].cluster_id().unwrap();
        assert_eq!(index.expansion_zoom(id).unwrap(), 17);
        assert_eq!(index.query(&Viewport::world(17)).len(), 2);
    }

    #[test]
    fn test_expansion_region_caps_zoom() {
        let points = vec![
            FacilityPoint::new("a", 4.0, 44.0, ()),
            FacilityPoint::new("b", 4.0, 44.0, ()),
        ];
        let config = ClusterConfig::default().with_max_expansion_zoom(12);
        let index = ClusterIndex::build_with_config(points, config).unwrap();
        let id = index.query(&Viewport::world(3))[0].cluster_id().unwrap();

        let current = MapRegion::new(44.0, 4.0, 22.5, 22.5);
        assert_eq!(current.zoom(), 4);

        let target = index.expansion_region(id, &current).unwrap();
        assert_eq!(target.zoom(), 12);
        assert!((target.longitude - 4.0).abs() < 1e-9);
        assert!((target.latitude - 44.0).abs() < 1e-9);
    }
}
