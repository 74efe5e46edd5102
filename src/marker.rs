//! Marker descriptors returned by viewport queries.

use geo::Point;
use geocluster_types::point::FacilityPoint;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Opaque handle to an aggregate marker.
///
/// Only meaningful for the index that produced it: each build gets its own
/// generation, and lookups with an id from another generation fail with
/// `ClusterNotFound`. The string form (`"<generation>:<slot>"`) lets map
/// layers hand ids back after a tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClusterId {
    generation: u64,
    slot: usize,
}

impl ClusterId {
    pub(crate) fn new(generation: u64, slot: usize) -> Self {
        Self { generation, slot }
    }

    /// Build generation this id belongs to.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn slot(&self) -> usize {
        self.slot
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.generation, self.slot)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed cluster id: {0:?}")]
pub struct ParseClusterIdError(String);

impl FromStr for ClusterId {
    type Err = ParseClusterIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (generation, slot) = s
            .split_once(':')
            .ok_or_else(|| ParseClusterIdError(s.to_string()))?;

        let generation = generation
            .parse()
            .map_err(|_| ParseClusterIdError(s.to_string()))?;
        let slot = slot.parse().map_err(|_| ParseClusterIdError(s.to_string()))?;

        Ok(Self { generation, slot })
    }
}

/// Two or more points collapsed into a single marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateMarker {
    pub id: ClusterId,
    /// Count-weighted mean of the members, averaged in projected space
    pub centroid: Point,
    pub point_count: usize,
}

/// One marker to draw for a viewport.
#[derive(Debug, PartialEq)]
pub enum ClusterNode<'a, T> {
    /// A single facility at its own coordinate.
    Leaf(&'a FacilityPoint<T>),
    Aggregate(AggregateMarker),
}

impl<T> Clone for ClusterNode<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ClusterNode<'_, T> {}

impl<'a, T> ClusterNode<'a, T> {
    /// Where the marker should be drawn.
    pub fn coordinate(&self) -> Point {
        match self {
            ClusterNode::Leaf(point) => *point.location(),
            ClusterNode::Aggregate(marker) => marker.centroid,
        }
    }

    /// Number of input points this marker stands for.
    pub fn point_count(&self) -> usize {
        match self {
            ClusterNode::Leaf(_) => 1,
            ClusterNode::Aggregate(marker) => marker.point_count,
        }
    }

    pub fn is_cluster(&self) -> bool {
        matches!(self, ClusterNode::Aggregate(_))
    }

    pub fn cluster_id(&self) -> Option<ClusterId> {
        match self {
            ClusterNode::Leaf(_) => None,
            ClusterNode::Aggregate(marker) => Some(marker.id),
        }
    }

    pub fn as_leaf(&self) -> Option<&'a FacilityPoint<T>> {
        match *self {
            ClusterNode::Leaf(point) => Some(point),
            ClusterNode::Aggregate(_) => None,
        }
    }
}

/// Short label for a cluster badge: `"999"`, `"1.2k"`, `"15k"`.
///
/// ```
/// use geocluster::abbreviate_count;
///
/// assert_eq!(abbreviate_count(42), "42");
/// assert_eq!(abbreviate_count(1234), "1.2k");
/// assert_eq!(abbreviate_count(15_400), "15k");
/// ```
pub fn abbreviate_count(count: usize) -> String {
    if count >= 10_000 {
        format!("{}k", (count as f64 / 1000.0).round())
    } else if count >= 1000 {
        format!("{}k", (count as f64 / 100.0).round() / 10.0)
    } else {
        count.to_string()
    }
}
