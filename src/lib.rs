//! Viewport-driven clustering of map markers.
//!
//! ## Features
//! - **Hierarchical clustering**: points are merged per zoom level using a
//!   fixed pixel radius, so marker density stays constant as the map zooms
//! - **Fast viewport queries**: one R*-tree per zoom level
//! - **Tap to expand**: expansion zoom, children and paginated leaves for any
//!   cluster returned by a query
//! - **GeoJSON output**: with the default `geojson` feature
//!
//! An index is immutable. Build a new one whenever the set of points changes;
//! cluster ids from an older index are rejected with `ClusterNotFound`.
//!
//! ```rust
//! use geocluster::{ClusterIndex, FacilityPoint, MapRegion};
//!
//! let index = ClusterIndex::build(vec![
//!     FacilityPoint::new("pool", 2.3522, 48.8566, "Piscine"),
//!     FacilityPoint::new("gym", 2.3530, 48.8570, "Gymnase"),
//! ])?;
//!
//! // The map settled on most of France
//! let region = MapRegion::new(46.603354, 1.888334, 10.0, 10.0);
//! let markers = index.query_region(&region);
//! assert_eq!(markers.len(), 1);
//! assert_eq!(markers[0].point_count(), 2);
//!
//! // Tapping the cluster zooms in until it splits
//! let id = markers[0].cluster_id().unwrap();
//! let target = index.expansion_region(id, &region)?;
//! assert!(target.zoom() > region.zoom());
//! # Ok::<(), geocluster::ClusterError>(())
//! ```

pub mod builder;
pub mod compute;
pub mod config;
pub mod error;
pub mod index;
pub mod marker;

pub use builder::ClusterIndexBuilder;
pub use config::{BoundingBox2D, ClusterConfig, FacilityPoint, Locatable, MapRegion, Viewport};
pub use error::{ClusterError, Result};
pub use index::ClusterIndex;
pub use marker::{AggregateMarker, ClusterId, ClusterNode, ParseClusterIdError, abbreviate_count};

pub use geo::Point;
pub use geocluster_types::point::collect_located;

#[cfg(feature = "geojson")]
pub use compute::geojson;
pub use compute::validation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{ClusterConfig, ClusterError, ClusterIndex, ClusterIndexBuilder, Result};

    pub use crate::{AggregateMarker, ClusterId, ClusterNode};

    pub use crate::{FacilityPoint, Locatable, MapRegion, Viewport, collect_located};

    pub use geo::Point;
}
