//! # geocluster-types
//!
//! Value types shared between the geocluster index and the code that feeds
//! it facility records or draws its markers.
//!
//! - **Point types**: `FacilityPoint`, the `Locatable` trait
//! - **Bounding box types**: `BoundingBox2D`
//! - **Camera types**: `Viewport`, `MapRegion`
//!
//! All types are serializable with Serde and built on top of the `geo` crate's
//! geometric primitives.
//!
//! ## Examples
//!
//! ```rust
//! use geocluster_types::point::FacilityPoint;
//! use geocluster_types::viewport::MapRegion;
//!
//! let pool = FacilityPoint::new("pool-12", 2.3522, 48.8566, "Piscine Pontoise");
//! assert_eq!(pool.lat(), 48.8566);
//!
//! let france = MapRegion::new(46.603354, 1.888334, 10.0, 10.0);
//! assert_eq!(france.zoom(), 5);
//! ```

pub mod bbox;
pub mod point;
pub mod viewport;
