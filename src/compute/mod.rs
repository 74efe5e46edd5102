//! Compute layer for projection math, validation and output formats.
//!
//! This module holds the pure functions the cluster index is built on:
//! - Web Mercator projection and zoom/radius conversions
//! - Coordinate validation for incoming points
//! - GeoJSON export of query results (with the `geojson` feature)

#[cfg(feature = "geojson")]
pub mod geojson;
pub mod projection;
pub mod validation;
