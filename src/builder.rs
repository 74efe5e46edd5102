//! Index builder for flexible configuration
//!
//! This module provides a builder pattern for creating cluster indexes with
//! tuned radius, zoom range and viewport buffer.

use crate::config::ClusterConfig;
use crate::error::Result;
use crate::index::ClusterIndex;
use geocluster_types::point::FacilityPoint;

/// Builder for cluster index configuration.
#[derive(Debug, Clone, Default)]
pub struct ClusterIndexBuilder {
    config: ClusterConfig,
}

impl ClusterIndexBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge radius in screen pixels.
    pub fn radius(mut self, pixels: f64) -> Self {
        self.config = self.config.with_radius(pixels);
        self
    }

    /// Tile extent the radius is measured against.
    pub fn extent(mut self, extent: f64) -> Self {
        self.config = self.config.with_extent(extent);
        self
    }

    pub fn min_zoom(mut self, zoom: u8) -> Self {
        self.config = self.config.with_min_zoom(zoom);
        self
    }

    /// Deepest zoom that still clusters; deeper queries return single points.
    pub fn max_zoom(mut self, zoom: u8) -> Self {
        self.config = self.config.with_max_zoom(zoom);
        self
    }

    pub fn min_points(mut self, min_points: usize) -> Self {
        self.config = self.config.with_min_points(min_points);
        self
    }

    /// Margin around each queried viewport, as pixels out of `extent`.
    pub fn viewport_buffer(mut self, pixels: f64) -> Self {
        self.config = self.config.with_viewport_buffer(pixels);
        self
    }

    pub fn max_expansion_zoom(mut self, zoom: u8) -> Self {
        self.config = self.config.with_max_expansion_zoom(zoom);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ClusterConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the index over `points`.
    pub fn build<T, I>(self, points: I) -> Result<ClusterIndex<T>>
    where
        I: IntoIterator<Item = FacilityPoint<T>>,
    {
        ClusterIndex::build_with_config(points, self.config)
    }
}
