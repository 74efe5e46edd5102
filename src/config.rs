//! Clustering configuration
//!
//! The defaults match what mobile map screens typically use: a 60 px merge
//! radius on 512 px tiles, clustering up to zoom 16, and individual markers
//! beyond it.
use serde::de::Error;

pub use geocluster_types::bbox::BoundingBox2D;
pub use geocluster_types::point::{FacilityPoint, Locatable};
pub use geocluster_types::viewport::{MapRegion, Viewport};

/// One tree is kept per zoom level up to `max_zoom + 1`.
const ZOOM_LIMIT: u8 = 31;

/// Index configuration
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClusterConfig {
    /// Merge radius in screen pixels
    #[serde(default = "ClusterConfig::default_radius")]
    pub radius: f64,

    /// Tile extent the radius is measured against
    #[serde(default = "ClusterConfig::default_extent")]
    pub extent: f64,

    #[serde(default)]
    pub min_zoom: u8,

    /// Deepest zoom at which points are still merged. Above it every point
    /// is returned on its own.
    #[serde(default = "ClusterConfig::default_max_zoom")]
    pub max_zoom: u8,

    /// Smallest number of points that forms a cluster
    #[serde(default = "ClusterConfig::default_min_points")]
    pub min_points: usize,

    /// Extra margin around each queried viewport, in pixels against `extent`:
    /// every side grows by `viewport_buffer / extent` of the viewport span
    #[serde(default = "ClusterConfig::default_radius")]
    pub viewport_buffer: f64,

    /// Upper bound for "zoom in on tap" camera targets
    #[serde(default = "ClusterConfig::default_max_expansion_zoom")]
    pub max_expansion_zoom: u8,
}

impl ClusterConfig {
    const fn default_radius() -> f64 {
        60.0
    }

    const fn default_extent() -> f64 {
        512.0
    }

    const fn default_max_zoom() -> u8 {
        16
    }

    const fn default_min_points() -> usize {
        2
    }

    const fn default_max_expansion_zoom() -> u8 {
        20
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_extent(mut self, extent: f64) -> Self {
        self.extent = extent;
        self
    }

    pub fn with_min_zoom(mut self, zoom: u8) -> Self {
        self.min_zoom = zoom;
        self
    }

    pub fn with_max_zoom(mut self, zoom: u8) -> Self {
        self.max_zoom = zoom;
        self
    }

    pub fn with_min_points(mut self, min_points: usize) -> Self {
        self.min_points = min_points;
        self
    }

    pub fn with_viewport_buffer(mut self, pixels: f64) -> Self {
        self.viewport_buffer = pixels;
        self
    }

    pub fn with_max_expansion_zoom(mut self, zoom: u8) -> Self {
        self.max_expansion_zoom = zoom;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(format!("Radius must be positive and finite, got: {}", self.radius));
        }

        if !(self.extent.is_finite() && self.extent > 0.0) {
            return Err(format!("Extent must be positive and finite, got: {}", self.extent));
        }

        if !(self.viewport_buffer.is_finite() && self.viewport_buffer >= 0.0) {
            return Err(format!(
                "Viewport buffer must be non-negative and finite, got: {}",
                self.viewport_buffer
            ));
        }

        if self.max_zoom >= ZOOM_LIMIT {
            return Err(format!(
                "Max zoom must be below {}, got: {}",
                ZOOM_LIMIT, self.max_zoom
            ));
        }

        if self.min_zoom > self.max_zoom {
            return Err(format!(
                "Min zoom {} is greater than max zoom {}",
                self.min_zoom, self.max_zoom
            ));
        }

        if self.min_points < 2 {
            return Err("Min points must be at least 2".to_string());
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: ClusterConfig = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: ClusterConfig = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            radius: Self::default_radius(),
            extent: Self::default_extent(),
            min_zoom: 0,
            max_zoom: Self::default_max_zoom(),
            min_points: Self::default_min_points(),
            viewport_buffer: Self::default_radius(),
            max_expansion_zoom: Self::default_max_expansion_zoom(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClusterConfig::default();
        assert_eq!(config.radius, 60.0);
        assert_eq!(config.max_zoom, 16);
        assert_eq!(config.min_points, 2);
        assert_eq!(config.viewport_buffer, config.radius);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = ClusterConfig::from_json(r#"{ "radius": 40.0, "max_zoom": 14 }"#).unwrap();
        assert_eq!(config.radius, 40.0);
        assert_eq!(config.max_zoom, 14);
        assert_eq!(config.extent, 512.0);
        assert_eq!(config.max_expansion_zoom, 20);
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        assert!(ClusterConfig::from_json(r#"{ "radius_px": 40.0 }"#).is_err());
    }

    #[test]
    fn test_from_json_rejects_invalid_values() {
        assert!(ClusterConfig::from_json(r#"{ "radius": 0.0 }"#).is_err());
        assert!(ClusterConfig::from_json(r#"{ "min_zoom": 10, "max_zoom": 5 }"#).is_err());
        assert!(ClusterConfig::from_json(r#"{ "max_zoom": 31 }"#).is_err());
        assert!(ClusterConfig::from_json(r#"{ "min_points": 1 }"#).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let config = ClusterConfig::default().with_radius(80.0).with_min_points(3);
        let json = config.to_json().unwrap();
        assert_eq!(ClusterConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_validate_buffer() {
        let config = ClusterConfig::default().with_viewport_buffer(-1.0);
        assert!(config.validate().is_err());
        let config = ClusterConfig::default().with_viewport_buffer(0.0);
        assert!(config.validate().is_ok());
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_toml_round_trip() {
        let config = ClusterConfig::default().with_max_zoom(18);
        let toml_str = config.to_toml().unwrap();
        assert_eq!(ClusterConfig::from_toml(&toml_str).unwrap(), config);
    }
}
