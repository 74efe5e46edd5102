use crate::bbox::BoundingBox2D;
use geo::Point;
use serde::{Deserialize, Serialize};

/// Deepest zoom level any camera helper will report.
pub const MAX_ZOOM_LEVEL: u8 = 30;

/// Smallest delta, in degrees, a fitted region may have on either axis.
const MIN_FIT_DELTA: f64 = 0.01;

/// Fractional zoom level at which `longitude_delta` degrees span the map.
///
/// `log(360 / delta) / log(2)`: a delta of 360 is zoom 0 and every halving
/// of the delta adds one level.
///
/// ```
/// use geocluster_types::viewport::zoom_for_longitude_delta;
///
/// assert_eq!(zoom_for_longitude_delta(360.0), 0.0);
/// assert!((zoom_for_longitude_delta(45.0) - 3.0).abs() < 1e-12);
/// ```
pub fn zoom_for_longitude_delta(longitude_delta: f64) -> f64 {
    (360.0 / longitude_delta).ln() / std::f64::consts::LN_2
}

/// Inverse of [`zoom_for_longitude_delta`].
pub fn longitude_delta_for_zoom(zoom: f64) -> f64 {
    360.0 / 2f64.powf(zoom)
}

fn integer_zoom(longitude_delta: f64) -> u8 {
    // NaN saturates to 0 on the cast.
    zoom_for_longitude_delta(longitude_delta)
        .round()
        .clamp(0.0, MAX_ZOOM_LEVEL as f64) as u8
}

/// The visible map area for one clustering query.
///
/// Edges are stored exactly as supplied so that inverted or empty boxes can
/// be recognised. Longitudes outside `[-180, 180]` describe a box that
/// crosses the antimeridian, e.g. `170..190`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
    pub zoom: u8,
}

impl Viewport {
    pub fn new(min_lng: f64, min_lat: f64, max_lng: f64, max_lat: f64, zoom: u8) -> Self {
        Self {
            min_lng,
            min_lat,
            max_lng,
            max_lat,
            zoom,
        }
    }

    /// A viewport covering the whole globe.
    pub fn world(zoom: u8) -> Self {
        Self::new(-180.0, -90.0, 180.0, 90.0, zoom)
    }

    pub fn from_bbox(bbox: &BoundingBox2D, zoom: u8) -> Self {
        Self::new(bbox.min_x(), bbox.min_y(), bbox.max_x(), bbox.max_y(), zoom)
    }

    /// Same box, different zoom.
    pub fn with_zoom(self, zoom: u8) -> Self {
        Self { zoom, ..self }
    }

    /// True when the box is empty, inverted or contains non-finite edges.
    ///
    /// ```
    /// use geocluster_types::viewport::Viewport;
    ///
    /// assert!(Viewport::new(5.0, 40.0, 5.0, 45.0, 6).is_degenerate());
    /// assert!(!Viewport::world(0).is_degenerate());
    /// ```
    pub fn is_degenerate(&self) -> bool {
        !self.is_finite() || self.min_lng >= self.max_lng || self.min_lat >= self.max_lat
    }

    pub fn is_finite(&self) -> bool {
        [self.min_lng, self.min_lat, self.max_lng, self.max_lat]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// A map camera as reported by mobile map widgets: a centre plus the
/// latitude and longitude spans currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapRegion {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl MapRegion {
    pub fn new(latitude: f64, longitude: f64, latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude,
            longitude,
            latitude_delta,
            longitude_delta,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.longitude, self.latitude)
    }

    /// Integer zoom level of this region, `round(log2(360 / longitude_delta))`.
    pub fn zoom(&self) -> u8 {
        integer_zoom(self.longitude_delta)
    }

    /// The viewport to query when the map settles on this region.
    ///
    /// ```
    /// use geocluster_types::viewport::MapRegion;
    ///
    /// let region = MapRegion::new(45.0, 5.0, 2.0, 4.0);
    /// let viewport = region.to_viewport();
    /// assert_eq!(viewport.min_lng, 3.0);
    /// assert_eq!(viewport.max_lat, 46.0);
    /// assert_eq!(viewport.zoom, 6);
    /// ```
    pub fn to_viewport(&self) -> Viewport {
        Viewport::new(
            self.longitude - self.longitude_delta / 2.0,
            self.latitude - self.latitude_delta / 2.0,
            self.longitude + self.longitude_delta / 2.0,
            self.latitude + self.latitude_delta / 2.0,
            self.zoom(),
        )
    }

    /// The region to animate to so that `target_zoom` is reached while
    /// centring on `center`, e.g. a tapped cluster.
    ///
    /// Both deltas shrink by `2^(target_zoom - zoom)`.
    pub fn zoomed_to(&self, center: &Point, target_zoom: u8) -> Self {
        let steps = target_zoom as i32 - self.zoom() as i32;
        let scale = 2f64.powi(steps);

        Self {
            latitude: center.y(),
            longitude: center.x(),
            latitude_delta: self.latitude_delta / scale,
            longitude_delta: self.longitude_delta / scale,
        }
    }

    /// A region that shows all of `bbox` with `padding_ratio` of its span
    /// added on every side.
    ///
    /// Deltas never drop below a small minimum, so fitting a single point
    /// still gives a usable camera.
    pub fn fitting(bbox: &BoundingBox2D, padding_ratio: f64) -> Self {
        let pad = 1.0 + 2.0 * padding_ratio.max(0.0);
        let center = bbox.center();

        Self {
            latitude: center.y(),
            longitude: center.x(),
            latitude_delta: (bbox.height() * pad).clamp(MIN_FIT_DELTA, 180.0),
            longitude_delta: (bbox.width() * pad).clamp(MIN_FIT_DELTA, 360.0),
        }
    }
}
