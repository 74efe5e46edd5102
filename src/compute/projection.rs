//! Spherical Web Mercator on the unit square.
//!
//! Longitude/latitude are projected to `x, y ∈ [0, 1]` with the origin at
//! the north-west corner, so `y` grows southward. At zoom `z` the world is
//! `extent * 2^z` pixels wide, which is what turns a pixel radius into a
//! distance in projected units.

use std::f64::consts::PI;

pub use geocluster_types::viewport::{longitude_delta_for_zoom, zoom_for_longitude_delta};

pub fn lng_x(lng: f64) -> f64 {
    lng / 360.0 + 0.5
}

/// Clamped to `[0, 1]`, so the poles map onto the edges.
pub fn lat_y(lat: f64) -> f64 {
    let sin = (lat * PI / 180.0).sin();
    let y = 0.5 - 0.25 * ((1.0 + sin) / (1.0 - sin)).ln() / PI;
    y.clamp(0.0, 1.0)
}

pub fn x_lng(x: f64) -> f64 {
    (x - 0.5) * 360.0
}

pub fn y_lat(y: f64) -> f64 {
    let y2 = (180.0 - y * 360.0) * PI / 180.0;
    360.0 * y2.exp().atan() / PI - 90.0
}

/// A screen-pixel distance at `zoom`, in projected units.
///
/// ```
/// use geocluster::compute::projection::pixels_to_world;
///
/// // 60 px on 512 px tiles at zoom 0 is 60/512 of the world
/// assert_eq!(pixels_to_world(60.0, 512.0, 0), 60.0 / 512.0);
/// assert_eq!(pixels_to_world(60.0, 512.0, 1), 60.0 / 1024.0);
/// ```
pub fn pixels_to_world(pixels: f64, extent: f64, zoom: u8) -> f64 {
    pixels / (extent * 2f64.powi(zoom as i32))
}

/// Wraps any longitude into `[-180, 180)`.
pub fn wrap_lng(lng: f64) -> f64 {
    ((lng + 180.0) % 360.0 + 360.0) % 360.0 - 180.0
}
