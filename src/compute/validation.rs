//! Validation for geographic coordinates.

use crate::error::{ClusterError, Result};
use geo::Point;
use geocluster_types::point::FacilityPoint;

/// Checks that a point has a finite longitude in [-180.0, 180.0] and a
/// finite latitude in [-90.0, 90.0].
///
/// Returns a description of the first problem found.
///
/// # Examples
///
/// ```
/// use geocluster::compute::validation::validate_geographic_point;
/// use geo::Point;
///
/// // Valid point
/// let lyon = Point::new(4.8357, 45.7640);
/// assert!(validate_geographic_point(&lyon).is_ok());
///
/// // Invalid longitude
/// let invalid = Point::new(200.0, 40.0);
/// assert!(validate_geographic_point(&invalid).is_err());
///
/// // Invalid latitude
/// let invalid = Point::new(4.8, 95.0);
/// assert!(validate_geographic_point(&invalid).is_err());
/// ```
pub fn validate_geographic_point(point: &Point) -> std::result::Result<(), String> {
    let (x, y) = (point.x(), point.y());

    if !x.is_finite() {
        return Err(format!("Longitude must be finite, got: {}", x));
    }

    if !y.is_finite() {
        return Err(format!("Latitude must be finite, got: {}", y));
    }

    if !(-180.0..=180.0).contains(&x) {
        return Err(format!("Longitude out of range [-180.0, 180.0]: {}", x));
    }

    if !(-90.0..=90.0).contains(&y) {
        return Err(format!("Latitude out of range [-90.0, 90.0]: {}", y));
    }

    Ok(())
}

/// Validates every facility point, failing on the first bad one.
///
/// # Examples
///
/// ```
/// use geocluster::compute::validation::validate_facility_points;
/// use geocluster::{ClusterError, FacilityPoint};
///
/// let points = vec![
///     FacilityPoint::new("a", 2.35, 48.85, ()),
///     FacilityPoint::new("b", 2.36, 95.0, ()), // Invalid
/// ];
///
/// match validate_facility_points(&points) {
///     Err(ClusterError::InvalidPoint { index, .. }) => assert_eq!(index, 1),
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
pub fn validate_facility_points<T>(points: &[FacilityPoint<T>]) -> Result<()> {
    for (index, point) in points.iter().enumerate() {
        validate_geographic_point(point.location()).map_err(|reason| {
            ClusterError::InvalidPoint {
                index,
                reason: format!("{} ({})", reason, point.id()),
            }
        })?;
    }
    Ok(())
}
