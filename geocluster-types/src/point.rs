use geo::Point;
use serde::{Deserialize, Serialize};

/// A facility location handed to the clusterer.
///
/// Carries the facility's identifier, its position (x = longitude,
/// y = latitude) and the originating record, which the clusterer never
/// inspects. Immutable once built.
///
/// # Examples
///
/// ```
/// use geocluster_types::point::FacilityPoint;
///
/// let gym = FacilityPoint::new("gym-3", 4.8357, 45.7640, ());
/// assert_eq!(gym.id(), "gym-3");
/// assert_eq!(gym.lng(), 4.8357);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityPoint<T> {
    id: String,
    location: Point<f64>,
    facility: T,
}

impl<T> FacilityPoint<T> {
    /// Create a point from an identifier, longitude, latitude and payload.
    pub fn new(id: impl Into<String>, lng: f64, lat: f64, facility: T) -> Self {
        Self {
            id: id.into(),
            location: Point::new(lng, lat),
            facility,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn location(&self) -> &Point<f64> {
        &self.location
    }

    pub fn lng(&self) -> f64 {
        self.location.x()
    }

    pub fn lat(&self) -> f64 {
        self.location.y()
    }

    /// The originating facility record.
    pub fn facility(&self) -> &T {
        &self.facility
    }
}

impl<'a, R: Locatable> FacilityPoint<&'a R> {
    /// Build a point that borrows `record`, or `None` if it has no coordinates.
    ///
    /// Out-of-range coordinates are kept as-is; the index rejects them at
    /// build time.
    pub fn from_record(record: &'a R) -> Option<Self> {
        let (lng, lat) = record.coordinates()?;
        Some(Self::new(record.facility_id(), lng, lat, record))
    }
}

/// A facility record that may carry a geographic position.
///
/// Search results commonly include facilities whose address was never
/// geocoded; those report `None` from [`Locatable::coordinates`].
pub trait Locatable {
    fn facility_id(&self) -> &str;

    /// `(longitude, latitude)` in degrees, if known.
    fn coordinates(&self) -> Option<(f64, f64)>;
}

/// Turn records into points, skipping the ones without coordinates.
///
/// Returns the located points in input order and the number of records
/// that were skipped.
///
/// ```
/// use geocluster_types::point::{Locatable, collect_located};
///
/// struct Club { id: String, lng: Option<f64>, lat: Option<f64> }
///
/// impl Locatable for Club {
///     fn facility_id(&self) -> &str { &self.id }
///     fn coordinates(&self) -> Option<(f64, f64)> { Some((self.lng?, self.lat?)) }
/// }
///
/// let clubs = vec![
///     Club { id: "a".into(), lng: Some(2.35), lat: Some(48.85) },
///     Club { id: "b".into(), lng: None, lat: Some(45.0) },
/// ];
/// let (points, skipped) = collect_located(&clubs);
/// assert_eq!(points.len(), 1);
/// assert_eq!(skipped, 1);
/// ```
pub fn collect_located<'a, R, I>(records: I) -> (Vec<FacilityPoint<&'a R>>, usize)
where
    R: Locatable + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut skipped = 0;
    let mut points = Vec::new();

    for record in records {
        match FacilityPoint::from_record(record) {
            Some(point) => points.push(point),
            None => skipped += 1,
        }
    }

    (points, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Structure {
        id: &'static str,
        latitude: Option<f64>,
        longitude: Option<f64>,
    }

    impl Locatable for Structure {
        fn facility_id(&self) -> &str {
            self.id
        }

        fn coordinates(&self) -> Option<(f64, f64)> {
            Some((self.longitude?, self.latitude?))
        }
    }

    #[test]
    fn test_from_record_keeps_reference() {
        let s = Structure {
            id: "s1",
            latitude: Some(43.6),
            longitude: Some(1.44),
        };
        let point = FacilityPoint::from_record(&s).unwrap();
        assert_eq!(point.id(), "s1");
        assert_eq!(point.lng(), 1.44);
        assert_eq!(point.lat(), 43.6);
        assert!(std::ptr::eq(*point.facility(), &s));
    }

    #[test]
    fn test_from_record_missing_coordinate() {
        let s = Structure {
            id: "s2",
            latitude: Some(43.6),
            longitude: None,
        };
        assert!(FacilityPoint::from_record(&s).is_none());
    }

    #[test]
    fn test_collect_located_keeps_out_of_range() {
        let records = vec![
            Structure {
                id: "ok",
                latitude: Some(45.0),
                longitude: Some(5.0),
            },
            Structure {
                id: "bad",
                latitude: Some(95.0),
                longitude: Some(5.0),
            },
            Structure {
                id: "none",
                latitude: None,
                longitude: None,
            },
        ];

        let (points, skipped) = collect_located(&records);
        assert_eq!(skipped, 1);
        let ids: Vec<&str> = points.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["ok", "bad"]);
    }
}
