//! Test-only builders and an in-memory `FeatureSource` used by unit and
//! behaviour tests.

use crate::{
    FeatureSource, FetchError, SearchArea, TaggedPoint, Tags, coordinate, distance_m,
};

/// Build a point at `(lat, lng)` with the given tags.
pub fn point(id: i64, lat: f64, lng: f64, tags: &[(&str, &str)]) -> TaggedPoint {
    let tags: Tags = tags
        .iter()
        .map(|&(key, value)| (key.to_owned(), value.to_owned()))
        .collect();
    TaggedPoint::new(id, coordinate(lat, lng), tags)
}

/// Build an unnamed `leisure=playground` point.
pub fn playground(id: i64, lat: f64, lng: f64) -> TaggedPoint {
    point(id, lat, lng, &[("leisure", "playground")])
}

/// Build a named `leisure=playground` point.
pub fn named_playground(id: i64, lat: f64, lng: f64, name: &str) -> TaggedPoint {
    point(id, lat, lng, &[("leisure", "playground"), ("name", name)])
}

/// Build an `amenity=cafe` point.
pub fn food_place(id: i64, lat: f64, lng: f64) -> TaggedPoint {
    point(id, lat, lng, &[("amenity", "cafe")])
}

/// Build an `amenity=charging_station` point.
pub fn charger(id: i64, lat: f64, lng: f64) -> TaggedPoint {
    point(id, lat, lng, &[("amenity", "charging_station")])
}

/// Latitude offset, in degrees, that lies `metres` north of `lat` along a
/// meridian under [`distance_m`].
pub fn metres_north(lat: f64, metres: f64) -> f64 {
    lat + (metres / crate::EARTH_RADIUS_M).to_degrees()
}

/// In-memory `FeatureSource` returning a fixed response.
///
/// Points are filtered to the search radius so tests can reuse one dataset
/// for several areas.
#[derive(Debug, Clone)]
pub struct FixedSource {
    response: Result<Vec<TaggedPoint>, FetchError>,
}

impl FixedSource {
    /// Create a source answering with `points`.
    pub fn with_points(points: Vec<TaggedPoint>) -> Self {
        Self {
            response: Ok(points),
        }
    }

    /// Create a source failing with `error`.
    pub fn with_error(error: FetchError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl FeatureSource for FixedSource {
    fn fetch(&self, area: &SearchArea) -> Result<Vec<TaggedPoint>, FetchError> {
        let points = self.response.clone()?;
        Ok(points
            .into_iter()
            .filter(|point| distance_m(area.center, point.position) <= area.radius_m)
            .collect())
    }
}
