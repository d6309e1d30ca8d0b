//! Great-circle distance between WGS84 coordinates.
//!
//! Coordinates follow `geo`'s convention of `x = longitude` and
//! `y = latitude`. Use [`coordinate`] to build one from the latitude-first
//! pair the outer interfaces speak in.

use geo::Coord;

/// A WGS84 position in degrees with `x = longitude` and `y = latitude`.
pub type Coordinate = Coord<f64>;

/// Earth radius used by [`distance_m`], in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Build a [`Coordinate`] from a latitude/longitude pair.
///
/// # Examples
/// ```
/// use parkside_core::coordinate;
///
/// let oslo = coordinate(59.9139, 10.7522);
/// assert_eq!(oslo.y, 59.9139);
/// assert_eq!(oslo.x, 10.7522);
/// ```
#[must_use]
pub const fn coordinate(lat: f64, lng: f64) -> Coordinate {
    Coord { x: lng, y: lat }
}

/// Haversine distance between `a` and `b`, in metres.
///
/// The result is symmetric, non-negative and zero for identical inputs.
/// Out-of-range coordinates are not rejected here, and a NaN component
/// yields NaN.
///
/// # Examples
/// ```
/// use parkside_core::{coordinate, distance_m};
///
/// let a = coordinate(0.0, 0.0);
/// let b = coordinate(1.0, 0.0);
/// assert!((distance_m(a, b) - 111_194.93).abs() < 0.01);
/// ```
#[must_use]
pub fn distance_m(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.y.to_radians();
    let lat_b = b.y.to_radians();
    let delta_lat = (b.y - a.y).to_radians();
    let delta_lng = (b.x - a.x).to_radians();

    let half_chord = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push the chord fraction marginally above one near antipodes.
    // NaN passes through unchanged.
    let half_chord = if half_chord > 1.0 { 1.0 } else { half_chord };
    let angle = 2.0 * half_chord.sqrt().atan2((1.0 - half_chord).sqrt());
    EARTH_RADIUS_M * angle
}
