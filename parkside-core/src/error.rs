//! Validation errors for search and scoring parameters.

use thiserror::Error;

/// Errors returned by the validating constructors in [`crate::request`].
///
/// The scoring functions themselves never validate; these checks are opt-in
/// for callers that accept parameters from users.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParameterError {
    /// A coordinate component was NaN or infinite.
    #[error("coordinate must be finite (lat {lat}, lng {lng})")]
    NonFiniteCoordinate {
        /// Supplied latitude.
        lat: f64,
        /// Supplied longitude.
        lng: f64,
    },
    /// Latitude fell outside `-90..=90`.
    #[error("latitude {lat} is outside -90..=90")]
    LatitudeOutOfRange {
        /// Supplied latitude.
        lat: f64,
    },
    /// Longitude fell outside `-180..=180`.
    #[error("longitude {lng} is outside -180..=180")]
    LongitudeOutOfRange {
        /// Supplied longitude.
        lng: f64,
    },
    /// The search radius was zero, negative or not finite.
    #[error("radius must be a positive number of metres, got {radius_m}")]
    NonPositiveRadius {
        /// Supplied radius.
        radius_m: f64,
    },
    /// The ideal distance was zero, negative or not finite.
    #[error("ideal distance must be a positive number of metres, got {ideal_distance_m}")]
    NonPositiveIdealDistance {
        /// Supplied ideal distance.
        ideal_distance_m: f64,
    },
    /// A score weight was negative or not finite.
    #[error("{factor} weight must be finite and non-negative, got {value}")]
    InvalidWeight {
        /// Which weight was rejected (`"food"` or `"charger"`).
        factor: &'static str,
        /// Supplied value.
        value: f64,
    },
}
