//! Parameters describing a search and how its results are scored.
//!
//! Plain struct literals are accepted everywhere; the `new` constructors add
//! validation for callers that take values from users.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Coordinate, LinearDecay, ParameterError, coordinate};

/// Multipliers applied to the food and charger proximity scores.
///
/// There is no upper bound and the weighted sum is not normalised, so scores
/// only compare within a single ranking.
///
/// # Examples
/// ```
/// use parkside_core::ScoreWeights;
///
/// # fn main() -> Result<(), parkside_core::ParameterError> {
/// let weights = ScoreWeights::new(2.0, 0.5)?;
/// assert_eq!(weights.food, 2.0);
/// assert!(ScoreWeights::new(-1.0, 1.0).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoreWeights {
    /// Multiplier for proximity to the nearest food place.
    pub food: f64,
    /// Multiplier for proximity to the nearest charger.
    pub charger: f64,
}

impl ScoreWeights {
    /// Validate and construct a set of weights.
    ///
    /// # Errors
    /// Returns [`ParameterError::InvalidWeight`] when either value is negative
    /// or not finite.
    pub fn new(food: f64, charger: f64) -> Result<Self, ParameterError> {
        check_weight("food", food)?;
        check_weight("charger", charger)?;
        Ok(Self { food, charger })
    }

    /// Swap the two weights.
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self {
            food: self.charger,
            charger: self.food,
        }
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            food: 1.0,
            charger: 1.0,
        }
    }
}

fn check_weight(factor: &'static str, value: f64) -> Result<(), ParameterError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ParameterError::InvalidWeight { factor, value })
    }
}

/// A circular search area around a map viewpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchArea {
    /// Centre of the search.
    pub center: Coordinate,
    /// Radius in metres.
    pub radius_m: f64,
}

impl SearchArea {
    /// Validate and construct a search area.
    ///
    /// # Errors
    /// Returns a [`ParameterError`] when the centre is not a finite, in-range
    /// WGS84 position or the radius is not positive.
    ///
    /// # Examples
    /// ```
    /// use parkside_core::{ParameterError, SearchArea};
    ///
    /// let area = SearchArea::new(59.9139, 10.7522, 500.0);
    /// assert!(area.is_ok());
    ///
    /// let err = SearchArea::new(91.0, 0.0, 500.0).unwrap_err();
    /// assert_eq!(err, ParameterError::LatitudeOutOfRange { lat: 91.0 });
    /// ```
    pub fn new(lat: f64, lng: f64, radius_m: f64) -> Result<Self, ParameterError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(ParameterError::NonFiniteCoordinate { lat, lng });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(ParameterError::LatitudeOutOfRange { lat });
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(ParameterError::LongitudeOutOfRange { lng });
        }
        if !(radius_m.is_finite() && radius_m > 0.0) {
            return Err(ParameterError::NonPositiveRadius { radius_m });
        }
        Ok(Self {
            center: coordinate(lat, lng),
            radius_m,
        })
    }
}

/// Weights and decay threshold for one ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoringRequest {
    /// Weights for the two proximity factors.
    pub weights: ScoreWeights,
    /// Distance at which a proximity score reaches zero, in metres.
    pub ideal_distance_m: f64,
}

impl ScoringRequest {
    /// Validate and construct a scoring request.
    ///
    /// # Errors
    /// Returns [`ParameterError::NonPositiveIdealDistance`] when the ideal
    /// distance is not a positive finite number.
    pub fn new(weights: ScoreWeights, ideal_distance_m: f64) -> Result<Self, ParameterError> {
        if !(ideal_distance_m.is_finite() && ideal_distance_m > 0.0) {
            return Err(ParameterError::NonPositiveIdealDistance { ideal_distance_m });
        }
        Ok(Self {
            weights,
            ideal_distance_m,
        })
    }

    /// Re-check a request built from a struct literal.
    ///
    /// # Errors
    /// Returns the first [`ParameterError`] found in the weights or the ideal
    /// distance.
    pub fn validate(self) -> Result<Self, ParameterError> {
        let weights = ScoreWeights::new(self.weights.food, self.weights.charger)?;
        Self::new(weights, self.ideal_distance_m)
    }

    /// The decay applied to nearest-neighbour distances.
    #[must_use]
    pub const fn decay(&self) -> LinearDecay {
        LinearDecay::new(self.ideal_distance_m)
    }
}
