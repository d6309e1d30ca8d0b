//! Scored playgrounds returned by a ranking.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Coordinate, DEFAULT_PLAYGROUND_NAME, TaggedPoint};

/// A playground with its nearest-neighbour distances and combined score.
///
/// Distances are in metres and may be `f64::INFINITY` when the matching
/// category was empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RankedPlayground {
    /// The scored playground.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub point: TaggedPoint,
    /// Display name, defaulting to [`DEFAULT_PLAYGROUND_NAME`].
    pub name: String,
    /// Distance to the nearest food place.
    pub food_distance_m: f64,
    /// Distance to the nearest charger.
    pub charger_distance_m: f64,
    /// Weighted proximity score; higher is better.
    pub score: f64,
}

impl RankedPlayground {
    /// Wrap `point` with its distances and score, deriving the display name.
    ///
    /// # Examples
    /// ```
    /// use parkside_core::{RankedPlayground, TaggedPoint, coordinate};
    ///
    /// let point = TaggedPoint::with_empty_tags(1, coordinate(0.0, 0.0));
    /// let ranked = RankedPlayground::new(point, 10.0, 20.0, 1.5);
    /// assert_eq!(ranked.name, "Lekeplass");
    /// ```
    #[must_use]
    pub fn new(point: TaggedPoint, food_distance_m: f64, charger_distance_m: f64, score: f64) -> Self {
        let name = point.name().unwrap_or(DEFAULT_PLAYGROUND_NAME).to_owned();
        Self {
            point,
            name,
            food_distance_m,
            charger_distance_m,
            score,
        }
    }

    /// Position of the playground.
    #[must_use]
    pub const fn position(&self) -> Coordinate {
        self.point.position
    }
}
