//! Proximity scoring for Parkside playgrounds.
//!
//! The crate provides two layers:
//! - **The scoring engine** ([`ScoringEngine`]) takes playgrounds, food
//!   places and chargers, finds each playground's nearest food place and
//!   nearest charger by haversine distance, maps both distances through a
//!   [`DistanceDecay`](parkside_core::DistanceDecay) and combines them with
//!   the caller's [`ScoreWeights`](parkside_core::ScoreWeights). The result
//!   is the full list, sorted by score, highest first. Ties keep their input
//!   order.
//! - **The search pipeline** ([`evaluate`]) classifies raw points, reports a
//!   [`SearchOutcome::NoCompleteMatches`] when any category is empty, and
//!   ranks otherwise. Callers that present results should go through this
//!   layer rather than invoke the engine with an empty category.
//!
//! Scores are not normalised against the weight total and only compare
//! within one ranking.
//!
//! # Examples
//!
//! ```
//! use parkside_core::{ScoreWeights, ScoringRequest, TaggedPoint, Tags, coordinate};
//! use parkside_scorer::{SearchOutcome, evaluate};
//!
//! fn tagged(id: i64, lat: f64, key: &str, value: &str) -> TaggedPoint {
//!     TaggedPoint::new(id, coordinate(lat, 10.75), Tags::from([(key.into(), value.into())]))
//! }
//!
//! let points = vec![
//!     tagged(1, 59.910, "leisure", "playground"),
//!     tagged(2, 59.910, "amenity", "cafe"),
//!     tagged(3, 59.912, "amenity", "charging_station"),
//! ];
//! let request = ScoringRequest::new(ScoreWeights::default(), 500.0)?;
//! let evaluation = evaluate(points, request)?;
//!
//! let SearchOutcome::Ranked { playgrounds } = evaluation.outcome else {
//!     panic!("every category is present");
//! };
//! assert_eq!(playgrounds.len(), 1);
//! assert!(playgrounds[0].score > 1.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

mod engine;
mod error;
mod outcome;

pub use engine::{ScoringEngine, nearest_distance_m, score};
pub use error::ScoringError;
pub use outcome::{DEFAULT_TOP_N, Evaluation, SearchOutcome, evaluate};

#[cfg(test)]
mod tests;
