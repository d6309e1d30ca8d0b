//! Nearest-neighbour proximity scoring and ranking.
#![forbid(unsafe_code)]

use log::debug;
use parkside_core::{
    Category, Classified, Coordinate, DistanceDecay, LinearDecay, RankedPlayground, ScoreWeights,
    ScoringRequest, TaggedPoint, distance_m,
};

use crate::ScoringError;

/// Ranks playgrounds by proximity to food places and chargers.
///
/// The engine holds only its configuration and is cheap to copy; each call
/// is independent and deterministic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringEngine<D = LinearDecay> {
    weights: ScoreWeights,
    decay: D,
}

impl ScoringEngine<LinearDecay> {
    /// Build an engine from a scoring request without validating it.
    #[must_use]
    pub const fn new(request: ScoringRequest) -> Self {
        Self {
            weights: request.weights,
            decay: request.decay(),
        }
    }

    /// Build an engine after validating the weights and ideal distance.
    ///
    /// # Errors
    /// Returns [`ScoringError::InvalidParameter`] when a weight is negative or
    /// not finite, or the ideal distance is not positive.
    pub fn checked(request: ScoringRequest) -> Result<Self, ScoringError> {
        Ok(Self::new(request.validate()?))
    }
}

impl<D: DistanceDecay> ScoringEngine<D> {
    /// Build an engine with a custom decay.
    #[must_use]
    pub const fn with_decay(weights: ScoreWeights, decay: D) -> Self {
        Self { weights, decay }
    }

    /// The weights applied by this engine.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Score one playground against the candidate food places and chargers.
    ///
    /// An empty candidate slice yields an infinite distance, which the decay
    /// maps to zero.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "scores are weighted sums of proximity values"
    )]
    pub fn score_playground(
        &self,
        playground: TaggedPoint,
        food_places: &[TaggedPoint],
        chargers: &[TaggedPoint],
    ) -> RankedPlayground {
        let food_distance = nearest_distance_m(playground.position, food_places);
        let charger_distance = nearest_distance_m(playground.position, chargers);
        let score = self.decay.proximity(food_distance) * self.weights.food
            + self.decay.proximity(charger_distance) * self.weights.charger;
        RankedPlayground::new(playground, food_distance, charger_distance, score)
    }

    /// Score every playground and sort by score, highest first.
    ///
    /// The sort is stable: playgrounds with equal scores keep their input
    /// order.
    ///
    /// # Errors
    /// Returns [`ScoringError::EmptyCategory`] when any of the three inputs
    /// is empty.
    ///
    /// # Examples
    /// ```
    /// use parkside_core::{ScoreWeights, ScoringRequest, TaggedPoint, coordinate};
    /// use parkside_scorer::{ScoringEngine, ScoringError};
    ///
    /// let engine = ScoringEngine::new(ScoringRequest {
    ///     weights: ScoreWeights::default(),
    ///     ideal_distance_m: 500.0,
    /// });
    /// let playground = TaggedPoint::with_empty_tags(1, coordinate(59.91, 10.75));
    ///
    /// let err = engine.rank(vec![playground.clone()], &[], &[playground]).unwrap_err();
    /// assert!(matches!(err, ScoringError::EmptyCategory { .. }));
    /// ```
    pub fn rank(
        &self,
        playgrounds: Vec<TaggedPoint>,
        food_places: &[TaggedPoint],
        chargers: &[TaggedPoint],
    ) -> Result<Vec<RankedPlayground>, ScoringError> {
        ensure_non_empty(Category::Playground, &playgrounds)?;
        ensure_non_empty(Category::FoodPlace, food_places)?;
        ensure_non_empty(Category::Charger, chargers)?;

        let mut ranked: Vec<RankedPlayground> = playgrounds
            .into_iter()
            .map(|playground| self.score_playground(playground, food_places, chargers))
            .collect();
        ranked.sort_by(|left, right| right.score.total_cmp(&left.score));
        debug!(
            "ranked {} playgrounds against {} food places and {} chargers",
            ranked.len(),
            food_places.len(),
            chargers.len()
        );
        Ok(ranked)
    }

    /// Rank the playgrounds of a classified dataset.
    ///
    /// # Errors
    /// Returns [`ScoringError::EmptyCategory`] for the first empty category.
    pub fn rank_classified(
        &self,
        classified: Classified,
    ) -> Result<Vec<RankedPlayground>, ScoringError> {
        let Classified {
            playgrounds,
            food_places,
            chargers,
        } = classified;
        self.rank(playgrounds, &food_places, &chargers)
    }
}

fn ensure_non_empty(category: Category, points: &[TaggedPoint]) -> Result<(), ScoringError> {
    if points.is_empty() {
        Err(ScoringError::empty(category))
    } else {
        Ok(())
    }
}

/// Distance in metres from `from` to the closest of `candidates`.
///
/// Returns `f64::INFINITY` when `candidates` is empty.
///
/// # Examples
/// ```
/// use parkside_core::{TaggedPoint, coordinate};
/// use parkside_scorer::nearest_distance_m;
///
/// let origin = coordinate(0.0, 0.0);
/// let near = TaggedPoint::with_empty_tags(1, coordinate(0.001, 0.0));
/// let far = TaggedPoint::with_empty_tags(2, coordinate(1.0, 0.0));
///
/// let nearest = nearest_distance_m(origin, &[far, near]);
/// assert!((nearest - 111.19).abs() < 0.01);
/// assert_eq!(nearest_distance_m(origin, &[]), f64::INFINITY);
/// ```
#[must_use]
pub fn nearest_distance_m(from: Coordinate, candidates: &[TaggedPoint]) -> f64 {
    candidates
        .iter()
        .map(|candidate| distance_m(from, candidate.position))
        .fold(f64::INFINITY, f64::min)
}

/// Rank `playgrounds` with linear decay at `ideal_distance_m`.
///
/// Convenience wrapper over [`ScoringEngine::rank`]; parameters are not
/// validated.
///
/// # Errors
/// Returns [`ScoringError::EmptyCategory`] when any category is empty.
pub fn score(
    playgrounds: Vec<TaggedPoint>,
    food_places: &[TaggedPoint],
    chargers: &[TaggedPoint],
    weights: ScoreWeights,
    ideal_distance_m: f64,
) -> Result<Vec<RankedPlayground>, ScoringError> {
    ScoringEngine::new(ScoringRequest {
        weights,
        ideal_distance_m,
    })
    .rank(playgrounds, food_places, chargers)
}
