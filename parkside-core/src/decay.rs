//! Map distances onto proximity scores.
//!
//! A [`DistanceDecay`] turns a distance in metres into a proximity score in
//! `0.0..=1.0`. [`LinearDecay`] is the decay used for ranking: one at zero
//! distance, falling linearly to zero at the ideal distance and staying there.

/// Convert a distance into a proximity score.
///
/// Implementations must:
/// - Produce finite scores.
/// - Return values in `0.0..=1.0`.
/// - Return `0.0` for non-finite distances (no candidate was found).
///
/// Use [`DistanceDecay::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use parkside_core::DistanceDecay;
///
/// struct StepDecay;
///
/// impl DistanceDecay for StepDecay {
///     fn proximity(&self, distance_m: f64) -> f64 {
///         if distance_m < 100.0 { 1.0 } else { 0.0 }
///     }
/// }
///
/// assert_eq!(StepDecay.proximity(50.0), 1.0);
/// assert_eq!(StepDecay::sanitise(f64::NAN), 0.0);
/// ```
pub trait DistanceDecay: Send + Sync {
    /// Return the proximity score for `distance_m`.
    fn proximity(&self, distance_m: f64) -> f64;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, 1.0)
    }
}

/// Linear decay reaching zero at a fixed ideal distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearDecay {
    ideal_distance_m: f64,
}

impl LinearDecay {
    /// Construct a decay that reaches zero at `ideal_distance_m`.
    ///
    /// The value is not validated; see
    /// [`ScoringRequest::new`](crate::ScoringRequest::new) for a checked path.
    #[must_use]
    pub const fn new(ideal_distance_m: f64) -> Self {
        Self { ideal_distance_m }
    }

    /// Distance at which the score reaches zero.
    #[must_use]
    pub const fn ideal_distance_m(&self) -> f64 {
        self.ideal_distance_m
    }
}

impl DistanceDecay for LinearDecay {
    fn proximity(&self, distance_m: f64) -> f64 {
        normalize(distance_m, self.ideal_distance_m)
    }
}

/// Linear proximity score for `distance_m` against `ideal_distance_m`.
///
/// `clamp(1 - d / ideal, 0, 1)` for finite `d`, else `0`. Distances beyond
/// the ideal distance are neither rewarded nor further penalised.
///
/// # Examples
/// ```
/// use parkside_core::normalize;
///
/// assert_eq!(normalize(0.0, 500.0), 1.0);
/// assert_eq!(normalize(250.0, 500.0), 0.5);
/// assert_eq!(normalize(500.0, 500.0), 0.0);
/// assert_eq!(normalize(2_000.0, 500.0), 0.0);
/// assert_eq!(normalize(f64::INFINITY, 500.0), 0.0);
/// ```
#[must_use]
pub fn normalize(distance_m: f64, ideal_distance_m: f64) -> f64 {
    if !distance_m.is_finite() {
        return 0.0;
    }
    LinearDecay::sanitise(1.0 - distance_m / ideal_distance_m)
}
