//! The caller-side search pipeline: classify, check, rank.
#![forbid(unsafe_code)]

use log::info;
use parkside_core::{Category, Classified, RankedPlayground, ScoringRequest, TaggedPoint, classify};
use serde::Serialize;

use crate::{ScoringEngine, ScoringError};

/// Number of ranked playgrounds a caller shows by default.
pub const DEFAULT_TOP_N: usize = 5;

/// Result of a search once the points have been classified.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// Every category was present; playgrounds are ranked, best first.
    Ranked {
        /// All playgrounds, sorted by descending score.
        playgrounds: Vec<RankedPlayground>,
    },
    /// At least one category had no points inside the search area.
    ///
    /// This is an expected, frequent outcome rather than an error.
    NoCompleteMatches {
        /// The empty categories, in priority order.
        missing: Vec<Category>,
    },
}

impl SearchOutcome {
    /// The best `n` playgrounds, or an empty slice when nothing was ranked.
    #[must_use]
    pub fn top(&self, n: usize) -> &[RankedPlayground] {
        match self {
            Self::Ranked { playgrounds } => playgrounds.get(..n).unwrap_or(playgrounds.as_slice()),
            Self::NoCompleteMatches { .. } => &[],
        }
    }

    /// Report whether every category was present.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Ranked { .. })
    }
}

/// Classified points together with the search outcome.
///
/// `classified` keeps every point of each category so callers can show all
/// of them, not just the ranked top entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// All positioned points, split by category.
    pub classified: Classified,
    /// Ranking or the no-complete-matches report.
    pub outcome: SearchOutcome,
}

/// Classify `points` and rank the playgrounds when every category is present.
///
/// The request is validated first.
///
/// # Errors
/// Returns [`ScoringError::InvalidParameter`] when the request is invalid.
/// Empty categories are reported through
/// [`SearchOutcome::NoCompleteMatches`], not as an error.
pub fn evaluate<I>(points: I, request: ScoringRequest) -> Result<Evaluation, ScoringError>
where
    I: IntoIterator<Item = TaggedPoint>,
{
    let engine = ScoringEngine::checked(request)?;
    let classified = classify(points);

    let missing = classified.missing();
    if !missing.is_empty() {
        info!("no complete matches; missing categories: {missing:?}");
        return Ok(Evaluation {
            classified,
            outcome: SearchOutcome::NoCompleteMatches { missing },
        });
    }

    let playgrounds = engine.rank(
        classified.playgrounds.clone(),
        &classified.food_places,
        &classified.chargers,
    )?;
    Ok(Evaluation {
        classified,
        outcome: SearchOutcome::Ranked { playgrounds },
    })
}
