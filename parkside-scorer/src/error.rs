//! Error types raised while ranking playgrounds.
#![forbid(unsafe_code)]

use parkside_core::{Category, ParameterError};
use thiserror::Error;

/// Errors raised by [`crate::ScoringEngine`] and [`crate::evaluate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    /// A category had no points, so nearest distances are undefined.
    ///
    /// This is a caller contract violation: check
    /// [`Classified::is_complete`](parkside_core::Classified::is_complete)
    /// first, or use [`crate::evaluate`], which reports the condition as a
    /// [`crate::SearchOutcome::NoCompleteMatches`] instead.
    #[error("cannot rank playgrounds: no {category} points were supplied")]
    EmptyCategory {
        /// The empty category.
        category: Category,
    },
    /// A weight or the ideal distance was rejected.
    #[error(transparent)]
    InvalidParameter(#[from] ParameterError),
}

impl ScoringError {
    /// Build an [`ScoringError::EmptyCategory`] for `category`.
    #[must_use]
    pub const fn empty(category: Category) -> Self {
        Self::EmptyCategory { category }
    }
}
