//! Core domain types for the Parkside proximity engine.
//!
//! The crate holds the leaf logic shared by every other member: geodesic
//! distance, tagged points, category classification, the distance decay used
//! for scoring, and the value types describing a search. Everything here is
//! pure and synchronous; I/O lives in `parkside-data`.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod category;
pub mod decay;
pub mod error;
pub mod geo_math;
pub mod point;
pub mod ranked;
pub mod refresh;
pub mod request;
pub mod source;

pub use category::{Category, Classified, classify};
pub use decay::{DistanceDecay, LinearDecay, normalize};
pub use error::ParameterError;
pub use geo_math::{Coordinate, EARTH_RADIUS_M, coordinate, distance_m};
pub use point::{DEFAULT_PLAYGROUND_NAME, TaggedPoint, Tags};
pub use ranked::RankedPlayground;
pub use refresh::{RefreshTicket, RefreshTracker};
pub use request::{ScoreWeights, ScoringRequest, SearchArea};
pub use source::{FeatureSource, FetchError};

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
