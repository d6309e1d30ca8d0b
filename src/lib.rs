//! Facade crate for the Parkside playground proximity engine.
//!
//! This crate re-exports the core domain types and the scoring engine, and
//! exposes the Overpass-backed feature source behind the `http` feature.

#![forbid(unsafe_code)]

pub use parkside_core::{
    Category, Classified, Coordinate, DEFAULT_PLAYGROUND_NAME, DistanceDecay, EARTH_RADIUS_M,
    FeatureSource, FetchError, LinearDecay, ParameterError, RankedPlayground, RefreshTicket,
    RefreshTracker, ScoreWeights, ScoringRequest, SearchArea, TaggedPoint, Tags, classify,
    coordinate, distance_m, normalize,
};

pub use parkside_scorer::{
    DEFAULT_TOP_N, Evaluation, ScoringEngine, ScoringError, SearchOutcome, evaluate,
    nearest_distance_m, score,
};

#[cfg(feature = "http")]
pub use parkside_data::{
    HttpOverpassSource, HttpOverpassSourceConfig, SourceBuildError, build_query, parse_response,
};
