//! Data access for the Parkside engine.
//!
//! Responsibilities:
//! - Format the outbound Overpass query for a search area.
//! - Decode the inbound Overpass JSON and normalise its elements into
//!   [`TaggedPoint`](parkside_core::TaggedPoint) values.
//! - Provide an HTTP [`FeatureSource`](parkside_core::FeatureSource).
//!
//! Boundaries:
//! - Do not encode scoring rules (live in `parkside-scorer`).
//! - Keep blocking I/O off async executors; prefer async-capable clients.
//!
//! Invariants:
//! - Parsing never fails on individual elements; unusable ones are dropped.
//! - No global mutable state.

pub mod overpass;
mod parse;

pub use overpass::{
    DEFAULT_ENDPOINT, DEFAULT_USER_AGENT, HttpOverpassSource, HttpOverpassSourceConfig,
    QUERY_TIMEOUT_SECS, SourceBuildError, build_query,
};
pub use parse::{ElementType, RawElement, RawCenter, parse_elements, parse_response};
