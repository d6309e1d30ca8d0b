//! Fetch raw map features around a search area.
//!
//! The `FeatureSource` trait abstracts the network collaborator that turns a
//! [`SearchArea`](crate::SearchArea) into [`TaggedPoint`](crate::TaggedPoint)
//! values. Implementations live outside the core crate; the HTTP adapter is
//! in `parkside-data`.

mod error;
mod provider;

pub use error::FetchError;
pub use provider::FeatureSource;
