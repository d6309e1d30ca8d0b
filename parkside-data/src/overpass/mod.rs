//! Overpass API access for playground, food and charger features.
//!
//! [`build_query`] formats the Overpass QL request for a search area and
//! [`HttpOverpassSource`] POSTs it to an Overpass interpreter, implementing
//! [`parkside_core::FeatureSource`]. The synchronous trait is implemented by
//! blocking on async HTTP calls internally, keeping the core library
//! embeddable in synchronous contexts.
//!
//! # Example
//!
//! ```no_run
//! use parkside_core::{FeatureSource, SearchArea};
//! use parkside_data::overpass::{HttpOverpassSource, HttpOverpassSourceConfig};
//! use std::time::Duration;
//!
//! let config = HttpOverpassSourceConfig::new("https://overpass-api.de/api/interpreter")
//!     .with_timeout(Duration::from_secs(60))
//!     .with_user_agent("my-app/1.0");
//! let source = HttpOverpassSource::with_config(config)?;
//!
//! let area = SearchArea::new(59.9139, 10.7522, 1_000.0)?;
//! let points = source.fetch(&area)?;
//! println!("fetched {} points", points.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod provider;
mod query;

#[doc(hidden)]
pub mod test_support;

pub use provider::{
    DEFAULT_ENDPOINT, DEFAULT_USER_AGENT, HttpOverpassSource, HttpOverpassSourceConfig,
    SourceBuildError,
};
pub use query::{QUERY_TIMEOUT_SECS, build_query};
