//! Feature-source trait for map points around a search area.

use crate::{SearchArea, TaggedPoint};

use super::error::FetchError;

/// Fetch the tagged points inside a search area.
///
/// Implementations return points in the order the data source produced
/// them, already normalised (see `parkside_data::parse_elements`).
///
/// # Examples
///
/// ```rust
/// use parkside_core::{FeatureSource, FetchError, SearchArea, TaggedPoint, Tags};
///
/// struct OnePlayground;
///
/// impl FeatureSource for OnePlayground {
///     fn fetch(&self, area: &SearchArea) -> Result<Vec<TaggedPoint>, FetchError> {
///         let tags = Tags::from([("leisure".into(), "playground".into())]);
///         Ok(vec![TaggedPoint::new(1, area.center, tags)])
///     }
/// }
///
/// let area = SearchArea::new(59.9139, 10.7522, 500.0).unwrap();
/// let points = OnePlayground.fetch(&area)?;
/// assert_eq!(points.len(), 1);
/// # Ok::<(), FetchError>(())
/// ```
pub trait FeatureSource {
    /// Return every relevant point within `area`.
    fn fetch(&self, area: &SearchArea) -> Result<Vec<TaggedPoint>, FetchError>;
}
