//! Tagged points produced from raw map features.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Coordinate;

/// OpenStreetMap-style free-form key/value tags.
pub type Tags = BTreeMap<String, String>;

/// Label used for a playground whose tags carry no `name`.
pub const DEFAULT_PLAYGROUND_NAME: &str = "Lekeplass";

/// A map feature reduced to a single position and its tags.
///
/// Area features are represented by their centroid. `id` is the source's own
/// identifier and is only unique within that source's numbering.
///
/// # Examples
/// ```
/// use parkside_core::{TaggedPoint, Tags, coordinate};
///
/// let point = TaggedPoint::new(
///     7,
///     coordinate(59.91, 10.75),
///     Tags::from([("leisure".into(), "playground".into())]),
/// );
///
/// assert_eq!(point.tag("leisure"), Some("playground"));
/// assert_eq!(point.name(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TaggedPoint {
    /// Identifier assigned by the data source.
    pub id: i64,
    /// Position of the feature, or its centroid for areas.
    pub position: Coordinate,
    /// Tags attached to the feature.
    pub tags: Tags,
}

impl TaggedPoint {
    /// Construct a `TaggedPoint` with the provided tags.
    #[must_use]
    pub const fn new(id: i64, position: Coordinate, tags: Tags) -> Self {
        Self { id, position, tags }
    }

    /// Construct a `TaggedPoint` without tags.
    ///
    /// # Examples
    /// ```
    /// use parkside_core::{TaggedPoint, coordinate};
    ///
    /// let point = TaggedPoint::with_empty_tags(1, coordinate(0.0, 0.0));
    /// assert!(point.tags.is_empty());
    /// ```
    #[must_use]
    pub const fn with_empty_tags(id: i64, position: Coordinate) -> Self {
        Self::new(id, position, Tags::new())
    }

    /// Return the value of `key`, if tagged.
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Return the `name` tag, if present.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.tag("name")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate;

    #[test]
    fn point_exposes_tags() {
        let point = TaggedPoint::new(
            1,
            coordinate(0.0, 0.0),
            Tags::from([("name".into(), "Frognerparken".into())]),
        );
        assert_eq!(point.name(), Some("Frognerparken"));
        assert_eq!(point.tag("missing"), None);
    }
}
