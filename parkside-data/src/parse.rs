//! Normalise Overpass elements into tagged points.
//!
//! Decoding happens in two passes: the response envelope is decoded into raw
//! JSON values, then each element is decoded on its own. A malformed element
//! is logged and skipped instead of failing the whole response.

use log::{debug, warn};
use parkside_core::{FetchError, TaggedPoint, Tags, coordinate};
use serde::Deserialize;
use serde_json::Value;

/// The kind of an Overpass element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// A point feature with its own `lat`/`lon`.
    Node,
    /// An area or line feature, positioned by its `center` when present.
    Way,
    /// Relations and anything else; never positioned.
    #[serde(other)]
    Other,
}

/// Centroid Overpass attaches to ways when asked for `out center`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RawCenter {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

/// One element of an Overpass JSON response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawElement {
    /// Element kind.
    #[serde(rename = "type")]
    pub element_type: ElementType,
    /// Source identifier.
    pub id: i64,
    /// Node latitude.
    #[serde(default)]
    pub lat: Option<f64>,
    /// Node longitude.
    #[serde(default)]
    pub lon: Option<f64>,
    /// Way centroid.
    #[serde(default)]
    pub center: Option<RawCenter>,
    /// Element tags; absent tags decode as an empty map.
    #[serde(default)]
    pub tags: Tags,
}

impl RawElement {
    /// Resolve the position used for this element, if it has one.
    ///
    /// Nodes use their own coordinate and ways their centroid. Anything else,
    /// and any non-finite coordinate, yields `None`.
    #[must_use]
    pub fn position(&self) -> Option<(f64, f64)> {
        let (lat, lon) = match self.element_type {
            ElementType::Node => (self.lat?, self.lon?),
            ElementType::Way => {
                let center = self.center?;
                (center.lat, center.lon)
            }
            ElementType::Other => return None,
        };
        (lat.is_finite() && lon.is_finite()).then_some((lat, lon))
    }

    /// Convert into a [`TaggedPoint`], dropping elements without a position.
    #[must_use]
    pub fn into_point(self) -> Option<TaggedPoint> {
        let (lat, lon) = self.position()?;
        Some(TaggedPoint::new(self.id, coordinate(lat, lon), self.tags))
    }
}

#[derive(Debug, Deserialize)]
struct ResponseEnvelope {
    #[serde(default)]
    elements: Vec<Value>,
}

/// Normalise raw elements into tagged points, preserving input order.
///
/// Ways without a `center`, nodes missing a coordinate, relations and
/// non-finite positions are silently dropped. Duplicates are kept.
///
/// # Examples
/// ```
/// use parkside_data::{ElementType, RawElement, parse_elements};
///
/// let node = RawElement {
///     element_type: ElementType::Node,
///     id: 1,
///     lat: Some(59.91),
///     lon: Some(10.75),
///     center: None,
///     tags: Default::default(),
/// };
/// let bare_way = RawElement { element_type: ElementType::Way, id: 2, lat: None, lon: None, ..node.clone() };
///
/// let points = parse_elements(vec![node, bare_way]);
/// assert_eq!(points.len(), 1);
/// assert_eq!(points[0].id, 1);
/// ```
pub fn parse_elements<I>(elements: I) -> Vec<TaggedPoint>
where
    I: IntoIterator<Item = RawElement>,
{
    let mut dropped = 0_usize;
    let points: Vec<TaggedPoint> = elements
        .into_iter()
        .filter_map(|element| {
            let point = element.into_point();
            if point.is_none() {
                dropped += 1;
            }
            point
        })
        .collect();
    debug!(
        "parsed {} positioned elements; dropped {dropped} without a usable position",
        points.len()
    );
    points
}

/// Decode an Overpass JSON response body and normalise its elements.
///
/// A missing `elements` array is treated as empty. Elements that fail to
/// decode are skipped with a warning.
///
/// # Errors
/// Returns [`FetchError::Parse`] when the body is not a JSON object.
///
/// # Examples
/// ```
/// use parkside_data::parse_response;
///
/// let body = r#"{"elements": [
///     {"type": "node", "id": 1, "lat": 59.91, "lon": 10.75, "tags": {"amenity": "cafe"}},
///     {"type": "way", "id": 2, "tags": {"leisure": "playground"}}
/// ]}"#;
/// let points = parse_response(body)?;
/// assert_eq!(points.len(), 1);
/// # Ok::<(), parkside_core::FetchError>(())
/// ```
pub fn parse_response(body: &str) -> Result<Vec<TaggedPoint>, FetchError> {
    let envelope: ResponseEnvelope =
        serde_json::from_str(body).map_err(|err| FetchError::Parse {
            message: err.to_string(),
        })?;
    let elements = envelope
        .elements
        .into_iter()
        .filter_map(|value| match RawElement::deserialize(&value) {
            Ok(element) => Some(element),
            Err(err) => {
                warn!("skipping malformed Overpass element: {err}");
                None
            }
        });
    Ok(parse_elements(elements))
}
