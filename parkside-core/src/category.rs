//! Semantic categories derived from feature tags.
//!
//! Classification consumes a point's tags once and yields at most one
//! [`Category`]. When a point satisfies several predicates the first match in
//! `Playground`, `FoodPlace`, `Charger` order wins, so a point never lands in
//! two categories. A point matching none is unclassified and dropped.
//!
//! # Examples
//! ```
//! use parkside_core::{Category, Tags};
//!
//! let tags = Tags::from([("amenity".into(), "cafe".into())]);
//! assert_eq!(Category::classify(&tags), Some(Category::FoodPlace));
//! assert_eq!(Category::FoodPlace.as_str(), "food_place");
//! ```

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{TaggedPoint, Tags};

/// The categories taking part in proximity scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Category {
    /// `leisure=playground`.
    Playground,
    /// `amenity=cafe` or `amenity=restaurant`.
    FoodPlace,
    /// `amenity=charging_station`.
    Charger,
}

impl Category {
    /// Every category, in classification priority order.
    pub const ALL: [Self; 3] = [Self::Playground, Self::FoodPlace, Self::Charger];

    /// Classify a tag set.
    ///
    /// `None` stands for the unclassified outcome: the point takes no part
    /// in scoring.
    #[must_use]
    pub fn classify(tags: &Tags) -> Option<Self> {
        if tags.get("leisure").is_some_and(|value| value == "playground") {
            return Some(Self::Playground);
        }
        match tags.get("amenity").map(String::as_str) {
            Some("cafe" | "restaurant") => Some(Self::FoodPlace),
            Some("charging_station") => Some(Self::Charger),
            _ => None,
        }
    }

    /// Return the category as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Playground => "playground",
            Self::FoodPlace => "food_place",
            Self::Charger => "charger",
        }
    }

    /// Display label for a marker whose point has no `name` tag.
    #[must_use]
    pub const fn default_label(self) -> &'static str {
        match self {
            Self::Playground => "Lekeplass",
            Self::FoodPlace => "Restaurant/kafé",
            Self::Charger => "Elbillader",
        }
    }

    const fn marker_prefix(self) -> &'static str {
        match self {
            Self::Playground => "Lekeplass",
            Self::FoodPlace => "Mat",
            Self::Charger => "Lader",
        }
    }

    /// Marker label for a point of this category.
    ///
    /// Named points are prefixed with a short category word; unnamed points
    /// fall back to [`Category::default_label`].
    ///
    /// # Examples
    /// ```
    /// use parkside_core::{Category, TaggedPoint, Tags, coordinate};
    ///
    /// let named = TaggedPoint::new(
    ///     1,
    ///     coordinate(0.0, 0.0),
    ///     Tags::from([("name".into(), "Tekopp".into())]),
    /// );
    /// assert_eq!(Category::FoodPlace.marker_label(&named), "Mat: Tekopp");
    ///
    /// let unnamed = TaggedPoint::with_empty_tags(2, coordinate(0.0, 0.0));
    /// assert_eq!(Category::Charger.marker_label(&unnamed), "Elbillader");
    /// ```
    #[must_use]
    pub fn marker_label(self, point: &TaggedPoint) -> String {
        point.name().map_or_else(
            || self.default_label().to_owned(),
            |name| format!("{}: {name}", self.marker_prefix()),
        )
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "playground" => Ok(Self::Playground),
            "food_place" | "food" => Ok(Self::FoodPlace),
            "charger" => Ok(Self::Charger),
            _ => Err(format!("unknown category '{s}'")),
        }
    }
}

/// Points partitioned by [`Category`], each list in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classified {
    /// Points classified as [`Category::Playground`].
    pub playgrounds: Vec<TaggedPoint>,
    /// Points classified as [`Category::FoodPlace`].
    pub food_places: Vec<TaggedPoint>,
    /// Points classified as [`Category::Charger`].
    pub chargers: Vec<TaggedPoint>,
}

impl Classified {
    /// Borrow the points of one category.
    #[must_use]
    pub fn get(&self, category: Category) -> &[TaggedPoint] {
        match category {
            Category::Playground => &self.playgrounds,
            Category::FoodPlace => &self.food_places,
            Category::Charger => &self.chargers,
        }
    }

    fn push(&mut self, category: Category, point: TaggedPoint) {
        match category {
            Category::Playground => self.playgrounds.push(point),
            Category::FoodPlace => self.food_places.push(point),
            Category::Charger => self.chargers.push(point),
        }
    }

    /// Categories with no points, in priority order.
    #[must_use]
    pub fn missing(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|&category| self.get(category).is_empty())
            .collect()
    }

    /// Report whether every category has at least one point.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

/// Partition `points` into playgrounds, food places and chargers.
///
/// # Examples
/// ```
/// use parkside_core::{TaggedPoint, Tags, classify, coordinate};
///
/// let points = vec![
///     TaggedPoint::new(
///         1,
///         coordinate(0.0, 0.0),
///         Tags::from([("leisure".into(), "playground".into())]),
///     ),
///     TaggedPoint::with_empty_tags(2, coordinate(0.0, 0.0)),
/// ];
/// let classified = classify(points);
/// assert_eq!(classified.playgrounds.len(), 1);
/// assert!(!classified.is_complete());
/// ```
pub fn classify<I>(points: I) -> Classified
where
    I: IntoIterator<Item = TaggedPoint>,
{
    let mut classified = Classified::default();
    let mut unclassified = 0_usize;
    for point in points {
        match Category::classify(&point.tags) {
            Some(category) => classified.push(category, point),
            None => unclassified += 1,
        }
    }
    debug!(
        "classified {} playgrounds, {} food places, {} chargers; {unclassified} unclassified",
        classified.playgrounds.len(),
        classified.food_places.len(),
        classified.chargers.len(),
    );
    classified
}
