//! Caller-owned results state and its renderers.
//!
//! A [`SearchSession`] pairs a [`ResultsView`] with a [`RefreshTracker`] so
//! that a refresh started later always wins over one started earlier, no
//! matter which finishes first.

use std::io::{self, Write};

use parkside_core::{
    Category, Coordinate, RankedPlayground, RefreshTicket, RefreshTracker, TaggedPoint,
};
use parkside_scorer::{Evaluation, SearchOutcome};
use serde::Serialize;

/// Message shown when at least one category is empty.
pub const NO_COMPLETE_MATCHES_MESSAGE: &str =
    "No complete matches in this area. Try increasing the radius or moving the map.";

/// Hint shown alongside a failed search.
pub const RETRY_HINT: &str = "Check your connection and run the search again to retry.";

/// A latitude/longitude pair in the order users read it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl From<Coordinate> for LatLng {
    fn from(coord: Coordinate) -> Self {
        Self {
            lat: coord.y,
            lng: coord.x,
        }
    }
}

/// A labelled map marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Source feature id.
    pub id: i64,
    /// Display label, e.g. `"Mat: Tekopp"`.
    pub label: String,
    /// Marker position.
    pub position: LatLng,
}

impl Marker {
    fn for_point(category: Category, point: &TaggedPoint) -> Self {
        Self {
            id: point.id,
            label: category.marker_label(point),
            position: point.position.into(),
        }
    }
}

/// Every marker of one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerLayer {
    /// Category shared by all markers in the layer.
    pub category: Category,
    /// All points of the category, not just the ranked ones.
    pub markers: Vec<Marker>,
}

/// One row of the ranked list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    /// One-based rank.
    pub rank: usize,
    /// Source feature id.
    pub id: i64,
    /// Playground name or the default label.
    pub name: String,
    /// Playground position.
    pub position: LatLng,
    /// Weighted proximity score.
    pub score: f64,
    /// Distance to the nearest food place in metres.
    pub food_distance_m: f64,
    /// Distance to the nearest charger in metres.
    pub charger_distance_m: f64,
}

impl RankedEntry {
    fn new(rank: usize, ranked: &RankedPlayground) -> Self {
        Self {
            rank,
            id: ranked.point.id,
            name: ranked.name.clone(),
            position: ranked.position().into(),
            score: ranked.score,
            food_distance_m: ranked.food_distance_m,
            charger_distance_m: ranked.charger_distance_m,
        }
    }
}

/// Lifecycle state of the results display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewStatus {
    /// A search is in flight.
    Loading,
    /// Results are available.
    Ready,
    /// At least one category was empty.
    NoCompleteMatches {
        /// The empty categories.
        missing: Vec<Category>,
    },
    /// The search failed; the user may retry.
    Failed {
        /// Human-readable failure description.
        message: String,
    },
}

/// Everything a renderer needs to draw the current results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsView {
    /// Map centre of the search.
    pub center: LatLng,
    /// Search radius in metres.
    pub radius_m: f64,
    /// Current status.
    pub status: ViewStatus,
    /// Marker layers, one per category.
    pub layers: Vec<MarkerLayer>,
    /// The ranked top entries.
    pub top: Vec<RankedEntry>,
}

impl ResultsView {
    /// A view waiting for results around `center`.
    #[must_use]
    pub fn loading(center: Coordinate, radius_m: f64) -> Self {
        Self {
            center: center.into(),
            radius_m,
            status: ViewStatus::Loading,
            layers: Vec::new(),
            top: Vec::new(),
        }
    }

    /// Replace the contents with an evaluation, keeping at most `top_n`
    /// ranked entries.
    pub fn show(&mut self, evaluation: &Evaluation, top_n: usize) {
        self.layers = Category::ALL
            .iter()
            .map(|&category| MarkerLayer {
                category,
                markers: evaluation
                    .classified
                    .get(category)
                    .iter()
                    .map(|point| Marker::for_point(category, point))
                    .collect(),
            })
            .collect();
        self.top = evaluation
            .outcome
            .top(top_n)
            .iter()
            .enumerate()
            .map(|(index, ranked)| RankedEntry::new(index + 1, ranked))
            .collect();
        self.status = match &evaluation.outcome {
            SearchOutcome::Ranked { .. } => ViewStatus::Ready,
            SearchOutcome::NoCompleteMatches { missing } => ViewStatus::NoCompleteMatches {
                missing: missing.clone(),
            },
        };
    }

    /// Mark the search as failed, clearing stale results.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.layers.clear();
        self.top.clear();
        self.status = ViewStatus::Failed {
            message: message.into(),
        };
    }
}

/// A results view guarded by refresh generations.
#[derive(Debug)]
pub struct SearchSession {
    tracker: RefreshTracker,
    view: ResultsView,
}

impl SearchSession {
    /// Start a session with an empty view around `center`.
    #[must_use]
    pub fn new(center: Coordinate, radius_m: f64) -> Self {
        Self {
            tracker: RefreshTracker::new(),
            view: ResultsView::loading(center, radius_m),
        }
    }

    /// Start a refresh: the view returns to `Loading` and earlier tickets
    /// become stale.
    pub fn begin(&mut self, center: Coordinate, radius_m: f64) -> RefreshTicket {
        self.view = ResultsView::loading(center, radius_m);
        self.tracker.begin()
    }

    /// Apply a finished refresh. Returns `false` and leaves the view
    /// untouched when `ticket` is stale.
    pub fn complete(
        &mut self,
        ticket: RefreshTicket,
        result: Result<&Evaluation, String>,
        top_n: usize,
    ) -> bool {
        let Some(result) = self.tracker.accept(ticket, result) else {
            return false;
        };
        match result {
            Ok(evaluation) => self.view.show(evaluation, top_n),
            Err(message) => self.view.fail(message),
        }
        true
    }

    /// The current view.
    #[must_use]
    pub const fn view(&self) -> &ResultsView {
        &self.view
    }
}

/// How the results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Write `view` to `writer` in `format`.
///
/// # Errors
/// Returns any error raised by `writer` or by JSON serialisation.
pub fn render(view: &ResultsView, format: OutputFormat, writer: &mut dyn Write) -> io::Result<()> {
    match format {
        OutputFormat::Text => render_text(view, writer),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, view)?;
            writer.write_all(b"\n")
        }
    }
}

fn render_text(view: &ResultsView, writer: &mut dyn Write) -> io::Result<()> {
    writeln!(
        writer,
        "Playgrounds within {:.0} m of {:.5}, {:.5}",
        view.radius_m, view.center.lat, view.center.lng
    )?;
    match &view.status {
        ViewStatus::Loading => writeln!(writer, "Loading...")?,
        ViewStatus::Failed { message } => {
            writeln!(writer, "Search failed: {message}")?;
            writeln!(writer, "{RETRY_HINT}")?;
        }
        ViewStatus::NoCompleteMatches { missing } => {
            writeln!(writer, "{NO_COMPLETE_MATCHES_MESSAGE}")?;
            let names: Vec<&str> = missing.iter().map(|category| category.as_str()).collect();
            writeln!(writer, "Nothing found for: {}", names.join(", "))?;
            render_layers(view, writer)?;
        }
        ViewStatus::Ready => {
            writeln!(writer)?;
            writeln!(writer, "Top {} playgrounds:", view.top.len())?;
            for entry in &view.top {
                writeln!(
                    writer,
                    "{:>2}. {} (score {:.2}, food {:.0} m, charger {:.0} m)",
                    entry.rank,
                    entry.name,
                    entry.score,
                    entry.food_distance_m,
                    entry.charger_distance_m
                )?;
            }
            render_layers(view, writer)?;
        }
    }
    Ok(())
}

fn render_layers(view: &ResultsView, writer: &mut dyn Write) -> io::Result<()> {
    for layer in &view.layers {
        writeln!(writer)?;
        writeln!(writer, "{} markers ({}):", layer.category, layer.markers.len())?;
        for marker in &layer.markers {
            writeln!(
                writer,
                "  {} @ {:.5}, {:.5}",
                marker.label, marker.position.lat, marker.position.lng
            )?;
        }
    }
    Ok(())
}
