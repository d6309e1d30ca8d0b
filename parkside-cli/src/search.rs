//! Search command implementation for the Parkside CLI.

use std::io::Write;
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use parkside_core::{FeatureSource, ScoreWeights, ScoringRequest, SearchArea, TaggedPoint};
use parkside_data::{HttpOverpassSource, HttpOverpassSourceConfig, parse_response};
use parkside_fs::{create_utf8_file, read_utf8_file};
use parkside_scorer::{DEFAULT_TOP_N, Evaluation, evaluate};
use serde::{Deserialize, Serialize};

use crate::view::{OutputFormat, ResultsView, SearchSession, render};
use crate::{
    ARG_CHARGER_WEIGHT, ARG_FOOD_WEIGHT, ARG_IDEAL_DISTANCE, ARG_JSON, ARG_LAT, ARG_LNG,
    ARG_OUTPUT, ARG_OVERPASS_URL, ARG_RADIUS, ARG_RESPONSE_FILE, ARG_TIMEOUT_SECS, ARG_TOP,
    CliError,
};

/// Latitude of central Oslo, the default map centre.
pub(crate) const DEFAULT_LAT: f64 = 59.9139;
/// Longitude of central Oslo, the default map centre.
pub(crate) const DEFAULT_LNG: f64 = 10.7522;
/// Default search radius in metres.
pub(crate) const DEFAULT_RADIUS_M: f64 = 1_000.0;
/// Default distance at which proximity decays to zero.
pub(crate) const DEFAULT_IDEAL_DISTANCE_M: f64 = 500.0;

/// CLI arguments for the `search` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Find playgrounds near food places and electric-vehicle \
                 chargers. Features are fetched from an Overpass API \
                 instance, or read from a previously saved Overpass JSON \
                 response, then ranked by weighted proximity.",
    about = "Rank playgrounds by nearby food and charging"
)]
#[ortho_config(prefix = "PARKSIDE")]
pub(crate) struct SearchArgs {
    /// Latitude of the search centre in degrees.
    #[arg(long = ARG_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Longitude of the search centre in degrees.
    #[arg(long = ARG_LNG, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lng: Option<f64>,
    /// Search radius in metres.
    #[arg(long = ARG_RADIUS, value_name = "metres")]
    #[serde(default)]
    pub(crate) radius: Option<f64>,
    /// Weight applied to food-place proximity.
    #[arg(long = ARG_FOOD_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) food_weight: Option<f64>,
    /// Weight applied to charger proximity.
    #[arg(long = ARG_CHARGER_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) charger_weight: Option<f64>,
    /// Distance in metres at which proximity stops counting.
    #[arg(long = ARG_IDEAL_DISTANCE, value_name = "metres")]
    #[serde(default)]
    pub(crate) ideal_distance: Option<f64>,
    /// Number of ranked playgrounds to show.
    #[arg(long = ARG_TOP, value_name = "count")]
    #[serde(default)]
    pub(crate) top: Option<usize>,
    /// Overpass interpreter URL.
    #[arg(long = ARG_OVERPASS_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) overpass_url: Option<String>,
    /// Request timeout in seconds.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "seconds")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    /// Score a saved Overpass JSON response instead of fetching.
    #[arg(long = ARG_RESPONSE_FILE, value_name = "path")]
    #[serde(default)]
    pub(crate) response_file: Option<Utf8PathBuf>,
    /// Write the results to this file instead of standard output.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Emit JSON instead of text.
    #[arg(long = ARG_JSON, num_args = 0..=1, default_missing_value = "true", value_name = "bool")]
    #[serde(default)]
    pub(crate) json: Option<bool>,
}

impl SearchArgs {
    pub(crate) fn into_config(self) -> Result<SearchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SearchConfig::try_from(merged)
    }
}

/// Resolved and validated `search` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SearchConfig {
    /// Centre and radius of the search.
    pub(crate) area: SearchArea,
    /// Weights and ideal distance.
    pub(crate) request: ScoringRequest,
    /// Number of ranked playgrounds to show.
    pub(crate) top: usize,
    /// Overpass interpreter URL.
    pub(crate) overpass_url: String,
    /// Request timeout.
    pub(crate) timeout: Duration,
    /// Saved response to score instead of fetching.
    pub(crate) response_file: Option<Utf8PathBuf>,
    /// Output file; standard output when absent.
    pub(crate) output: Option<Utf8PathBuf>,
    /// Rendering format.
    pub(crate) format: OutputFormat,
}

impl SearchConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        match &self.response_file {
            Some(path) => Self::require_existing(path, ARG_RESPONSE_FILE),
            None => Ok(()),
        }
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match parkside_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<SearchArgs> for SearchConfig {
    type Error = CliError;

    fn try_from(args: SearchArgs) -> Result<Self, Self::Error> {
        let area = SearchArea::new(
            args.lat.unwrap_or(DEFAULT_LAT),
            args.lng.unwrap_or(DEFAULT_LNG),
            args.radius.unwrap_or(DEFAULT_RADIUS_M),
        )?;
        let weights = ScoreWeights::new(
            args.food_weight.unwrap_or(1.0),
            args.charger_weight.unwrap_or(1.0),
        )?;
        let request = ScoringRequest::new(
            weights,
            args.ideal_distance.unwrap_or(DEFAULT_IDEAL_DISTANCE_M),
        )?;

        let top = args.top.unwrap_or(DEFAULT_TOP_N);
        if top == 0 {
            return Err(CliError::ZeroValue { field: ARG_TOP });
        }

        let defaults = HttpOverpassSourceConfig::default();
        let timeout = args
            .timeout_secs
            .map_or(defaults.timeout, Duration::from_secs);
        if timeout.is_zero() {
            return Err(CliError::ZeroValue {
                field: ARG_TIMEOUT_SECS,
            });
        }

        let format = if args.json.unwrap_or(false) {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        Ok(Self {
            area,
            request,
            top,
            overpass_url: args.overpass_url.unwrap_or(defaults.endpoint),
            timeout,
            response_file: args.response_file,
            output: args.output,
            format,
        })
    }
}

/// Builds the feature source for the current search invocation.
pub(super) trait SearchSourceBuilder {
    fn build(&self, config: &SearchConfig) -> Result<Box<dyn FeatureSource>, CliError>;
}

pub(super) struct DefaultSearchSourceBuilder;

impl SearchSourceBuilder for DefaultSearchSourceBuilder {
    fn build(&self, config: &SearchConfig) -> Result<Box<dyn FeatureSource>, CliError> {
        let source_config =
            HttpOverpassSourceConfig::new(config.overpass_url.clone()).with_timeout(config.timeout);
        let source = HttpOverpassSource::with_config(source_config).map_err(|source| {
            CliError::BuildSource {
                endpoint: config.overpass_url.clone(),
                source,
            }
        })?;
        Ok(Box::new(source))
    }
}

pub(super) fn run_search(args: SearchArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultSearchSourceBuilder;
    run_search_with(args, &builder, &mut stdout)
}

/// Resolve `args`, run the search and render the view.
///
/// Failures after configuration is resolved are rendered as a failed view
/// before the error is returned.
pub(super) fn run_search_with(
    args: SearchArgs,
    builder: &dyn SearchSourceBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_search_config(args)?;
    let center = config.area.center;
    let mut session = SearchSession::new(center, config.area.radius_m);
    let ticket = session.begin(center, config.area.radius_m);

    info!(
        "searching {} m around {}, {}",
        config.area.radius_m, center.y, center.x
    );
    let outcome = execute_search(&config, builder);
    session.complete(
        ticket,
        outcome.as_ref().map_err(ToString::to_string),
        config.top,
    );

    write_view(&config, session.view(), writer)?;
    outcome.map(drop)
}

fn resolve_search_config(args: SearchArgs) -> Result<SearchConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_search(
    config: &SearchConfig,
    builder: &dyn SearchSourceBuilder,
) -> Result<Evaluation, CliError> {
    let points = load_points(config, builder)?;
    Ok(evaluate(points, config.request)?)
}

fn load_points(
    config: &SearchConfig,
    builder: &dyn SearchSourceBuilder,
) -> Result<Vec<TaggedPoint>, CliError> {
    if let Some(path) = &config.response_file {
        return load_saved_response(path);
    }
    let source = builder.build(config)?;
    source
        .fetch(&config.area)
        .map_err(|source| CliError::Fetch { source })
}

/// Loads and parses a saved Overpass JSON response from disk.
pub(super) fn load_saved_response(path: &Utf8Path) -> Result<Vec<TaggedPoint>, CliError> {
    let body = read_utf8_file(path).map_err(|source| CliError::ReadResponseFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_response(&body).map_err(|source| CliError::DecodeResponseFile {
        path: path.to_path_buf(),
        source,
    })
}

fn write_view(
    config: &SearchConfig,
    view: &ResultsView,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    match &config.output {
        Some(path) => {
            let mut file = create_utf8_file(path).map_err(|source| CliError::CreateOutput {
                path: path.clone(),
                source,
            })?;
            render(view, config.format, &mut file).map_err(CliError::WriteOutput)
        }
        None => render(view, config.format, writer).map_err(CliError::WriteOutput),
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SearchConfig, CliError> {
    let merged = SearchArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SearchConfig::try_from(merged)
}
