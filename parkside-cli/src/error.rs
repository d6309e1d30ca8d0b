//! Error types emitted by the Parkside CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use parkside_core::{FetchError, ParameterError};
use parkside_data::SourceBuildError;
use thiserror::Error;

/// Errors emitted by the Parkside CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A search parameter is out of range after configuration merging.
    #[error("invalid search parameters: {0}")]
    InvalidParameter(#[from] ParameterError),
    /// A count or duration option was zero.
    #[error("--{field} must be at least 1")]
    ZeroValue { field: &'static str },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading a saved Overpass response failed.
    #[error("failed to read saved response at {path:?}: {source}")]
    ReadResponseFile {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A saved Overpass response could not be decoded.
    #[error("failed to decode saved response at {path:?}: {source}")]
    DecodeResponseFile {
        path: Utf8PathBuf,
        #[source]
        source: FetchError,
    },
    /// Constructing the HTTP feature source failed.
    #[error("failed to build Overpass client for {endpoint:?}: {source}")]
    BuildSource {
        endpoint: String,
        #[source]
        source: SourceBuildError,
    },
    /// Fetching features from the Overpass API failed.
    #[error("search failed: {source}")]
    Fetch {
        #[source]
        source: FetchError,
    },
    /// Scoring rejected the resolved request.
    #[error(transparent)]
    Scoring(#[from] parkside_scorer::ScoringError),
    /// Creating the output file failed.
    #[error("failed to create output file {path:?}: {source}")]
    CreateOutput {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Writing the rendered results failed.
    #[error("failed to write search output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
