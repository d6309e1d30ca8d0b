//! Command-line interface for Parkside playground searches.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod search;
pub mod view;

pub use error::CliError;
use search::{SearchArgs, run_search};

pub(crate) const ARG_LAT: &str = "lat";
pub(crate) const ARG_LNG: &str = "lng";
pub(crate) const ARG_RADIUS: &str = "radius";
pub(crate) const ARG_FOOD_WEIGHT: &str = "food-weight";
pub(crate) const ARG_CHARGER_WEIGHT: &str = "charger-weight";
pub(crate) const ARG_IDEAL_DISTANCE: &str = "ideal-distance";
pub(crate) const ARG_TOP: &str = "top";
pub(crate) const ARG_OVERPASS_URL: &str = "overpass-url";
pub(crate) const ARG_TIMEOUT_SECS: &str = "timeout-secs";
pub(crate) const ARG_RESPONSE_FILE: &str = "response-file";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ARG_JSON: &str = "json";

/// Run the Parkside CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Search(args) => run_search(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "parkside",
    about = "Find playgrounds close to food and electric-vehicle charging",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank playgrounds around a map position.
    Search(SearchArgs),
}

#[cfg(test)]
mod tests;
