//! Command-line interface for running SiteSeer analyses offline.
//!
//! The CLI exists so an analysis run can be exercised end to end without
//! any of the server surfaces: it loads a JSON-encoded request and a JSON
//! candidate dataset from disk, runs the engine over them in memory, and
//! prints the report as JSON on stdout.
#![forbid(unsafe_code)]

mod analyze;
mod error;

use clap::{Parser, Subcommand};

pub use error::CliError;

pub(crate) const ARG_ANALYZE_REQUEST: &str = "request";
pub(crate) const ARG_ANALYZE_DATASET: &str = "dataset";
pub(crate) const ENV_ANALYZE_REQUEST: &str = "SITESEER_CMDS_ANALYZE_REQUEST_PATH";
pub(crate) const ENV_ANALYZE_DATASET: &str = "SITESEER_CMDS_ANALYZE_DATASET";

/// Run the SiteSeer CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration layering, or
/// the requested command fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Analyze(args) => analyze::run_analyze(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "siteseer",
    about = "Offline analysis utilities for the SiteSeer engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank candidate locations by similarity to a reference area.
    Analyze(analyze::AnalyzeArgs),
}

#[cfg(test)]
mod tests;
