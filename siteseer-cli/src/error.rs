//! Error types emitted by the SiteSeer CLI.
//!
//! Keep this error type reasonably small, as the CLI helpers all return
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use siteseer_core::AnalysisError;
use thiserror::Error;

/// Errors emitted by the SiteSeer CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
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
    /// Opening the analysis request file failed.
    #[error("failed to open analysis request at {path:?}: {source}")]
    OpenAnalysisRequest {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Analysis request JSON could not be decoded.
    #[error("failed to parse analysis request JSON at {path:?}: {source}")]
    ParseAnalysisRequest {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Opening the candidate dataset file failed.
    #[error("failed to open candidate dataset at {path:?}: {source}")]
    OpenDataset {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Candidate dataset JSON could not be decoded.
    #[error("failed to parse candidate dataset JSON at {path:?}: {source}")]
    ParseDataset {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The engine rejected the analysis run.
    #[error("analysis failed: {source}")]
    Analysis {
        #[source]
        source: AnalysisError,
    },
    /// Serialising the analysis report failed.
    #[error("failed to serialise analysis report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Writing the report to the output failed.
    #[error("failed to write analysis output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
