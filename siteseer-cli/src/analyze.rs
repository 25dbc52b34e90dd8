//! Analyze command implementation for the SiteSeer CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};

use siteseer_analysis::AnalysisEngine;
use siteseer_core::{
    AnalysisReport, AnalysisRequest, Analyzer, FilterConstraints, LocationRecord, LocationStore,
    LocationStoreError,
};
use siteseer_fs::open_utf8_file;

use crate::{
    ARG_ANALYZE_DATASET, ARG_ANALYZE_REQUEST, CliError, ENV_ANALYZE_DATASET, ENV_ANALYZE_REQUEST,
};

/// CLI arguments for the `analyze` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank candidate locations by similarity to a reference \
                 area. The run is described by a JSON-encoded \
                 AnalysisRequest; candidates come from a JSON array of \
                 location records. Paths can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Rank candidate locations against a reference area"
)]
#[ortho_config(prefix = "SITESEER")]
pub(crate) struct AnalyzeArgs {
    /// Path to a JSON file containing an AnalysisRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to a JSON array of candidate location records.
    #[arg(long = ARG_ANALYZE_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
}

impl AnalyzeArgs {
    pub(crate) fn into_config(self) -> Result<AnalyzeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AnalyzeConfig::try_from(merged)
    }
}

/// Resolved `analyze` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AnalyzeConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Path to the JSON candidate dataset.
    pub(crate) dataset: Utf8PathBuf,
}

impl AnalyzeConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_ANALYZE_REQUEST)?;
        Self::require_existing(&self.dataset, ARG_ANALYZE_DATASET)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match siteseer_fs::file_is_file(path) {
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

impl TryFrom<AnalyzeArgs> for AnalyzeConfig {
    type Error = CliError;

    fn try_from(args: AnalyzeArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_ANALYZE_REQUEST,
            env: ENV_ANALYZE_REQUEST,
        })?;
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_ANALYZE_DATASET,
            env: ENV_ANALYZE_DATASET,
        })?;
        Ok(Self {
            request_path,
            dataset,
        })
    }
}

/// Candidate store backed by a dataset loaded from disk.
///
/// The store pre-filters while fetching; the engine re-applies the same
/// constraints, so the pre-filter only trims what crosses the seam.
pub(crate) struct DatasetStore {
    records: Vec<LocationRecord>,
}

impl DatasetStore {
    pub(crate) const fn new(records: Vec<LocationRecord>) -> Self {
        Self { records }
    }
}

impl LocationStore for DatasetStore {
    fn fetch_candidates(
        &self,
        filters: &FilterConstraints,
    ) -> Result<Vec<LocationRecord>, LocationStoreError> {
        Ok(self
            .records
            .iter()
            .filter(|record| filters.admits(record))
            .cloned()
            .collect())
    }
}

pub(super) fn run_analyze(args: AnalyzeArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_analyze_with(args, &mut stdout)
}

pub(super) fn run_analyze_with(args: AnalyzeArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let report = execute_analyze(args)?;
    write_report(writer, &report)
}

fn execute_analyze(args: AnalyzeArgs) -> Result<AnalysisReport, CliError> {
    let config = resolve_analyze_config(args)?;
    let request = load_analysis_request(&config.request_path)?;
    let records = load_dataset(&config.dataset)?;
    let engine = AnalysisEngine::with_default_scorer(DatasetStore::new(records));
    engine
        .analyze(&request)
        .map_err(|source| CliError::Analysis { source })
}

fn resolve_analyze_config(args: AnalyzeArgs) -> Result<AnalyzeConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`AnalysisRequest`] from disk.
pub(super) fn load_analysis_request(path: &Utf8Path) -> Result<AnalysisRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenAnalysisRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseAnalysisRequest {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the JSON candidate dataset from disk.
pub(super) fn load_dataset(path: &Utf8Path) -> Result<Vec<LocationRecord>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenDataset {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseDataset {
        path: path.to_path_buf(),
        source,
    })
}

fn write_report(writer: &mut dyn Write, report: &AnalysisReport) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
