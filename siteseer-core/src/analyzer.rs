use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{AnalysisConfig, AnalysisReport, LocationStoreError, ReferenceArea, WeightSpec};

const fn default_max_results() -> usize {
    10
}

/// Parameters for an analysis run.
///
/// The request captures the reference area to compare against, the
/// configuration supplying weights and filter constraints, the weight
/// source for this run and a cap on the number of recommendations.
///
/// # Examples
/// ```rust
/// use siteseer_core::{AnalysisConfig, AnalysisRequest, ReferenceArea, WeightSpec};
///
/// let request = AnalysisRequest {
///     reference: ReferenceArea::new(1, "Gangnam pilot".to_string(), "21 Teheran-ro".to_string()),
///     config: AnalysisConfig::default(),
///     weights: WeightSpec::default(),
///     max_results: 5,
/// };
/// assert_eq!(request.max_results, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Reference area whose profile candidates are matched against.
    pub reference: ReferenceArea,
    /// Configuration supplying weights and filter constraints.
    pub config: AnalysisConfig,
    /// Weight source selection for this run.
    #[serde(default)]
    pub weights: WeightSpec,
    /// Maximum number of recommendations to return.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

/// Errors returned by [`Analyzer::analyze`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The candidate pool could not be fetched from the store.
    #[error("failed to fetch candidate locations")]
    FetchCandidates {
        /// The store failure that caused this error.
        #[source]
        source: LocationStoreError,
    },
}

/// Produce a ranked similarity report for an analysis request.
///
/// Implementations must be `Send + Sync` to operate safely across threads.
pub trait Analyzer: Send + Sync {
    /// Analyse a request, producing a report or an error.
    ///
    /// # Errors
    /// Returns [`AnalysisError`] when the candidate pool cannot be
    /// fetched.
    fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport, AnalysisError>;
}
