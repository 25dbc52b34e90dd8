//! Weight resolution for analysis runs.
//!
//! A run scores with exactly one weight vector. The configured weights
//! were validated when their configuration was created; override weights
//! are applied as supplied, so the resolver leaves an audit line when a
//! run uses them.

use siteseer_core::{AnalysisConfig, WeightSpec, WeightVector};

/// Select the weight vector an analysis run will score with.
///
/// `Configured` expands the validated weights carried by `config`.
/// `Override` returns the supplied vector unchanged, without any sum
/// check, and logs its total so unusual rankings can be traced back to
/// their weights.
pub fn resolve(config: &AnalysisConfig, spec: &WeightSpec) -> WeightVector {
    match spec {
        WeightSpec::Configured => config.weights().to_vector(),
        WeightSpec::Override(weights) => {
            let total = weights.total();
            log::debug!("scoring with override weights; total {total}");
            weights.clone()
        }
    }
}
