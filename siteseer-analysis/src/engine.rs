//! `AnalysisEngine` implementation tying extraction, filtering, scoring
//! and result assembly together.

use std::time::Instant;

use siteseer_core::{
    AnalysisError, AnalysisReport, AnalysisRequest, Analyzer, Candidate, LocationStore, Scorer,
};

use crate::extract::{extract_location, extract_reference};
use crate::reason::{reason, top_factors};
use crate::resolver::resolve;
use crate::similarity::{MIN_SIMILARITY, WeightedSimilarity};

/// Similarity engine generic over its two seams: a read-only location
/// store and a scorer.
pub struct AnalysisEngine<S, C>
where
    S: LocationStore,
    C: Scorer,
{
    store: S,
    scorer: C,
}

impl<S, C> AnalysisEngine<S, C>
where
    S: LocationStore,
    C: Scorer,
{
    /// Construct an engine from a store and a scorer.
    pub const fn new(store: S, scorer: C) -> Self {
        Self { store, scorer }
    }
}

impl<S> AnalysisEngine<S, WeightedSimilarity>
where
    S: LocationStore,
{
    /// Construct an engine scoring with [`WeightedSimilarity`].
    pub const fn with_default_scorer(store: S) -> Self {
        Self::new(store, WeightedSimilarity)
    }
}

impl<S, C> Analyzer for AnalysisEngine<S, C>
where
    S: LocationStore + Send + Sync,
    C: Scorer + Send + Sync,
{
    fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport, AnalysisError> {
        let started_at = Instant::now();

        let weights = resolve(&request.config, &request.weights);
        let reference_features = extract_reference(&request.reference);

        let pool = self
            .store
            .fetch_candidates(request.config.filters())
            .map_err(|source| AnalysisError::FetchCandidates { source })?;

        // Stores may return a superset; constraints are re-applied here.
        let admitted: Vec<_> = pool
            .into_iter()
            .filter(|record| request.config.filters().admits(record))
            .collect();
        let total_candidates = admitted.len() as u64;

        let mut scored = Vec::new();
        for record in admitted {
            let features = extract_location(&record);
            let raw = self.scorer.score(&features, &reference_features, &weights);
            if !raw.is_finite() {
                log::warn!(
                    "scorer produced a non-finite score for location {id}; treating it as zero",
                    id = record.id
                );
            }
            let score = C::sanitise(raw);
            if score > MIN_SIMILARITY {
                scored.push(Candidate {
                    reason: reason(&reference_features, &features, &weights),
                    record,
                    features,
                    score,
                });
            }
        }

        scored.sort_unstable_by(|lhs, rhs| {
            rhs.score
                .partial_cmp(&lhs.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| lhs.record.id.cmp(&rhs.record.id))
        });
        scored.truncate(request.max_results);

        let top_factors = top_factors(&weights);
        let duration = started_at.elapsed();
        log::debug!(
            "analysis complete: {recommended} of {total_candidates} candidates recommended in {duration:?}",
            recommended = scored.len()
        );

        Ok(AnalysisReport {
            candidates: scored,
            weights,
            total_candidates,
            duration,
            top_factors,
        })
    }
}
