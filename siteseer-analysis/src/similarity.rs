//! Weighted per-feature similarity scoring.

use siteseer_core::{FeatureVector, Scorer, WeightVector};

/// Scores at or below this threshold never enter the ranking.
pub const MIN_SIMILARITY: f32 = 0.5;

/// Weighted absolute-difference similarity over shared features.
///
/// Each feature present in both vectors contributes
/// `(1 - |reference - candidate|) * weight` to the score; features
/// missing from either side or carrying no weight contribute nothing.
/// The total clamps to `0.0..=1.0`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WeightedSimilarity;

impl Scorer for WeightedSimilarity {
    #[expect(
        clippy::float_arithmetic,
        reason = "similarity accumulates weighted unit-interval differences"
    )]
    fn score(
        &self,
        candidate: &FeatureVector,
        reference: &FeatureVector,
        weights: &WeightVector,
    ) -> f32 {
        let mut score = 0.0_f32;
        for (feature, reference_value) in reference.iter() {
            let Some(candidate_value) = candidate.value(feature) else {
                continue;
            };
            let Some(weight) = weights.weight(feature) else {
                continue;
            };
            let distance = (reference_value - candidate_value).abs();
            score += (1.0 - distance) * weight;
        }
        Self::sanitise(score)
    }
}
