//! Score candidate areas against a reference area.
//!
//! The `Scorer` trait assigns a similarity score to a candidate's
//! [`FeatureVector`](crate::FeatureVector) given the reference area's
//! features and the resolved [`WeightVector`](crate::WeightVector).

use crate::{FeatureVector, WeightVector};

/// Calculate a similarity score for a candidate area.
///
/// Higher scores indicate a candidate whose features sit closer to the
/// reference area's. Implementations must be thread-safe (`Send` + `Sync`)
/// so scorers can run across threads.
/// The method is infallible; implementers must return `0.0` when no
/// information is available.
///
/// Implementations must:
/// - Produce finite (`f32::is_finite`) scores.
/// - Return non-negative values.
/// - Normalise results to the range `0.0..=1.0`.
///
/// Use [`Scorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use siteseer_core::{FeatureVector, Scorer, WeightVector};
///
/// struct UnitScorer;
///
/// impl Scorer for UnitScorer {
///     fn score(
///         &self,
///         _candidate: &FeatureVector,
///         _reference: &FeatureVector,
///         _weights: &WeightVector,
///     ) -> f32 {
///         1.0
///     }
/// }
///
/// let scorer = UnitScorer;
/// let empty = FeatureVector::new();
/// assert_eq!(scorer.score(&empty, &empty, &WeightVector::new()), 1.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `candidate` against `reference` under `weights`.
    fn score(
        &self,
        candidate: &FeatureVector,
        reference: &FeatureVector,
        weights: &WeightVector,
    ) -> f32;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    fn sanitise(score: f32) -> f32 {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, 1.0)
    }
}
