//! Analysis results: scored candidates and the assembled report.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Feature, FeatureVector, LocationRecord, WeightVector};

/// A candidate area that passed filtering and cleared the score threshold.
///
/// # Examples
/// ```rust
/// use siteseer_core::{Candidate, FeatureVector, LocationRecord};
///
/// let candidate = Candidate {
///     record: LocationRecord::new(7, "Harbour".to_string(), "9 Pier Rd".to_string()),
///     features: FeatureVector::new(),
///     score: 0.82,
///     reason: "transportation access similarity high".to_string(),
/// };
/// assert_eq!(candidate.record.id, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// The underlying location record.
    pub record: LocationRecord,
    /// Normalised features extracted from the record.
    pub features: FeatureVector,
    /// Weighted similarity to the reference area, in `0.0..=1.0`.
    pub score: f32,
    /// Human-readable explanation of the score.
    pub reason: String,
}

/// Qualitative influence a factor had on the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    /// Weight above 0.25.
    High,
    /// Weight above 0.15, up to 0.25.
    Medium,
    /// Weight of 0.15 or below.
    Low,
}

/// One of the highest-weighted factors, reported alongside the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TopFactor {
    /// The factor in question.
    pub feature: Feature,
    /// The resolved weight the run used for it.
    pub weight: f32,
    /// Qualitative band the weight falls into.
    pub impact: Impact,
}

/// A ranked entry derived from a report's candidate list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Identifier of the recommended location.
    pub location_id: u64,
    /// 1-based position in the ranking.
    pub rank: u32,
    /// Similarity score the candidate achieved.
    pub score: f32,
    /// Explanation carried over from the candidate.
    pub reason: String,
}

/// The assembled outcome of one analysis run.
///
/// Candidates are ordered by descending score; ties break on ascending
/// record id so repeated runs over the same pool rank identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Recommended candidates, best first.
    pub candidates: Vec<Candidate>,
    /// The weights the run resolved and applied.
    pub weights: WeightVector,
    /// Number of candidates scored, before thresholding and truncation.
    pub total_candidates: u64,
    /// Wall-clock time the run took.
    pub duration: Duration,
    /// Highest-weighted factors, at most three.
    pub top_factors: Vec<TopFactor>,
}

impl AnalysisReport {
    /// Flatten the candidate list into ranked recommendations.
    ///
    /// # Examples
    /// ```rust
    /// use std::time::Duration;
    /// use siteseer_core::{AnalysisReport, Candidate, FeatureVector, LocationRecord, WeightVector};
    ///
    /// let report = AnalysisReport {
    ///     candidates: vec![Candidate {
    ///         record: LocationRecord::new(3, "Old Town".to_string(), "1 Square".to_string()),
    ///         features: FeatureVector::new(),
    ///         score: 0.9,
    ///         reason: "population density similarity high".to_string(),
    ///     }],
    ///     weights: WeightVector::new(),
    ///     total_candidates: 1,
    ///     duration: Duration::from_millis(4),
    ///     top_factors: Vec::new(),
    /// };
    /// let recommendations = report.recommendations();
    /// assert_eq!(recommendations[0].rank, 1);
    /// assert_eq!(recommendations[0].location_id, 3);
    /// ```
    pub fn recommendations(&self) -> Vec<Recommendation> {
        self.candidates
            .iter()
            .zip(1_u32..)
            .map(|(candidate, rank)| Recommendation {
                location_id: candidate.record.id,
                rank,
                score: candidate.score,
                reason: candidate.reason.clone(),
            })
            .collect()
    }
}
