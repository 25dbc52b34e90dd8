//! Qualitative insights and distribution statistics for finished runs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use siteseer_core::{AnalysisReport, Recommendation};

const HIGH_SIMILARITY_FLOOR: f32 = 0.8;
const MEDIUM_SIMILARITY_FLOOR: f32 = 0.6;

/// Category of an [`Insight`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// The run found strong matches.
    Positive,
    /// The run's matches are weak and the inputs deserve a second look.
    Warning,
    /// Neutral observation about the result set.
    Info,
}

/// A qualitative observation derived from a finished analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    /// Category of the observation.
    pub kind: InsightKind,
    /// Human-readable message.
    pub message: String,
}

/// Derive qualitative insights from a report.
///
/// An empty candidate list yields no insights. Otherwise the mean score
/// produces a positive note above 0.8 or a warning below 0.6, and the
/// most common region among the candidates produces an informational
/// note. Region ties resolve to the lexicographically first name;
/// candidates without a recorded region stay out of the distribution.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "mean similarity is computed over at most a few thousand unit-interval scores"
)]
pub fn insights(report: &AnalysisReport) -> Vec<Insight> {
    if report.candidates.is_empty() {
        return Vec::new();
    }

    let mut insights = Vec::new();

    let total: f32 = report.candidates.iter().map(|c| c.score).sum();
    let mean = total / report.candidates.len() as f32;
    if mean > HIGH_SIMILARITY_FLOOR {
        insights.push(Insight {
            kind: InsightKind::Positive,
            message: format!(
                "candidate areas closely match the reference profile (mean similarity {mean:.2})"
            ),
        });
    } else if mean < MEDIUM_SIMILARITY_FLOOR {
        insights.push(Insight {
            kind: InsightKind::Warning,
            message: format!(
                "overall similarity is low (mean {mean:.2}); consider relaxing filter constraints or adjusting weights"
            ),
        });
    }

    if let Some((region, count)) = modal_region(report) {
        insights.push(Insight {
            kind: InsightKind::Info,
            message: format!(
                "{count} of {total} recommended areas are in {region}",
                total = report.candidates.len()
            ),
        });
    }

    insights
}

/// The most common region among a report's candidates.
fn modal_region(report: &AnalysisReport) -> Option<(String, usize)> {
    let mut distribution: BTreeMap<&str, usize> = BTreeMap::new();
    for candidate in &report.candidates {
        if let Some(region) = candidate.record.region.as_deref() {
            *distribution.entry(region).or_insert(0) += 1;
        }
    }
    let mut modal: Option<(&str, usize)> = None;
    for (region, count) in distribution {
        if modal.is_none_or(|(_, best)| count > best) {
            modal = Some((region, count));
        }
    }
    modal.map(|(region, count)| (region.to_string(), count))
}

/// Distribution summary over a set of recommendations.
///
/// # Examples
/// ```rust
/// use siteseer_analysis::RecommendationStats;
/// use siteseer_core::Recommendation;
///
/// let recommendations = vec![Recommendation {
///     location_id: 1,
///     rank: 1,
///     score: 0.9,
///     reason: "population density similarity high".to_string(),
/// }];
/// let stats = RecommendationStats::from_recommendations(&recommendations);
/// assert_eq!(stats.high_similarity, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationStats {
    /// Number of recommendations summarised.
    pub total_count: u64,
    /// Mean similarity score, 0.0 when empty.
    pub mean_score: f32,
    /// Recommendations scoring at least 0.8.
    pub high_similarity: u64,
    /// Recommendations scoring in `0.6..0.8`.
    pub medium_similarity: u64,
    /// Recommendations scoring below 0.6.
    pub low_similarity: u64,
}

impl RecommendationStats {
    /// Summarise a slice of recommendations.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "the mean is computed over at most a few thousand unit-interval scores"
    )]
    pub fn from_recommendations(recommendations: &[Recommendation]) -> Self {
        let mut high = 0_u64;
        let mut medium = 0_u64;
        let mut low = 0_u64;
        let mut total = 0.0_f32;
        for recommendation in recommendations {
            total += recommendation.score;
            if recommendation.score >= HIGH_SIMILARITY_FLOOR {
                high += 1;
            } else if recommendation.score >= MEDIUM_SIMILARITY_FLOOR {
                medium += 1;
            } else {
                low += 1;
            }
        }
        let mean_score = if recommendations.is_empty() {
            0.0
        } else {
            total / recommendations.len() as f32
        };
        Self {
            total_count: recommendations.len() as u64,
            mean_score,
            high_similarity: high,
            medium_similarity: medium,
            low_similarity: low,
        }
    }
}
