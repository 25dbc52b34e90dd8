//! Reason strings and factor rankings for recommendations.
//!
//! Reasons name the strongly matching, strongly weighted features of a
//! candidate. Factor rankings report which weights dominated a run.

use siteseer_core::{Feature, FeatureVector, Impact, TopFactor, WeightVector};

const REASON_SIMILARITY_FLOOR: f32 = 0.8;
const REASON_WEIGHT_FLOOR: f32 = 0.15;
const TOP_FACTOR_LIMIT: usize = 3;
const HIGH_IMPACT_FLOOR: f32 = 0.25;
const MEDIUM_IMPACT_FLOOR: f32 = 0.15;

/// Display name of a feature as used in reason strings.
#[must_use]
pub const fn display_name(feature: Feature) -> &'static str {
    match feature {
        Feature::Population => "population density",
        Feature::BusinessDensity => "business density",
        Feature::RentPrice => "rent price",
        Feature::Competition => "competition intensity",
        Feature::Transportation => "transportation access",
        Feature::FloatingPopulation => "floating population",
    }
}

/// Explain why a candidate scored the way it did.
///
/// A feature earns a clause when it is present on both sides, its
/// similarity exceeds 0.8 and its weight exceeds 0.15. Clauses follow
/// the canonical feature order and join with a comma. When no feature
/// qualifies the reason falls back to a generic statement, so every
/// recommendation carries an explanation.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "per-feature similarity is a subtraction on the unit interval"
)]
pub fn reason(
    reference: &FeatureVector,
    candidate: &FeatureVector,
    weights: &WeightVector,
) -> String {
    let mut clauses = Vec::new();
    for (feature, weight) in weights.iter() {
        let (Some(reference_value), Some(candidate_value)) =
            (reference.value(feature), candidate.value(feature))
        else {
            continue;
        };
        let similarity = 1.0 - (reference_value - candidate_value).abs();
        if similarity > REASON_SIMILARITY_FLOOR && weight > REASON_WEIGHT_FLOOR {
            clauses.push(format!("{} similarity high", display_name(feature)));
        }
    }
    if clauses.is_empty() {
        return "overall area characteristics similar".to_string();
    }
    clauses.join(", ")
}

/// Rank the run's weights and report the strongest three.
///
/// Equal weights order by the canonical feature order, keeping the
/// ranking stable between runs.
#[must_use]
pub fn top_factors(weights: &WeightVector) -> Vec<TopFactor> {
    let mut entries: Vec<(Feature, f32)> = weights.iter().collect();
    entries.sort_unstable_by(|(lhs_feature, lhs_weight), (rhs_feature, rhs_weight)| {
        rhs_weight
            .partial_cmp(lhs_weight)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| lhs_feature.cmp(rhs_feature))
    });
    entries.truncate(TOP_FACTOR_LIMIT);
    entries
        .into_iter()
        .map(|(feature, weight)| TopFactor {
            feature,
            weight,
            impact: impact_band(weight),
        })
        .collect()
}

const fn impact_band(weight: f32) -> Impact {
    if weight > HIGH_IMPACT_FLOOR {
        Impact::High
    } else if weight > MEDIUM_IMPACT_FLOOR {
        Impact::Medium
    } else {
        Impact::Low
    }
}
