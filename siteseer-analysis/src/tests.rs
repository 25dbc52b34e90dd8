//! Unit coverage for extraction, resolution, scoring and summaries.
#![forbid(unsafe_code)]

use rstest::rstest;
use siteseer_core::{
    AnalysisConfig, AnalysisReport, Candidate, Feature, FeatureVector, Impact, LocationRecord,
    Recommendation, ReferenceArea, Scorer, WeightSpec, WeightVector,
};
use std::time::Duration;

use crate::{
    InsightKind, MIN_SIMILARITY, RecommendationStats, WeightedSimilarity, extract_location,
    extract_reference, insights, normalise, normalise_inverse, reason, resolve, top_factors,
};

#[expect(
    clippy::float_arithmetic,
    reason = "tests compare floats within a tolerance"
)]
fn close(lhs: f32, rhs: f32) -> bool {
    (lhs - rhs).abs() < 1e-6
}

fn reference() -> ReferenceArea {
    let mut area = ReferenceArea::new(9, "Pilot district".to_string(), "21 Main Rd".to_string());
    area.population_density = Some(25_000);
    area.business_density = Some(40.0);
    area.rent_price = Some(500_000.0);
    area.competitor_count = Some(5);
    area.transportation_score = Some(80);
    area
}

fn record(id: u64) -> LocationRecord {
    let mut record = LocationRecord::new(id, format!("Area {id}"), format!("{id} Main St"));
    record.population_total = Some(25_000);
    record.population_density = Some(25_000);
    record.business_density = Some(40.0);
    record.rent_price = Some(500_000.0);
    record.competitor_count = Some(5);
    record.transportation_score = Some(80);
    record.floating_population = Some(50_000);
    record
}

#[rstest]
#[case(25_000.0, 0.0, 50_000.0, 0.5)]
#[case(60_000.0, 0.0, 50_000.0, 1.0)]
#[case(-5.0, 0.0, 100.0, 0.0)]
#[case(3.0, 7.0, 7.0, 0.5)]
fn normalise_maps_onto_unit_interval(
    #[case] value: f32,
    #[case] min: f32,
    #[case] max: f32,
    #[case] expected: f32,
) {
    assert!(close(normalise(value, min, max), expected));
}

#[rstest]
#[case(500_000.0, 0.9)]
#[case(0.0, 1.0)]
#[case(5_000_000.0, 0.0)]
fn normalise_inverse_rewards_low_values(#[case] value: f32, #[case] expected: f32) {
    assert!(close(normalise_inverse(value, 0.0, 5_000_000.0), expected));
}

#[rstest]
fn reference_extraction_normalises_each_attribute() {
    let features = extract_reference(&reference());
    assert!(close(features.value(Feature::Population).expect("population"), 0.5));
    assert!(close(
        features.value(Feature::BusinessDensity).expect("business density"),
        0.4
    ));
    assert!(close(features.value(Feature::RentPrice).expect("rent"), 0.9));
    assert!(close(features.value(Feature::Competition).expect("competition"), 0.75));
    assert!(close(
        features.value(Feature::Transportation).expect("transportation"),
        0.8
    ));
}

#[rstest]
fn reference_extraction_carries_no_foot_traffic() {
    let features = extract_reference(&reference());
    assert!(features.value(Feature::FloatingPopulation).is_none());
    assert_eq!(features.len(), 5);
}

#[rstest]
fn location_extraction_includes_foot_traffic() {
    let features = extract_location(&record(1));
    assert!(close(
        features.value(Feature::FloatingPopulation).expect("foot traffic"),
        0.5
    ));
    assert_eq!(features.len(), 6);
}

#[rstest]
fn absent_attributes_extract_as_zero_before_normalisation() {
    let bare = ReferenceArea::new(1, "Bare".to_string(), "1 Way".to_string());
    let features = extract_reference(&bare);
    // Direct features floor at zero; inverted ones peak at one.
    assert!(close(features.value(Feature::Population).expect("population"), 0.0));
    assert!(close(features.value(Feature::RentPrice).expect("rent"), 1.0));
    assert!(close(features.value(Feature::Competition).expect("competition"), 1.0));
}

#[rstest]
fn configured_spec_expands_the_validated_weights() {
    let config = AnalysisConfig::default();
    let weights = resolve(&config, &WeightSpec::Configured);
    assert!(close(weights.weight(Feature::Population).expect("population"), 0.25));
    assert!(close(weights.total(), 1.0));
}

#[rstest]
fn override_spec_passes_through_without_validation() {
    let config = AnalysisConfig::default();
    let supplied = WeightVector::new()
        .with_weight(Feature::Population, 1.5)
        .with_weight(Feature::RentPrice, 0.5);
    let weights = resolve(&config, &WeightSpec::Override(supplied.clone()));
    // A total of 2.0 would never validate as a configuration.
    assert_eq!(weights, supplied);
}

#[rstest]
fn identical_areas_score_one() {
    let reference_features = extract_reference(&reference());
    let candidate_features = extract_location(&record(1));
    let weights = AnalysisConfig::default().weights().to_vector();
    let score = WeightedSimilarity.score(&candidate_features, &reference_features, &weights);
    assert!(close(score, 1.0));
}

#[rstest]
fn unweighted_features_contribute_nothing() {
    let reference_features = FeatureVector::new()
        .with_value(Feature::Population, 1.0)
        .with_value(Feature::RentPrice, 1.0);
    let candidate_features = FeatureVector::new()
        .with_value(Feature::Population, 1.0)
        .with_value(Feature::RentPrice, 0.0);
    let weights = WeightVector::new().with_weight(Feature::Population, 1.0);
    let score = WeightedSimilarity.score(&candidate_features, &reference_features, &weights);
    // Rent differs wildly but carries no weight.
    assert!(close(score, 1.0));
}

#[rstest]
fn disjoint_vectors_score_zero() {
    let reference_features = FeatureVector::new().with_value(Feature::Population, 1.0);
    let candidate_features = FeatureVector::new().with_value(Feature::RentPrice, 1.0);
    let weights = AnalysisConfig::default().weights().to_vector();
    let score = WeightedSimilarity.score(&candidate_features, &reference_features, &weights);
    assert!(close(score, 0.0));
}

#[rstest]
fn scoring_is_symmetric_under_vector_swap() {
    let weights = AnalysisConfig::default().weights().to_vector();

    // Asymmetric key sets: only the shared population feature can count,
    // whichever side is treated as the reference.
    let partial = FeatureVector::new().with_value(Feature::Population, 0.2);
    let fuller = FeatureVector::new()
        .with_value(Feature::Population, 0.9)
        .with_value(Feature::RentPrice, 0.4)
        .with_value(Feature::Transportation, 0.6);
    let forward = WeightedSimilarity.score(&fuller, &partial, &weights);
    let backward = WeightedSimilarity.score(&partial, &fuller, &weights);
    assert!(close(forward, backward));
    assert!(close(forward, 0.075));

    // Extracted vectors: the reference carries five keys, the candidate six.
    let mut area = record(2);
    area.rent_price = Some(2_000_000.0);
    area.transportation_score = Some(30);
    let reference_features = extract_reference(&reference());
    let candidate_features = extract_location(&area);
    let outward = WeightedSimilarity.score(&candidate_features, &reference_features, &weights);
    let inward = WeightedSimilarity.score(&reference_features, &candidate_features, &weights);
    assert!(close(outward, inward));
}

#[rstest]
fn sanitise_zeroes_non_finite_scores() {
    assert!(close(<WeightedSimilarity as Scorer>::sanitise(f32::NAN), 0.0));
    assert!(close(
        <WeightedSimilarity as Scorer>::sanitise(f32::INFINITY),
        0.0
    ));
    assert!(close(<WeightedSimilarity as Scorer>::sanitise(1.7), 1.0));
}

#[rstest]
fn threshold_sits_at_the_midpoint() {
    assert!(close(MIN_SIMILARITY, 0.5));
}

#[rstest]
fn reason_names_matching_heavyweight_features() {
    let reference_features = extract_reference(&reference());
    let candidate_features = extract_location(&record(1));
    let weights = AnalysisConfig::default().weights().to_vector();
    // Competition and transportation match too, but their 0.15 weights
    // sit on the floor rather than above it.
    assert_eq!(
        reason(&reference_features, &candidate_features, &weights),
        "population density similarity high, business density similarity high, \
         rent price similarity high"
    );
}

#[rstest]
fn reason_falls_back_when_nothing_qualifies() {
    let reference_features = FeatureVector::new().with_value(Feature::Population, 1.0);
    let candidate_features = FeatureVector::new().with_value(Feature::Population, 0.0);
    let weights = AnalysisConfig::default().weights().to_vector();
    assert_eq!(
        reason(&reference_features, &candidate_features, &weights),
        "overall area characteristics similar"
    );
}

#[rstest]
fn top_factors_rank_three_with_canonical_tie_break() {
    let weights = AnalysisConfig::default().weights().to_vector();
    let factors = top_factors(&weights);
    let ranked: Vec<_> = factors.iter().map(|f| f.feature).collect();
    assert_eq!(
        ranked,
        vec![Feature::Population, Feature::BusinessDensity, Feature::RentPrice]
    );
    // The stock 0.25 weights sit on the high-impact boundary, not above it.
    assert!(factors.iter().all(|f| f.impact == Impact::Medium));
}

#[rstest]
fn top_factors_band_by_weight() {
    let weights = WeightVector::new()
        .with_weight(Feature::Population, 0.4)
        .with_weight(Feature::BusinessDensity, 0.3)
        .with_weight(Feature::RentPrice, 0.15)
        .with_weight(Feature::Competition, 0.1)
        .with_weight(Feature::Transportation, 0.05);
    let factors = top_factors(&weights);
    let impacts: Vec<_> = factors.iter().map(|f| f.impact).collect();
    assert_eq!(impacts, vec![Impact::High, Impact::High, Impact::Low]);
}

fn report_with_scores(scores: &[f32]) -> AnalysisReport {
    let candidates = scores
        .iter()
        .zip(1_u64..)
        .map(|(&score, id)| {
            let mut record = record(id);
            record.region = Some(if id == 1 { "Mapo".to_string() } else { "Jongno".to_string() });
            Candidate {
                record,
                features: FeatureVector::new(),
                score,
                reason: String::new(),
            }
        })
        .collect();
    AnalysisReport {
        candidates,
        weights: AnalysisConfig::default().weights().to_vector(),
        total_candidates: scores.len() as u64,
        duration: Duration::from_millis(3),
        top_factors: Vec::new(),
    }
}

#[rstest]
fn strong_results_yield_a_positive_insight() {
    let report = report_with_scores(&[0.9, 0.85, 0.95]);
    let insights = insights(&report);
    assert!(insights.iter().any(|i| i.kind == InsightKind::Positive));
    assert!(!insights.iter().any(|i| i.kind == InsightKind::Warning));
}

#[rstest]
fn weak_results_yield_a_warning_insight() {
    let report = report_with_scores(&[0.55, 0.52]);
    let insights = insights(&report);
    assert!(insights.iter().any(|i| i.kind == InsightKind::Warning));
}

#[rstest]
fn middling_results_yield_no_mean_insight() {
    let report = report_with_scores(&[0.7, 0.7]);
    let insights = insights(&report);
    assert!(
        insights
            .iter()
            .all(|i| i.kind != InsightKind::Positive && i.kind != InsightKind::Warning)
    );
}

#[rstest]
fn modal_region_reported_with_its_count() {
    let report = report_with_scores(&[0.9, 0.9, 0.9]);
    let insights = insights(&report);
    let info = insights
        .iter()
        .find(|i| i.kind == InsightKind::Info)
        .expect("regional insight");
    assert_eq!(info.message, "2 of 3 recommended areas are in Jongno");
}

#[rstest]
fn regionless_candidates_yield_no_regional_insight() {
    let mut report = report_with_scores(&[0.9]);
    for candidate in &mut report.candidates {
        candidate.record.region = None;
    }
    assert!(
        !insights(&report)
            .iter()
            .any(|i| i.kind == InsightKind::Info)
    );
}

#[rstest]
fn empty_report_yields_no_insights() {
    let report = report_with_scores(&[]);
    assert!(insights(&report).is_empty());
}

fn recommendation(score: f32) -> Recommendation {
    Recommendation {
        location_id: 1,
        rank: 1,
        score,
        reason: String::new(),
    }
}

#[rstest]
#[case(0.8, 1, 0, 0)]
#[case(0.79, 0, 1, 0)]
#[case(0.6, 0, 1, 0)]
#[case(0.59, 0, 0, 1)]
fn stats_bucket_boundaries(
    #[case] score: f32,
    #[case] high: u64,
    #[case] medium: u64,
    #[case] low: u64,
) {
    let stats = RecommendationStats::from_recommendations(&[recommendation(score)]);
    assert_eq!(
        (stats.high_similarity, stats.medium_similarity, stats.low_similarity),
        (high, medium, low)
    );
}

#[rstest]
fn stats_over_empty_input_are_zero() {
    let stats = RecommendationStats::from_recommendations(&[]);
    assert_eq!(stats.total_count, 0);
    assert!(close(stats.mean_score, 0.0));
}

#[rstest]
fn stats_mean_covers_every_bucket() {
    let stats = RecommendationStats::from_recommendations(&[
        recommendation(0.9),
        recommendation(0.7),
        recommendation(0.5),
    ]);
    assert_eq!(stats.total_count, 3);
    assert!(close(stats.mean_score, 0.7));
    assert_eq!(
        (stats.high_similarity, stats.medium_similarity, stats.low_similarity),
        (1, 1, 1)
    );
}
