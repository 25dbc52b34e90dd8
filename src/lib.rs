//! Facade crate for the SiteSeer similarity engine.
//!
//! This crate re-exports the core domain vocabulary and the analysis
//! engine so consumers can depend on a single crate: build an
//! [`AnalysisEngine`] over a [`LocationStore`], hand it an
//! [`AnalysisRequest`], and receive a ranked [`AnalysisReport`].

#![forbid(unsafe_code)]

pub use siteseer_core::{
    AnalysisConfig, AnalysisError, AnalysisReport, AnalysisRequest, Analyzer, Candidate,
    ConfigError, Feature, FeatureVector, FilterConstraints, Impact, LocationRecord, LocationStore,
    LocationStoreError, Recommendation, ReferenceArea, Scorer, ScoringWeights, TopFactor,
    WEIGHT_SUM_TOLERANCE, WeightSpec, WeightVector,
};

pub use siteseer_analysis::{
    AnalysisEngine, Insight, InsightKind, MIN_SIMILARITY, RecommendationStats, WeightedSimilarity,
    insights,
};

#[cfg(feature = "test-support")]
pub use siteseer_core::test_support;
