//! Core domain types for the SiteSeer engine.
//!
//! These models define the shared vocabulary of the analysis pipeline
//! and the seams between its stages. Validation lives in constructors so
//! downstream components can trust the values they are handed.
#![forbid(unsafe_code)]

mod analyzer;
mod config;
mod feature;
mod location;
mod reference;
mod report;
mod scorer;
mod store;
mod weights;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use analyzer::{AnalysisError, AnalysisRequest, Analyzer};
pub use config::{
    AnalysisConfig, ConfigError, FilterConstraints, ScoringWeights, WEIGHT_SUM_TOLERANCE,
};
pub use feature::{Feature, FeatureVector, WeightVector};
pub use location::LocationRecord;
pub use reference::ReferenceArea;
pub use report::{AnalysisReport, Candidate, Impact, Recommendation, TopFactor};
pub use scorer::Scorer;
pub use store::{LocationStore, LocationStoreError};
pub use weights::WeightSpec;
