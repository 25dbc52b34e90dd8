//! Similarity analysis engine for candidate site selection.
//!
//! The crate provides the moving parts of an analysis run:
//! - **Feature extraction** normalises the raw attributes of reference
//!   and candidate areas onto the unit interval with fixed city-scale
//!   ranges.
//! - **Scoring** implements the [`Scorer`](siteseer_core::Scorer) trait
//!   as a weighted absolute-difference similarity over shared features.
//! - **The engine** implements [`Analyzer`](siteseer_core::Analyzer):
//!   it resolves weights, filters the candidate pool, scores and ranks
//!   what remains, and assembles the report with reasons and top
//!   factors.
//! - **Insights and statistics** summarise a finished report for
//!   reviewers.
//!
//! # Examples
//!
//! ```rust
//! use siteseer_analysis::AnalysisEngine;
//! use siteseer_core::{
//!     AnalysisConfig, AnalysisRequest, Analyzer, ReferenceArea, WeightSpec,
//!     test_support::MemoryStore,
//! };
//!
//! let engine = AnalysisEngine::with_default_scorer(MemoryStore::default());
//! let request = AnalysisRequest {
//!     reference: ReferenceArea::new(1, "Pilot".to_string(), "1 Way".to_string()),
//!     config: AnalysisConfig::default(),
//!     weights: WeightSpec::Configured,
//!     max_results: 10,
//! };
//! let report = engine.analyze(&request)?;
//! assert!(report.candidates.is_empty());
//! # Ok::<(), siteseer_core::AnalysisError>(())
//! ```

#![forbid(unsafe_code)]

mod engine;
mod extract;
mod insight;
mod reason;
mod resolver;
mod similarity;

pub use engine::AnalysisEngine;
pub use extract::{extract_location, extract_reference, normalise, normalise_inverse};
pub use insight::{Insight, InsightKind, RecommendationStats, insights};
pub use reason::{display_name, reason, top_factors};
pub use resolver::resolve;
pub use similarity::{MIN_SIMILARITY, WeightedSimilarity};

#[cfg(test)]
mod tests;
