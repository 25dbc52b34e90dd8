//! Analysis configurations: named weight sets and hard filter constraints.
//!
//! Weight validation happens here, when a configuration is created or
//! updated, and nowhere else. Scoring trusts any `AnalysisConfig` it is
//! handed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Feature, LocationRecord, WeightVector};

/// Permitted deviation of a configuration's weight total from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f32 = 0.001;

/// The five per-feature weights carried by a configuration.
///
/// Defaults mirror the stock analysis profile: population and business
/// density lead, rent follows, competition and transportation share the
/// remainder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Weight of the population density feature.
    pub population: f32,
    /// Weight of the business density feature.
    pub business_density: f32,
    /// Weight of the rent price feature.
    pub rent_price: f32,
    /// Weight of the competition feature.
    pub competition: f32,
    /// Weight of the transportation feature.
    pub transportation: f32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            population: 0.25_f32,
            business_density: 0.25_f32,
            rent_price: 0.20_f32,
            competition: 0.15_f32,
            transportation: 0.15_f32,
        }
    }
}

impl ScoringWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ConfigError::NegativeWeight`] when any weight is negative
    /// or not finite, and [`ConfigError::WeightSum`] when the total strays
    /// more than [`WEIGHT_SUM_TOLERANCE`] from 1.0.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if let Some((feature, weight)) = self.first_invalid_entry() {
            return Err(ConfigError::NegativeWeight { feature, weight });
        }
        let total = self.total();
        if (total - 1.0_f32).abs() <= WEIGHT_SUM_TOLERANCE {
            Ok(self)
        } else {
            Err(ConfigError::WeightSum { total })
        }
    }

    /// Sum all five weights.
    pub const fn total(self) -> f32 {
        self.population
            + self.business_density
            + self.rent_price
            + self.competition
            + self.transportation
    }

    /// Expand into a [`WeightVector`] keyed by the canonical feature names.
    pub fn to_vector(self) -> WeightVector {
        WeightVector::new()
            .with_weight(Feature::Population, self.population)
            .with_weight(Feature::BusinessDensity, self.business_density)
            .with_weight(Feature::RentPrice, self.rent_price)
            .with_weight(Feature::Competition, self.competition)
            .with_weight(Feature::Transportation, self.transportation)
    }

    fn first_invalid_entry(self) -> Option<(Feature, f32)> {
        [
            (Feature::Population, self.population),
            (Feature::BusinessDensity, self.business_density),
            (Feature::RentPrice, self.rent_price),
            (Feature::Competition, self.competition),
            (Feature::Transportation, self.transportation),
        ]
        .into_iter()
        .find(|(_, weight)| !weight.is_finite() || *weight < 0.0_f32)
    }
}

/// Hard constraints a candidate must satisfy before it is scored.
///
/// Each constraint is optional; an unset constraint excludes nothing. A
/// set constraint compared against an absent record attribute excludes
/// the record, matching the comparison semantics of the collection
/// queries these constraints were lifted from.
///
/// # Examples
/// ```
/// use siteseer_core::{FilterConstraints, LocationRecord};
///
/// let filters = FilterConstraints {
///     min_population: Some(10_000),
///     ..FilterConstraints::default()
/// };
/// let mut record = LocationRecord::new(1, "Quiet".to_string(), "3 Lane".to_string());
/// assert!(!filters.admits(&record));
/// record.population_total = Some(12_000);
/// assert!(filters.admits(&record));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterConstraints {
    /// Minimum total resident population.
    pub min_population: Option<u32>,
    /// Maximum monthly rent.
    pub max_rent_price: Option<f32>,
    /// Maximum number of competing businesses.
    pub max_competitor_count: Option<u32>,
}

impl FilterConstraints {
    /// Report whether `record` satisfies every set constraint.
    pub fn admits(&self, record: &LocationRecord) -> bool {
        let population_ok = self
            .min_population
            .is_none_or(|min| record.population_total.is_some_and(|p| p >= min));
        let rent_ok = self
            .max_rent_price
            .is_none_or(|max| record.rent_price.is_some_and(|rent| rent <= max));
        let competitors_ok = self
            .max_competitor_count
            .is_none_or(|max| record.competitor_count.is_some_and(|count| count <= max));
        population_ok && rent_ok && competitors_ok
    }
}

/// A named analysis profile: scoring weights plus filter constraints.
///
/// Weights can only enter through [`AnalysisConfig::new`] or
/// [`AnalysisConfig::set_weights`], both of which validate, so every value
/// of this type carries weights that sum to 1.0 within
/// [`WEIGHT_SUM_TOLERANCE`]. Deserialisation routes through the same
/// validation.
///
/// # Examples
/// ```
/// use siteseer_core::{AnalysisConfig, FilterConstraints, ScoringWeights};
///
/// let config = AnalysisConfig::new(
///     "default".to_string(),
///     ScoringWeights::default(),
///     FilterConstraints::default(),
/// )?;
/// assert_eq!(config.name(), "default");
/// # Ok::<(), siteseer_core::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAnalysisConfig")]
pub struct AnalysisConfig {
    name: String,
    description: Option<String>,
    weights: ScoringWeights,
    filters: FilterConstraints,
}

impl AnalysisConfig {
    /// Construct a configuration, validating its weights.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the weights fail validation.
    pub fn new(
        name: String,
        weights: ScoringWeights,
        filters: FilterConstraints,
    ) -> Result<Self, ConfigError> {
        let weights = weights.validate()?;
        Ok(Self {
            name,
            description: None,
            weights,
            filters,
        })
    }

    /// Attach a description while returning `self` for chaining.
    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    /// Replace the weights, validating the replacement.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the new weights fail validation; the
    /// existing weights are kept in that case.
    pub fn set_weights(&mut self, weights: ScoringWeights) -> Result<(), ConfigError> {
        self.weights = weights.validate()?;
        Ok(())
    }

    /// Replace the filter constraints.
    pub fn set_filters(&mut self, filters: FilterConstraints) {
        self.filters = filters;
    }

    /// Return the configuration name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the configuration description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Return the validated scoring weights.
    pub const fn weights(&self) -> ScoringWeights {
        self.weights
    }

    /// Return the filter constraints.
    pub const fn filters(&self) -> &FilterConstraints {
        &self.filters
    }
}

impl Default for AnalysisConfig {
    /// The stock profile: canonical weights, at least 10,000 residents,
    /// rent at most 1,000,000 and at most 10 competitors.
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            description: None,
            weights: ScoringWeights::default(),
            filters: FilterConstraints {
                min_population: Some(10_000),
                max_rent_price: Some(1_000_000.0),
                max_competitor_count: Some(10),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawAnalysisConfig {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    weights: ScoringWeights,
    #[serde(default)]
    filters: FilterConstraints,
}

impl TryFrom<RawAnalysisConfig> for AnalysisConfig {
    type Error = ConfigError;

    fn try_from(raw: RawAnalysisConfig) -> Result<Self, Self::Error> {
        let mut config = Self::new(raw.name, raw.weights, raw.filters)?;
        if let Some(description) = raw.description {
            config = config.with_description(description);
        }
        Ok(config)
    }
}

/// Errors raised while creating or updating an [`AnalysisConfig`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The weight total strayed outside the accepted tolerance.
    #[error("scoring weights must sum to 1.0 (within 0.001), got {total}")]
    WeightSum {
        /// The offending total.
        total: f32,
    },
    /// A single weight was negative or not finite.
    #[error("weight for {feature} must be a non-negative finite number, got {weight}")]
    NegativeWeight {
        /// The feature whose weight is invalid.
        feature: Feature,
        /// The offending weight.
        weight: f32,
    },
}
