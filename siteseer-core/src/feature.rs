//! Features scored by the similarity engine.
//!
//! The enum offers compile-time safety for feature lookups. Its declaration
//! order is the canonical feature order: maps keyed by [`Feature`] iterate in
//! this order, which keeps reason strings and factor rankings stable between
//! runs.
//!
//! # Examples
//! ```
//! use siteseer_core::Feature;
//!
//! assert_eq!(Feature::Population.as_str(), "population");
//! assert_eq!(Feature::RentPrice.to_string(), "rent_price");
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A normalized attribute of a location that similarity scoring compares.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Resident population density of the area.
    Population,
    /// Concentration of registered businesses.
    BusinessDensity,
    /// Monthly rent level (lower is better).
    RentPrice,
    /// Count of competing businesses (fewer is better).
    Competition,
    /// Public transportation access.
    Transportation,
    /// Passing foot traffic; present on candidate records only.
    FloatingPopulation,
}

impl Feature {
    /// Return the feature as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use siteseer_core::Feature;
    ///
    /// assert_eq!(Feature::BusinessDensity.as_str(), "business_density");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Population => "population",
            Self::BusinessDensity => "business_density",
            Self::RentPrice => "rent_price",
            Self::Competition => "competition",
            Self::Transportation => "transportation",
            Self::FloatingPopulation => "floating_population",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "population" => Ok(Self::Population),
            "business_density" => Ok(Self::BusinessDensity),
            "rent_price" => Ok(Self::RentPrice),
            "competition" => Ok(Self::Competition),
            "transportation" => Ok(Self::Transportation),
            "floating_population" => Ok(Self::FloatingPopulation),
            _ => Err(format!("unknown feature '{s}'")),
        }
    }
}

/// Normalized feature values for one record, each in `0.0..=1.0`.
///
/// Vectors are ephemeral: they are extracted per analysis run and never
/// persisted. The reference and candidate sides may carry different key
/// sets; scoring only ever compares the intersection.
///
/// # Examples
/// ```
/// use siteseer_core::{Feature, FeatureVector};
///
/// let vector = FeatureVector::new()
///     .with_value(Feature::Population, 0.5)
///     .with_value(Feature::RentPrice, 0.9);
/// assert_eq!(vector.value(Feature::Population), Some(0.5));
/// assert!(vector.value(Feature::Competition).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector {
    values: BTreeMap<Feature, f32>,
}

impl FeatureVector {
    /// Construct an empty vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the value for a feature, if present.
    pub fn value(&self, feature: Feature) -> Option<f32> {
        self.values.get(&feature).copied()
    }

    /// Report whether the vector carries a value for `feature`.
    pub fn contains(&self, feature: Feature) -> bool {
        self.values.contains_key(&feature)
    }

    /// Insert or update a feature value.
    ///
    /// Finite values are clamped into `0.0..=1.0`; non-finite values are
    /// stored as `0.0`.
    pub fn set_value(&mut self, feature: Feature, value: f32) {
        let sanitised = if value.is_finite() {
            value.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.values.insert(feature, sanitised);
    }

    /// Add a feature value while returning `self` for chaining.
    pub fn with_value(mut self, feature: Feature, value: f32) -> Self {
        self.set_value(feature, value);
        self
    }

    /// Iterate entries in canonical feature order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, f32)> + '_ {
        self.values.iter().map(|(feature, value)| (*feature, *value))
    }

    /// Return the number of features present.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Report whether the vector is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Per-feature scoring weights.
///
/// A weight vector built from an
/// [`AnalysisConfig`](crate::AnalysisConfig) always sums to 1.0 within
/// tolerance; caller-supplied override vectors carry no such guarantee.
///
/// # Examples
/// ```
/// use siteseer_core::{Feature, WeightVector};
///
/// let weights = WeightVector::new().with_weight(Feature::Population, 0.25);
/// assert_eq!(weights.weight(Feature::Population), Some(0.25));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightVector {
    weights: BTreeMap<Feature, f32>,
}

impl WeightVector {
    /// Construct an empty weight vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the weight for a feature, if present.
    pub fn weight(&self, feature: Feature) -> Option<f32> {
        self.weights.get(&feature).copied()
    }

    /// Insert or update a feature weight.
    ///
    /// Negative and non-finite weights are stored as `0.0`.
    pub fn set_weight(&mut self, feature: Feature, weight: f32) {
        let sanitised = if weight.is_finite() { weight.max(0.0) } else { 0.0 };
        self.weights.insert(feature, sanitised);
    }

    /// Add a feature weight while returning `self` for chaining.
    pub fn with_weight(mut self, feature: Feature, weight: f32) -> Self {
        self.set_weight(feature, weight);
        self
    }

    /// Iterate entries in canonical feature order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, f32)> + '_ {
        self.weights
            .iter()
            .map(|(feature, weight)| (*feature, *weight))
    }

    /// Sum all weights.
    pub fn total(&self) -> f32 {
        self.weights.values().sum()
    }

    /// Return the number of weighted features.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Report whether no weights are present.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
