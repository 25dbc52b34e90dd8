//! Test-only, in-memory `LocationStore` implementation used by unit and
//! behaviour tests.

use crate::{
    FeatureVector, FilterConstraints, LocationRecord, LocationStore, LocationStoreError, Scorer,
    WeightVector,
};

/// In-memory `LocationStore` implementation used in tests.
///
/// The store returns every record regardless of the supplied filters;
/// callers exercise constraint handling themselves. Intended only for
/// small datasets.
#[derive(Default, Debug)]
pub struct MemoryStore {
    records: Vec<LocationRecord>,
}

impl MemoryStore {
    /// Create a store containing a single location record.
    pub fn with_record(record: LocationRecord) -> Self {
        Self::with_records(std::iter::once(record))
    }

    /// Create a store from a collection of location records.
    pub fn with_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = LocationRecord>,
    {
        Self {
            records: records.into_iter().collect(),
        }
    }
}

impl LocationStore for MemoryStore {
    fn fetch_candidates(
        &self,
        _filters: &FilterConstraints,
    ) -> Result<Vec<LocationRecord>, LocationStoreError> {
        Ok(self.records.clone())
    }
}

/// `LocationStore` that always fails, for exercising error paths.
#[derive(Default, Debug, Copy, Clone)]
pub struct FailingStore;

impl LocationStore for FailingStore {
    fn fetch_candidates(
        &self,
        _filters: &FilterConstraints,
    ) -> Result<Vec<LocationRecord>, LocationStoreError> {
        Err(LocationStoreError::Backend {
            reason: "store offline".to_string(),
        })
    }
}

/// Test `Scorer` returning the same score for every candidate.
#[derive(Debug, Copy, Clone)]
pub struct UniformScorer(pub f32);

impl Default for UniformScorer {
    fn default() -> Self {
        Self(1.0)
    }
}

impl Scorer for UniformScorer {
    fn score(
        &self,
        _candidate: &FeatureVector,
        _reference: &FeatureVector,
        _weights: &WeightVector,
    ) -> f32 {
        self.0
    }
}
