//! Data access traits for candidate locations.
//!
//! The `LocationStore` trait defines a read-only interface for retrieving
//! [`LocationRecord`] values. Consumers use it to fetch the candidate pool
//! for an analysis run.

use thiserror::Error;

use crate::{FilterConstraints, LocationRecord};

/// Read-only access to persisted candidate locations.
///
/// Implementations may use `filters` to narrow the fetch at the backend,
/// or ignore it and return every record; the analysis pipeline re-applies
/// the constraints to whatever comes back, so pre-filtering is an
/// optimisation rather than an obligation.
///
/// # Examples
///
/// ```rust
/// use siteseer_core::{FilterConstraints, LocationRecord, LocationStore, LocationStoreError};
///
/// struct MemoryStore {
///     records: Vec<LocationRecord>,
/// }
///
/// impl LocationStore for MemoryStore {
///     fn fetch_candidates(
///         &self,
///         filters: &FilterConstraints,
///     ) -> Result<Vec<LocationRecord>, LocationStoreError> {
///         Ok(self
///             .records
///             .iter()
///             .filter(|record| filters.admits(record))
///             .cloned()
///             .collect())
///     }
/// }
///
/// let mut record = LocationRecord::new(1, "Riverside".to_string(), "5 Quay".to_string());
/// record.population_total = Some(25_000);
/// let store = MemoryStore { records: vec![record.clone()] };
///
/// let found = store.fetch_candidates(&FilterConstraints::default())?;
/// assert_eq!(found, vec![record]);
/// # Ok::<(), LocationStoreError>(())
/// ```
pub trait LocationStore {
    /// Return candidate locations for an analysis run.
    ///
    /// # Errors
    /// Returns [`LocationStoreError`] when the backing data source cannot
    /// be read.
    fn fetch_candidates(
        &self,
        filters: &FilterConstraints,
    ) -> Result<Vec<LocationRecord>, LocationStoreError>;
}

/// Errors raised while fetching candidate locations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationStoreError {
    /// The backing data source failed.
    #[error("location store backend failed: {reason}")]
    Backend {
        /// Description of the backend failure.
        reason: String,
    },
}
