//! Weight selection for an analysis run.

use serde::{Deserialize, Serialize};

use crate::WeightVector;

/// Which weights a run should score with.
///
/// The two sources are deliberately asymmetric: configured weights have
/// passed the sum-to-one validation at configuration time, while override
/// weights are applied exactly as supplied with no validation at all.
/// Callers choosing `Override` own the consequences.
///
/// # Examples
/// ```
/// use siteseer_core::{Feature, WeightSpec, WeightVector};
///
/// let spec = WeightSpec::Override(
///     WeightVector::new().with_weight(Feature::RentPrice, 1.0),
/// );
/// assert!(!matches!(spec, WeightSpec::Configured));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightSpec {
    /// Score with the weights of the run's analysis configuration.
    #[default]
    Configured,
    /// Score with the supplied weights, bypassing configuration and
    /// validation.
    Override(WeightVector),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Feature;

    #[test]
    fn default_selects_configured_weights() {
        assert_eq!(WeightSpec::default(), WeightSpec::Configured);
    }

    #[test]
    fn json_round_trips_both_variants() {
        let configured: WeightSpec =
            serde_json::from_str(r#""configured""#).expect("decode configured");
        assert_eq!(configured, WeightSpec::Configured);

        let override_spec = WeightSpec::Override(
            WeightVector::new().with_weight(Feature::Population, 0.6),
        );
        let payload = serde_json::to_string(&override_spec).expect("encode override");
        let decoded: WeightSpec = serde_json::from_str(&payload).expect("decode override");
        assert_eq!(decoded, override_spec);
    }
}
