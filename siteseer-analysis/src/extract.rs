//! Feature extraction and normalisation for areas under comparison.
//!
//! Raw attributes are mapped onto the unit interval with fixed city-scale
//! ranges. Rent and competition normalise inverted, so cheaper and less
//! contested areas score higher. Absent attributes are treated as zero
//! before normalisation.

use siteseer_core::{Feature, FeatureVector, LocationRecord, ReferenceArea};

const POPULATION_DENSITY_MAX: f32 = 50_000.0;
const BUSINESS_DENSITY_MAX: f32 = 100.0;
const RENT_PRICE_MAX: f32 = 5_000_000.0;
const COMPETITOR_COUNT_MAX: f32 = 20.0;
const TRANSPORTATION_MAX: f32 = 100.0;
const FLOATING_POPULATION_MAX: f32 = 100_000.0;

/// Map `value` onto `0.0..=1.0` within the `min..=max` range.
///
/// Values outside the range clamp to the nearest bound. A degenerate
/// range yields the midpoint 0.5 so the value neither helps nor hurts a
/// comparison.
#[expect(
    clippy::float_arithmetic,
    reason = "normalisation is a linear map onto the unit interval"
)]
pub fn normalise(value: f32, min: f32, max: f32) -> f32 {
    if max == min {
        return 0.5;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Inverted [`normalise`]: lower raw values map to higher scores.
#[expect(
    clippy::float_arithmetic,
    reason = "inversion is a subtraction on the unit interval"
)]
pub fn normalise_inverse(value: f32, min: f32, max: f32) -> f32 {
    1.0 - normalise(value, min, max)
}

/// Extract the five comparable features of a reference area.
///
/// Reference areas carry no foot-traffic attribute, so the resulting
/// vector never contains [`Feature::FloatingPopulation`].
#[expect(
    clippy::cast_precision_loss,
    reason = "attribute magnitudes stay far below f32 integer precision limits"
)]
pub fn extract_reference(area: &ReferenceArea) -> FeatureVector {
    FeatureVector::new()
        .with_value(
            Feature::Population,
            normalise(
                area.population_density.map_or(0.0, |v| v as f32),
                0.0,
                POPULATION_DENSITY_MAX,
            ),
        )
        .with_value(
            Feature::BusinessDensity,
            normalise(
                area.business_density.unwrap_or(0.0),
                0.0,
                BUSINESS_DENSITY_MAX,
            ),
        )
        .with_value(
            Feature::RentPrice,
            normalise_inverse(area.rent_price.unwrap_or(0.0), 0.0, RENT_PRICE_MAX),
        )
        .with_value(
            Feature::Competition,
            normalise_inverse(
                area.competitor_count.map_or(0.0, |v| v as f32),
                0.0,
                COMPETITOR_COUNT_MAX,
            ),
        )
        .with_value(
            Feature::Transportation,
            normalise(
                area.transportation_score.map_or(0.0, |v| v as f32),
                0.0,
                TRANSPORTATION_MAX,
            ),
        )
}

/// Extract the six comparable features of a candidate location.
///
/// Candidates additionally carry [`Feature::FloatingPopulation`]; scoring
/// only ever uses the intersection with the reference vector, so the
/// extra entry is inert unless both sides supply it.
#[expect(
    clippy::cast_precision_loss,
    reason = "attribute magnitudes stay far below f32 integer precision limits"
)]
pub fn extract_location(record: &LocationRecord) -> FeatureVector {
    FeatureVector::new()
        .with_value(
            Feature::Population,
            normalise(
                record.population_density.map_or(0.0, |v| v as f32),
                0.0,
                POPULATION_DENSITY_MAX,
            ),
        )
        .with_value(
            Feature::BusinessDensity,
            normalise(
                record.business_density.unwrap_or(0.0),
                0.0,
                BUSINESS_DENSITY_MAX,
            ),
        )
        .with_value(
            Feature::RentPrice,
            normalise_inverse(record.rent_price.unwrap_or(0.0), 0.0, RENT_PRICE_MAX),
        )
        .with_value(
            Feature::Competition,
            normalise_inverse(
                record.competitor_count.map_or(0.0, |v| v as f32),
                0.0,
                COMPETITOR_COUNT_MAX,
            ),
        )
        .with_value(
            Feature::Transportation,
            normalise(
                record.transportation_score.map_or(0.0, |v| v as f32),
                0.0,
                TRANSPORTATION_MAX,
            ),
        )
        .with_value(
            Feature::FloatingPopulation,
            normalise(
                record.floating_population.map_or(0.0, |v| v as f32),
                0.0,
                FLOATING_POPULATION_MAX,
            ),
        )
}
