use geo::Coord;
use serde::{Deserialize, Serialize};

/// The known, successful location an analysis compares candidates against.
///
/// Reference areas are captured with a narrower schema than candidate
/// records: the five base scored attributes plus sales context. There is
/// deliberately no foot-traffic field here, so reference feature vectors
/// never carry that feature and it can never influence a score.
///
/// # Examples
/// ```
/// use siteseer_core::ReferenceArea;
///
/// let mut reference = ReferenceArea::new(1, "Gangnam flagship".to_string(), "27 Main St".to_string());
/// reference.population_density = Some(25_000);
/// reference.competitor_count = Some(5);
///
/// assert_eq!(reference.name, "Gangnam flagship");
/// assert!(reference.monthly_sales.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReferenceArea {
    /// Stable record identifier.
    pub id: u64,
    /// Human-readable area name.
    pub name: String,
    /// Street address of the area centre.
    pub address: String,
    /// Geographic point of the area centre.
    pub location: Option<Coord<f64>>,
    /// Observed monthly sales at this location.
    pub monthly_sales: Option<f32>,
    /// Free-form commercial area classification.
    pub area_type: Option<String>,
    /// Residents per square kilometre.
    pub population_density: Option<u32>,
    /// Registered businesses per unit area.
    pub business_density: Option<f32>,
    /// Monthly rent level for commercial space.
    pub rent_price: Option<f32>,
    /// Competing businesses in the area.
    pub competitor_count: Option<u32>,
    /// Public transport access score over `0..=100`.
    pub transportation_score: Option<u32>,
    /// Floor area of the reference premises.
    pub floor_area: Option<f32>,
}

impl ReferenceArea {
    /// Construct a reference with identity fields set and every measured
    /// attribute absent.
    pub fn new(id: u64, name: String, address: String) -> Self {
        Self {
            id,
            name,
            address,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_leaves_attributes_absent() {
        let reference = ReferenceArea::new(2, "Plaza".to_string(), "5 Square".to_string());
        assert!(reference.population_density.is_none());
        assert!(reference.area_type.is_none());
    }
}
