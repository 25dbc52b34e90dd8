use geo::Coord;
use serde::{Deserialize, Serialize};

/// A candidate area considered for expansion.
///
/// Records mirror the commercial-district collection schema: identity and
/// address are always present, every measured attribute is optional. An
/// absent attribute means the datum was never collected; downstream
/// policies decide how absence is treated, the record itself never
/// substitutes defaults. Coordinates are WGS84 with `x = longitude` and
/// `y = latitude`.
///
/// # Examples
/// ```
/// use siteseer_core::LocationRecord;
///
/// let mut record = LocationRecord::new(7, "Mapo exchange".to_string(), "12 Market St".to_string());
/// record.population_density = Some(25_000);
/// record.rent_price = Some(500_000.0);
///
/// assert_eq!(record.id, 7);
/// assert!(record.competitor_count.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Stable record identifier.
    pub id: u64,
    /// Human-readable area name.
    pub name: String,
    /// Street address of the area centre.
    pub address: String,
    /// Top-level administrative region; feeds the insight histogram.
    pub region: Option<String>,
    /// Mid-level administrative district.
    pub district: Option<String>,
    /// Neighbourhood label.
    pub neighbourhood: Option<String>,
    /// Geographic point of the area centre.
    pub location: Option<Coord<f64>>,
    /// Total resident population; compared against the minimum-population
    /// filter constraint.
    pub population_total: Option<u32>,
    /// Residents in their twenties.
    pub population_20s: Option<u32>,
    /// Residents in their thirties.
    pub population_30s: Option<u32>,
    /// Residents in their forties.
    pub population_40s: Option<u32>,
    /// Residents in their fifties.
    pub population_50s: Option<u32>,
    /// Daily passing foot traffic.
    pub floating_population: Option<u32>,
    /// Residents per square kilometre; the population feature input.
    pub population_density: Option<u32>,
    /// Registered businesses per unit area.
    pub business_density: Option<f32>,
    /// Monthly rent level for commercial space.
    pub rent_price: Option<f32>,
    /// Share of vacant commercial units.
    pub vacancy_rate: Option<f32>,
    /// Competing businesses in the area.
    pub competitor_count: Option<u32>,
    /// Businesses of a similar category in the area.
    pub similar_business_count: Option<u32>,
    /// Share of the area zoned commercial.
    pub commercial_area_ratio: Option<f32>,
    /// Share of the area zoned residential.
    pub residential_area_ratio: Option<f32>,
    /// Public transport access score over `0..=100`.
    pub transportation_score: Option<u32>,
    /// Parking availability score over `0..=100`.
    pub parking_score: Option<u32>,
}

impl LocationRecord {
    /// Construct a record with identity fields set and every measured
    /// attribute absent.
    ///
    /// # Examples
    /// ```
    /// use siteseer_core::LocationRecord;
    ///
    /// let record = LocationRecord::new(1, "Riverside".to_string(), "1 Quay Rd".to_string());
    /// assert!(record.population_density.is_none());
    /// ```
    pub fn new(id: u64, name: String, address: String) -> Self {
        Self {
            id,
            name,
            address,
            ..Self::default()
        }
    }
}
