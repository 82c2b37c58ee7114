//! Record types for the six tables.
//!
//! One struct per table with named, typed fields, so that a length or type
//! mistake in the literal vectors is caught at construction rather than
//! discovered by the dashboard downstream.

/// Reporting region for a city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Western,
    Central,
    Atlantic,
}

impl Region {
    /// The literal string written to the `region` column.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Western => "Western",
            Region::Central => "Central",
            Region::Atlantic => "Atlantic",
        }
    }
}

/// One row of national anthropogenic PM2.5 emissions by source (kilotonnes).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionsRecord {
    pub year: u16,
    /// Dust from paved and unpaved roads.
    pub roads: f64,
    /// Crop production and agricultural tilling.
    pub crops: f64,
    /// Construction operations.
    pub constr: f64,
    /// All remaining inventoried sources.
    pub other: f64,
    /// Residential firewood burning.
    pub firewood: f64,
    /// Sum of the five source columns, derived at construction.
    pub total: f64,
}

/// One row of PM2.5 emitted by electric utilities (kilotonnes).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtilityRecord {
    pub year: u16,
    pub pm25: f64,
}

/// One row of the wildfire-vs-anthropogenic comparison (kilotonnes).
///
/// `wildfire_pm25` is an order-of-magnitude estimate from area burned and a
/// fixed emission factor, not a measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WildfireEstimateRecord {
    pub year: u16,
    pub area_burned_mha: f64,
    /// Derived: `round(area_burned_mha * 713)`.
    pub wildfire_pm25: f64,
    pub anthropogenic_pm25: f64,
}

/// One row of national area burned by wildfires (million hectares).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaBurnedRecord {
    pub year: u16,
    pub burned_mha: f64,
}

/// One row of annual average PM2.5 concentration for a city (µg/m³).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityPm25Record {
    pub year: u16,
    pub city: &'static str,
    pub region: Region,
    pub pm25: f64,
}

/// One row pairing national average PM2.5 (µg/m³) with area burned (Mha).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireImpactRecord {
    pub year: u16,
    pub nat_avg_pm25: f64,
    pub area_burned_mha: f64,
}
