//! The six tabular entities and their construction from literal values.
//!
//! Every value in this module is transcribed from public emissions and
//! air-quality reports. Selected-year and interpolated figures are
//! reproduced verbatim as authored; nothing here re-derives them. The only
//! computed columns are `total` (national emissions) and `wildfire_pm25`
//! (wildfire estimates), both produced during construction.

mod records;
mod tables;

pub use records::{
    AreaBurnedRecord, CityPm25Record, EmissionsRecord, FireImpactRecord, Region, UtilityRecord,
    WildfireEstimateRecord,
};
pub use tables::WILDFIRE_EMISSION_FACTOR_KT_PER_MHA;

use crate::error::Result;
use tracing::debug;

/// All six tables, built once per run and serialized immediately after.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// National anthropogenic PM2.5 emissions by source, 1990-2023.
    pub national_emissions: Vec<EmissionsRecord>,
    /// PM2.5 from electric utilities for selected years.
    pub electric_utilities: Vec<UtilityRecord>,
    /// Order-of-magnitude wildfire PM2.5 estimates for selected years.
    pub wildfire_estimates: Vec<WildfireEstimateRecord>,
    /// Area burned by wildfires, 1990-2023.
    pub area_burned: Vec<AreaBurnedRecord>,
    /// Annual average PM2.5 for eight cities, 2014-2023.
    pub city_pm25: Vec<CityPm25Record>,
    /// National average PM2.5 against area burned, 2009-2023.
    pub fire_impact: Vec<FireImpactRecord>,
}

impl Dataset {
    /// Build all six tables from the embedded literals.
    ///
    /// Pure and deterministic: no I/O, same output on every call. The only
    /// failure mode is a configuration error from mismatched literal vector
    /// lengths, which names the offending table.
    ///
    /// # Errors
    ///
    /// Returns `WorkbookError::Configuration` if the source vectors of any
    /// table disagree on length.
    pub fn build() -> Result<Self> {
        let dataset = Self {
            national_emissions: tables::national_emissions()?,
            electric_utilities: tables::electric_utilities()?,
            wildfire_estimates: tables::wildfire_estimates()?,
            area_burned: tables::area_burned()?,
            city_pm25: tables::city_pm25()?,
            fire_impact: tables::fire_impact()?,
        };

        debug!(
            national_emissions = dataset.national_emissions.len(),
            electric_utilities = dataset.electric_utilities.len(),
            wildfire_estimates = dataset.wildfire_estimates.len(),
            area_burned = dataset.area_burned.len(),
            city_pm25 = dataset.city_pm25.len(),
            fire_impact = dataset.fire_impact.len(),
            "dataset assembled"
        );

        Ok(dataset)
    }
}
