//! One sheet writer per table, plus the shared header and finishing helpers.
//!
//! Sheet names and column headers are a fixed contract with the dashboard
//! renderer that consumes the workbook; change them and the charts go blank.

mod area;
mod cities;
mod emissions;
mod impact;
mod utilities;
mod wildfire;

use rust_xlsxwriter::{Format, Worksheet, XlsxError};

use super::cast;
use super::generator::WorkbookGenerator;
use crate::error::{Result, WorkbookError};

pub const NATIONAL_EMISSIONS: &str = "national_emissions";
pub const ELECTRIC_UTILITIES: &str = "electric_utilities";
pub const WILDFIRE_ESTIMATES: &str = "wildfire_estimates";
pub const AREA_BURNED: &str = "area_burned";
pub const CITY_PM25: &str = "city_pm25";
pub const FIRE_IMPACT: &str = "fire_impact";

/// Sheet names and one-line descriptions, in workbook order. The console
/// summary prints from this table so it cannot drift from the generator.
pub const SHEET_SUMMARY: [(&str, &str); 6] = [
    (
        NATIONAL_EMISSIONS,
        "national anthropogenic PM2.5 emissions by source, 1990-2023 (kt)",
    ),
    (
        ELECTRIC_UTILITIES,
        "PM2.5 from electric utilities, selected years (kt)",
    ),
    (
        WILDFIRE_ESTIMATES,
        "wildfire PM2.5 estimates vs anthropogenic emissions, selected years (kt)",
    ),
    (AREA_BURNED, "area burned by wildfires, 1990-2023 (Mha)"),
    (
        CITY_PM25,
        "annual average PM2.5 for eight cities, 2014-2023 (ug/m3)",
    ),
    (
        FIRE_IMPACT,
        "national average PM2.5 against area burned, 2009-2023",
    ),
];

pub(super) fn generation_error(e: XlsxError) -> WorkbookError {
    WorkbookError::Generation(e.to_string())
}

impl WorkbookGenerator {
    pub(super) fn write_header_row(
        worksheet: &mut Worksheet,
        headers: &[&str],
        header_format: &Format,
    ) -> Result<()> {
        for (i, header) in headers.iter().enumerate() {
            let col = cast::usize_to_column(i)?;
            worksheet
                .write_string_with_format(0, col, *header, header_format)
                .map_err(generation_error)?;
        }
        Ok(())
    }

    /// Apply the enabled presentation features once a sheet's data is in.
    pub(super) fn finish_sheet(
        &self,
        worksheet: &mut Worksheet,
        row_count: usize,
        widths: &[f64],
    ) -> Result<()> {
        if self.freeze_headers() {
            worksheet.set_freeze_panes(1, 0).map_err(generation_error)?;
        }

        if self.add_filters() && row_count > 0 {
            let last_row = cast::usize_to_row(row_count)?;
            let last_col = cast::usize_to_column(widths.len().saturating_sub(1))?;
            worksheet
                .autofilter(0, 0, last_row, last_col)
                .map_err(generation_error)?;
        }

        if self.size_columns() {
            for (i, &width) in widths.iter().enumerate() {
                let col = cast::usize_to_column(i)?;
                worksheet
                    .set_column_width(col, width)
                    .map_err(generation_error)?;
            }
        }

        Ok(())
    }
}
