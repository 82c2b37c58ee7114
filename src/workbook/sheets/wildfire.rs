use rust_xlsxwriter::{Format, Workbook};

use super::super::cast;
use super::super::generator::WorkbookGenerator;
use super::{WILDFIRE_ESTIMATES, generation_error};
use crate::dataset::WildfireEstimateRecord;
use crate::error::Result;

const HEADERS: [&str; 4] = [
    "year",
    "area_burned_mha",
    "wildfire_pm25",
    "anthropogenic_pm25",
];
const COLUMN_WIDTHS: [f64; 4] = [8.0, 16.0, 14.0, 18.0];

impl WorkbookGenerator {
    pub(crate) fn generate_wildfire_sheet(
        &self,
        workbook: &mut Workbook,
        rows: &[WildfireEstimateRecord],
        header_format: &Format,
    ) -> Result<()> {
        let worksheet = workbook
            .add_worksheet()
            .set_name(WILDFIRE_ESTIMATES)
            .map_err(generation_error)?;

        Self::write_header_row(worksheet, &HEADERS, header_format)?;

        for (i, rec) in rows.iter().enumerate() {
            let row = cast::usize_to_row(i + 1)?;
            worksheet
                .write_number(row, 0, f64::from(rec.year))
                .map_err(generation_error)?;
            worksheet
                .write_number(row, 1, rec.area_burned_mha)
                .map_err(generation_error)?;
            worksheet
                .write_number(row, 2, rec.wildfire_pm25)
                .map_err(generation_error)?;
            worksheet
                .write_number(row, 3, rec.anthropogenic_pm25)
                .map_err(generation_error)?;
        }

        self.finish_sheet(worksheet, rows.len(), &COLUMN_WIDTHS)
    }
}
