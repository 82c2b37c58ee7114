use rust_xlsxwriter::{Format, Workbook};

use super::super::cast;
use super::super::generator::WorkbookGenerator;
use super::{NATIONAL_EMISSIONS, generation_error};
use crate::dataset::EmissionsRecord;
use crate::error::Result;

const HEADERS: [&str; 7] = ["year", "roads", "crops", "constr", "other", "firewood", "total"];
const COLUMN_WIDTHS: [f64; 7] = [8.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0];

impl WorkbookGenerator {
    pub(crate) fn generate_emissions_sheet(
        &self,
        workbook: &mut Workbook,
        rows: &[EmissionsRecord],
        header_format: &Format,
    ) -> Result<()> {
        let worksheet = workbook
            .add_worksheet()
            .set_name(NATIONAL_EMISSIONS)
            .map_err(generation_error)?;

        Self::write_header_row(worksheet, &HEADERS, header_format)?;

        for (i, rec) in rows.iter().enumerate() {
            let row = cast::usize_to_row(i + 1)?;
            worksheet
                .write_number(row, 0, f64::from(rec.year))
                .map_err(generation_error)?;
            worksheet
                .write_number(row, 1, rec.roads)
                .map_err(generation_error)?;
            worksheet
                .write_number(row, 2, rec.crops)
                .map_err(generation_error)?;
            worksheet
                .write_number(row, 3, rec.constr)
                .map_err(generation_error)?;
            worksheet
                .write_number(row, 4, rec.other)
                .map_err(generation_error)?;
            worksheet
                .write_number(row, 5, rec.firewood)
                .map_err(generation_error)?;
            worksheet
                .write_number(row, 6, rec.total)
                .map_err(generation_error)?;
        }

        self.finish_sheet(worksheet, rows.len(), &COLUMN_WIDTHS)
    }
}
