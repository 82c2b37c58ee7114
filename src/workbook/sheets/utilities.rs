use rust_xlsxwriter::{Format, Workbook};

use super::super::cast;
use super::super::generator::WorkbookGenerator;
use super::{ELECTRIC_UTILITIES, generation_error};
use crate::dataset::UtilityRecord;
use crate::error::Result;

const HEADERS: [&str; 2] = ["year", "pm25"];
const COLUMN_WIDTHS: [f64; 2] = [8.0, 10.0];

impl WorkbookGenerator {
    pub(crate) fn generate_utilities_sheet(
        &self,
        workbook: &mut Workbook,
        rows: &[UtilityRecord],
        header_format: &Format,
    ) -> Result<()> {
        let worksheet = workbook
            .add_worksheet()
            .set_name(ELECTRIC_UTILITIES)
            .map_err(generation_error)?;

        Self::write_header_row(worksheet, &HEADERS, header_format)?;

        for (i, rec) in rows.iter().enumerate() {
            let row = cast::usize_to_row(i + 1)?;
            worksheet
                .write_number(row, 0, f64::from(rec.year))
                .map_err(generation_error)?;
            worksheet
                .write_number(row, 1, rec.pm25)
                .map_err(generation_error)?;
        }

        self.finish_sheet(worksheet, rows.len(), &COLUMN_WIDTHS)
    }
}
