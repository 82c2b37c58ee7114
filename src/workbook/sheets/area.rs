use rust_xlsxwriter::{Format, Workbook};

use super::super::cast;
use super::super::generator::WorkbookGenerator;
use super::{AREA_BURNED, generation_error};
use crate::dataset::AreaBurnedRecord;
use crate::error::Result;

const HEADERS: [&str; 2] = ["year", "burned_mha"];
const COLUMN_WIDTHS: [f64; 2] = [8.0, 12.0];

impl WorkbookGenerator {
    pub(crate) fn generate_area_sheet(
        &self,
        workbook: &mut Workbook,
        rows: &[AreaBurnedRecord],
        header_format: &Format,
    ) -> Result<()> {
        let worksheet = workbook
            .add_worksheet()
            .set_name(AREA_BURNED)
            .map_err(generation_error)?;

        Self::write_header_row(worksheet, &HEADERS, header_format)?;

        for (i, rec) in rows.iter().enumerate() {
            let row = cast::usize_to_row(i + 1)?;
            worksheet
                .write_number(row, 0, f64::from(rec.year))
                .map_err(generation_error)?;
            worksheet
                .write_number(row, 1, rec.burned_mha)
                .map_err(generation_error)?;
        }

        self.finish_sheet(worksheet, rows.len(), &COLUMN_WIDTHS)
    }
}
