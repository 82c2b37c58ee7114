use rust_xlsxwriter::{Format, Workbook};

use super::super::cast;
use super::super::generator::WorkbookGenerator;
use super::{FIRE_IMPACT, generation_error};
use crate::dataset::FireImpactRecord;
use crate::error::Result;

const HEADERS: [&str; 3] = ["year", "nat_avg_pm25", "area_burned_mha"];
const COLUMN_WIDTHS: [f64; 3] = [8.0, 14.0, 16.0];

impl WorkbookGenerator {
    pub(crate) fn generate_impact_sheet(
        &self,
        workbook: &mut Workbook,
        rows: &[FireImpactRecord],
        header_format: &Format,
    ) -> Result<()> {
        let worksheet = workbook
            .add_worksheet()
            .set_name(FIRE_IMPACT)
            .map_err(generation_error)?;

        Self::write_header_row(worksheet, &HEADERS, header_format)?;

        for (i, rec) in rows.iter().enumerate() {
            let row = cast::usize_to_row(i + 1)?;
            worksheet
                .write_number(row, 0, f64::from(rec.year))
                .map_err(generation_error)?;
            worksheet
                .write_number(row, 1, rec.nat_avg_pm25)
                .map_err(generation_error)?;
            worksheet
                .write_number(row, 2, rec.area_burned_mha)
                .map_err(generation_error)?;
        }

        self.finish_sheet(worksheet, rows.len(), &COLUMN_WIDTHS)
    }
}
