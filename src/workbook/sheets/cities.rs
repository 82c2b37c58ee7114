use rust_xlsxwriter::{Format, Workbook};

use super::super::cast;
use super::super::generator::WorkbookGenerator;
use super::{CITY_PM25, generation_error};
use crate::dataset::CityPm25Record;
use crate::error::Result;

const HEADERS: [&str; 4] = ["year", "city", "region", "pm25"];
const COLUMN_WIDTHS: [f64; 4] = [8.0, 14.0, 10.0, 8.0];

impl WorkbookGenerator {
    pub(crate) fn generate_cities_sheet(
        &self,
        workbook: &mut Workbook,
        rows: &[CityPm25Record],
        header_format: &Format,
    ) -> Result<()> {
        let worksheet = workbook
            .add_worksheet()
            .set_name(CITY_PM25)
            .map_err(generation_error)?;

        Self::write_header_row(worksheet, &HEADERS, header_format)?;

        for (i, rec) in rows.iter().enumerate() {
            let row = cast::usize_to_row(i + 1)?;
            worksheet
                .write_number(row, 0, f64::from(rec.year))
                .map_err(generation_error)?;
            worksheet
                .write_string(row, 1, rec.city)
                .map_err(generation_error)?;
            worksheet
                .write_string(row, 2, rec.region.as_str())
                .map_err(generation_error)?;
            worksheet
                .write_number(row, 3, rec.pm25)
                .map_err(generation_error)?;
        }

        self.finish_sheet(worksheet, rows.len(), &COLUMN_WIDTHS)
    }
}
