//! Workbook assembly and the atomic persist step.

use std::fs;
use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};
use tempfile::NamedTempFile;
use tracing::info;

use super::generator::WorkbookGenerator;
use super::sheets::generation_error;
use crate::dataset::Dataset;
use crate::error::{Result, WorkbookError};

impl WorkbookGenerator {
    /// Generate the six-sheet workbook as a byte buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if any sheet cannot be written or the workbook
    /// cannot be serialized.
    pub fn generate_workbook(&self, dataset: &Dataset) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();

        // Header format shared across sheets.
        let header_format = Format::new()
            .set_bold()
            .set_background_color(Color::Gray)
            .set_font_color(Color::White)
            .set_align(FormatAlign::Center)
            .set_border(FormatBorder::Thin);

        self.generate_emissions_sheet(&mut workbook, &dataset.national_emissions, &header_format)?;
        self.generate_utilities_sheet(&mut workbook, &dataset.electric_utilities, &header_format)?;
        self.generate_wildfire_sheet(&mut workbook, &dataset.wildfire_estimates, &header_format)?;
        self.generate_area_sheet(&mut workbook, &dataset.area_burned, &header_format)?;
        self.generate_cities_sheet(&mut workbook, &dataset.city_pm25, &header_format)?;
        self.generate_impact_sheet(&mut workbook, &dataset.fire_impact, &header_format)?;

        workbook.save_to_buffer().map_err(generation_error)
    }

    /// Serialize the dataset and write it to `path`, replacing any existing
    /// file. The parent directory is created if absent.
    ///
    /// The buffer is written to a sibling temp file and renamed into place,
    /// so a failed run never leaves a partial workbook at the target path.
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails, the directory cannot be
    /// created, or the file cannot be written.
    pub fn write_file(&self, dataset: &Dataset, path: &Path) -> Result<()> {
        let buffer = self.generate_workbook(dataset)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&buffer)?;
        tmp.persist(path).map_err(|e| WorkbookError::Io(e.error))?;

        info!(path = %path.display(), bytes = buffer.len(), "workbook written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::dataset::Dataset;
    use crate::workbook::{WorkbookFeatures, WorkbookGenerator};

    #[test]
    fn generates_a_non_empty_buffer() {
        let dataset = Dataset::build().expect("literals are well-formed");
        let buffer = WorkbookGenerator::new()
            .generate_workbook(&dataset)
            .expect("workbook should serialize");
        assert!(!buffer.is_empty());
    }

    #[test]
    fn plain_features_still_serialize() {
        let dataset = Dataset::build().expect("literals are well-formed");
        let generator = WorkbookGenerator::with_features(WorkbookFeatures::NONE);
        let buffer = generator
            .generate_workbook(&dataset)
            .expect("workbook should serialize without presentation features");
        assert!(!buffer.is_empty());
    }
}
