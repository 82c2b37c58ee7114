//! Integration tests for workbook generation.
//!
//! Each test builds the dataset, writes the workbook, and reads it back
//! with calamine to assert on the sheet contract the dashboard renderer
//! depends on: sheet names, column headers, cell values, ordering.

use std::fs;
use std::io::{Cursor, Read, Seek};

use calamine::{Data, Reader, Xlsx, open_workbook};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use pm25_workbook::workbook::sheets::SHEET_SUMMARY;
use pm25_workbook::{Dataset, WorkbookGenerator};

const EXPECTED_SHEETS: [&str; 6] = [
    "national_emissions",
    "electric_utilities",
    "wildfire_estimates",
    "area_burned",
    "city_pm25",
    "fire_impact",
];

fn sheet_rows<R: Read + Seek>(workbook: &mut Xlsx<R>, name: &str) -> Vec<Vec<Data>> {
    let range = workbook
        .worksheet_range(name)
        .unwrap_or_else(|e| panic!("sheet '{name}' should be readable: {e}"));
    range.rows().map(<[Data]>::to_vec).collect()
}

fn header_row<R: Read + Seek>(workbook: &mut Xlsx<R>, name: &str) -> Vec<String> {
    sheet_rows(workbook, name)
        .first()
        .unwrap_or_else(|| panic!("sheet '{name}' should have a header row"))
        .iter()
        .map(|cell| match cell {
            Data::String(s) => s.clone(),
            other => panic!("header cell in '{name}' is not a string: {other:?}"),
        })
        .collect()
}

fn generate_in_memory() -> Xlsx<Cursor<Vec<u8>>> {
    let dataset = Dataset::build().expect("literals are well-formed");
    let buffer = WorkbookGenerator::new()
        .generate_workbook(&dataset)
        .expect("workbook should serialize");
    Xlsx::new(Cursor::new(buffer)).expect("generated buffer should be a valid xlsx")
}

#[test]
fn workbook_contains_exactly_six_sheets_in_order() {
    let workbook = generate_in_memory();
    assert_eq!(workbook.sheet_names().to_vec(), EXPECTED_SHEETS.to_vec());
}

#[test]
fn sheet_summary_table_matches_the_workbook() {
    let workbook = generate_in_memory();
    let summary_names: Vec<&str> = SHEET_SUMMARY.iter().map(|(name, _)| *name).collect();
    assert_eq!(summary_names, workbook.sheet_names().to_vec());
}

#[test]
fn column_headers_match_the_contract() {
    let mut workbook = generate_in_memory();

    assert_eq!(
        header_row(&mut workbook, "national_emissions"),
        ["year", "roads", "crops", "constr", "other", "firewood", "total"]
    );
    assert_eq!(header_row(&mut workbook, "electric_utilities"), ["year", "pm25"]);
    assert_eq!(
        header_row(&mut workbook, "wildfire_estimates"),
        ["year", "area_burned_mha", "wildfire_pm25", "anthropogenic_pm25"]
    );
    assert_eq!(header_row(&mut workbook, "area_burned"), ["year", "burned_mha"]);
    assert_eq!(
        header_row(&mut workbook, "city_pm25"),
        ["year", "city", "region", "pm25"]
    );
    assert_eq!(
        header_row(&mut workbook, "fire_impact"),
        ["year", "nat_avg_pm25", "area_burned_mha"]
    );
}

#[test]
fn row_counts_match_the_dataset() {
    let mut workbook = generate_in_memory();

    // Header row plus data rows.
    assert_eq!(sheet_rows(&mut workbook, "national_emissions").len(), 35);
    assert_eq!(sheet_rows(&mut workbook, "electric_utilities").len(), 16);
    assert_eq!(sheet_rows(&mut workbook, "wildfire_estimates").len(), 20);
    assert_eq!(sheet_rows(&mut workbook, "area_burned").len(), 35);
    assert_eq!(sheet_rows(&mut workbook, "city_pm25").len(), 81);
    assert_eq!(sheet_rows(&mut workbook, "fire_impact").len(), 16);
}

#[test]
fn emissions_2023_row_totals_1370() {
    let mut workbook = generate_in_memory();
    let rows = sheet_rows(&mut workbook, "national_emissions");

    let last = rows.last().expect("sheet has rows");
    assert_eq!(
        last.clone(),
        vec![
            Data::Float(2023.0),
            Data::Float(457.0),
            Data::Float(346.0),
            Data::Float(407.0),
            Data::Float(109.0),
            Data::Float(51.0),
            Data::Float(1370.0),
        ]
    );
}

#[test]
fn wildfire_2023_estimate_is_10695() {
    let mut workbook = generate_in_memory();
    let rows = sheet_rows(&mut workbook, "wildfire_estimates");

    let last = rows.last().expect("sheet has rows");
    assert_eq!(last[0], Data::Float(2023.0));
    assert_eq!(last[1], Data::Float(15.0));
    assert_eq!(last[2], Data::Float(10695.0));
}

#[test]
fn city_rows_carry_region_strings() {
    let mut workbook = generate_in_memory();
    let rows = sheet_rows(&mut workbook, "city_pm25");

    // First data row is Vancouver 2014.
    assert_eq!(rows[1][0], Data::Float(2014.0));
    assert_eq!(rows[1][1], Data::String("Vancouver".to_string()));
    assert_eq!(rows[1][2], Data::String("Western".to_string()));

    for row in rows.iter().skip(1) {
        match &row[2] {
            Data::String(region) => {
                assert!(
                    matches!(region.as_str(), "Western" | "Central" | "Atlantic"),
                    "unexpected region '{region}'"
                );
            }
            other => panic!("region cell is not a string: {other:?}"),
        }
    }
}

#[test]
fn reruns_produce_identical_cell_values() {
    let mut first = generate_in_memory();
    let mut second = generate_in_memory();

    for name in EXPECTED_SHEETS {
        assert_eq!(
            sheet_rows(&mut first, name),
            sheet_rows(&mut second, name),
            "sheet '{name}' differs between runs"
        );
    }
}

#[test]
fn write_file_creates_the_output_directory() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("data").join("pm25_dashboard.xlsx");

    let dataset = Dataset::build().expect("literals are well-formed");
    WorkbookGenerator::new()
        .write_file(&dataset, &path)
        .expect("write should create the missing directory");

    let mut workbook: Xlsx<_> = open_workbook(&path).expect("written file should open");
    assert_eq!(workbook.sheet_names().to_vec(), EXPECTED_SHEETS.to_vec());
    assert_eq!(sheet_rows(&mut workbook, "fire_impact").len(), 16);
}

#[test]
fn write_file_survives_directory_deletion_between_runs() {
    let temp = TempDir::new().expect("temp dir");
    let dir = temp.path().join("data");
    let path = dir.join("pm25_dashboard.xlsx");

    let dataset = Dataset::build().expect("literals are well-formed");
    let generator = WorkbookGenerator::new();

    generator.write_file(&dataset, &path).expect("first write");
    fs::remove_dir_all(&dir).expect("remove output directory");
    generator.write_file(&dataset, &path).expect("second write");

    assert!(path.exists());
}

#[test]
fn write_file_overwrites_an_existing_file() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("pm25_dashboard.xlsx");

    fs::write(&path, b"stale placeholder").expect("seed a stale file");

    let dataset = Dataset::build().expect("literals are well-formed");
    WorkbookGenerator::new()
        .write_file(&dataset, &path)
        .expect("write should replace the stale file");

    let workbook: Xlsx<_> = open_workbook(&path).expect("replacement should be a valid xlsx");
    assert_eq!(workbook.sheet_names().to_vec(), EXPECTED_SHEETS.to_vec());
}
