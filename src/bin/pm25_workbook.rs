//! Dashboard workbook entry point.
//!
//! Builds the six tables from their embedded literals and (re)writes the
//! workbook consumed by the dashboard renderer. Takes no arguments; exits
//! nonzero if the write fails.

use std::path::Path;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use pm25_workbook::workbook::sheets::SHEET_SUMMARY;
use pm25_workbook::{Dataset, WorkbookGenerator};

/// Fixed output path relative to the working directory.
const OUTPUT_PATH: &str = "data/pm25_dashboard.xlsx";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let dataset = Dataset::build().context("failed to assemble dataset")?;

    let generator = WorkbookGenerator::new();
    generator
        .write_file(&dataset, Path::new(OUTPUT_PATH))
        .with_context(|| format!("failed to write workbook to {OUTPUT_PATH}"))?;

    println!("Wrote {OUTPUT_PATH}");
    for (name, description) in SHEET_SUMMARY {
        println!("  {name:<20} {description}");
    }

    Ok(())
}
