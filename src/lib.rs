//! # PM2.5 Dashboard Workbook Builder
//!
//! Assembles the static dataset behind the wildfire smoke dashboard: six
//! tables of national PM2.5 emissions, wildfire activity, and city air
//! quality, transcribed from public reports, written as one `.xlsx` workbook
//! with one sheet per table.
//!
//! The pipeline is a single offline pass. All values are embedded literals;
//! two columns are derived at construction (`total` on the national emissions
//! table and `wildfire_pm25` on the wildfire estimates table). The sheet
//! names and column headers are a fixed contract with the dashboard renderer
//! that consumes the file.
//!
//! ## Quick Start
//!
//! ```rust
//! use pm25_workbook::{Dataset, WorkbookGenerator};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Dataset::build()?;
//!     let generator = WorkbookGenerator::new();
//!     let bytes = generator.generate_workbook(&dataset)?;
//!     assert!(!bytes.is_empty());
//!     Ok(())
//! }
//! ```

pub mod dataset;
pub mod error;
pub mod workbook;

pub use dataset::{Dataset, Region};
pub use error::{Result, WorkbookError};
pub use workbook::{WorkbookFeatures, WorkbookGenerator};
