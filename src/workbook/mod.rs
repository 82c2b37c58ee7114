//! Excel workbook generator for the dashboard dataset.
//!
//! Split into focused submodules: the generator struct and its feature
//! flags, index casts, one sheet writer per table, and the save path that
//! persists the workbook atomically.

mod cast;
mod features;
mod generator;
mod save;
pub mod sheets;

pub use features::WorkbookFeatures;
pub use generator::WorkbookGenerator;
