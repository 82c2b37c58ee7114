//! Error types for dataset construction and workbook generation.

use thiserror::Error;

/// Result type for workbook operations.
pub type Result<T> = std::result::Result<T, WorkbookError>;

/// Errors that can occur while building the dataset or writing the workbook.
#[derive(Debug, Error)]
pub enum WorkbookError {
    /// Authoring mistake in the literal tables, e.g. mismatched column
    /// vector lengths. Raised before any output is written.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Workbook generation error.
    #[error("Workbook generation failed: {0}")]
    Generation(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
