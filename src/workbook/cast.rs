//! Index casts for worksheet coordinates.

use crate::error::{Result, WorkbookError};

/// Convert a zero-based row index to the `u32` rust_xlsxwriter expects.
pub(super) fn usize_to_row(index: usize) -> Result<u32> {
    u32::try_from(index)
        .map_err(|_| WorkbookError::Generation(format!("row index {index} exceeds u32 range")))
}

/// Convert a zero-based column index to the `u16` rust_xlsxwriter expects.
pub(super) fn usize_to_column(index: usize) -> Result<u16> {
    u16::try_from(index)
        .map_err(|_| WorkbookError::Generation(format!("column index {index} exceeds u16 range")))
}
