use bitflags::bitflags;

bitflags! {
    /// Workbook presentation features to enable.
    ///
    /// Cosmetic only: none of these change cell values, sheet names, or
    /// row/column order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WorkbookFeatures: u8 {
        /// Freeze the header row of every sheet.
        const FREEZE_HEADERS = 0b0001;
        /// Add an autofilter over each sheet's data range.
        const ADD_FILTERS = 0b0010;
        /// Apply explicit column widths.
        const SIZE_COLUMNS = 0b0100;

        /// All features enabled (default).
        const ALL = Self::FREEZE_HEADERS.bits()
                  | Self::ADD_FILTERS.bits()
                  | Self::SIZE_COLUMNS.bits();

        /// No presentation features (plain values only).
        const NONE = 0b0000;
    }
}
