use super::features::WorkbookFeatures;

/// Workbook generator entry point.
pub struct WorkbookGenerator {
    /// Enabled presentation features.
    features: WorkbookFeatures,
}

impl WorkbookGenerator {
    /// Create a new generator with all presentation features enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            features: WorkbookFeatures::ALL,
        }
    }

    /// Create a generator with a custom feature set.
    #[must_use]
    pub fn with_features(features: WorkbookFeatures) -> Self {
        Self { features }
    }

    /// Check if header freezing is enabled.
    #[must_use]
    pub fn freeze_headers(&self) -> bool {
        self.features.contains(WorkbookFeatures::FREEZE_HEADERS)
    }

    /// Check if autofilters are enabled.
    #[must_use]
    pub fn add_filters(&self) -> bool {
        self.features.contains(WorkbookFeatures::ADD_FILTERS)
    }

    /// Check if explicit column widths are enabled.
    #[must_use]
    pub fn size_columns(&self) -> bool {
        self.features.contains(WorkbookFeatures::SIZE_COLUMNS)
    }
}

impl Default for WorkbookGenerator {
    fn default() -> Self {
        Self::new()
    }
}
