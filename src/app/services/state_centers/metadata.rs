//! Load statistics for the region center table

/// Statistics about loading the region center resource
#[derive(Debug, Clone, Default)]
pub struct CenterLoadStats {
    /// Keys present in the resource
    pub entries_found: usize,

    /// Entries accepted into the table (including `DEFAULT`)
    pub entries_loaded: usize,

    /// Entries rejected because they were not two finite numbers
    pub entries_skipped: usize,

    /// The hardcoded default was patched in
    pub default_patched: bool,

    /// Time taken to read and parse the resource
    pub load_duration: std::time::Duration,

    /// Problems encountered while loading
    pub errors: Vec<String>,
}

impl CenterLoadStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get a summary string of the loading process
    pub fn summary(&self) -> String {
        format!(
            "Loaded {} of {} region centers ({} skipped{}) in {:.3}s",
            self.entries_loaded,
            self.entries_found,
            self.entries_skipped,
            if self.default_patched {
                ", default patched"
            } else {
                ""
            },
            self.load_duration.as_secs_f64()
        )
    }
}
