pub const DEFAULT_SUFFIX: &str = ".huff";

/// Settings for compressing files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressOptions {
    /// appended to the input path to get the output path
    pub suffix: String,
    /// silently overwrite existing output files
    pub force: bool,
}

impl CompressOptions {
    pub fn new() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            force: false,
        }
    }
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self::new()
    }
}
