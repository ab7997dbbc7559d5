//! Conversion settings
//!
//! Everything the converter needs is passed in through [`ConvertConfig`];
//! the CLI fills it from arguments and `XLSX2JSON_*` environment variables.

use crate::types::SheetSelector;
use std::path::{Path, PathBuf};

/// Output path used when none is given
pub const DEFAULT_OUTPUT: &str = "data.json";

/// Number of leading records carried in the summary for display
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub input_path: PathBuf,
    pub sheet_selector: SheetSelector,
    pub output_path: PathBuf,
    pub preview_rows: usize,
}

impl ConvertConfig {
    /// The sheet selector is mandatory; there is no implicit default sheet.
    pub fn new<I: AsRef<Path>, O: AsRef<Path>>(
        input_path: I,
        sheet_selector: SheetSelector,
        output_path: O,
    ) -> Self {
        Self {
            input_path: input_path.as_ref().to_path_buf(),
            sheet_selector,
            output_path: output_path.as_ref().to_path_buf(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }

    pub fn with_preview_rows(mut self, preview_rows: usize) -> Self {
        self.preview_rows = preview_rows;
        self
    }
}
