use std::path::PathBuf;
use thiserror::Error;

pub type ConversionResult<T> = Result<T, ConversionError>;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Unsupported workbook format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Failed to parse workbook {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Workbook has no sheets: {}", .0.display())]
    NoSheets(PathBuf),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConversionError {
    /// One-line remediation shown under the diagnostic.
    pub fn hint(&self) -> &'static str {
        match self {
            ConversionError::NotFound(_) => "Check the input path or pass the workbook as INPUT",
            ConversionError::UnsupportedFormat(_) => {
                "Supported formats: .xlsx, .xlsm, .xlsb, .xla, .xlam, .xls, .ods"
            }
            ConversionError::Parse { .. } => {
                "Make sure the file is a valid, unencrypted workbook (re-save it from Excel/LibreOffice)"
            }
            ConversionError::NoSheets(_) => "Add at least one sheet to the workbook",
            ConversionError::SheetNotFound(_) => {
                "Use --sheet last, first, a 0-based index, or name:<sheet name>"
            }
            ConversionError::Json(_) => "Report this as a bug together with the input workbook",
            ConversionError::Write { .. } => {
                "Check that the output directory exists and is writable"
            }
        }
    }
}
