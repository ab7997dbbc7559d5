//! xlsx2json - spreadsheet sheet to JSON records
//!
//! This library opens a workbook, selects one worksheet, and writes its rows
//! as a JSON array of objects keyed by the header row.
//!
//! # Features
//!
//! - xlsx, xlsm, xlsb, xls and ods input (via calamine)
//! - Sheet selection by position (last, first, index) or name
//! - Key order follows column order; empty cells become `null`
//! - Dates as ISO-8601 strings, non-ASCII text kept literal
//!
//! # Example
//!
//! ```no_run
//! use xlsx2json::config::ConvertConfig;
//! use xlsx2json::core::TableToJsonConverter;
//! use xlsx2json::types::SheetSelector;
//!
//! let config = ConvertConfig::new("report.xlsx", SheetSelector::Last, "data.json");
//! let summary = TableToJsonConverter::new(config).convert()?;
//!
//! println!("Sheet: {}", summary.sheet_name);
//! println!("Rows: {}", summary.row_count);
//! # Ok::<(), xlsx2json::error::ConversionError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod excel;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use config::ConvertConfig;
pub use crate::core::TableToJsonConverter;
pub use error::{ConversionError, ConversionResult};
pub use types::{ConversionSummary, RowRecord, SheetSelector, SheetTable};
