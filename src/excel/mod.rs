//! Excel import for JSON conversion
//!
//! - `importer`: open a workbook, resolve a sheet selector, read a sheet as records
//! - `cell`: map individual cells to JSON values

mod cell;
mod importer;

pub use cell::{cell_to_column_name, cell_to_json};
pub use importer::{column_names, is_supported, range_to_table, WorkbookImporter, SUPPORTED_EXTENSIONS};
