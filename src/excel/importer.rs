//! Workbook importer - one worksheet → header + row records

use crate::error::{ConversionError, ConversionResult};
use crate::excel::cell::{cell_to_column_name, cell_to_json};
use crate::types::{RowRecord, SheetSelector, SheetTable};
use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use serde_json::Value;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extensions calamine can open
pub const SUPPORTED_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xla", "xlam", "xls", "ods"];

/// Open workbook plus the path it came from
pub struct WorkbookImporter {
    path: PathBuf,
    workbook: Sheets<BufReader<File>>,
}

impl WorkbookImporter {
    /// Open a workbook, checking existence and format before parsing
    pub fn open<P: AsRef<Path>>(path: P) -> ConversionResult<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            return Err(ConversionError::NotFound(path));
        }
        if !is_supported(&path) {
            return Err(ConversionError::UnsupportedFormat(path));
        }

        debug!("Opening workbook {}", path.display());
        let workbook = open_workbook_auto(&path).map_err(|source| ConversionError::Parse {
            path: path.clone(),
            source,
        })?;

        Ok(Self { path, workbook })
    }

    /// Sheet names in declaration order
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }

    /// Pick the sheet name the selector points at
    pub fn select(&self, selector: &SheetSelector) -> ConversionResult<String> {
        let names = self.sheet_names();
        if names.is_empty() {
            return Err(ConversionError::NoSheets(self.path.clone()));
        }

        let index = selector.resolve(&names).ok_or_else(|| {
            ConversionError::SheetNotFound(format!(
                "'{}' (workbook has {} sheets: {:?})",
                selector,
                names.len(),
                names
            ))
        })?;

        debug!("Selector {} resolved to sheet #{} '{}'", selector, index, names[index]);
        Ok(names[index].clone())
    }

    /// Read one worksheet: first used row is the header, the rest are records
    pub fn read_table(&mut self, sheet_name: &str) -> ConversionResult<SheetTable> {
        let range = self
            .workbook
            .worksheet_range(sheet_name)
            .map_err(|source| ConversionError::Parse {
                path: self.path.clone(),
                source,
            })?;

        Ok(range_to_table(sheet_name, &range))
    }
}

/// Extension check, case-insensitive
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Convert a used range to a table of records.
///
/// Columns left of the used range still count: they get `Unnamed: <i>`
/// names and `null` values. Rows whose cells are all empty are skipped.
pub fn range_to_table(sheet_name: &str, range: &Range<Data>) -> SheetTable {
    let mut table = SheetTable::new(sheet_name.to_string());

    // Check if sheet is empty
    if range.is_empty() {
        return table;
    }

    // calamine trims leading empty columns from the used range
    let offset = range.start().map(|(_, col)| col as usize).unwrap_or(0);

    let mut rows = range.rows();
    let header = match rows.next() {
        Some(header) => header,
        None => return table,
    };
    let mut padded_header = vec![Data::Empty; offset];
    padded_header.extend_from_slice(header);
    table.columns = column_names(&padded_header);

    for row in rows {
        if is_blank_row(row) {
            continue;
        }
        let mut record = RowRecord::new();
        for (col, name) in table.columns.iter().enumerate() {
            let value = col
                .checked_sub(offset)
                .and_then(|c| row.get(c))
                .map(cell_to_json)
                .unwrap_or(Value::Null);
            record.insert(name.clone(), value);
        }
        table.rows.push(record);
    }

    debug!(
        "Sheet '{}': {} columns, {} rows",
        sheet_name,
        table.columns.len(),
        table.row_count()
    );
    table
}

fn is_blank_row(row: &[Data]) -> bool {
    row.iter().all(|cell| matches!(cell, Data::Empty))
}

/// Header cells → unique column names.
///
/// Empty headers become `Unnamed: <position>`; repeated names get a `.N`
/// suffix with the smallest free `N`.
pub fn column_names(header: &[Data]) -> Vec<String> {
    let raw: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(col, cell)| cell_to_column_name(cell).unwrap_or_else(|| format!("Unnamed: {}", col)))
        .collect();

    let mut seen: HashSet<String> = HashSet::new();
    let mut names = Vec::with_capacity(raw.len());
    for name in raw {
        let mut candidate = name.clone();
        let mut n = 1;
        while seen.contains(&candidate) {
            candidate = format!("{}.{}", name, n);
            n += 1;
        }
        seen.insert(candidate.clone());
        names.push(candidate);
    }
    names
}
