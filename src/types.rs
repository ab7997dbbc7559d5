use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

//==============================================================================
// Sheet Selection
//==============================================================================

/// Which worksheet of the workbook to convert
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSelector {
    /// Last sheet in declaration order
    Last,
    /// The workbook's default sheet (first in declaration order)
    First,
    /// 0-based position in declaration order
    Index(usize),
    /// Exact sheet name
    Name(String),
}

impl SheetSelector {
    /// Resolve the selector against the declared sheet names.
    ///
    /// Returns the position of the chosen sheet, or `None` when the
    /// selector points outside the list (including an empty list).
    pub fn resolve(&self, sheet_names: &[String]) -> Option<usize> {
        if sheet_names.is_empty() {
            return None;
        }
        match self {
            SheetSelector::Last => Some(sheet_names.len() - 1),
            SheetSelector::First => Some(0),
            SheetSelector::Index(i) => (*i < sheet_names.len()).then_some(*i),
            SheetSelector::Name(name) => sheet_names.iter().position(|s| s == name),
        }
    }
}

impl FromStr for SheetSelector {
    type Err = String;

    /// `last`, `first`/`default`, a 0-based index, `name:<sheet>`, or a bare sheet name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(name) = s.strip_prefix("name:") {
            if name.is_empty() {
                return Err("sheet name after 'name:' must not be empty".to_string());
            }
            return Ok(SheetSelector::Name(name.to_string()));
        }

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("sheet selector must not be empty".to_string());
        }

        match trimmed.to_lowercase().as_str() {
            "last" => Ok(SheetSelector::Last),
            "first" | "default" => Ok(SheetSelector::First),
            _ => match trimmed.parse::<usize>() {
                Ok(i) => Ok(SheetSelector::Index(i)),
                Err(_) => Ok(SheetSelector::Name(s.to_string())),
            },
        }
    }
}

impl fmt::Display for SheetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetSelector::Last => write!(f, "last"),
            SheetSelector::First => write!(f, "first"),
            SheetSelector::Index(i) => write!(f, "{}", i),
            SheetSelector::Name(name) => write!(f, "name:{}", name),
        }
    }
}

//==============================================================================
// Row Records
//==============================================================================

/// One data row: column name → cell value, in column order
pub type RowRecord = serde_json::Map<String, serde_json::Value>;

/// A worksheet materialized as header + row records
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<RowRecord>,
}

impl SheetTable {
    pub fn new(name: String) -> Self {
        Self {
            name,
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// What a finished conversion reports back to the caller
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSummary {
    /// All sheet names, in declaration order
    pub sheet_names: Vec<String>,
    /// The sheet that was converted
    pub sheet_name: String,
    pub columns: Vec<String>,
    pub row_count: usize,
    pub output_path: PathBuf,
    /// Leading records, for display
    pub preview: Vec<RowRecord>,
}
