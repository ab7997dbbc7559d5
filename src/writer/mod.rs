use crate::error::{ConversionError, ConversionResult};
use crate::types::RowRecord;
use std::fs;
use std::path::Path;

/// Serialize records as a pretty JSON array (2-space indent, UTF-8 kept literal)
pub fn to_json_string(records: &[RowRecord]) -> ConversionResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write records to `path`, replacing any existing file.
///
/// The document is serialized before the file is touched, so a
/// serialization failure leaves `path` as it was.
pub fn write_json(path: &Path, records: &[RowRecord]) -> ConversionResult<()> {
    let json = to_json_string(records)?;
    fs::write(path, json).map_err(|source| ConversionError::Write {
        path: path.to_path_buf(),
        source,
    })
}
