//! Spreadsheet cell → JSON value

use calamine::{Data, ExcelDateTime};
use chrono::NaiveDateTime;
use serde_json::{Number, Value};
use tracing::warn;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert one cell to its JSON representation.
///
/// Empty cells, error cells and non-finite numbers become `null`. Floats
/// holding an integral value are emitted as integers.
pub fn cell_to_json(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::String(s) => Value::String(s.clone()),
        Data::Int(i) => Value::from(*i),
        Data::Float(f) => float_to_json(*f),
        Data::Bool(b) => Value::Bool(*b),
        Data::DateTime(dt) => datetime_to_json(dt),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Value::String(s.clone()),
        Data::Error(e) => {
            warn!("Cell error {} converted to null", e);
            Value::Null
        }
    }
}

/// Render a header cell as a column name. `None` for empty headers.
pub fn cell_to_column_name(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::Float(f) => Some(match float_to_json(*f) {
            Value::Null => f.to_string(),
            v => v.to_string(),
        }),
        Data::DateTime(dt) => Some(match datetime_to_json(dt) {
            Value::String(s) => s,
            v => v.to_string(),
        }),
        other => Some(other.to_string()),
    }
}

fn float_to_json(f: f64) -> Value {
    if !f.is_finite() {
        return Value::Null;
    }
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        return Value::from(f as i64);
    }
    Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
}

fn datetime_to_json(dt: &ExcelDateTime) -> Value {
    if dt.is_duration() {
        return Value::String(format_duration(dt.as_f64()));
    }
    match dt.as_datetime() {
        Some(naive) => Value::String(format_datetime(&naive)),
        None => {
            warn!("Date serial {} out of range, kept as number", dt.as_f64());
            float_to_json(dt.as_f64())
        }
    }
}

/// ISO-8601 without offset; fractional seconds only when present
fn format_datetime(naive: &NaiveDateTime) -> String {
    naive.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

/// `H:MM:SS` with hours allowed past 24
fn format_duration(days: f64) -> String {
    let total = (days * SECONDS_PER_DAY).round() as i64;
    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();
    format!(
        "{}{}:{:02}:{:02}",
        sign,
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}
