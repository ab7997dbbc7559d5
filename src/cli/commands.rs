use crate::config::ConvertConfig;
use crate::core::TableToJsonConverter;
use crate::error::{ConversionError, ConversionResult};
use crate::types::{ConversionSummary, RowRecord};
use colored::Colorize;
use serde_json::Value;

/// Render one cell for the preview table
fn format_cell(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Format the preview rows as a ` | `-separated table
fn format_preview(columns: &[String], rows: &[RowRecord]) -> Vec<String> {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format!("   {}", columns.join(" | ")));
    for (index, row) in rows.iter().enumerate() {
        let cells: Vec<String> = columns
            .iter()
            .map(|col| row.get(col).map(format_cell).unwrap_or_else(|| "-".to_string()))
            .collect();
        lines.push(format!("   {:>3}: {}", index + 1, cells.join(" | ")));
    }
    lines
}

/// Execute the convert command
pub fn convert(config: ConvertConfig) -> ConversionResult<ConversionSummary> {
    println!("{}", "🔥 xlsx2json - Excel to JSON".bold().green());
    println!("   Input:  {}", config.input_path.display());
    println!("   Output: {}", config.output_path.display());
    println!("   Sheet:  {}\n", config.sheet_selector.to_string().bright_yellow());

    let converter = TableToJsonConverter::new(config);
    let summary = converter.convert_with(|sheet_names, sheet_name| {
        println!("📑 Found {} sheets: {:?}", sheet_names.len(), sheet_names);
        println!("{}", format!("📖 Reading sheet: '{}'", sheet_name).cyan());
    })?;

    if !summary.preview.is_empty() {
        println!(
            "\n👀 Preview (first {} rows):",
            summary.preview.len()
        );
        for line in format_preview(&summary.columns, &summary.preview) {
            println!("{}", line);
        }
    }

    println!("\n{}", "=".repeat(50));
    println!("{}", "✅ SUCCESS: Conversion complete!".bold().green());
    println!("   File: {}", summary.output_path.display());
    println!("   Rows: {}", summary.row_count);
    println!("   Columns: {:?}", summary.columns);

    Ok(summary)
}

/// Print a failed conversion as a diagnostic plus remediation hint
pub fn report_error(error: &ConversionError) {
    eprintln!("{} {}", "❌ ERROR:".bold().red(), error);
    eprintln!("\n{}", error.hint().yellow());
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(&Value::Null), "-");
        assert_eq!(format_cell(&json!("ชาย")), "ชาย");
        assert_eq!(format_cell(&json!(12)), "12");
        assert_eq!(format_cell(&json!(1.5)), "1.5");
        assert_eq!(format_cell(&json!(true)), "true");
    }

    #[test]
    fn test_format_preview() {
        let columns = vec!["name".to_string(), "total".to_string()];
        let rows = vec![
            json!({"name": "A", "total": 1}).as_object().unwrap().clone(),
            json!({"name": "B", "total": null}).as_object().unwrap().clone(),
        ];

        let lines = format_preview(&columns, &rows);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "   name | total");
        assert_eq!(lines[1], "     1: A | 1");
        assert_eq!(lines[2], "     2: B | -");
    }
}
