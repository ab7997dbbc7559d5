//! Table → JSON conversion

use crate::config::ConvertConfig;
use crate::error::ConversionResult;
use crate::excel::WorkbookImporter;
use crate::types::ConversionSummary;
use crate::writer;
use tracing::info;

/// One-shot converter: workbook sheet → JSON array of row records
pub struct TableToJsonConverter {
    config: ConvertConfig,
}

impl TableToJsonConverter {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// Read the selected sheet and write it to the output path.
    ///
    /// Nothing is written unless the sheet was read and serialized.
    pub fn convert(&self) -> ConversionResult<ConversionSummary> {
        self.convert_with(|_, _| {})
    }

    /// Like [`convert`](Self::convert), calling `on_selected` with all sheet
    /// names and the chosen one before the sheet is read.
    pub fn convert_with<F>(&self, on_selected: F) -> ConversionResult<ConversionSummary>
    where
        F: FnOnce(&[String], &str),
    {
        let mut importer = WorkbookImporter::open(&self.config.input_path)?;
        let sheet_names = importer.sheet_names();
        let sheet_name = importer.select(&self.config.sheet_selector)?;
        on_selected(&sheet_names, &sheet_name);

        let table = importer.read_table(&sheet_name)?;
        // Release the workbook before touching the output
        drop(importer);

        writer::write_json(&self.config.output_path, &table.rows)?;

        info!(
            "Converted sheet '{}' ({} rows) to {}",
            sheet_name,
            table.row_count(),
            self.config.output_path.display()
        );

        let preview = table
            .rows
            .iter()
            .take(self.config.preview_rows)
            .cloned()
            .collect();

        Ok(ConversionSummary {
            sheet_names,
            row_count: table.row_count(),
            sheet_name,
            columns: table.columns,
            output_path: self.config.output_path.clone(),
            preview,
        })
    }
}
