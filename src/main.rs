use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use xlsx2json::cli;
use xlsx2json::config::{ConvertConfig, DEFAULT_OUTPUT, DEFAULT_PREVIEW_ROWS};
use xlsx2json::types::SheetSelector;

/// Workbook converted when no INPUT is given
const DEFAULT_INPUT: &str = "รวมข้อมูลผู้สูงอายุ_2566.xlsx";

#[derive(Parser, Debug)]
#[command(name = "xlsx2json")]
#[command(about = "Dump one sheet of a spreadsheet workbook as a JSON array of row records")]
#[command(long_about = "xlsx2json - Excel/OpenDocument sheet to JSON

Reads one worksheet, treats its first row as the header, and writes every
following row as a JSON object (column name -> cell value) to the output file.

SHEET SELECTION (--sheet, required):
  last          Last sheet in the workbook
  first         First (default) sheet; 'default' is accepted too
  <index>       0-based sheet position, e.g. 2
  name:<name>   Sheet by exact name, e.g. name:Old people
  <name>        Any other value is taken as a sheet name

OUTPUT:
  UTF-8, 2-space indented, non-ASCII kept literal. Empty cells -> null,
  dates -> ISO-8601 strings. The output file is replaced on every run.

SUPPORTED FORMATS:
  .xlsx .xlsm .xlsb .xla .xlam .xls .ods

EXAMPLES:
  xlsx2json report.xlsx --sheet last              # writes data.json
  xlsx2json report.xlsx -s first -o first.json
  xlsx2json report.ods -s \"name:Summary\" -p 0      # no preview

Set RUST_LOG=xlsx2json=debug (or pass --verbose) for diagnostic logs.")]
#[command(version)]
struct Cli {
    /// Path to the workbook
    #[arg(default_value = DEFAULT_INPUT, env = "XLSX2JSON_INPUT")]
    input: PathBuf,

    /// Sheet to convert: last, first, <index>, or name:<name>
    #[arg(short, long, env = "XLSX2JSON_SHEET")]
    sheet: SheetSelector,

    /// Output JSON file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT, env = "XLSX2JSON_OUTPUT")]
    output: PathBuf,

    /// Number of rows to preview on stdout (0 disables the preview)
    #[arg(short, long, default_value_t = DEFAULT_PREVIEW_ROWS)]
    preview: usize,

    /// Show debug logs
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "xlsx2json=debug"
    } else {
        "xlsx2json=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config =
        ConvertConfig::new(cli.input, cli.sheet, cli.output).with_preview_rows(cli.preview);

    match cli::convert(config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            cli::report_error(&e);
            ExitCode::FAILURE
        }
    }
}
