//! CLI command handlers

pub mod commands;

pub use commands::{convert, report_error};
