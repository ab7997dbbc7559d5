//! Core conversion pipeline

pub mod converter;

pub use converter::TableToJsonConverter;
