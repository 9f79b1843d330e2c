// src/export/mod.rs

pub mod columns;
pub mod csv;
mod fs_utils;
pub mod ics;
pub mod json;

pub use self::csv::{ColumnSpec, CsvExporter};
pub use fs_utils::write_output;
pub use ics::IcsExporter;
pub use json::to_json;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Completion notice shared by every file export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Table,
    Csv,
    Json,
    Ics,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Table => "table",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Ics => "ics",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Table => "text/plain",
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
            ExportFormat::Ics => "text/calendar",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Table => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Ics => "ics",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Table => "Table",
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
            ExportFormat::Ics => "iCalendar",
        }
    }
}
