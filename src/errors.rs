//! Unified application error type.
//! Engine, exporters, sources and CLI all return AppError so that the
//! caller can decide once how to surface a failure.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Data sources
    // ---------------------------
    #[error("Data source unavailable: {0}")]
    DataSourceUnavailable(String),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Missing date range: both 'from' and 'to' are required")]
    MissingDateRange,

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("Invalid palette: at least one color is required")]
    InvalidPalette,

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("Export format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;
