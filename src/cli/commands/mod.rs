pub mod config;
pub mod diff;
pub mod init;
pub mod leave;
pub mod timesheet;
pub mod weekly;

use crate::cli::parser::{Cli, EngineArgs};
use crate::config::Config;
use crate::core::report::ReportSettings;
use crate::errors::{AppError, AppResult};
use crate::sources::DatasetSource;
use std::path::Path;

/// Open the dataset named by `--data`, falling back to `data_file`.
pub(crate) fn open_dataset(cli: &Cli, cfg: &Config) -> AppResult<DatasetSource> {
    let path = cli
        .data
        .clone()
        .or_else(|| cfg.data_file.clone())
        .ok_or_else(|| {
            AppError::Config(
                "no dataset: pass --data <FILE> or set data_file in the configuration".into(),
            )
        })?;

    DatasetSource::open(Path::new(&path))
}

/// Configuration settings with command-line overrides applied.
pub(crate) fn settings_with(cfg: &Config, engine: &EngineArgs) -> ReportSettings {
    let mut settings = cfg.report_settings();
    if let Some(policy) = engine.open_punches {
        settings.open_punch_policy = policy;
    }
    if engine.skip_invalid {
        settings.skip_invalid = true;
    }
    settings
}

pub(crate) fn non_negative(name: &str, value: f64) -> AppResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(AppError::Config(format!(
            "{name} must be a non-negative number, got {value}"
        )))
    }
}
