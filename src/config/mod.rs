use crate::core::calculator::reconcile::DEFAULT_EPSILON;
use crate::core::calculator::weekly::DEFAULT_TARGET_WEEKLY_HOURS;
use crate::core::calendar::default_palette;
use crate::core::report::ReportSettings;
use crate::errors::{AppError, AppResult};
use crate::export::ics::DEFAULT_PROD_ID;
use crate::models::OpenPunchPolicy;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default dataset file, overridden by `--data`.
    #[serde(default)]
    pub data_file: Option<String>,
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
    #[serde(default = "default_target_weekly_hours")]
    pub target_weekly_hours: f64,
    #[serde(default = "default_week_start")]
    pub week_start: Weekday,
    #[serde(default)]
    pub open_punch_policy: OpenPunchPolicy,
    #[serde(default)]
    pub skip_invalid: bool,
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
    #[serde(default = "default_prod_id")]
    pub prod_id: String,
}

fn default_epsilon() -> f64 {
    DEFAULT_EPSILON
}
fn default_target_weekly_hours() -> f64 {
    DEFAULT_TARGET_WEEKLY_HOURS
}
fn default_week_start() -> Weekday {
    Weekday::Mon
}
fn default_prod_id() -> String {
    DEFAULT_PROD_ID.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            epsilon: default_epsilon(),
            target_weekly_hours: default_target_weekly_hours(),
            week_start: default_week_start(),
            open_punch_policy: OpenPunchPolicy::default(),
            skip_invalid: false,
            palette: default_palette(),
            prod_id: default_prod_id(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("attendiff")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".attendiff")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("attendiff.conf")
    }

    /// Load configuration from `path` (or the standard location).
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write the configuration as YAML, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(AppError::Config(format!(
                "epsilon must be a non-negative number, got {}",
                self.epsilon
            )));
        }
        if !self.target_weekly_hours.is_finite() || self.target_weekly_hours < 0.0 {
            return Err(AppError::Config(format!(
                "target_weekly_hours must be a non-negative number, got {}",
                self.target_weekly_hours
            )));
        }
        if self.palette.is_empty() {
            return Err(AppError::InvalidPalette);
        }
        Ok(())
    }

    pub fn report_settings(&self) -> ReportSettings {
        ReportSettings {
            epsilon: self.epsilon,
            target_weekly_hours: self.target_weekly_hours,
            week_start: self.week_start,
            open_punch_policy: self.open_punch_policy,
            palette: self.palette.clone(),
            skip_invalid: self.skip_invalid,
        }
    }
}
