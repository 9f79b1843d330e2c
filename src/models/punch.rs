use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// How a punch without `punch_out` is treated by the aggregators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OpenPunchPolicy {
    /// Leave the punch out of every sum and log a warning.
    #[default]
    Exclude,
    /// Fail with `InvalidInterval`.
    Strict,
}

impl OpenPunchPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpenPunchPolicy::Exclude => "exclude",
            OpenPunchPolicy::Strict => "strict",
        }
    }
}

/// One clock-in/clock-out span, timestamps in UTC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchInterval {
    pub employee_id: String,
    pub punch_in: DateTime<Utc>,
    #[serde(default)]
    pub punch_out: Option<DateTime<Utc>>, // None ⇔ still clocked in
}

impl PunchInterval {
    pub fn new(
        employee_id: impl Into<String>,
        punch_in: DateTime<Utc>,
        punch_out: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            punch_in,
            punch_out,
        }
    }

    /// Calendar date the punch is booked on (date of `punch_in`).
    pub fn date(&self) -> NaiveDate {
        self.punch_in.date_naive()
    }

    pub fn is_open(&self) -> bool {
        self.punch_out.is_none()
    }

    /// Rejects `punch_out < punch_in`. Open punches are valid records.
    pub fn validate(&self) -> AppResult<()> {
        match self.punch_out {
            Some(out) if out < self.punch_in => Err(AppError::InvalidInterval(format!(
                "punch of '{}' ends at {} before it starts at {}",
                self.employee_id,
                out.to_rfc3339(),
                self.punch_in.to_rfc3339()
            ))),
            _ => Ok(()),
        }
    }

    /// Seconds between punch in and punch out, `None` when the punch is open.
    pub fn duration_seconds(&self) -> AppResult<Option<i64>> {
        self.validate()?;
        Ok(self
            .punch_out
            .map(|out| (out - self.punch_in).num_seconds()))
    }

    /// Attended seconds under `policy`.
    ///
    /// - closed punch → `Some(seconds)`
    /// - open punch, `Exclude` → `None` (logged)
    /// - open punch, `Strict` → `InvalidInterval`
    pub fn attended_seconds(&self, policy: OpenPunchPolicy) -> AppResult<Option<i64>> {
        match self.duration_seconds()? {
            Some(secs) => Ok(Some(secs)),
            None => match policy {
                OpenPunchPolicy::Exclude => {
                    warn!(
                        employee = %self.employee_id,
                        punch_in = %self.punch_in.to_rfc3339(),
                        "open punch excluded from attended hours"
                    );
                    Ok(None)
                }
                OpenPunchPolicy::Strict => Err(AppError::InvalidInterval(format!(
                    "punch of '{}' started at {} has no punch out",
                    self.employee_id,
                    self.punch_in.to_rfc3339()
                ))),
            },
        }
    }
}
