use crate::errors::{AppError, AppResult};
use crate::utils::time::SECONDS_PER_HOUR;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Self-reported booking against a project/activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetEntry {
    pub employee_id: String,
    pub date: NaiveDate,
    pub project: String,
    pub activity: String,
    pub duration_seconds: u64,
    #[serde(default)]
    pub comment: Option<String>,
}

impl TimesheetEntry {
    pub fn new(
        employee_id: impl Into<String>,
        date: NaiveDate,
        project: impl Into<String>,
        activity: impl Into<String>,
        duration_seconds: u64,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            date,
            project: project.into(),
            activity: activity.into(),
            duration_seconds,
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn hours(&self) -> f64 {
        self.duration_seconds as f64 / SECONDS_PER_HOUR
    }

    /// Duration as signed seconds for summing; fails instead of wrapping.
    pub fn signed_seconds(&self) -> AppResult<i64> {
        i64::try_from(self.duration_seconds).map_err(|_| {
            AppError::InvalidInterval(format!(
                "booking of '{}' on {} lasts {} seconds, more than can be summed",
                self.employee_id, self.date, self.duration_seconds
            ))
        })
    }
}
