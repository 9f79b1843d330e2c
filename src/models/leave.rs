use crate::errors::{AppError, AppResult};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// An approved/requested leave, both bounds inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveSpan {
    pub employee_id: String,
    pub employee_name: String,
    pub leave_type: String,
    pub status: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl LeaveSpan {
    pub fn new(
        employee_id: impl Into<String>,
        employee_name: impl Into<String>,
        leave_type: impl Into<String>,
        status: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            employee_name: employee_name.into(),
            leave_type: leave_type.into(),
            status: status.into(),
            start_date,
            end_date,
        }
    }

    /// Build a span from its first day and its length in days
    /// (`end = start + length_days - 1`).
    pub fn from_length(
        employee_id: impl Into<String>,
        employee_name: impl Into<String>,
        leave_type: impl Into<String>,
        status: impl Into<String>,
        start_date: NaiveDate,
        length_days: u64,
    ) -> AppResult<Self> {
        if length_days == 0 {
            return Err(AppError::InvalidInterval(format!(
                "leave starting {start_date} has zero length"
            )));
        }

        let end_date = start_date
            .checked_add_days(Days::new(length_days - 1))
            .ok_or_else(|| {
                AppError::InvalidInterval(format!("leave starting {start_date} overflows"))
            })?;

        Ok(Self::new(
            employee_id,
            employee_name,
            leave_type,
            status,
            start_date,
            end_date,
        ))
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.end_date < self.start_date {
            return Err(AppError::InvalidInterval(format!(
                "leave of '{}' ends {} before it starts {}",
                self.employee_name, self.end_date, self.start_date
            )));
        }
        Ok(())
    }

    /// Number of calendar days covered, bounds included.
    pub fn length_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Identity used for deduplication.
    pub(crate) fn dedup_key(&self) -> (&str, &str, &str, NaiveDate) {
        (
            &self.employee_id,
            &self.leave_type,
            &self.status,
            self.start_date,
        )
    }
}
