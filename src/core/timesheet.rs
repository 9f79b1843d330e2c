use crate::errors::{AppError, AppResult};
use crate::models::{TimesheetEntry, TimesheetRow};
use crate::utils::time::seconds_to_hours;
use serde::Serialize;

/// Timesheet listing: one row per booking, each carrying the listing total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimesheetReport {
    pub rows: Vec<TimesheetRow>,
    pub total_hours: f64,
}

impl TimesheetReport {
    /// Rows are ordered by employee then date; bookings of the same day keep
    /// their input order.
    ///
    /// Fails with `InvalidInterval` when the total does not fit in `i64`
    /// seconds.
    pub fn build(entries: &[TimesheetEntry]) -> AppResult<Self> {
        let mut total_secs: i64 = 0;
        for e in entries {
            total_secs = total_secs.checked_add(e.signed_seconds()?).ok_or_else(|| {
                AppError::InvalidInterval(format!(
                    "timesheet total of '{}' overflows",
                    e.employee_id
                ))
            })?;
        }
        let total_hours = seconds_to_hours(total_secs);

        let mut sorted: Vec<&TimesheetEntry> = entries.iter().collect();
        sorted.sort_by(|a, b| (&a.employee_id, a.date).cmp(&(&b.employee_id, b.date)));

        let rows = sorted
            .into_iter()
            .map(|e| TimesheetRow {
                employee_id: e.employee_id.clone(),
                date: e.date,
                hours: e.hours(),
                overall_hours: total_hours,
                project: e.project.clone(),
                activity: e.activity.clone(),
                comment: e.comment.clone().unwrap_or_default(),
            })
            .collect();

        Ok(Self { rows, total_hours })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
