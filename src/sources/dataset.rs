//! JSON dataset file acting as punch, timesheet and leave source.
//!
//! ```json
//! {
//!   "punches":   [{ "employee_id": "jdoe", "punch_in": "2024-01-01T09:00:00Z", "punch_out": "2024-01-01T17:00:00Z" }],
//!   "timesheet": [{ "employee_id": "jdoe", "date": "2024-01-01", "project": "P", "activity": "A", "duration_seconds": 25200 }],
//!   "leaves":    [{ "employee_id": "jdoe", "employee_name": "John Doe", "leave_type": "Vacation",
//!                   "status": "Scheduled", "start_date": "2024-03-01", "end_date": "2024-03-03" }]
//! }
//! ```

use super::{LeaveSource, PunchRecordSource, TimesheetSource};
use crate::errors::{AppError, AppResult};
use crate::models::{DateRange, LeaveSpan, PunchInterval, TimesheetEntry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub punches: Vec<PunchInterval>,
    #[serde(default)]
    pub timesheet: Vec<TimesheetEntry>,
    #[serde(default)]
    pub leaves: Vec<LeaveSpan>,
}

#[derive(Debug, Clone, Default)]
pub struct DatasetSource {
    dataset: Dataset,
}

impl DatasetSource {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// Load a dataset file. Missing, unreadable or malformed files are all
    /// `DataSourceUnavailable`.
    pub fn open(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::DataSourceUnavailable(format!("{}: {e}", path.display()))
        })?;

        let dataset: Dataset = serde_json::from_str(&content).map_err(|e| {
            AppError::DataSourceUnavailable(format!("{}: {e}", path.display()))
        })?;

        debug!(
            path = %path.display(),
            punches = dataset.punches.len(),
            timesheet = dataset.timesheet.len(),
            leaves = dataset.leaves.len(),
            "dataset loaded"
        );

        Ok(Self::new(dataset))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

impl PunchRecordSource for DatasetSource {
    fn punches(&self, employee_id: &str, range: &DateRange) -> AppResult<Vec<PunchInterval>> {
        let mut out: Vec<PunchInterval> = self
            .dataset
            .punches
            .iter()
            .filter(|p| p.employee_id == employee_id && range.contains(p.date()))
            .cloned()
            .collect();
        out.sort_by_key(|p| p.punch_in);
        Ok(out)
    }
}

impl TimesheetSource for DatasetSource {
    fn timesheet_entries(
        &self,
        employee_id: &str,
        range: &DateRange,
    ) -> AppResult<Vec<TimesheetEntry>> {
        let mut out: Vec<TimesheetEntry> = self
            .dataset
            .timesheet
            .iter()
            .filter(|e| e.employee_id == employee_id && range.contains(e.date))
            .cloned()
            .collect();
        out.sort_by_key(|e| e.date);
        Ok(out)
    }
}

impl LeaveSource for DatasetSource {
    fn leave_spans(&self, range: &DateRange) -> AppResult<Vec<LeaveSpan>> {
        // file order is kept: color assignment follows it
        Ok(self
            .dataset
            .leaves
            .iter()
            .filter(|l| range.overlaps(l.start_date, l.end_date))
            .cloned()
            .collect())
    }
}
