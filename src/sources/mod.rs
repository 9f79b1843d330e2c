//! Record sources feeding the engine.
//!
//! Implementations return records already filtered to the requested
//! employee and date range. Any failure to reach the underlying store is
//! reported as `AppError::DataSourceUnavailable`; the engine never retries.

mod dataset;

pub use dataset::{Dataset, DatasetSource};

use crate::errors::AppResult;
use crate::models::{DateRange, LeaveSpan, PunchInterval, TimesheetEntry};

pub trait PunchRecordSource {
    /// Punches of `employee_id` whose `punch_in` date falls in `range`.
    fn punches(&self, employee_id: &str, range: &DateRange) -> AppResult<Vec<PunchInterval>>;
}

pub trait TimesheetSource {
    /// Bookings of `employee_id` dated inside `range`.
    fn timesheet_entries(
        &self,
        employee_id: &str,
        range: &DateRange,
    ) -> AppResult<Vec<TimesheetEntry>>;
}

pub trait LeaveSource {
    /// Leave spans of every employee overlapping `range`.
    fn leave_spans(&self, range: &DateRange) -> AppResult<Vec<LeaveSpan>>;
}
