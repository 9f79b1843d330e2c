//! Result rows produced by the engine.

use super::week::WeekKey;
use chrono::{DateTime, NaiveDate, Utc};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Attended vs booked hours for one calendar date.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciliationRow {
    pub date: NaiveDate,
    pub attended_hours: f64,
    pub booked_hours: f64,
}

impl ReconciliationRow {
    pub fn difference_hours(&self) -> f64 {
        self.attended_hours - self.booked_hours
    }
}

// `difference_hours` is derived, so the derive macro cannot emit it.
impl Serialize for ReconciliationRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ReconciliationRow", 4)?;
        s.serialize_field("date", &self.date)?;
        s.serialize_field("attended_hours", &self.attended_hours)?;
        s.serialize_field("booked_hours", &self.booked_hours)?;
        s.serialize_field("difference_hours", &self.difference_hours())?;
        s.end()
    }
}

/// A punch annotated with the total of its whole week.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AnnotatedPunchRow {
    pub employee_id: String,
    pub date: NaiveDate,
    pub punch_in: DateTime<Utc>,
    pub punch_out: Option<DateTime<Utc>>,
    pub hours: f64,
    pub week: WeekKey,
    pub hours_per_week: f64,
    pub difference_per_week: f64,
}

/// One week reduced to its total.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct WeeklyAggregate {
    pub week: WeekKey,
    pub total_hours: f64,
    pub difference_from_target: f64,
}

/// Timesheet listing line, carrying the total of the whole listing.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TimesheetRow {
    pub employee_id: String,
    pub date: NaiveDate,
    pub hours: f64,
    pub overall_hours: f64,
    pub project: String,
    pub activity: String,
    pub comment: String,
}
