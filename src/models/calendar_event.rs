use chrono::NaiveDate;
use serde::Serialize;

/// All-day calendar event, `end` exclusive.
///
/// Serialized field names follow what FullCalendar reads from an event
/// source (`allDay`, `extendedProps`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub color: String,
    pub all_day: bool,
    pub extended_props: LeaveDetails,
}

/// The leave an event was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDetails {
    pub employee_id: String,
    pub employee_name: String,
    pub leave_type: String,
    pub status: String,
}

impl CalendarEvent {
    /// Last day covered by the event (inclusive).
    pub fn last_day(&self) -> NaiveDate {
        self.end.pred_opt().unwrap_or(self.end)
    }
}
