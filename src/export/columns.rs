//! Column layouts of every tabular report.

use super::csv::ColumnSpec;
use crate::models::{
    AnnotatedPunchRow, CalendarEvent, ReconciliationRow, TimesheetRow, WeeklyAggregate,
};

pub fn reconciliation() -> ColumnSpec<ReconciliationRow> {
    ColumnSpec::<ReconciliationRow>::new()
        .date("date", |r| r.date)
        .hours("attended_hours", |r| r.attended_hours)
        .hours("booked_hours", |r| r.booked_hours)
        .hours("difference_hours", |r| r.difference_hours())
}

pub fn annotated_punches() -> ColumnSpec<AnnotatedPunchRow> {
    ColumnSpec::<AnnotatedPunchRow>::new()
        .text("employee", |r| r.employee_id.clone())
        .date("date", |r| r.date)
        .text("punch_in", |r| r.punch_in.to_rfc3339())
        .text("punch_out", |r| {
            r.punch_out.map(|t| t.to_rfc3339()).unwrap_or_default()
        })
        .hours("hours", |r| r.hours)
        .text("week", |r| r.week.to_string())
        .hours("hours_per_week", |r| r.hours_per_week)
        .hours("difference_per_week", |r| r.difference_per_week)
}

pub fn weekly_aggregates() -> ColumnSpec<WeeklyAggregate> {
    ColumnSpec::<WeeklyAggregate>::new()
        .text("week", |r| r.week.to_string())
        .date("first_day", |r| r.week.first_day())
        .hours("total_hours", |r| r.total_hours)
        .hours("difference_from_target", |r| r.difference_from_target)
}

pub fn timesheet() -> ColumnSpec<TimesheetRow> {
    ColumnSpec::<TimesheetRow>::new()
        .text("employee", |r| r.employee_id.clone())
        .date("date", |r| r.date)
        .hours("hours", |r| r.hours)
        .hours("overall", |r| r.overall_hours)
        .text("project", |r| r.project.clone())
        .text("activity", |r| r.activity.clone())
        .text("comment", |r| r.comment.clone())
}

pub fn calendar_events() -> ColumnSpec<CalendarEvent> {
    ColumnSpec::<CalendarEvent>::new()
        .text("title", |e| e.title.clone())
        .text("employee", |e| e.extended_props.employee_name.clone())
        .text("leave_type", |e| e.extended_props.leave_type.clone())
        .text("status", |e| e.extended_props.status.clone())
        .date("start", |e| e.start)
        .date("end", |e| e.end)
        .text("color", |e| e.color.clone())
}
