//! Fetch → validate → aggregate, for each report the front end offers.

use crate::core::calculator::reconcile::{DEFAULT_EPSILON, ReconciliationAggregator};
use crate::core::calculator::weekly::{DEFAULT_TARGET_WEEKLY_HOURS, WeeklyWindowAggregator};
use crate::core::calendar::{LeaveEventBuilder, default_palette};
use crate::core::timesheet::TimesheetReport;
use crate::errors::AppResult;
use crate::models::{
    AnnotatedPunchRow, CalendarEvent, DateRange, LeaveSpan, OpenPunchPolicy, PunchInterval,
    ReconciliationRow, WeekKey, WeeklyAggregate,
};
use crate::sources::{LeaveSource, PunchRecordSource, TimesheetSource};
use chrono::{NaiveDate, Weekday};
use serde::Serialize;
use tracing::warn;

/// Engine knobs, usually taken from `Config`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSettings {
    pub epsilon: f64,
    pub target_weekly_hours: f64,
    pub week_start: Weekday,
    pub open_punch_policy: OpenPunchPolicy,
    pub palette: Vec<String>,
    /// Drop malformed records (with a warning) instead of failing.
    pub skip_invalid: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            target_weekly_hours: DEFAULT_TARGET_WEEKLY_HOURS,
            week_start: Weekday::Mon,
            open_punch_policy: OpenPunchPolicy::default(),
            palette: default_palette(),
            skip_invalid: false,
        }
    }
}

/// Annotated punches together with their per-week reduction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyReport {
    pub rows: Vec<AnnotatedPunchRow>,
    pub weeks: Vec<WeeklyAggregate>,
}

pub struct ReportAssembler<'a> {
    punches: &'a dyn PunchRecordSource,
    timesheets: &'a dyn TimesheetSource,
    leaves: &'a dyn LeaveSource,
    settings: ReportSettings,
}

impl<'a> ReportAssembler<'a> {
    pub fn new(
        punches: &'a dyn PunchRecordSource,
        timesheets: &'a dyn TimesheetSource,
        leaves: &'a dyn LeaveSource,
        settings: ReportSettings,
    ) -> Self {
        Self {
            punches,
            timesheets,
            leaves,
            settings,
        }
    }

    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    /// Dates where attended and booked hours disagree. Both bounds required.
    pub fn attendance_diff(
        &self,
        employee_id: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> AppResult<Vec<ReconciliationRow>> {
        let range = DateRange::required(from, to)?;

        let punches = self.screen_punches(self.punches.punches(employee_id, &range)?);
        let entries = self.timesheets.timesheet_entries(employee_id, &range)?;

        ReconciliationAggregator::new()
            .with_epsilon(self.settings.epsilon)
            .with_open_punch_policy(self.settings.open_punch_policy)
            .compute(&punches, &entries)
    }

    /// Punches annotated with their weekly totals. Both bounds required.
    ///
    /// Totals always cover whole weeks: punches are fetched from the first
    /// day of the week holding `from` to the last day of the week holding
    /// `to`, and only rows dated inside `[from, to]` are returned.
    pub fn weekly(
        &self,
        employee_id: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> AppResult<WeeklyReport> {
        let range = DateRange::required(from, to)?;
        let week_start = self.settings.week_start;
        let window = DateRange::new(
            WeekKey::of(range.from, week_start).first_day(),
            WeekKey::of(range.to, week_start).last_day(),
        )?;

        let punches = self.screen_punches(self.punches.punches(employee_id, &window)?);

        let aggregator = WeeklyWindowAggregator::new()
            .with_week_start(week_start)
            .with_target(self.settings.target_weekly_hours)
            .with_open_punch_policy(self.settings.open_punch_policy);

        let mut rows = aggregator.annotate(&punches)?;
        rows.retain(|r| range.contains(r.date));

        // weeks without a single punch inside the range are not reported
        let mut weeks = aggregator.summarize(&punches)?;
        weeks.retain(|w| rows.iter().any(|r| r.week == w.week));

        Ok(WeeklyReport { rows, weeks })
    }

    /// Timesheet listing for display; missing bounds cover the whole calendar.
    pub fn timesheet(
        &self,
        employee_id: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> AppResult<TimesheetReport> {
        let range = DateRange::open_ended(from, to)?;
        let entries = self.timesheets.timesheet_entries(employee_id, &range)?;
        TimesheetReport::build(&entries)
    }

    /// Timesheet listing for download. Both bounds required.
    pub fn timesheet_export(
        &self,
        employee_id: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> AppResult<TimesheetReport> {
        let range = DateRange::required(from, to)?;
        let entries = self.timesheets.timesheet_entries(employee_id, &range)?;
        TimesheetReport::build(&entries)
    }

    /// Leave calendar of all employees.
    ///
    /// `starting_after` keeps only leaves whose first day is strictly later.
    pub fn leave_calendar(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        starting_after: Option<NaiveDate>,
    ) -> AppResult<Vec<CalendarEvent>> {
        let range = DateRange::open_ended(from, to)?;

        let mut spans = self.screen_leaves(self.leaves.leave_spans(&range)?);
        if let Some(day) = starting_after {
            spans.retain(|s| s.start_date > day);
        }

        LeaveEventBuilder::build(&spans, &self.settings.palette)
    }

    /// With `skip_invalid`, drop punches the aggregators would reject.
    /// Otherwise pass everything through so the aggregator fails loudly.
    fn screen_punches(&self, punches: Vec<PunchInterval>) -> Vec<PunchInterval> {
        if !self.settings.skip_invalid {
            return punches;
        }

        let strict = self.settings.open_punch_policy == OpenPunchPolicy::Strict;

        punches
            .into_iter()
            .filter(|p| {
                let rejected = match p.validate() {
                    Err(e) => Some(e.to_string()),
                    Ok(()) if strict && p.is_open() => Some("open punch".to_string()),
                    Ok(()) => None,
                };
                if let Some(reason) = &rejected {
                    warn!(employee = %p.employee_id, punch_in = %p.punch_in, %reason, "punch skipped");
                }
                rejected.is_none()
            })
            .collect()
    }

    fn screen_leaves(&self, spans: Vec<LeaveSpan>) -> Vec<LeaveSpan> {
        if !self.settings.skip_invalid {
            return spans;
        }

        spans
            .into_iter()
            .filter(|s| match s.validate() {
                Ok(()) => true,
                Err(e) => {
                    warn!(employee = %s.employee_name, reason = %e, "leave span skipped");
                    false
                }
            })
            .collect()
    }
}
