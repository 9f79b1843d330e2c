//! Weekly windowed totals.
//!
//! Two explicit passes:
//! 1. reduce attended seconds per week;
//! 2. annotate every punch with the total of its week.
//!
//! Every row of a week carries the same `hours_per_week`; rows are never
//! collapsed to one per week (use [`WeeklyWindowAggregator::summarize`] for
//! that).

use crate::errors::AppResult;
use crate::models::{
    AnnotatedPunchRow, OpenPunchPolicy, PunchInterval, WeekKey, WeeklyAggregate,
};
use crate::utils::time::seconds_to_hours;
use chrono::Weekday;
use std::collections::BTreeMap;

pub const DEFAULT_TARGET_WEEKLY_HOURS: f64 = 38.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklyWindowAggregator {
    pub week_start: Weekday,
    pub target_weekly_hours: f64,
    pub open_punch_policy: OpenPunchPolicy,
}

impl Default for WeeklyWindowAggregator {
    fn default() -> Self {
        Self {
            week_start: Weekday::Mon,
            target_weekly_hours: DEFAULT_TARGET_WEEKLY_HOURS,
            open_punch_policy: OpenPunchPolicy::default(),
        }
    }
}

/// A closed punch with its attended seconds.
struct Measured<'a> {
    punch: &'a PunchInterval,
    seconds: i64,
    week: WeekKey,
}

impl WeeklyWindowAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn with_target(mut self, target_weekly_hours: f64) -> Self {
        self.target_weekly_hours = target_weekly_hours;
        self
    }

    pub fn with_open_punch_policy(mut self, policy: OpenPunchPolicy) -> Self {
        self.open_punch_policy = policy;
        self
    }

    fn measure<'a>(&self, punches: &'a [PunchInterval]) -> AppResult<Vec<Measured<'a>>> {
        let mut out = Vec::with_capacity(punches.len());
        for punch in punches {
            if let Some(seconds) = punch.attended_seconds(self.open_punch_policy)? {
                out.push(Measured {
                    punch,
                    seconds,
                    week: WeekKey::of(punch.date(), self.week_start),
                });
            }
        }
        Ok(out)
    }

    fn reduce(measured: &[Measured<'_>]) -> BTreeMap<WeekKey, i64> {
        let mut totals = BTreeMap::new();
        for m in measured {
            *totals.entry(m.week).or_insert(0) += m.seconds;
        }
        totals
    }

    /// One aggregate per week, ascending.
    pub fn summarize(&self, punches: &[PunchInterval]) -> AppResult<Vec<WeeklyAggregate>> {
        let measured = self.measure(punches)?;

        Ok(Self::reduce(&measured)
            .into_iter()
            .map(|(week, secs)| {
                let total_hours = seconds_to_hours(secs);
                WeeklyAggregate {
                    week,
                    total_hours,
                    difference_from_target: total_hours - self.target_weekly_hours,
                }
            })
            .collect())
    }

    /// One row per closed punch, ordered by `punch_in`.
    pub fn annotate(&self, punches: &[PunchInterval]) -> AppResult<Vec<AnnotatedPunchRow>> {
        let measured = self.measure(punches)?;
        let totals = Self::reduce(&measured);

        let mut rows: Vec<AnnotatedPunchRow> = measured
            .iter()
            .map(|m| {
                let hours_per_week = seconds_to_hours(totals.get(&m.week).copied().unwrap_or(0));
                AnnotatedPunchRow {
                    employee_id: m.punch.employee_id.clone(),
                    date: m.punch.date(),
                    punch_in: m.punch.punch_in,
                    punch_out: m.punch.punch_out,
                    hours: seconds_to_hours(m.seconds),
                    week: m.week,
                    hours_per_week,
                    difference_per_week: hours_per_week - self.target_weekly_hours,
                }
            })
            .collect();

        rows.sort_by_key(|r| r.punch_in);
        Ok(rows)
    }
}
