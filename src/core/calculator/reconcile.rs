//! Per-date comparison of attended (punched) vs booked (timesheet) hours.

use crate::errors::{AppError, AppResult};
use crate::models::{OpenPunchPolicy, PunchInterval, ReconciliationRow, TimesheetEntry};
use crate::utils::time::seconds_to_hours;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Default tolerance in hours (3.6 ms): far below punch granularity,
/// far above the noise of summing f64 hours.
pub const DEFAULT_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReconciliationAggregator {
    /// Rows with `|difference| <= epsilon` are dropped.
    pub epsilon: f64,
    pub open_punch_policy: OpenPunchPolicy,
}

impl Default for ReconciliationAggregator {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            open_punch_policy: OpenPunchPolicy::default(),
        }
    }
}

impl ReconciliationAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_open_punch_policy(mut self, policy: OpenPunchPolicy) -> Self {
        self.open_punch_policy = policy;
        self
    }

    /// Outer-join attended and booked hours on date and keep the dates
    /// where they disagree by more than `epsilon`, ascending by date.
    pub fn compute(
        &self,
        punches: &[PunchInterval],
        entries: &[TimesheetEntry],
    ) -> AppResult<Vec<ReconciliationRow>> {
        let attended = attended_seconds_by_date(punches, self.open_punch_policy)?;
        let booked = booked_seconds_by_date(entries)?;

        let dates: BTreeSet<NaiveDate> = attended.keys().chain(booked.keys()).copied().collect();
        let total_dates = dates.len();

        let rows: Vec<ReconciliationRow> = dates
            .into_iter()
            .map(|date| ReconciliationRow {
                date,
                attended_hours: seconds_to_hours(attended.get(&date).copied().unwrap_or(0)),
                booked_hours: seconds_to_hours(booked.get(&date).copied().unwrap_or(0)),
            })
            .filter(|row| row.difference_hours().abs() > self.epsilon)
            .collect();

        debug!(
            dates = total_dates,
            discrepancies = rows.len(),
            "reconciliation computed"
        );

        Ok(rows)
    }
}

/// Attended seconds per date of `punch_in`. Sums stay integral so the
/// only rounding happens in the final hour conversion.
pub fn attended_seconds_by_date(
    punches: &[PunchInterval],
    policy: OpenPunchPolicy,
) -> AppResult<BTreeMap<NaiveDate, i64>> {
    let mut out = BTreeMap::new();

    for p in punches {
        if let Some(secs) = p.attended_seconds(policy)? {
            let total = out.entry(p.date()).or_insert(0);
            *total = add_seconds(*total, secs, p.date())?;
        }
    }

    Ok(out)
}

/// Booked seconds per timesheet date.
pub fn booked_seconds_by_date(
    entries: &[TimesheetEntry],
) -> AppResult<BTreeMap<NaiveDate, i64>> {
    let mut out = BTreeMap::new();

    for e in entries {
        let total = out.entry(e.date).or_insert(0);
        *total = add_seconds(*total, e.signed_seconds()?, e.date)?;
    }

    Ok(out)
}

fn add_seconds(total: i64, secs: i64, date: NaiveDate) -> AppResult<i64> {
    total.checked_add(secs).ok_or_else(|| {
        AppError::InvalidInterval(format!("total seconds on {date} overflow"))
    })
}
