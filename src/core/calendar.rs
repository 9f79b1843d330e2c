//! Leave spans → all-day calendar events.

use crate::errors::{AppError, AppResult};
use crate::models::{CalendarEvent, LeaveDetails, LeaveSpan};
use chrono::{Days, NaiveDate};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Colors of the FullCalendar default category palette.
pub const DEFAULT_PALETTE: [&str; 6] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b",
];

pub fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
}

/// Employee → color assignments for one calendar build.
///
/// The n-th distinct employee (0-based, in order of first appearance) gets
/// `palette[n % palette.len()]`.
#[derive(Debug, Clone)]
pub struct ColorTable {
    palette: Vec<String>,
    assigned: HashMap<String, usize>,
}

impl ColorTable {
    pub fn new(palette: &[String]) -> AppResult<Self> {
        if palette.is_empty() {
            return Err(AppError::InvalidPalette);
        }
        Ok(Self {
            palette: palette.to_vec(),
            assigned: HashMap::new(),
        })
    }

    /// Palette index of `employee`, assigning the next one on first sight.
    pub fn index_for(&mut self, employee: &str) -> usize {
        if let Some(idx) = self.assigned.get(employee) {
            return *idx;
        }
        let idx = self.assigned.len() % self.palette.len();
        self.assigned.insert(employee.to_string(), idx);
        idx
    }

    pub fn color_for(&mut self, employee: &str) -> &str {
        let idx = self.index_for(employee);
        &self.palette[idx]
    }

    pub fn get(&self, employee: &str) -> Option<&str> {
        self.assigned
            .get(employee)
            .map(|idx| self.palette[*idx].as_str())
    }

    /// Number of distinct employees seen so far.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

pub struct LeaveEventBuilder;

impl LeaveEventBuilder {
    /// Build events with a fresh color table.
    pub fn build(spans: &[LeaveSpan], palette: &[String]) -> AppResult<Vec<CalendarEvent>> {
        let table = ColorTable::new(palette)?;
        let (events, _) = Self::build_with_table(spans, table)?;
        Ok(events)
    }

    /// Build events continuing from `table`, handing the table back.
    ///
    /// Spans identical in (employee, leave type, status, start date) are
    /// emitted once; input order is preserved.
    pub fn build_with_table(
        spans: &[LeaveSpan],
        mut table: ColorTable,
    ) -> AppResult<(Vec<CalendarEvent>, ColorTable)> {
        let mut seen: HashSet<(&str, &str, &str, NaiveDate)> = HashSet::new();
        let mut events = Vec::with_capacity(spans.len());

        for span in spans {
            span.validate()?;

            if !seen.insert(span.dedup_key()) {
                debug!(
                    employee = %span.employee_name,
                    leave_type = %span.leave_type,
                    start = %span.start_date,
                    "duplicate leave span skipped"
                );
                continue;
            }

            let end = span
                .end_date
                .checked_add_days(Days::new(1))
                .ok_or_else(|| {
                    AppError::InvalidInterval(format!(
                        "leave of '{}' ending {} cannot be represented",
                        span.employee_name, span.end_date
                    ))
                })?;

            let color = table.color_for(&span.employee_name).to_string();

            events.push(CalendarEvent {
                title: format!("{} - {}", span.employee_name, span.leave_type),
                start: span.start_date,
                end,
                color,
                all_day: true,
                extended_props: LeaveDetails {
                    employee_id: span.employee_id.clone(),
                    employee_name: span.employee_name.clone(),
                    leave_type: span.leave_type.clone(),
                    status: span.status.clone(),
                },
            });
        }

        Ok((events, table))
    }
}
