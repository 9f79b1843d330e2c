use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Serialize, Serializer};
use std::fmt;

/// Identifies the week a date falls in.
///
/// Weeks starting on Monday render as ISO week keys (`2024-W01`); any other
/// week start renders as the date of the week's first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey {
    first_day: NaiveDate,
    iso: bool,
}

impl WeekKey {
    pub fn of(date: NaiveDate, week_start: Weekday) -> Self {
        let offset = (7 + date.weekday().num_days_from_monday()
            - week_start.num_days_from_monday())
            % 7;
        let first_day = date
            .checked_sub_days(Days::new(u64::from(offset)))
            .unwrap_or(NaiveDate::MIN);
        Self {
            first_day,
            iso: week_start == Weekday::Mon,
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first_day
            .checked_add_days(Days::new(6))
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first_day <= date && date <= self.last_day()
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.iso {
            let w = self.first_day.iso_week();
            write!(f, "{}-W{:02}", w.year(), w.week())
        } else {
            write!(f, "{}", self.first_day.format("%Y-%m-%d"))
        }
    }
}

impl Serialize for WeekKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
