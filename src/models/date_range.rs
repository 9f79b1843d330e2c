use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use std::fmt;

/// Inclusive date interval used to filter every source query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> AppResult<Self> {
        if from > to {
            return Err(AppError::InvalidRange(format!(
                "start {from} is after end {to}"
            )));
        }
        Ok(Self { from, to })
    }

    /// Both bounds are mandatory: `MissingDateRange` when either is absent.
    pub fn required(from: Option<NaiveDate>, to: Option<NaiveDate>) -> AppResult<Self> {
        match (from, to) {
            (Some(f), Some(t)) => Self::new(f, t),
            _ => Err(AppError::MissingDateRange),
        }
    }

    /// Missing bounds widen to the whole calendar (`0001-01-01`..`9999-12-31`).
    pub fn open_ended(from: Option<NaiveDate>, to: Option<NaiveDate>) -> AppResult<Self> {
        let lo = NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN);
        let hi = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap_or(NaiveDate::MAX);
        Self::new(from.unwrap_or(lo), to.unwrap_or(hi))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    /// True when `[start, end]` shares at least one day with the range.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.to && end >= self.from
    }

    /// Parse a range expression.
    ///
    /// Accepted forms:
    /// - YYYY
    /// - YYYY-MM
    /// - YYYY-MM-DD
    /// - YYYY:YYYY
    /// - YYYY-MM:YYYY-MM
    /// - YYYY-MM-DD:YYYY-MM-DD
    pub fn parse(expr: &str) -> AppResult<Self> {
        let expr = expr.trim();

        if let Some((start_raw, end_raw)) = expr.split_once(':') {
            let start = start_raw.trim();
            let end = end_raw.trim();

            if start.len() != end.len() {
                return Err(AppError::InvalidRange(
                    "start and end must have same format".into(),
                ));
            }

            let (from, _) = period_bounds(start)?;
            let (_, to) = period_bounds(end)?;
            Self::new(from, to)
        } else {
            let (from, to) = period_bounds(expr)?;
            Self::new(from, to)
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.from, self.to)
    }
}

/// First and last day of a single period (year, month or day).
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p
                .parse()
                .map_err(|_| AppError::InvalidRange(format!("invalid year '{p}'")))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1)
                .ok_or_else(|| AppError::InvalidRange(format!("invalid year '{p}'")))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31)
                .ok_or_else(|| AppError::InvalidRange(format!("invalid year '{p}'")))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let d1 = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| AppError::InvalidRange(format!("invalid month '{p}'")))?;
            let next = d1
                .checked_add_months(chrono::Months::new(1))
                .ok_or_else(|| AppError::InvalidRange(format!("invalid month '{p}'")))?;
            let d2 = next
                .pred_opt()
                .ok_or_else(|| AppError::InvalidRange(format!("invalid month '{p}'")))?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(p.to_string()))?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidRange(format!(
            "unsupported range format '{p}'"
        ))),
    }
}
