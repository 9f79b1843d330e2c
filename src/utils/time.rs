//! Time utilities: second/hour conversions and timestamp formatting.

use chrono::{DateTime, Utc};

pub const SECONDS_PER_HOUR: f64 = 3600.0;

pub fn seconds_to_hours(secs: i64) -> f64 {
    secs as f64 / SECONDS_PER_HOUR
}

/// `HH:MM` of a UTC timestamp, or `--:--` when absent.
pub fn format_clock(ts: Option<&DateTime<Utc>>) -> String {
    match ts {
        Some(t) => t.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}
