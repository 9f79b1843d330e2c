#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use attendiff::models::{LeaveSpan, PunchInterval, TimesheetEntry};
use attendiff::sources::Dataset;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::env;
use std::fs;
use std::path::PathBuf;

/// attendiff binary pointed at a private (missing) config file, so a
/// developer's ~/.attendiff never leaks into the tests.
pub fn atd(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("attendiff");
    cmd.arg("--config").arg(temp_path(name, "conf"));
    cmd
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_attendiff.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn ts(s: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
        .expect("valid timestamp")
        .and_utc()
}

pub fn punch(employee: &str, punch_in: &str, punch_out: &str) -> PunchInterval {
    PunchInterval::new(employee, ts(punch_in), Some(ts(punch_out)))
}

pub fn open_punch(employee: &str, punch_in: &str) -> PunchInterval {
    PunchInterval::new(employee, ts(punch_in), None)
}

pub fn booking(employee: &str, date: &str, seconds: u64) -> TimesheetEntry {
    TimesheetEntry::new(employee, d(date), "Apollo", "Development", seconds)
}

pub fn leave(name: &str, leave_type: &str, status: &str, start: &str, end: &str) -> LeaveSpan {
    let id = name.to_lowercase().replace(' ', ".");
    LeaveSpan::new(id, name, leave_type, status, d(start), d(end))
}

pub const HOUR: u64 = 3600;

/// One working week for `jdoe` (Mon 2024-01-01 .. Fri 2024-01-05, 8h a day),
/// bookings that disagree on Mon, Fri and Sat, a colleague's punch, and a
/// handful of leaves.
pub fn sample_dataset() -> Dataset {
    Dataset {
        punches: vec![
            punch("jdoe", "2024-01-01 09:00", "2024-01-01 17:00"),
            punch("jdoe", "2024-01-02 08:00", "2024-01-02 12:00"),
            punch("jdoe", "2024-01-02 13:00", "2024-01-02 17:00"),
            punch("jdoe", "2024-01-03 09:00", "2024-01-03 17:00"),
            punch("jdoe", "2024-01-04 09:00", "2024-01-04 17:00"),
            punch("jdoe", "2024-01-05 09:00", "2024-01-05 17:00"),
            punch("asmith", "2024-01-01 10:00", "2024-01-01 12:00"),
        ],
        timesheet: vec![
            booking("jdoe", "2024-01-01", 7 * HOUR),
            booking("jdoe", "2024-01-02", 8 * HOUR).with_comment("Review, planning"),
            booking("jdoe", "2024-01-03", 8 * HOUR),
            booking("jdoe", "2024-01-04", 8 * HOUR),
            booking("jdoe", "2024-01-05", 6 * HOUR),
            booking("jdoe", "2024-01-06", 2 * HOUR),
            booking("asmith", "2024-01-01", 2 * HOUR),
        ],
        leaves: vec![
            leave("Alice Smith", "Vacation", "Scheduled", "2099-03-01", "2099-03-03"),
            leave("Bob Brown", "Sick Leave", "Taken", "2099-03-02", "2099-03-02"),
            leave("Alice Smith", "Vacation", "Scheduled", "2099-03-01", "2099-03-03"),
            leave("Dave Green", "Training", "Taken", "2020-05-04", "2020-05-05"),
        ],
    }
}

/// Write `dataset` as JSON to a temp file and return its path.
pub fn write_dataset(name: &str, dataset: &Dataset) -> String {
    let path = temp_path(name, "json");
    let json = serde_json::to_string_pretty(dataset).expect("serialize dataset");
    fs::write(&path, json).expect("write dataset");
    path
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
