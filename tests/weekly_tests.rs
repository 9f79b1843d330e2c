mod common;
use attendiff::core::WeeklyWindowAggregator;
use attendiff::errors::AppError;
use attendiff::models::{OpenPunchPolicy, WeekKey};
use chrono::Weekday;
use common::{assert_close, d, open_punch, punch};

fn working_week() -> Vec<attendiff::models::PunchInterval> {
    ["01", "02", "03", "04", "05"]
        .iter()
        .map(|day| {
            punch(
                "jdoe",
                &format!("2024-01-{day} 09:00"),
                &format!("2024-01-{day} 17:00"),
            )
        })
        .collect()
}

#[test]
fn test_every_row_carries_the_week_total() {
    let rows = WeeklyWindowAggregator::new()
        .with_target(38.5)
        .annotate(&working_week())
        .expect("annotate");

    assert_eq!(rows.len(), 5);
    for r in &rows {
        assert_close(r.hours, 8.0);
        assert_close(r.hours_per_week, 40.0);
        assert_close(r.difference_per_week, 1.5);
        assert_eq!(r.week.to_string(), "2024-W01");
    }
}

#[test]
fn test_weeks_are_totalled_separately() {
    let mut punches = working_week();
    punches.push(punch("jdoe", "2024-01-08 09:00", "2024-01-08 13:00"));

    let agg = WeeklyWindowAggregator::new().with_target(38.5);

    let rows = agg.annotate(&punches).expect("annotate");
    assert_eq!(rows.len(), 6);
    assert_close(rows[5].hours_per_week, 4.0);
    assert_close(rows[5].difference_per_week, -34.5);

    let weeks = agg.summarize(&punches).expect("summarize");
    assert_eq!(weeks.len(), 2);
    assert_eq!(weeks[0].week.to_string(), "2024-W01");
    assert_close(weeks[0].total_hours, 40.0);
    assert_eq!(weeks[1].week.to_string(), "2024-W02");
    assert_close(weeks[1].difference_from_target, -34.5);
}

#[test]
fn test_week_starting_on_sunday() {
    // Sunday 2024-01-07 opens the week that holds Monday 2024-01-08
    let punches = vec![
        punch("jdoe", "2024-01-06 09:00", "2024-01-06 10:00"),
        punch("jdoe", "2024-01-07 09:00", "2024-01-07 11:00"),
        punch("jdoe", "2024-01-08 09:00", "2024-01-08 12:00"),
    ];

    let weeks = WeeklyWindowAggregator::new()
        .with_week_start(Weekday::Sun)
        .summarize(&punches)
        .expect("summarize");

    assert_eq!(weeks.len(), 2);
    assert_eq!(weeks[0].week.to_string(), "2023-12-31");
    assert_close(weeks[0].total_hours, 1.0);
    assert_eq!(weeks[1].week.to_string(), "2024-01-07");
    assert_close(weeks[1].total_hours, 5.0);
}

#[test]
fn test_iso_week_across_the_year_boundary() {
    let key = WeekKey::of(d("2024-12-31"), Weekday::Mon);
    assert_eq!(key.to_string(), "2025-W01");
    assert_eq!(key.first_day(), d("2024-12-30"));
    assert_eq!(key.last_day(), d("2025-01-05"));
    assert!(key.contains(d("2025-01-05")));
    assert!(!key.contains(d("2025-01-06")));
}

#[test]
fn test_rows_are_ordered_by_punch_in() {
    let mut punches = working_week();
    punches.reverse();

    let rows = WeeklyWindowAggregator::new()
        .annotate(&punches)
        .expect("annotate");

    let dates: Vec<_> = rows.iter().map(|r| r.date).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
}

#[test]
fn test_open_punch_is_left_out_of_the_week() {
    let mut punches = working_week();
    punches.push(open_punch("jdoe", "2024-01-05 18:00"));

    let rows = WeeklyWindowAggregator::new()
        .annotate(&punches)
        .expect("annotate");
    assert_eq!(rows.len(), 5);
    assert_close(rows[0].hours_per_week, 40.0);

    let err = WeeklyWindowAggregator::new()
        .with_open_punch_policy(OpenPunchPolicy::Strict)
        .annotate(&punches)
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInterval(_)));
}

#[test]
fn test_no_punches_no_rows() {
    let agg = WeeklyWindowAggregator::new();
    assert!(agg.annotate(&[]).expect("annotate").is_empty());
    assert!(agg.summarize(&[]).expect("summarize").is_empty());
}
