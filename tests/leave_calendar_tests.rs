mod common;
use attendiff::core::calendar::{DEFAULT_PALETTE, default_palette};
use attendiff::core::{ColorTable, LeaveEventBuilder};
use attendiff::errors::AppError;
use attendiff::export::to_json;
use attendiff::models::LeaveSpan;
use common::{d, leave};

fn two_colors() -> Vec<String> {
    vec!["#aa0000".to_string(), "#00bb00".to_string()]
}

#[test]
fn test_span_from_length_becomes_exclusive_end() {
    let span = LeaveSpan::from_length(
        "alice",
        "Alice",
        "Vacation",
        "Scheduled",
        d("2024-03-01"),
        3,
    )
    .expect("span");
    assert_eq!(span.end_date, d("2024-03-03"));
    assert_eq!(span.length_days(), 3);

    let events = LeaveEventBuilder::build(&[span], &default_palette()).expect("build");

    assert_eq!(events.len(), 1);
    let ev = &events[0];
    assert_eq!(ev.title, "Alice - Vacation");
    assert_eq!(ev.start, d("2024-03-01"));
    assert_eq!(ev.end, d("2024-03-04"));
    assert_eq!(ev.last_day(), d("2024-03-03"));
    assert!(ev.all_day);
    assert_eq!(ev.color, DEFAULT_PALETTE[0]);
    assert_eq!(ev.extended_props.status, "Scheduled");
}

#[test]
fn test_zero_length_span_is_rejected() {
    let err = LeaveSpan::from_length("a", "A", "Vacation", "Taken", d("2024-03-01"), 0)
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInterval(_)));
}

#[test]
fn test_colors_follow_first_appearance_and_wrap() {
    let spans = vec![
        leave("Alice", "Vacation", "Taken", "2024-03-01", "2024-03-01"),
        leave("Bob", "Vacation", "Taken", "2024-03-02", "2024-03-02"),
        leave("Alice", "Sick Leave", "Taken", "2024-03-05", "2024-03-05"),
        leave("Carol", "Vacation", "Taken", "2024-03-06", "2024-03-06"),
    ];
    let palette = two_colors();

    let events = LeaveEventBuilder::build(&spans, &palette).expect("build");

    let colors: Vec<&str> = events.iter().map(|e| e.color.as_str()).collect();
    assert_eq!(
        colors,
        vec![
            palette[0].as_str(),
            palette[1].as_str(),
            palette[0].as_str(),
            palette[0].as_str()
        ]
    );
}

#[test]
fn test_identical_spans_are_emitted_once() {
    let spans = vec![
        leave("Alice", "Vacation", "Scheduled", "2024-03-01", "2024-03-03"),
        leave("Alice", "Vacation", "Scheduled", "2024-03-01", "2024-03-03"),
        leave("Alice", "Vacation", "Taken", "2024-03-01", "2024-03-03"),
    ];

    let events = LeaveEventBuilder::build(&spans, &default_palette()).expect("build");

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].extended_props.status, "Scheduled");
    assert_eq!(events[1].extended_props.status, "Taken");
}

#[test]
fn test_empty_palette_is_rejected() {
    let spans = vec![leave("Alice", "Vacation", "Taken", "2024-03-01", "2024-03-01")];

    let err = LeaveEventBuilder::build(&spans, &[]).unwrap_err();
    assert!(matches!(err, AppError::InvalidPalette));
}

#[test]
fn test_end_before_start_is_rejected() {
    let spans = vec![leave("Alice", "Vacation", "Taken", "2024-03-05", "2024-03-01")];

    let err = LeaveEventBuilder::build(&spans, &default_palette()).unwrap_err();
    assert!(matches!(err, AppError::InvalidInterval(_)));
}

#[test]
fn test_every_build_starts_from_a_fresh_table() {
    let palette = two_colors();

    let first = LeaveEventBuilder::build(
        &[leave("Alice", "Vacation", "Taken", "2024-03-01", "2024-03-01")],
        &palette,
    )
    .expect("build");
    let second = LeaveEventBuilder::build(
        &[leave("Bob", "Vacation", "Taken", "2024-03-01", "2024-03-01")],
        &palette,
    )
    .expect("build");

    assert_eq!(first[0].color, palette[0]);
    assert_eq!(second[0].color, palette[0]);
}

#[test]
fn test_color_table_can_be_carried_across_builds() {
    let palette = two_colors();
    let table = ColorTable::new(&palette).expect("table");

    let (_, table) = LeaveEventBuilder::build_with_table(
        &[leave("Alice", "Vacation", "Taken", "2024-03-01", "2024-03-01")],
        table,
    )
    .expect("build");
    let (events, table) = LeaveEventBuilder::build_with_table(
        &[
            leave("Bob", "Vacation", "Taken", "2024-04-01", "2024-04-01"),
            leave("Alice", "Vacation", "Taken", "2024-04-02", "2024-04-02"),
        ],
        table,
    )
    .expect("build");

    assert_eq!(events[0].color, palette[1]);
    assert_eq!(events[1].color, palette[0]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.get("Bob"), Some(palette[1].as_str()));
    assert_eq!(table.get("Carol"), None);
}

#[test]
fn test_events_serialize_as_calendar_source() {
    let spans = vec![leave("Alice", "Vacation", "Taken", "2024-03-01", "2024-03-02")];
    let events = LeaveEventBuilder::build(&spans, &default_palette()).expect("build");

    let json = to_json(&events).expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse");

    let ev = &value[0];
    assert_eq!(ev["title"], "Alice - Vacation");
    assert_eq!(ev["start"], "2024-03-01");
    assert_eq!(ev["end"], "2024-03-03");
    assert_eq!(ev["allDay"], true);
    assert_eq!(ev["extendedProps"]["employeeName"], "Alice");
    assert_eq!(ev["extendedProps"]["leaveType"], "Vacation");
}
