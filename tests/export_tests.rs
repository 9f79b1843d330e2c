mod common;
use attendiff::core::calendar::default_palette;
use attendiff::core::{LeaveEventBuilder, TimesheetReport};
use attendiff::errors::AppError;
use attendiff::export::ics::{DEFAULT_PROD_ID, escape_text, event_uid, fold_line};
use attendiff::export::{CsvExporter, ExportFormat, IcsExporter, columns};
use attendiff::models::{CalendarEvent, ReconciliationRow};
use common::{HOUR, booking, d, leave};

fn events(spans: &[attendiff::models::LeaveSpan]) -> Vec<CalendarEvent> {
    LeaveEventBuilder::build(spans, &default_palette()).expect("build")
}

// ---------------------------
// CSV
// ---------------------------

#[test]
fn test_reconciliation_csv() {
    let rows = vec![
        ReconciliationRow {
            date: d("2024-01-01"),
            attended_hours: 8.0,
            booked_hours: 7.0,
        },
        ReconciliationRow {
            date: d("2024-01-06"),
            attended_hours: 0.0,
            booked_hours: 2.0 / 3.0,
        },
    ];

    let csv = CsvExporter::export(&rows, &columns::reconciliation()).expect("csv");

    assert_eq!(
        csv,
        "date,attended_hours,booked_hours,difference_hours\r\n\
         2024-01-01,8.00,7.00,1.00\r\n\
         2024-01-06,0.00,0.67,-0.67\r\n"
    );
}

#[test]
fn test_empty_rows_give_header_only() {
    let csv = CsvExporter::export(&[], &columns::reconciliation()).expect("csv");
    assert_eq!(csv, "date,attended_hours,booked_hours,difference_hours\r\n");
}

#[test]
fn test_text_fields_are_quoted_and_survive_a_reader() {
    let comment = "Review, \"planning\"\nand follow-up";
    let entries = vec![
        booking("jdoe", "2024-01-02", HOUR + 20 * 60).with_comment(comment),
        booking("jdoe", "2024-01-01", 2 * HOUR),
    ];
    let report = TimesheetReport::build(&entries).expect("report");

    let csv = CsvExporter::export(&report.rows, &columns::timesheet()).expect("csv");

    let mut rdr = csv::Reader::from_reader(csv.as_bytes());
    let headers: Vec<String> = rdr
        .headers()
        .expect("headers")
        .iter()
        .map(String::from)
        .collect();
    assert_eq!(
        headers,
        vec!["employee", "date", "hours", "overall", "project", "activity", "comment"]
    );

    let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.expect("record")).collect();
    assert_eq!(records.len(), 2);

    assert_eq!(&records[0][1], "2024-01-01");
    assert_eq!(&records[0][2], "2.00");
    assert_eq!(&records[0][3], "3.33");
    assert_eq!(&records[0][6], "");

    assert_eq!(&records[1][2], "1.33");
    assert_eq!(&records[1][6], comment);
}

#[test]
fn test_non_finite_hours_fail_serialization() {
    let rows = vec![ReconciliationRow {
        date: d("2024-01-01"),
        attended_hours: f64::NAN,
        booked_hours: 1.0,
    }];

    let err = CsvExporter::export(&rows, &columns::reconciliation()).unwrap_err();
    assert!(matches!(err, AppError::Serialization(_)));
}

// ---------------------------
// iCalendar
// ---------------------------

#[test]
fn test_calendar_framing_and_one_vevent_per_event() {
    let evs = events(&[
        leave("Alice Smith", "Vacation", "Scheduled", "2024-03-01", "2024-03-03"),
        leave("Bob Brown", "Sick Leave", "Taken", "2024-03-02", "2024-03-02"),
    ]);

    let ics = IcsExporter::export(&evs, DEFAULT_PROD_ID).expect("ics");

    assert!(ics.starts_with("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n"));
    assert!(ics.ends_with("END:VCALENDAR\r\n"));
    assert!(ics.contains(&format!("PRODID:{DEFAULT_PROD_ID}\r\n")));
    assert!(ics.contains("CALSCALE:GREGORIAN\r\n"));
    assert!(ics.contains("METHOD:PUBLISH\r\n"));

    // every line CRLF terminated
    assert!(!ics.replace("\r\n", "").contains('\n'));

    let lines: Vec<&str> = ics.split("\r\n").collect();
    let begins = lines.iter().filter(|l| **l == "BEGIN:VEVENT").count();
    let ends = lines.iter().filter(|l| **l == "END:VEVENT").count();
    assert_eq!(begins, 2);
    assert_eq!(ends, 2);

    // BEGIN/END strictly alternate
    let mut open = false;
    for l in &lines {
        match *l {
            "BEGIN:VEVENT" => {
                assert!(!open);
                open = true;
            }
            "END:VEVENT" => {
                assert!(open);
                open = false;
            }
            _ => {}
        }
    }
    assert!(!open);

    assert_eq!(lines.iter().filter(|l| l.starts_with("UID:")).count(), 2);
    assert_eq!(lines.iter().filter(|l| l.starts_with("DTSTAMP:")).count(), 2);
    assert!(ics.contains("DTSTAMP:20240301T000000Z\r\n"));
    assert!(ics.contains("DTSTAMP:20240302T000000Z\r\n"));
    assert!(ics.contains("DTSTART;VALUE=DATE:20240301\r\n"));
    assert!(ics.contains("DTEND;VALUE=DATE:20240304\r\n"));
    assert!(ics.contains("SUMMARY:Alice Smith - Vacation\r\n"));
    assert!(ics.contains("DESCRIPTION:Alice Smith: Vacation (Scheduled)\r\n"));
}

#[test]
fn test_empty_calendar_is_still_valid() {
    let ics = IcsExporter::export(&[], DEFAULT_PROD_ID).expect("ics");
    assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(ics.ends_with("END:VCALENDAR\r\n"));
    assert!(!ics.contains("BEGIN:VEVENT"));
}

#[test]
fn test_text_values_are_escaped() {
    let evs = events(&[leave(
        "Bob",
        "Sick; flu, day\noff",
        "Taken",
        "2024-03-02",
        "2024-03-02",
    )]);

    let ics = IcsExporter::export(&evs, DEFAULT_PROD_ID).expect("ics");

    assert!(ics.contains("SUMMARY:Bob - Sick\\; flu\\, day\\noff\r\n"));
    assert_eq!(
        escape_text("C:\\temp").expect("escape"),
        "C:\\\\temp".to_string()
    );
}

#[test]
fn test_control_characters_cannot_be_encoded() {
    let err = escape_text("bell\u{7}").unwrap_err();
    assert!(matches!(err, AppError::Serialization(_)));
}

#[test]
fn test_uid_collision_fails() {
    // same employee, type and start: only the status differs
    let evs = events(&[
        leave("Alice", "Vacation", "Scheduled", "2024-03-01", "2024-03-03"),
        leave("Alice", "Vacation", "Taken", "2024-03-01", "2024-03-03"),
    ]);
    assert_eq!(evs.len(), 2);

    let err = IcsExporter::export(&evs, DEFAULT_PROD_ID).unwrap_err();
    assert!(matches!(err, AppError::Serialization(_)));
}

#[test]
fn test_uids_are_stable_and_distinct() {
    let spans = vec![
        leave("Alice", "Vacation", "Taken", "2024-03-01", "2024-03-01"),
        leave("Alice", "Sick Leave", "Taken", "2024-03-01", "2024-03-01"),
    ];
    let evs = events(&spans);

    let a = event_uid(&evs[0]);
    let b = event_uid(&evs[1]);
    assert_ne!(a, b);
    assert!(a.ends_with("@attendiff"));

    let first = IcsExporter::export(&evs, DEFAULT_PROD_ID).expect("ics");
    let second = IcsExporter::export(&events(&spans), DEFAULT_PROD_ID).expect("ics");
    assert_eq!(first, second);
}

#[test]
fn test_long_lines_are_folded() {
    let long_type = "Parental leave for the whole spring term ".repeat(4);
    let evs = events(&[leave("Alice", &long_type, "Taken", "2024-03-01", "2024-03-01")]);

    let ics = IcsExporter::export(&evs, DEFAULT_PROD_ID).expect("ics");

    for line in ics.split("\r\n") {
        assert!(line.len() <= 75, "line too long: {line:?}");
    }

    let unfolded = ics.replace("\r\n ", "");
    assert!(unfolded.contains(&format!("SUMMARY:Alice - {}", long_type.trim_end())));
}

#[test]
fn test_fold_line_keeps_utf8_sequences_whole() {
    let line = format!("SUMMARY:{}", "è".repeat(60));
    let folded = fold_line(&line);

    for part in folded.split("\r\n") {
        assert!(part.len() <= 75);
    }
    assert_eq!(folded.replace("\r\n ", ""), line);
}

#[test]
fn test_download_formats() {
    assert_eq!(ExportFormat::Csv.mime_type(), "text/csv");
    assert_eq!(ExportFormat::Ics.mime_type(), "text/calendar");
    assert_eq!(ExportFormat::Json.mime_type(), "application/json");
    assert_eq!(ExportFormat::Ics.extension(), "ics");
}
