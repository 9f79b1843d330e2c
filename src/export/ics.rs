//! iCalendar 2.0 (RFC 5545) rendering of all-day leave events.

use crate::errors::{AppError, AppResult};
use crate::models::CalendarEvent;
use std::collections::HashSet;

pub const DEFAULT_PROD_ID: &str = "-//attendiff//Leave Calendar//EN";

const UID_SUFFIX: &str = "@attendiff";

/// Content lines longer than this many octets are folded.
const MAX_LINE_OCTETS: usize = 75;

pub struct IcsExporter;

impl IcsExporter {
    /// Render a VCALENDAR with one VEVENT per event.
    ///
    /// Fails with `Serialization` (and returns nothing) when two events map
    /// to the same UID, when an event does not span at least one day, or
    /// when a text value holds a control character the format cannot carry.
    pub fn export(events: &[CalendarEvent], prod_id: &str) -> AppResult<String> {
        let mut lines: Vec<String> = vec![
            "BEGIN:VCALENDAR".into(),
            "VERSION:2.0".into(),
            format!("PRODID:{}", escape_text(prod_id)?),
            "CALSCALE:GREGORIAN".into(),
            "METHOD:PUBLISH".into(),
        ];

        let mut uids = HashSet::new();

        for ev in events {
            let uid = event_uid(ev);
            if !uids.insert(uid.clone()) {
                return Err(AppError::Serialization(format!(
                    "duplicate UID '{uid}' for event '{}'",
                    ev.title
                )));
            }

            if ev.end <= ev.start {
                return Err(AppError::Serialization(format!(
                    "event '{}' ends {} on or before its start {}",
                    ev.title, ev.end, ev.start
                )));
            }

            let props = &ev.extended_props;
            let description = format!(
                "{}: {} ({})",
                props.employee_name, props.leave_type, props.status
            );

            lines.push("BEGIN:VEVENT".into());
            lines.push(format!("UID:{}", escape_text(&uid)?));
            // midnight UTC of the first day keeps the output reproducible
            lines.push(format!("DTSTAMP:{}T000000Z", ev.start.format("%Y%m%d")));
            lines.push(format!("SUMMARY:{}", escape_text(&ev.title)?));
            lines.push(format!("DESCRIPTION:{}", escape_text(&description)?));
            lines.push(format!("CATEGORIES:{}", escape_text(&props.leave_type)?));
            lines.push("STATUS:CONFIRMED".into());
            lines.push("TRANSP:TRANSPARENT".into());
            lines.push("CLASS:PUBLIC".into());
            lines.push(format!("DTSTART;VALUE=DATE:{}", ev.start.format("%Y%m%d")));
            lines.push(format!("DTEND;VALUE=DATE:{}", ev.end.format("%Y%m%d")));
            lines.push("END:VEVENT".into());
        }

        lines.push("END:VCALENDAR".into());

        let mut out = String::new();
        for line in &lines {
            out.push_str(&fold_line(line));
            out.push_str("\r\n");
        }
        Ok(out)
    }
}

/// Stable identifier from employee, leave type and first day.
///
/// Components are percent-encoded so distinct keys never share a UID.
pub fn event_uid(ev: &CalendarEvent) -> String {
    format!(
        "{}-{}-{}{}",
        ev.start.format("%Y%m%d"),
        uid_component(&ev.extended_props.employee_id),
        uid_component(&ev.extended_props.leave_type),
        UID_SUFFIX
    )
}

fn uid_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        if b.is_ascii_alphanumeric() || b == b'.' || b == b'_' {
            out.push(b as char);
        } else {
            out.push_str(&format!("%{b:02X}"));
        }
    }
    out
}

/// Escape a TEXT value: backslash, semicolon, comma and line breaks.
pub fn escape_text(value: &str) -> AppResult<String> {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("\\n");
            }
            '\n' => out.push_str("\\n"),
            '\t' => out.push(c),
            c if c.is_control() => {
                return Err(AppError::Serialization(format!(
                    "control character U+{:04X} cannot be encoded in a calendar text value",
                    c as u32
                )));
            }
            c => out.push(c),
        }
    }

    Ok(out)
}

/// Fold a content line at 75 octets, never splitting a UTF-8 sequence.
/// Continuation lines start with a single space.
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut used = 0;

    for c in line.chars() {
        let n = c.len_utf8();
        if used + n > MAX_LINE_OCTETS {
            out.push_str("\r\n ");
            used = 1;
        }
        out.push(c);
        used += n;
    }

    out
}
