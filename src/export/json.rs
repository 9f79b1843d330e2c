use crate::errors::AppResult;
use serde::Serialize;

/// Pretty-printed JSON of any serializable report.
///
/// Calendar events come out in the shape FullCalendar reads as an event
/// source.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    let mut s = serde_json::to_string_pretty(value)?;
    s.push('\n');
    Ok(s)
}
