pub mod calendar_event;
pub mod date_range;
pub mod leave;
pub mod punch;
pub mod rows;
pub mod timesheet;
pub mod week;

pub use calendar_event::{CalendarEvent, LeaveDetails};
pub use date_range::DateRange;
pub use leave::LeaveSpan;
pub use punch::{OpenPunchPolicy, PunchInterval};
pub use rows::{AnnotatedPunchRow, ReconciliationRow, TimesheetRow, WeeklyAggregate};
pub use timesheet::TimesheetEntry;
pub use week::WeekKey;
