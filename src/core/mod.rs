pub mod calculator;
pub mod calendar;
pub mod report;
pub mod timesheet;

pub use calculator::reconcile::ReconciliationAggregator;
pub use calculator::weekly::WeeklyWindowAggregator;
pub use calendar::{ColorTable, LeaveEventBuilder};
pub use report::{ReportAssembler, ReportSettings};
pub use timesheet::TimesheetReport;
