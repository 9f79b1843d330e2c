use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::models::{DateRange, OpenPunchPolicy};
use crate::utils::date::parse_optional_date;
use chrono::{NaiveDate, Weekday};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for attendiff
/// Reconcile attendance punches with timesheet bookings
#[derive(Parser)]
#[command(
    name = "attendiff",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compare attended vs booked hours, weekly totals and leave calendars",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Dataset file (JSON with punches, timesheet and leaves)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// `--from`/`--to` or a single `--range` expression.
#[derive(Args, Debug, Clone, Default)]
pub struct RangeArgs {
    #[arg(long, value_name = "YYYY-MM-DD", help = "First day (inclusive)")]
    pub from: Option<String>,

    #[arg(long, value_name = "YYYY-MM-DD", help = "Last day (inclusive)")]
    pub to: Option<String>,

    #[arg(
        long,
        short = 'r',
        value_name = "RANGE",
        conflicts_with_all = ["from", "to"],
        help = "Year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or ranges like YYYY-MM:YYYY-MM)"
    )]
    pub range: Option<String>,
}

impl RangeArgs {
    /// Parsed bounds; either may be missing.
    pub fn bounds(&self) -> AppResult<(Option<NaiveDate>, Option<NaiveDate>)> {
        if let Some(expr) = &self.range {
            let r = DateRange::parse(expr)?;
            return Ok((Some(r.from), Some(r.to)));
        }
        Ok((
            parse_optional_date(self.from.as_ref())?,
            parse_optional_date(self.to.as_ref())?,
        ))
    }

    /// Label used in default output file names.
    pub fn file_stem(&self) -> AppResult<String> {
        let (from, to) = self.bounds()?;
        Ok(match (from, to) {
            (Some(f), Some(t)) => format!("{f}_to_{t}"),
            (Some(f), None) => format!("from_{f}"),
            (None, Some(t)) => format!("until_{t}"),
            (None, None) => "all".to_string(),
        })
    }
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value = "table")]
    pub format: ExportFormat,

    #[arg(long, value_name = "FILE", help = "Write to FILE (or into directory FILE)")]
    pub file: Option<String>,

    #[arg(long, short = 'f', help = "Overwrite FILE without asking")]
    pub force: bool,
}

impl OutputArgs {
    /// Error for a format the current command cannot produce.
    pub fn unsupported(&self, allowed: &[ExportFormat]) -> AppError {
        let names: Vec<&str> = allowed.iter().map(|f| f.as_str()).collect();
        AppError::UnsupportedFormat(format!(
            "'{}' (use one of: {})",
            self.format.as_str(),
            names.join(", ")
        ))
    }

    /// Colors only make sense on a terminal.
    pub fn colored(&self) -> bool {
        self.file.is_none()
    }
}

/// Engine overrides shared by punch-based reports.
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    #[arg(long = "open-punches", value_enum, help = "How to treat punches without punch out")]
    pub open_punches: Option<OpenPunchPolicy>,

    #[arg(long = "skip-invalid", help = "Skip malformed records instead of failing")]
    pub skip_invalid: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Dates where attended and booked hours differ
    Diff {
        #[arg(long, short = 'e', help = "Employee id")]
        employee: String,

        #[command(flatten)]
        range: RangeArgs,

        #[arg(long, help = "Tolerance in hours below which differences are ignored")]
        epsilon: Option<f64>,

        #[command(flatten)]
        engine: EngineArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Punches annotated with their weekly total and the gap to the target
    Weekly {
        #[arg(long, short = 'e', help = "Employee id")]
        employee: String,

        #[command(flatten)]
        range: RangeArgs,

        #[arg(long, help = "Weekly target in hours")]
        target: Option<f64>,

        #[arg(long = "week-start", value_name = "DAY", help = "First day of the week (mon, tue, ...)")]
        week_start: Option<Weekday>,

        #[arg(long, help = "One row per week instead of one per punch")]
        summary: bool,

        #[command(flatten)]
        engine: EngineArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Timesheet bookings with the overall total
    Timesheet {
        #[arg(long, short = 'e', help = "Employee id")]
        employee: String,

        #[command(flatten)]
        range: RangeArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Leave calendar of all employees
    Leave {
        #[command(flatten)]
        range: RangeArgs,

        #[arg(long, help = "Only leaves starting after today")]
        upcoming: bool,

        #[arg(long = "prod-id", help = "PRODID of the iCalendar document")]
        prod_id: Option<String>,

        #[arg(long = "skip-invalid", help = "Skip malformed leave spans instead of failing")]
        skip_invalid: bool,

        #[command(flatten)]
        output: OutputArgs,
    },
}
