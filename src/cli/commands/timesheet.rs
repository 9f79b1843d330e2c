use super::open_dataset;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::report::ReportAssembler;
use crate::core::timesheet::TimesheetReport;
use crate::errors::AppResult;
use crate::export::{CsvExporter, ExportFormat, columns, to_json, write_output};
use crate::ui::messages::warning;
use crate::utils::formatting::format_hours;
use crate::utils::table::{Column, Table};

/// Handle the `timesheet` subcommand
///
/// The table view accepts open bounds; file formats need both dates.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Timesheet {
        employee,
        range,
        output,
    } = &cli.command
    {
        let (from, to) = range.bounds()?;

        let source = open_dataset(cli, cfg)?;
        let assembler = ReportAssembler::new(&source, &source, &source, cfg.report_settings());

        let content = match output.format {
            ExportFormat::Table => {
                let report = assembler.timesheet(employee, from, to)?;
                if report.is_empty() {
                    warning("No time entries found.");
                    return Ok(());
                }
                render_table(&report)
            }
            ExportFormat::Csv => {
                let report = assembler.timesheet_export(employee, from, to)?;
                CsvExporter::export(&report.rows, &columns::timesheet())?
            }
            ExportFormat::Json => {
                let report = assembler.timesheet_export(employee, from, to)?;
                to_json(&report)?
            }
            _ => {
                return Err(output.unsupported(&[
                    ExportFormat::Table,
                    ExportFormat::Csv,
                    ExportFormat::Json,
                ]));
            }
        };

        let default_name = format!(
            "timesheet_{}.{}",
            range.file_stem()?,
            output.format.extension()
        );

        write_output(
            &content,
            output.file.as_deref(),
            &default_name,
            output.format.label(),
            output.force,
        )?;
    }
    Ok(())
}

fn render_table(report: &TimesheetReport) -> String {
    let mut table = Table::new(vec![
        Column::left("User"),
        Column::left("Date"),
        Column::right("Hours"),
        Column::right("Overall"),
        Column::left("Project"),
        Column::left("Activity"),
        Column::left("Comment"),
    ]);

    for r in &report.rows {
        table.add_row(vec![
            r.employee_id.clone(),
            r.date.to_string(),
            format_hours(r.hours),
            format_hours(r.overall_hours),
            r.project.clone(),
            r.activity.clone(),
            r.comment.replace('\n', " "),
        ]);
    }

    let mut out = table.render();
    out.push_str(&format!("\nTotal hours: {}\n", format_hours(report.total_hours)));
    out
}
