use super::{non_negative, open_dataset, settings_with};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::report::{ReportAssembler, WeeklyReport};
use crate::errors::AppResult;
use crate::export::{CsvExporter, ExportFormat, columns, to_json, write_output};
use crate::ui::messages::warning;
use crate::utils::formatting::{colorize_difference, format_hours, format_signed_hours};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_clock;

/// Handle the `weekly` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Weekly {
        employee,
        range,
        target,
        week_start,
        summary,
        engine,
        output,
    } = &cli.command
    {
        let (from, to) = range.bounds()?;

        let mut settings = settings_with(cfg, engine);
        if let Some(t) = target {
            settings.target_weekly_hours = non_negative("target", *t)?;
        }
        if let Some(day) = week_start {
            settings.week_start = *day;
        }

        let source = open_dataset(cli, cfg)?;
        let assembler = ReportAssembler::new(&source, &source, &source, settings);
        let report = assembler.weekly(employee, from, to)?;

        let content = match output.format {
            ExportFormat::Table => {
                if report.rows.is_empty() {
                    warning("No punches found.");
                    return Ok(());
                }
                if *summary {
                    render_summary(&report, output.colored())
                } else {
                    render_rows(&report, output.colored())
                }
            }
            ExportFormat::Csv if *summary => {
                CsvExporter::export(&report.weeks, &columns::weekly_aggregates())?
            }
            ExportFormat::Csv => CsvExporter::export(&report.rows, &columns::annotated_punches())?,
            ExportFormat::Json if *summary => to_json(&report.weeks)?,
            ExportFormat::Json => to_json(&report.rows)?,
            _ => {
                return Err(output.unsupported(&[
                    ExportFormat::Table,
                    ExportFormat::Csv,
                    ExportFormat::Json,
                ]));
            }
        };

        let default_name = format!(
            "weekly_{}_{}.{}",
            employee,
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

fn signed(hours: f64, colored: bool) -> String {
    if colored {
        colorize_difference(hours)
    } else {
        format_signed_hours(hours)
    }
}

fn render_rows(report: &WeeklyReport, colored: bool) -> String {
    let mut table = Table::new(vec![
        Column::left("Date"),
        Column::left("In"),
        Column::left("Out"),
        Column::right("Hours"),
        Column::left("Week"),
        Column::right("Week total"),
        Column::right("vs target"),
    ]);

    for r in &report.rows {
        table.add_row(vec![
            r.date.to_string(),
            format_clock(Some(&r.punch_in)),
            format_clock(r.punch_out.as_ref()),
            format_hours(r.hours),
            r.week.to_string(),
            format_hours(r.hours_per_week),
            signed(r.difference_per_week, colored),
        ]);
    }

    table.render()
}

fn render_summary(report: &WeeklyReport, colored: bool) -> String {
    let mut table = Table::new(vec![
        Column::left("Week"),
        Column::left("From"),
        Column::left("To"),
        Column::right("Total (h)"),
        Column::right("vs target"),
    ]);

    for w in &report.weeks {
        table.add_row(vec![
            w.week.to_string(),
            w.week.first_day().to_string(),
            w.week.last_day().to_string(),
            format_hours(w.total_hours),
            signed(w.difference_from_target, colored),
        ]);
    }

    table.render()
}
