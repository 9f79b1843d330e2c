use super::{non_negative, open_dataset, settings_with};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::report::ReportAssembler;
use crate::errors::AppResult;
use crate::export::{CsvExporter, ExportFormat, columns, to_json, write_output};
use crate::models::ReconciliationRow;
use crate::ui::messages::warning;
use crate::utils::formatting::{colorize_difference, format_hours, format_signed_hours};
use crate::utils::table::{Column, Table};

/// Handle the `diff` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Diff {
        employee,
        range,
        epsilon,
        engine,
        output,
    } = &cli.command
    {
        let (from, to) = range.bounds()?;

        let mut settings = settings_with(cfg, engine);
        if let Some(eps) = epsilon {
            settings.epsilon = non_negative("epsilon", *eps)?;
        }

        let source = open_dataset(cli, cfg)?;
        let assembler = ReportAssembler::new(&source, &source, &source, settings);
        let rows = assembler.attendance_diff(employee, from, to)?;

        let content = match output.format {
            ExportFormat::Table => {
                if rows.is_empty() {
                    warning("No differences found.");
                    return Ok(());
                }
                render_table(&rows, output.colored())
            }
            ExportFormat::Csv => CsvExporter::export(&rows, &columns::reconciliation())?,
            ExportFormat::Json => to_json(&rows)?,
            _ => {
                return Err(output.unsupported(&[
                    ExportFormat::Table,
                    ExportFormat::Csv,
                    ExportFormat::Json,
                ]));
            }
        };

        let default_name = format!(
            "attendance_diff_{}_{}.{}",
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

fn render_table(rows: &[ReconciliationRow], colored: bool) -> String {
    let mut table = Table::new(vec![
        Column::left("Date"),
        Column::right("Attended (h)"),
        Column::right("Booked (h)"),
        Column::right("Difference (h)"),
    ]);

    for r in rows {
        let diff = if colored {
            colorize_difference(r.difference_hours())
        } else {
            format_signed_hours(r.difference_hours())
        };
        table.add_row(vec![
            r.date.to_string(),
            format_hours(r.attended_hours),
            format_hours(r.booked_hours),
            diff,
        ]);
    }

    table.render()
}
