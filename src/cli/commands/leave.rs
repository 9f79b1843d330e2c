use super::open_dataset;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::report::ReportAssembler;
use crate::errors::AppResult;
use crate::export::{CsvExporter, ExportFormat, IcsExporter, columns, to_json, write_output};
use crate::models::CalendarEvent;
use crate::ui::messages::warning;
use crate::utils::date::today;
use crate::utils::table::{Column, Table};

/// Handle the `leave` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Leave {
        range,
        upcoming,
        prod_id,
        skip_invalid,
        output,
    } = &cli.command
    {
        let (from, to) = range.bounds()?;
        let starting_after = upcoming.then(today);

        let mut settings = cfg.report_settings();
        if *skip_invalid {
            settings.skip_invalid = true;
        }

        let source = open_dataset(cli, cfg)?;
        let assembler = ReportAssembler::new(&source, &source, &source, settings);
        let events = assembler.leave_calendar(from, to, starting_after)?;

        let content = match output.format {
            ExportFormat::Table => {
                if events.is_empty() {
                    warning("No leaves found.");
                    return Ok(());
                }
                render_table(&events)
            }
            ExportFormat::Ics => {
                let prod_id = prod_id.as_deref().unwrap_or(&cfg.prod_id);
                IcsExporter::export(&events, prod_id)?
            }
            ExportFormat::Json => to_json(&events)?,
            ExportFormat::Csv => CsvExporter::export(&events, &columns::calendar_events())?,
        };

        let default_name = format!(
            "leave_calendar_{}.{}",
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

fn render_table(events: &[CalendarEvent]) -> String {
    let mut table = Table::new(vec![
        Column::left("Employee"),
        Column::left("Type"),
        Column::left("Status"),
        Column::left("From"),
        Column::left("To"),
        Column::left("Color"),
    ]);

    for e in events {
        table.add_row(vec![
            e.extended_props.employee_name.clone(),
            e.extended_props.leave_type.clone(),
            e.extended_props.status.clone(),
            e.start.to_string(),
            e.last_day().to_string(),
            e.color.clone(),
        ]);
    }

    table.render()
}
