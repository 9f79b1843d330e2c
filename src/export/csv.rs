//! RFC 4180 CSV rendering driven by a typed column list.

use crate::errors::{AppError, AppResult};
use crate::utils::formatting::format_hours;
use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};

/// How a column reads its value out of a row.
pub enum Field<R> {
    Text(fn(&R) -> String),
    /// Rendered with exactly two decimals.
    Hours(fn(&R) -> f64),
    Date(fn(&R) -> NaiveDate),
}

pub struct Column<R> {
    pub header: &'static str,
    pub field: Field<R>,
}

/// Ordered list of columns for rows of type `R`.
pub struct ColumnSpec<R> {
    columns: Vec<Column<R>>,
}

impl<R> Default for ColumnSpec<R> {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
        }
    }
}

impl<R> ColumnSpec<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, header: &'static str, f: fn(&R) -> String) -> Self {
        self.columns.push(Column {
            header,
            field: Field::Text(f),
        });
        self
    }

    pub fn hours(mut self, header: &'static str, f: fn(&R) -> f64) -> Self {
        self.columns.push(Column {
            header,
            field: Field::Hours(f),
        });
        self
    }

    pub fn date(mut self, header: &'static str, f: fn(&R) -> NaiveDate) -> Self {
        self.columns.push(Column {
            header,
            field: Field::Date(f),
        });
        self
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.header).collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    fn render_row(&self, row: &R, line: usize) -> AppResult<Vec<String>> {
        self.columns
            .iter()
            .map(|col| match &col.field {
                Field::Text(f) => Ok(f(row)),
                Field::Date(f) => Ok(f(row).format("%Y-%m-%d").to_string()),
                Field::Hours(f) => {
                    let v = f(row);
                    if v.is_finite() {
                        Ok(format_hours(v))
                    } else {
                        Err(AppError::Serialization(format!(
                            "row {line}: column '{}' is not a finite number ({v})",
                            col.header
                        )))
                    }
                }
            })
            .collect()
    }
}

pub struct CsvExporter;

impl CsvExporter {
    /// Header line plus one line per row, CRLF terminated.
    ///
    /// The whole document is rendered in memory: on error nothing is
    /// returned.
    pub fn export<R>(rows: &[R], spec: &ColumnSpec<R>) -> AppResult<String> {
        if spec.is_empty() {
            return Err(AppError::Serialization("no columns to export".into()));
        }

        let mut wtr = WriterBuilder::new()
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::CRLF)
            .from_writer(Vec::new());

        wtr.write_record(spec.headers())?;

        for (i, row) in rows.iter().enumerate() {
            wtr.write_record(spec.render_row(row, i + 1)?)?;
        }

        let bytes = wtr
            .into_inner()
            .map_err(|e| AppError::Serialization(format!("CSV flush error: {e}")))?;

        String::from_utf8(bytes)
            .map_err(|e| AppError::Serialization(format!("CSV encoding error: {e}")))
    }
}
