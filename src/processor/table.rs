//! Tabular response shaping backed by Polars DataFrames
//!
//! CSV endpoints (`LISTING_STATUS`, `EARNINGS_CALENDAR`) decode into a plain
//! table with no index column. Financial report endpoints (`BALANCE_SHEET`,
//! `CASH_FLOW`, `INCOME_STATEMENT`) decode the `<period>Reports` array into a
//! table indexed by `fiscalDateEnding`, with a constant `symbol` column
//! inserted leftmost.

use std::io::Cursor;

use polars_core::prelude::*;
use polars_io::prelude::*;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::processor::Processor;
use crate::request::common::ReportPeriod;
use crate::response::Response;

/// A decoded tabular response.
///
/// Wraps a Polars [`DataFrame`] together with the series acting as the row
/// index, when the source defines one. Column order matches the order columns
/// first appear in the source; all CSV values stay strings.
#[derive(Debug, Clone)]
pub struct Table {
    df: DataFrame,
    index: Option<Series>,
}

impl Table {
    /// The underlying DataFrame (index column not included).
    pub fn df(&self) -> &DataFrame {
        &self.df
    }

    /// Consume the table, returning the underlying DataFrame.
    pub fn into_df(self) -> DataFrame {
        self.df
    }

    /// The designated index series, if the source defines one.
    ///
    /// Financial reports are indexed by `fiscalDateEnding`; CSV listings have
    /// no index and rows are addressed positionally from 0.
    pub fn index(&self) -> Option<&Series> {
        self.index.as_ref()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.df.height()
    }

    /// Number of columns (index column not included).
    pub fn width(&self) -> usize {
        self.df.width()
    }

    /// Keep only rows whose `symbol` column equals `symbol`.
    ///
    /// `None` returns the table unchanged. Zero matches yield an empty table,
    /// not an error; row order is preserved. Errors if the table has no
    /// `symbol` column.
    pub fn filter_symbol(&self, symbol: Option<&str>) -> Result<Table> {
        match symbol {
            Some(symbol) => self.filter_eq("symbol", symbol),
            None => Ok(self.clone()),
        }
    }

    /// Keep only rows whose `status` column is the literal `active`.
    ///
    /// Surviving rows keep their relative order and are re-addressed from
    /// position 0. Errors if the table has no `status` column.
    pub fn filter_active(&self) -> Result<Table> {
        self.filter_eq("status", "active")
    }

    fn filter_eq(&self, column: &str, value: &str) -> Result<Table> {
        let mask = self.df.column(column)?.as_materialized_series().str()?.equal(value);
        let df = self.df.filter(&mask)?;
        let index = match &self.index {
            Some(series) => Some(series.filter(&mask)?),
            None => None,
        };
        Ok(Table { df, index })
    }

    /// Encode the table back to CSV text, header row first.
    ///
    /// The index column, when present, is written as the leftmost column.
    pub fn to_csv(&self) -> Result<String> {
        let mut df = self.df.clone();
        if let Some(index) = &self.index {
            df.insert_column(0, index.clone())?;
        }
        let mut buf = Vec::new();
        CsvWriter::new(&mut buf).include_header(true).finish(&mut df)?;
        String::from_utf8(buf).map_err(|e| Error::Custom(format!("Non UTF-8 CSV output: {e}")))
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.df, f)
    }
}

/// Decode a CSV response body into a [`Table`].
///
/// The first row is the header, every later row is data, and all values stay
/// strings. Ragged rows are not validated: long rows are truncated to the
/// header width, short rows null-fill. Empty or malformed input propagates
/// the parser's error.
pub fn decode_csv(raw: &str) -> Result<Table> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|opts| opts.with_truncate_ragged_lines(true))
        .into_reader_with_file_handle(Cursor::new(raw.as_bytes().to_vec()))
        .finish()?;
    Ok(Table { df, index: None })
}

/// Decode a financial report JSON body into a [`Table`].
///
/// Selects the array under `quarterlyReports` or `annualReports` according to
/// `mode`. Each entry becomes one row, indexed by its `fiscalDateEnding`
/// value; a `symbol` column holding `symbol` is inserted leftmost. Duplicate
/// fiscal dates are kept as distinct rows, first to last as encountered.
///
/// # Errors
///
/// Fails if the body is not JSON, the reports key is absent, or any entry
/// lacks `fiscalDateEnding`.
pub fn decode_financial_report(body: &str, mode: ReportPeriod, symbol: &str) -> Result<Table> {
    let json: Value = serde_json::from_str(body)?;
    let key = mode.reports_key();
    let reports = json
        .get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| Error::MissingKey(key.to_string()))?;

    // Column order follows first appearance across report entries.
    let mut names: Vec<String> = Vec::new();
    let mut columns: Vec<Vec<Option<String>>> = Vec::new();
    let mut index: Vec<String> = Vec::with_capacity(reports.len());

    for (row, report) in reports.iter().enumerate() {
        let fields = report
            .as_object()
            .ok_or_else(|| Error::Custom(format!("Report entry {row} is not a JSON object")))?;

        let fiscal = fields
            .get("fiscalDateEnding")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::MissingKey("fiscalDateEnding".to_string()))?;
        index.push(fiscal.to_string());

        for (name, value) in fields {
            if name == "fiscalDateEnding" {
                continue;
            }
            let slot = match names.iter().position(|n| n == name) {
                Some(i) => i,
                None => {
                    names.push(name.clone());
                    columns.push(vec![None; row]);
                    columns.len() - 1
                }
            };
            columns[slot].push(Some(render_value(value)));
        }

        // Null-fill fields absent from this entry.
        for column in &mut columns {
            if column.len() < row + 1 {
                column.push(None);
            }
        }
    }

    let mut cols: Vec<Column> = Vec::with_capacity(names.len() + 1);
    cols.push(Column::new("symbol".into(), vec![symbol.to_string(); index.len()]));
    for (name, values) in names.into_iter().zip(columns) {
        cols.push(Column::new(name.into(), values));
    }

    let df = DataFrame::new(cols)?;
    Ok(Table {
        df,
        index: Some(Series::new("fiscalDateEnding".into(), index)),
    })
}

// Report values are strings upstream; anything else keeps its JSON encoding.
fn render_value(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

/// Processor that decodes CSV response bodies into a [`Table`]
pub struct CsvTable;

impl Processor for CsvTable {
    type Output = Table;

    fn process<R: Response>(&self, response: Result<R>) -> Result<Table> {
        let resp = crate::processor::check_status(response)?;
        decode_csv(resp.body())
    }
}

/// Output marker for financial report endpoints decoded into a [`Table`].
///
/// Report decoding needs the request's period mode and symbol, so the
/// decoding itself happens in the endpoint's `Execute` impl via
/// [`decode_financial_report`].
pub struct ReportTable;
