//! Offline tests for the response shaping logic
//!
//! These cover CSV decoding, financial report flattening, and the
//! client-side row filters, with no network involved.
#![cfg(feature = "table")]

use avantage::processor::table::{Table, decode_csv, decode_financial_report};
use avantage::request::common::ReportPeriod;
use serde_json::json;

const LISTING_CSV: &str = "\
symbol,name,exchange,assetType,ipoDate,delistingDate,status
A,Agilent Technologies Inc,NYSE,Stock,1999-11-18,null,active
AA,Alcoa Corp,NYSE,Stock,2016-10-18,null,active
AABA,Altaba,NASDAQ,Stock,1996-04-12,2019-11-06,delisted
";

fn all_values(table: &Table) -> Vec<Vec<Option<String>>> {
    table
        .df()
        .get_column_names_str()
        .into_iter()
        .map(|name| column_values(table, name))
        .collect()
}

fn column_values(table: &Table, name: &str) -> Vec<Option<String>> {
    table
        .df()
        .column(name)
        .unwrap()
        .as_materialized_series()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect()
}

#[test]
fn csv_header_becomes_columns_and_rows_survive() {
    let table = decode_csv(LISTING_CSV).unwrap();

    assert_eq!(
        table.df().get_column_names_str(),
        ["symbol", "name", "exchange", "assetType", "ipoDate", "delistingDate", "status"]
    );
    assert_eq!(table.height(), 3);
    assert!(table.index().is_none());
}

#[test]
fn csv_quoted_fields_keep_embedded_commas() {
    let table = decode_csv("symbol,name\nBRK.A,\"Berkshire Hathaway, Inc\"\n").unwrap();
    assert_eq!(
        column_values(&table, "name"),
        [Some("Berkshire Hathaway, Inc".to_string())]
    );
}

#[test]
fn csv_short_rows_null_fill() {
    let table = decode_csv("a,b,c\n1,2\n").unwrap();
    assert_eq!(table.height(), 1);
    assert_eq!(column_values(&table, "c"), [None]);
}

#[test]
fn csv_empty_input_is_an_error() {
    assert!(decode_csv("").is_err());
}

#[test]
fn csv_header_only_yields_empty_table() {
    let table = decode_csv("symbol,name,status\n").unwrap();
    assert_eq!(table.height(), 0);
    assert_eq!(table.width(), 3);
}

#[test]
fn report_rows_are_indexed_by_fiscal_date() {
    let body = json!({
        "symbol": "IBM",
        "quarterlyReports": [
            {"fiscalDateEnding": "2023-06-30", "totalAssets": "132213000000", "totalLiabilities": "110340000000"},
            {"fiscalDateEnding": "2023-03-31", "totalAssets": "130554000000", "totalLiabilities": "109782000000"}
        ]
    })
    .to_string();

    let table = decode_financial_report(&body, ReportPeriod::Quarterly, "IBM").unwrap();

    assert_eq!(table.height(), 2);
    // symbol is inserted leftmost, remaining columns keep first-entry key order
    assert_eq!(
        table.df().get_column_names_str(),
        ["symbol", "totalAssets", "totalLiabilities"]
    );
    assert_eq!(
        column_values(&table, "symbol"),
        [Some("IBM".to_string()), Some("IBM".to_string())]
    );

    let index = table.index().unwrap();
    assert_eq!(index.name().as_str(), "fiscalDateEnding");
    let dates: Vec<Option<&str>> = index.str().unwrap().into_iter().collect();
    assert_eq!(dates, [Some("2023-06-30"), Some("2023-03-31")]);
}

#[test]
fn report_single_entry_example() {
    let body = r#"{"quarterlyReports":[{"fiscalDateEnding":"2023-03-31","totalAssets":"100"}]}"#;
    let table = decode_financial_report(body, ReportPeriod::Quarterly, "XYZ").unwrap();

    assert_eq!(table.height(), 1);
    assert_eq!(table.df().get_column_names_str(), ["symbol", "totalAssets"]);
    assert_eq!(column_values(&table, "symbol"), [Some("XYZ".to_string())]);
    assert_eq!(column_values(&table, "totalAssets"), [Some("100".to_string())]);
    let dates: Vec<Option<&str>> = table.index().unwrap().str().unwrap().into_iter().collect();
    assert_eq!(dates, [Some("2023-03-31")]);
}

#[test]
fn report_mode_selects_the_matching_array() {
    let body = json!({
        "annualReports": [
            {"fiscalDateEnding": "2022-12-31", "totalAssets": "1"}
        ]
    })
    .to_string();

    let annual = decode_financial_report(&body, ReportPeriod::Annual, "IBM").unwrap();
    assert_eq!(annual.height(), 1);

    let err = decode_financial_report(&body, ReportPeriod::Quarterly, "IBM").unwrap_err();
    assert!(err.to_string().contains("quarterlyReports"), "unexpected error: {err}");
}

#[test]
fn report_entry_without_fiscal_date_is_an_error() {
    let body = r#"{"quarterlyReports":[{"totalAssets":"100"}]}"#;
    let err = decode_financial_report(body, ReportPeriod::Quarterly, "IBM").unwrap_err();
    assert!(err.to_string().contains("fiscalDateEnding"), "unexpected error: {err}");
}

#[test]
fn report_not_json_is_an_error() {
    assert!(decode_financial_report("symbol,name\nIBM,IBM Corp\n", ReportPeriod::Quarterly, "IBM").is_err());
}

#[test]
fn report_fields_absent_from_later_entries_null_fill() {
    let body = json!({
        "quarterlyReports": [
            {"fiscalDateEnding": "2023-06-30", "totalAssets": "2", "goodwill": "5"},
            {"fiscalDateEnding": "2023-03-31", "totalAssets": "1", "inventory": "7"}
        ]
    })
    .to_string();

    let table = decode_financial_report(&body, ReportPeriod::Quarterly, "IBM").unwrap();

    assert_eq!(
        table.df().get_column_names_str(),
        ["symbol", "totalAssets", "goodwill", "inventory"]
    );
    assert_eq!(
        column_values(&table, "goodwill"),
        [Some("5".to_string()), None]
    );
    assert_eq!(
        column_values(&table, "inventory"),
        [None, Some("7".to_string())]
    );
}

#[test]
fn report_duplicate_fiscal_dates_stay_in_encounter_order() {
    let body = json!({
        "quarterlyReports": [
            {"fiscalDateEnding": "2023-03-31", "totalAssets": "1"},
            {"fiscalDateEnding": "2023-03-31", "totalAssets": "2"}
        ]
    })
    .to_string();

    let table = decode_financial_report(&body, ReportPeriod::Quarterly, "IBM").unwrap();
    assert_eq!(table.height(), 2);
    assert_eq!(
        column_values(&table, "totalAssets"),
        [Some("1".to_string()), Some("2".to_string())]
    );
}

#[test]
fn filter_symbol_none_is_the_identity() {
    let table = decode_csv(LISTING_CSV).unwrap();
    let same = table.filter_symbol(None).unwrap();
    assert_eq!(same.df().get_column_names_str(), table.df().get_column_names_str());
    assert_eq!(all_values(&same), all_values(&table));
}

#[test]
fn filter_symbol_keeps_matching_rows_only() {
    let table = decode_csv(LISTING_CSV).unwrap();
    let one = table.filter_symbol(Some("AA")).unwrap();
    assert_eq!(one.height(), 1);
    assert_eq!(column_values(&one, "name"), [Some("Alcoa Corp".to_string())]);

    // zero matches is a valid empty table, not an error
    let none = table.filter_symbol(Some("ZZZ")).unwrap();
    assert_eq!(none.height(), 0);
    assert_eq!(none.width(), table.width());
}

#[test]
fn filter_symbol_without_symbol_column_is_an_error() {
    let table = decode_csv("a,b\n1,2\n").unwrap();
    assert!(table.filter_symbol(Some("AA")).is_err());
}

#[test]
fn filter_active_reseats_rows_from_zero() {
    let table = decode_csv(LISTING_CSV).unwrap();
    let active = table.filter_active().unwrap();

    assert_eq!(active.height(), 2);
    // relative order preserved, rows re-addressed from position 0
    assert_eq!(
        column_values(&active, "symbol"),
        [Some("A".to_string()), Some("AA".to_string())]
    );
    assert_eq!(
        active.df().column("symbol").unwrap().as_materialized_series().str().unwrap().get(0),
        Some("A")
    );
}

#[test]
fn csv_round_trip_preserves_columns_and_values() {
    let table = decode_csv(LISTING_CSV).unwrap();
    let text = table.to_csv().unwrap();
    let again = decode_csv(&text).unwrap();

    assert_eq!(again.df().get_column_names_str(), table.df().get_column_names_str());
    assert_eq!(all_values(&again), all_values(&table));
}

#[test]
fn report_round_trip_writes_index_first() {
    let body = r#"{"annualReports":[{"fiscalDateEnding":"2022-12-31","totalAssets":"1"}]}"#;
    let table = decode_financial_report(body, ReportPeriod::Annual, "IBM").unwrap();

    let text = table.to_csv().unwrap();
    let again = decode_csv(&text).unwrap();
    assert_eq!(
        again.df().get_column_names_str(),
        ["fiscalDateEnding", "symbol", "totalAssets"]
    );
    assert_eq!(again.height(), 1);
}
