//! Integration tests for the Alpha Vantage API client
//!
//! These tests make real API calls and should be run sparingly to avoid
//! exhausting API quota. Run with:
//!
//! ```sh
//! cargo test --test integration_tests -- --ignored --test-threads=1
//! ```
//!
//! Ensure ALPHAVANTAGE_API_KEY is set in your environment or .env file.

use avantage::rest;
use avantage::{AlphaVantage, Result};

/// Helper to initialize the client from environment
fn setup() -> Result<AlphaVantage> {
    dotenvy::dotenv().ok();
    std::env::var("ALPHAVANTAGE_API_KEY")
        .map(|key| AlphaVantage::default().with_key(key))
        .map_err(|_| {
            avantage::Error::Custom("ALPHAVANTAGE_API_KEY not found. Set it in .env or environment.".to_string())
        })
}

#[tokio::test]
#[ignore]
async fn test_balance_sheet_raw() {
    let client = setup().expect("Failed to initialize client");

    let result = rest::fundamentals::balance_sheet(&client, "IBM").get().await;

    assert!(result.is_ok(), "Failed to fetch balance sheet: {:?}", result.err());

    let json = result.unwrap();
    assert!(!json.is_empty(), "Response should not be empty");
    assert!(
        json.contains("annualReports") || json.contains("quarterlyReports"),
        "Response should contain report arrays"
    );
}

#[tokio::test]
#[ignore]
async fn test_listing_status_raw() {
    let client = setup().expect("Failed to initialize client");

    let result = rest::markets::listing_status(&client).get().await;

    assert!(result.is_ok(), "Failed to fetch listing status: {:?}", result.err());

    let csv = result.unwrap();
    assert!(csv.lines().count() > 1, "Listing should carry data rows");
    assert!(csv.lines().next().unwrap_or("").contains("symbol"), "Header row expected");
}

#[cfg(feature = "table")]
#[tokio::test]
#[ignore]
async fn test_cash_flow_table() {
    use avantage::request::common::ReportPeriod;

    let client = setup().expect("Failed to initialize client");

    let result = rest::table::fundamentals::cash_flow(&client, "IBM")
        .mode(ReportPeriod::Annual)
        .get()
        .await;

    assert!(result.is_ok(), "Failed to fetch cash flow: {:?}", result.err());

    let table = result.unwrap();
    assert!(table.height() > 0, "Cash flow table should have rows");
    assert_eq!(
        table.df().get_column_names_str().first().copied(),
        Some("symbol"),
        "symbol column should be leftmost"
    );
    assert!(table.index().is_some(), "Report tables are indexed by fiscalDateEnding");
}

#[cfg(feature = "table")]
#[tokio::test]
#[ignore]
async fn test_active_listings_table() {
    let client = setup().expect("Failed to initialize client");

    let result = rest::table::markets::listing_status(&client).active(true).get().await;

    assert!(result.is_ok(), "Failed to fetch active listings: {:?}", result.err());
    assert!(result.unwrap().height() > 0, "There should be active tickers");
}

#[cfg(feature = "table")]
#[tokio::test]
#[ignore]
async fn test_earnings_calendar_table() {
    use avantage::request::common::Horizon;

    let client = setup().expect("Failed to initialize client");

    let result = rest::table::markets::earnings_calendar(&client)
        .symbol("IBM")
        .horizon(Horizon::ThreeMonth)
        .get()
        .await;

    assert!(result.is_ok(), "Failed to fetch earnings calendar: {:?}", result.err());
}

#[tokio::test]
#[ignore]
async fn test_company_overview() {
    let client = setup().expect("Failed to initialize client");

    let result = rest::fundamentals::company_overview(&client, "IBM")
        .as_overview()
        .get()
        .await;

    assert!(result.is_ok(), "Failed to fetch company overview: {:?}", result.err());

    let overview = result.unwrap();
    assert_eq!(overview.get("Symbol"), Some("IBM"));
    assert!(overview.len() > 10, "Overview should carry many fields");
}
