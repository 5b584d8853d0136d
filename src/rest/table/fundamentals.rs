//! Fundamental data endpoints decoded into tables

use crate::client::AlphaVantage;
use crate::processor::overview::OverviewMap;
use crate::processor::table::ReportTable;
use crate::request::Request;
use crate::request::fundamentals::{BalanceSheet, CashFlow, CompanyOverview, IncomeStatement};

/// Get the balance sheet for a stock as a table indexed by `fiscalDateEnding`
///
/// # Example
/// ```no_run
/// # use avantage::AlphaVantage;
/// # use avantage::request::common::ReportPeriod;
/// # async fn example() {
/// # let client = AlphaVantage::default().with_key("api-key");
/// let table = avantage::rest::table::fundamentals::balance_sheet(&client, "AAPL")
///     .mode(ReportPeriod::Annual)
///     .get()
///     .await
///     .unwrap();
/// # }
/// ```
pub fn balance_sheet<'a, Client: Request>(
    client: &'a AlphaVantage<Client>,
    symbol: impl Into<String>,
) -> BalanceSheet<'a, Client, ReportTable> {
    BalanceSheet::new(client, symbol).as_table()
}

/// Get the cash flow statement for a stock as a table indexed by `fiscalDateEnding`
pub fn cash_flow<'a, Client: Request>(
    client: &'a AlphaVantage<Client>,
    symbol: impl Into<String>,
) -> CashFlow<'a, Client, ReportTable> {
    CashFlow::new(client, symbol).as_table()
}

/// Get the income statement for a stock as a table indexed by `fiscalDateEnding`
pub fn income_statement<'a, Client: Request>(
    client: &'a AlphaVantage<Client>,
    symbol: impl Into<String>,
) -> IncomeStatement<'a, Client, ReportTable> {
    IncomeStatement::new(client, symbol).as_table()
}

/// Get the company overview for a stock as a flat field/value mapping
pub fn company_overview<'a, Client: Request>(
    client: &'a AlphaVantage<Client>,
    symbol: impl Into<String>,
) -> CompanyOverview<'a, Client, OverviewMap> {
    CompanyOverview::new(client, symbol).as_overview()
}
