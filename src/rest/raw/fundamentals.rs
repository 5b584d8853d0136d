//! Fundamental data endpoint implementations returning raw JSON strings

use crate::client::AlphaVantage;
use crate::processor::Raw;
use crate::request::Request;
use crate::request::fundamentals::{BalanceSheet, CashFlow, CompanyOverview, IncomeStatement};

/// Get the balance sheet for a stock
///
/// Returns a request builder that will return results as raw JSON string.
///
/// # Example
/// ```no_run
/// # use avantage::AlphaVantage;
/// # async fn example() {
/// # let client = AlphaVantage::default().with_key("api-key");
/// let json = avantage::rest::fundamentals::balance_sheet(&client, "AAPL")
///     .get()
///     .await
///     .unwrap();
/// # }
/// ```
pub fn balance_sheet<'a, Client: Request>(
    client: &'a AlphaVantage<Client>,
    symbol: impl Into<String>,
) -> BalanceSheet<'a, Client, Raw> {
    BalanceSheet::new(client, symbol)
}

/// Get the cash flow statement for a stock
pub fn cash_flow<'a, Client: Request>(
    client: &'a AlphaVantage<Client>,
    symbol: impl Into<String>,
) -> CashFlow<'a, Client, Raw> {
    CashFlow::new(client, symbol)
}

/// Get the income statement for a stock
pub fn income_statement<'a, Client: Request>(
    client: &'a AlphaVantage<Client>,
    symbol: impl Into<String>,
) -> IncomeStatement<'a, Client, Raw> {
    IncomeStatement::new(client, symbol)
}

/// Get the company overview for a stock
pub fn company_overview<'a, Client: Request>(
    client: &'a AlphaVantage<Client>,
    symbol: impl Into<String>,
) -> CompanyOverview<'a, Client, Raw> {
    CompanyOverview::new(client, symbol)
}
