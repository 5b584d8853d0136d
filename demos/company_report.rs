//! Fetch annual balance sheet and cash flow tables for one company.
//!
//! Usage: ALPHAVANTAGE_API_KEY=your_key cargo run --example company_report -- IBM

use avantage::AlphaVantage;
use avantage::request::common::ReportPeriod;
use avantage::rest::table;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let symbol = std::env::args().nth(1).unwrap_or_else(|| "IBM".to_string());
    let key = std::env::var("ALPHAVANTAGE_API_KEY")?;
    let client = AlphaVantage::default().with_key(key);

    let balance = table::fundamentals::balance_sheet(&client, &symbol)
        .mode(ReportPeriod::Annual)
        .get()
        .await?;
    println!("balance sheet for {symbol} ({} periods):\n{balance}", balance.height());

    let cash_flow = table::fundamentals::cash_flow(&client, &symbol)
        .mode(ReportPeriod::Annual)
        .get()
        .await?;
    println!("cash flow for {symbol} ({} periods):\n{cash_flow}", cash_flow.height());

    let overview = table::fundamentals::company_overview(&client, &symbol).get().await?;
    if let Some(name) = overview.get("Name") {
        println!("{symbol} is {name}");
    }

    Ok(())
}
