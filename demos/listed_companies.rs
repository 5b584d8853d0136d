//! Fetch the full listing table and compare it with the active subset.
//!
//! Usage: ALPHAVANTAGE_API_KEY=your_key cargo run --example listed_companies

use avantage::AlphaVantage;
use avantage::rest::table;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let key = std::env::var("ALPHAVANTAGE_API_KEY")?;
    let client = AlphaVantage::default().with_key(key);

    let all = table::markets::listing_status(&client).get().await?;
    let active = table::markets::listing_status(&client).active(true).get().await?;

    println!("listed tickers: {}", all.height());
    println!("active tickers: {}", active.height());
    println!("{}", active.df().head(Some(10)));

    Ok(())
}
