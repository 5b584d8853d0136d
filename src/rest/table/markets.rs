//! Market-wide endpoints decoded into tables

use crate::client::AlphaVantage;
use crate::processor::table::CsvTable;
use crate::request::Request;
use crate::request::markets::{EarningsCalendar, ListingStatus};

/// Get all listed tickers as a table
///
/// # Example
/// ```no_run
/// # use avantage::AlphaVantage;
/// # async fn example() {
/// # let client = AlphaVantage::default().with_key("api-key");
/// let active = avantage::rest::table::markets::listing_status(&client)
///     .active(true)
///     .get()
///     .await
///     .unwrap();
/// # }
/// ```
pub fn listing_status<'a, Client: Request>(client: &'a AlphaVantage<Client>) -> ListingStatus<'a, Client, CsvTable> {
    ListingStatus::new(client).as_table()
}

/// Get the earnings calendar as a table
///
/// # Example
/// ```no_run
/// # use avantage::AlphaVantage;
/// # use avantage::request::common::Horizon;
/// # async fn example() {
/// # let client = AlphaVantage::default().with_key("api-key");
/// let calendar = avantage::rest::table::markets::earnings_calendar(&client)
///     .symbol("IBM")
///     .horizon(Horizon::TwelveMonth)
///     .get()
///     .await
///     .unwrap();
/// # }
/// ```
pub fn earnings_calendar<'a, Client: Request>(
    client: &'a AlphaVantage<Client>,
) -> EarningsCalendar<'a, Client, CsvTable> {
    EarningsCalendar::new(client).as_table()
}
