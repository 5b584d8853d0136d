//! Market-wide endpoint implementations returning raw CSV text

use crate::client::AlphaVantage;
use crate::processor::Raw;
use crate::request::Request;
use crate::request::markets::{EarningsCalendar, ListingStatus};

/// Get the listing status of every ticker (companies and ETFs)
///
/// Returns a request builder that will return results as raw CSV text.
///
/// # Example
/// ```no_run
/// # use avantage::AlphaVantage;
/// # async fn example() {
/// # let client = AlphaVantage::default().with_key("api-key");
/// let csv = avantage::rest::markets::listing_status(&client)
///     .get()
///     .await
///     .unwrap();
/// # }
/// ```
pub fn listing_status<'a, Client: Request>(client: &'a AlphaVantage<Client>) -> ListingStatus<'a, Client, Raw> {
    ListingStatus::new(client)
}

/// Get the earnings calendar of every company
///
/// Returns a request builder that will return results as raw CSV text.
///
/// # Example
/// ```no_run
/// # use avantage::AlphaVantage;
/// # use avantage::request::common::Horizon;
/// # async fn example() {
/// # let client = AlphaVantage::default().with_key("api-key");
/// let csv = avantage::rest::markets::earnings_calendar(&client)
///     .horizon(Horizon::SixMonth)
///     .get()
///     .await
///     .unwrap();
/// # }
/// ```
pub fn earnings_calendar<'a, Client: Request>(client: &'a AlphaVantage<Client>) -> EarningsCalendar<'a, Client, Raw> {
    EarningsCalendar::new(client)
}

#[cfg(all(test, feature = "dotenvy", feature = "reqwest"))]
mod tests {
    use super::*;

    fn setup() -> AlphaVantage<reqwest::Client> {
        AlphaVantage::new().expect("Failed to create client. Make sure ALPHAVANTAGE_API_KEY is set in .env file")
    }

    #[tokio::test]
    #[ignore]
    async fn test_listing_status() {
        let client = setup();
        let result = listing_status(&client).get().await;
        assert!(result.is_ok(), "Failed to fetch listing status: {result:?}");
    }

    #[tokio::test]
    #[ignore]
    async fn test_earnings_calendar() {
        let client = setup();
        let result = earnings_calendar(&client).get().await;
        assert!(result.is_ok(), "Failed to fetch earnings calendar: {result:?}");
    }
}
