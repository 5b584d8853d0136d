use crate::client::AlphaVantage;
use crate::error::Result;
use crate::execute::Execute;
use crate::processor::{Processor, Raw};
use crate::request::Request;

#[cfg(feature = "table")]
use crate::processor::table::{CsvTable, Table};

/// Listing status request builder
///
/// `LISTING_STATUS` answers with CSV: one row per listed or delisted ticker
/// with its asset type, exchange, IPO date, delisting date and status flag.
pub struct ListingStatus<'a, Client: Request, P = Raw> {
    client: &'a AlphaVantage<Client>,
    /// Keep only rows with status `active` when decoding to a table
    pub active: bool,
    processor: P,
}

// Constructor - always starts with Raw
impl<'a, C: Request> ListingStatus<'a, C, Raw> {
    /// Create new listing status request (returns raw CSV text by default)
    pub fn new(client: &'a AlphaVantage<C>) -> Self {
        Self {
            client,
            active: false,
            processor: Raw,
        }
    }
}

// Builder methods and processor conversion work on any processor type
impl<'a, C: Request, P: 'a> ListingStatus<'a, C, P> {
    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<<Self as Execute>::Output>> + 'a
    where
        Self: Execute,
    {
        Execute::get(self)
    }

    /// Restrict table output to tickers whose status is `active`.
    ///
    /// The filter is applied client-side after decoding; the raw tier always
    /// carries the full listing.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Convert to table output
    #[cfg(feature = "table")]
    pub fn as_table(self) -> ListingStatus<'a, C, CsvTable> {
        ListingStatus {
            client: self.client,
            active: self.active,
            processor: CsvTable,
        }
    }

    fn build_url(&self) -> Result<String> {
        let api_key = self.client.api_key().ok_or(crate::error::Error::MissingApiKey)?;

        let params = ["function=LISTING_STATUS".to_string(), format!("apikey={api_key}")];

        Ok(format!("https://www.alphavantage.co/query?{}", params.join("&")))
    }
}

impl<'a, C: Request> Execute for ListingStatus<'a, C, Raw> {
    type Output = String;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<String> {
        let url = self.build_url()?;
        let response = self.client.client().get(&url).await;
        self.processor.process(response)
    }
}

#[cfg(feature = "table")]
impl<'a, C: Request> Execute for ListingStatus<'a, C, CsvTable> {
    type Output = Table;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<Table> {
        let url = self.build_url()?;
        let response = self.client.client().get(&url).await;
        let table = self.processor.process(response)?;
        if self.active { table.filter_active() } else { Ok(table) }
    }
}
