use crate::client::AlphaVantage;
use crate::error::Result;
use crate::execute::Execute;
use crate::processor::{Processor, Raw};
use crate::request::Request;
use crate::request::common::Horizon;

#[cfg(feature = "table")]
use crate::processor::table::{CsvTable, Table};

/// Earnings calendar request builder
///
/// `EARNINGS_CALENDAR` answers with CSV: one row per expected company
/// report inside the chosen horizon.
pub struct EarningsCalendar<'a, Client: Request, P = Raw> {
    client: &'a AlphaVantage<Client>,
    /// Keep only rows for this symbol when decoding to a table
    pub symbol: Option<String>,
    /// Forward-looking window; the API defaults to 3month when unset
    pub horizon: Option<Horizon>,
    processor: P,
}

// Constructor - always starts with Raw
impl<'a, C: Request> EarningsCalendar<'a, C, Raw> {
    /// Create new earnings calendar request (returns raw CSV text by default)
    pub fn new(client: &'a AlphaVantage<C>) -> Self {
        Self {
            client,
            symbol: None,
            horizon: None,
            processor: Raw,
        }
    }
}

// Builder methods and processor conversion work on any processor type
impl<'a, C: Request, P: 'a> EarningsCalendar<'a, C, P> {
    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<<Self as Execute>::Output>> + 'a
    where
        Self: Execute,
    {
        Execute::get(self)
    }

    /// Restrict table output to one symbol.
    ///
    /// The filter is applied client-side after decoding; the raw tier always
    /// carries every company.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Set the forward-looking window (3, 6 or 12 months)
    pub fn horizon(mut self, horizon: Horizon) -> Self {
        self.horizon = Some(horizon);
        self
    }

    /// Convert to table output
    #[cfg(feature = "table")]
    pub fn as_table(self) -> EarningsCalendar<'a, C, CsvTable> {
        EarningsCalendar {
            client: self.client,
            symbol: self.symbol,
            horizon: self.horizon,
            processor: CsvTable,
        }
    }

    fn build_url(&self) -> Result<String> {
        let api_key = self.client.api_key().ok_or(crate::error::Error::MissingApiKey)?;

        let mut params = vec!["function=EARNINGS_CALENDAR".to_string(), format!("apikey={api_key}")];

        if let Some(horizon) = self.horizon {
            params.push(format!("horizon={horizon}"));
        }

        Ok(format!("https://www.alphavantage.co/query?{}", params.join("&")))
    }
}

impl<'a, C: Request> Execute for EarningsCalendar<'a, C, Raw> {
    type Output = String;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<String> {
        let url = self.build_url()?;
        let response = self.client.client().get(&url).await;
        self.processor.process(response)
    }
}

#[cfg(feature = "table")]
impl<'a, C: Request> Execute for EarningsCalendar<'a, C, CsvTable> {
    type Output = Table;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<Table> {
        let url = self.build_url()?;
        let response = self.client.client().get(&url).await;
        let table = self.processor.process(response)?;
        table.filter_symbol(self.symbol.as_deref())
    }
}
