use crate::client::AlphaVantage;
use crate::error::Result;
use crate::execute::Execute;
use crate::processor::{Processor, Raw};
use crate::request::Request;
use crate::request::common::ReportPeriod;

#[cfg(feature = "table")]
use crate::processor::table::{ReportTable, Table, decode_financial_report};
#[cfg(feature = "table")]
use crate::response::Response;

/// Income statement request builder
pub struct IncomeStatement<'a, Client: Request, P = Raw> {
    client: &'a AlphaVantage<Client>,
    /// Stock symbol
    pub symbol: String,
    /// Reporting period used when decoding to a table
    pub mode: ReportPeriod,
    processor: P,
}

// Constructor - always starts with Raw
impl<'a, C: Request> IncomeStatement<'a, C, Raw> {
    /// Create new income statement request (returns raw JSON by default)
    pub fn new(client: &'a AlphaVantage<C>, symbol: impl Into<String>) -> Self {
        Self {
            client,
            symbol: symbol.into(),
            mode: ReportPeriod::default(),
            processor: Raw,
        }
    }
}

// Builder methods and processor conversion work on any processor type
impl<'a, C: Request, P: 'a> IncomeStatement<'a, C, P> {
    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<<Self as Execute>::Output>> + 'a
    where
        Self: Execute,
    {
        Execute::get(self)
    }

    /// Select the reporting period (quarterly or annual)
    pub fn mode(mut self, mode: ReportPeriod) -> Self {
        self.mode = mode;
        self
    }

    /// Convert to table output indexed by `fiscalDateEnding`
    #[cfg(feature = "table")]
    pub fn as_table(self) -> IncomeStatement<'a, C, ReportTable> {
        IncomeStatement {
            client: self.client,
            symbol: self.symbol,
            mode: self.mode,
            processor: ReportTable,
        }
    }

    fn build_url(&self) -> Result<String> {
        let api_key = self.client.api_key().ok_or(crate::error::Error::MissingApiKey)?;

        let params = [
            "function=INCOME_STATEMENT".to_string(),
            format!("symbol={}", self.symbol),
            format!("apikey={api_key}"),
        ];

        Ok(format!("https://www.alphavantage.co/query?{}", params.join("&")))
    }
}

impl<'a, C: Request> Execute for IncomeStatement<'a, C, Raw> {
    type Output = String;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<String> {
        let url = self.build_url()?;
        let response = self.client.client().get(&url).await;
        self.processor.process(response)
    }
}

#[cfg(feature = "table")]
impl<'a, C: Request> Execute for IncomeStatement<'a, C, ReportTable> {
    type Output = Table;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<Table> {
        let url = self.build_url()?;
        let response = self.client.client().get(&url).await;
        let resp = crate::processor::check_status(response)?;
        decode_financial_report(resp.body(), self.mode, &self.symbol)
    }
}
