use crate::client::AlphaVantage;
use crate::error::Result;
use crate::execute::Execute;
use crate::processor::overview::{Overview, OverviewMap};
use crate::processor::{Processor, Raw};
use crate::request::Request;

/// Company overview request builder
pub struct CompanyOverview<'a, Client: Request, P = Raw> {
    client: &'a AlphaVantage<Client>,
    /// Stock symbol
    pub symbol: String,
    processor: P,
}

// Constructor - always starts with Raw
impl<'a, C: Request> CompanyOverview<'a, C, Raw> {
    /// Create new company overview request (returns raw JSON by default)
    pub fn new(client: &'a AlphaVantage<C>, symbol: impl Into<String>) -> Self {
        Self {
            client,
            symbol: symbol.into(),
            processor: Raw,
        }
    }
}

// Builder methods and processor conversion work on any processor type
impl<'a, C: Request, P: 'a> CompanyOverview<'a, C, P> {
    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<<Self as Execute>::Output>> + 'a
    where
        Self: Execute,
    {
        Execute::get(self)
    }

    /// Convert to flat field/value mapping output
    pub fn as_overview(self) -> CompanyOverview<'a, C, OverviewMap> {
        CompanyOverview {
            client: self.client,
            symbol: self.symbol,
            processor: OverviewMap,
        }
    }

    fn build_url(&self) -> Result<String> {
        let api_key = self.client.api_key().ok_or(crate::error::Error::MissingApiKey)?;

        let params = [
            "function=OVERVIEW".to_string(),
            format!("symbol={}", self.symbol),
            format!("apikey={api_key}"),
        ];

        Ok(format!("https://www.alphavantage.co/query?{}", params.join("&")))
    }
}

impl<'a, C: Request> Execute for CompanyOverview<'a, C, Raw> {
    type Output = String;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<String> {
        let url = self.build_url()?;
        let response = self.client.client().get(&url).await;
        self.processor.process(response)
    }
}

impl<'a, C: Request> Execute for CompanyOverview<'a, C, OverviewMap> {
    type Output = Overview;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<Overview> {
        let url = self.build_url()?;
        let response = self.client.client().get(&url).await;
        self.processor.process(response)
    }
}
