//! Rust client library for the Alpha Vantage fundamentals and listing API
//!
//! # Quick Start
//!
//! ```no_run
//! use avantage::AlphaVantage;
//! use avantage::rest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AlphaVantage::default().with_key("your_api_key");
//!     let json = rest::fundamentals::balance_sheet(&client, "AAPL").get().await?;
//!     println!("{}", json);
//!     Ok(())
//! }
//! ```
//!
//! # Endpoint API
//!
//! Each endpoint returns a request builder. Call `.get()` to execute:
//!
//! ```no_run
//! use avantage::AlphaVantage;
//! use avantage::request::common::ReportPeriod;
//! use avantage::rest::table;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AlphaVantage::default().with_key("your_api_key");
//!
//! // Raw response body
//! let csv = avantage::rest::markets::listing_status(&client).get().await?;
//!
//! // Shaped into a table, with options
//! let reports = table::fundamentals::cash_flow(&client, "AAPL")
//!     .mode(ReportPeriod::Annual)
//!     .get()
//!     .await?;
//! println!("{}", reports.df());
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **`hyper`** (default) - Uses [`hyper`](https://docs.rs/hyper) as the HTTP client (lightweight and fast).
//!
//! - **`reqwest`** - Alternative HTTP client using [`reqwest`](https://docs.rs/reqwest) (more features).
//!   To use reqwest instead: `default-features = false, features = ["reqwest", "table"]`.
//!
//! - **`table`** (default) - Enables tabular response shaping backed by
//!   [`polars`](https://docs.rs/polars-core) DataFrames.
//!
//! - **`dotenvy`** - Enables loading API keys from environment variables via [`dotenvy`](https://docs.rs/dotenvy).
//!   Adds `AlphaVantage::new()` which loads `ALPHAVANTAGE_API_KEY` from `.env` or environment.
//!   Without this feature, use `AlphaVantage::default().with_key("your_key")` instead.

#![warn(missing_docs)]

pub mod client;
pub mod error;
pub mod request;
pub mod response;
pub mod rest;

pub mod execute;
pub mod processor;

pub use error::{Error, Result};
pub use request::Request;
pub use response::Response;

/// The main Alpha Vantage API client with the default HTTP client.
///
/// - When `hyper` feature is enabled (default): uses `HyperClient`
/// - When `reqwest` feature is enabled: uses `reqwest::Client`
/// - Otherwise: use `client::AlphaVantage<YourClient>` directly
#[cfg(feature = "reqwest")]
pub type AlphaVantage = client::AlphaVantage<reqwest::Client>;

/// The main Alpha Vantage API client with the default HTTP client.
///
/// - When `hyper` feature is enabled (default): uses `HyperClient`
/// - When `reqwest` feature is enabled: uses `reqwest::Client`
/// - Otherwise: use `client::AlphaVantage<YourClient>` directly
#[cfg(all(feature = "hyper", not(feature = "reqwest")))]
pub type AlphaVantage = client::AlphaVantage<request::HyperClient>;

// When neither reqwest nor hyper is enabled, re-export the generic AlphaVantage
#[cfg(not(any(feature = "reqwest", feature = "hyper")))]
pub use client::AlphaVantage;
