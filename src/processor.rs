//! Response processors that turn HTTP responses into endpoint outputs

/// Flat company overview responses
pub mod overview;
/// Tabular responses backed by Polars DataFrames
#[cfg(feature = "table")]
pub mod table;

pub use overview::{Overview, OverviewMap};
#[cfg(feature = "table")]
pub use table::{CsvTable, ReportTable, Table};

use crate::error::Result;
use crate::response::Response;

/// Trait for converting an HTTP response into an endpoint output type
pub trait Processor {
    /// The shaped output type
    type Output;

    /// Consume the response (or transport error) and produce the output
    fn process<R: Response>(&self, response: Result<R>) -> Result<Self::Output>;
}

/// Processor that returns the response body untouched
pub struct Raw;

impl Processor for Raw {
    type Output = String;

    fn process<R: Response>(&self, response: Result<R>) -> Result<String> {
        let resp = check_status(response)?;
        Ok(resp.body().to_owned())
    }
}

/// Propagate transport errors and map non-200 statuses to [`Error::ApiError`].
///
/// [`Error::ApiError`]: crate::error::Error::ApiError
pub(crate) fn check_status<R: Response>(response: Result<R>) -> Result<R> {
    let resp = response?;
    if resp.status() != 200 {
        return Err(crate::error::Error::ApiError {
            request_id: resp.request_id().to_owned(),
            status: resp.status(),
            message: resp.body().to_owned(),
        });
    }
    Ok(resp)
}
