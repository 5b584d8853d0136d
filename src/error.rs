//! Error and result types for the Alpha Vantage client

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while requesting or decoding Alpha Vantage data.
#[derive(Debug)]
pub enum Error {
    /// No API key was configured on the client.
    MissingApiKey,
    /// The API answered with a non-200 status.
    ApiError {
        /// Request ID reported by the server, if any
        request_id: Option<String>,
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },
    /// The response body was not valid JSON.
    Json(serde_json::Error),
    /// The response JSON lacked a key the endpoint contract requires.
    MissingKey(String),
    /// CSV parsing or DataFrame construction failed.
    #[cfg(feature = "table")]
    Polars(polars_core::error::PolarsError),
    /// Transport-level failure from reqwest.
    #[cfg(feature = "reqwest")]
    Reqwest(reqwest::Error),
    /// Any other failure, described in place.
    Custom(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingApiKey => write!(f, "API key not set"),
            Error::ApiError {
                request_id,
                status,
                message,
            } => match request_id {
                Some(id) => write!(f, "API error (status {status}, request {id}): {message}"),
                None => write!(f, "API error (status {status}): {message}"),
            },
            Error::Json(e) => write!(f, "failed to parse JSON response: {e}"),
            Error::MissingKey(key) => write!(f, "response is missing expected key `{key}`"),
            #[cfg(feature = "table")]
            Error::Polars(e) => write!(f, "table decoding failed: {e}"),
            #[cfg(feature = "reqwest")]
            Error::Reqwest(e) => write!(f, "HTTP request failed: {e}"),
            Error::Custom(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(e) => Some(e),
            #[cfg(feature = "table")]
            Error::Polars(e) => Some(e),
            #[cfg(feature = "reqwest")]
            Error::Reqwest(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

#[cfg(feature = "table")]
impl From<polars_core::error::PolarsError> for Error {
    fn from(e: polars_core::error::PolarsError) -> Self {
        Error::Polars(e)
    }
}

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Reqwest(e)
    }
}
