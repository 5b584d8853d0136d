//! REST API endpoints for Alpha Vantage
pub mod raw;

#[cfg(feature = "table")]
pub mod table;

// Re-export raw module for convenience.
pub use raw::*;
