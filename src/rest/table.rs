//! Endpoint implementations returning shaped tabular output

/// Fundamental data endpoints
pub mod fundamentals;
/// Market-wide data endpoints
pub mod markets;
