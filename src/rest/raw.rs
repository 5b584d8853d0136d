//! Endpoint implementations returning raw response bodies

/// Fundamental data endpoints
pub mod fundamentals;
/// Market-wide data endpoints
pub mod markets;
