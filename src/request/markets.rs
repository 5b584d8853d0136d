//! Market-wide data request parameters

/// Earnings calendar request builder
pub mod earnings_calendar;
/// Listing status request builder
pub mod listing_status;

pub use earnings_calendar::EarningsCalendar;
pub use listing_status::ListingStatus;
