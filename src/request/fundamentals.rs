//! Fundamental data request parameters

/// Balance sheet request builder
pub mod balance_sheet;
/// Cash flow request builder
pub mod cash_flow;
/// Company overview request builder
pub mod company_overview;
/// Income statement request builder
pub mod income_statement;

pub use balance_sheet::BalanceSheet;
pub use cash_flow::CashFlow;
pub use company_overview::CompanyOverview;
pub use income_statement::IncomeStatement;
