//! Common types used across multiple endpoints
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Reporting period for company financial reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    /// Quarterly reports
    #[default]
    Quarterly,
    /// Annual reports
    Annual,
}

impl ReportPeriod {
    /// JSON key holding the report array for this period
    pub(crate) fn reports_key(self) -> &'static str {
        match self {
            ReportPeriod::Quarterly => "quarterlyReports",
            ReportPeriod::Annual => "annualReports",
        }
    }
}

impl FromStr for ReportPeriod {
    type Err = crate::error::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quarterly" => Ok(ReportPeriod::Quarterly),
            "annual" => Ok(ReportPeriod::Annual),
            _ => Err(crate::error::Error::Custom(format!("Invalid report period: {s}"))),
        }
    }
}

impl std::fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportPeriod::Quarterly => write!(f, "quarterly"),
            ReportPeriod::Annual => write!(f, "annual"),
        }
    }
}

/// Forward-looking window for earnings calendar estimates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Horizon {
    /// 3 months ahead
    #[serde(rename = "3month")]
    ThreeMonth,
    /// 6 months ahead
    #[serde(rename = "6month")]
    SixMonth,
    /// 12 months ahead
    #[serde(rename = "12month")]
    TwelveMonth,
}

impl FromStr for Horizon {
    type Err = crate::error::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "3month" => Ok(Horizon::ThreeMonth),
            "6month" => Ok(Horizon::SixMonth),
            "12month" => Ok(Horizon::TwelveMonth),
            _ => Err(crate::error::Error::Custom(format!("Invalid horizon: {s}"))),
        }
    }
}

impl std::fmt::Display for Horizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Horizon::ThreeMonth => write!(f, "3month"),
            Horizon::SixMonth => write!(f, "6month"),
            Horizon::TwelveMonth => write!(f, "12month"),
        }
    }
}
