//! Core vocabulary shared across the preset subsystem

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Instrument symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(pub String);

impl Symbol {
    pub fn new(s: impl Into<String>) -> Self {
        Symbol(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Symbol(s.to_string())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Symbol(s)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bar aggregation period a preset is tuned for.
///
/// Ordering follows bar duration, so sorted listings run from M1 up to MN1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Timeframe {
    /// 1 minute
    M1,
    /// 5 minutes
    M5,
    /// 15 minutes
    M15,
    /// 30 minutes
    M30,
    /// 1 hour
    H1,
    /// 4 hours
    H4,
    /// 1 day
    D1,
    /// 1 week
    W1,
    /// 1 month
    Mn1,
}

impl Timeframe {
    pub const ALL: [Timeframe; 9] = [
        Timeframe::M1,
        Timeframe::M5,
        Timeframe::M15,
        Timeframe::M30,
        Timeframe::H1,
        Timeframe::H4,
        Timeframe::D1,
        Timeframe::W1,
        Timeframe::Mn1,
    ];

    /// Bar duration in minutes
    pub fn minutes(self) -> u32 {
        match self {
            Timeframe::M1 => 1,
            Timeframe::M5 => 5,
            Timeframe::M15 => 15,
            Timeframe::M30 => 30,
            Timeframe::H1 => 60,
            Timeframe::H4 => 240,
            Timeframe::D1 => 1440,
            Timeframe::W1 => 10080,
            Timeframe::Mn1 => 43200,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Timeframe::M1 => "M1",
            Timeframe::M5 => "M5",
            Timeframe::M15 => "M15",
            Timeframe::M30 => "M30",
            Timeframe::H1 => "H1",
            Timeframe::H4 => "H4",
            Timeframe::D1 => "D1",
            Timeframe::W1 => "W1",
            Timeframe::Mn1 => "MN1",
        }
    }
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Timeframe::ALL
            .iter()
            .copied()
            .find(|tf| tf.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "Unknown timeframe: {}. Use one of M1, M5, M15, M30, H1, H4, D1, W1, MN1",
                    s
                )
            })
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Price series an indicator consumes.
///
/// Codes keep the numeric form presets have always been written in, so a
/// preset file may say either `3` or `"Low"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AppliedPrice {
    Close,
    Open,
    High,
    Low,
    Median,
    Typical,
    Weighted,
}

impl AppliedPrice {
    pub const ALL: [AppliedPrice; 7] = [
        AppliedPrice::Close,
        AppliedPrice::Open,
        AppliedPrice::High,
        AppliedPrice::Low,
        AppliedPrice::Median,
        AppliedPrice::Typical,
        AppliedPrice::Weighted,
    ];

    /// Numeric code of this price series
    pub fn code(self) -> u8 {
        match self {
            AppliedPrice::Close => 0,
            AppliedPrice::Open => 1,
            AppliedPrice::High => 2,
            AppliedPrice::Low => 3,
            AppliedPrice::Median => 4,
            AppliedPrice::Typical => 5,
            AppliedPrice::Weighted => 6,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        AppliedPrice::ALL.iter().copied().find(|p| p.code() == code)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AppliedPrice::Close => "Close",
            AppliedPrice::Open => "Open",
            AppliedPrice::High => "High",
            AppliedPrice::Low => "Low",
            AppliedPrice::Median => "Median",
            AppliedPrice::Typical => "Typical",
            AppliedPrice::Weighted => "Weighted",
        }
    }
}

impl FromStr for AppliedPrice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        // Accept both the bare name and the PRICE_-prefixed spelling found
        // in older preset material.
        let name = s
            .strip_prefix("PRICE_")
            .or_else(|| s.strip_prefix("price_"))
            .unwrap_or(s);
        AppliedPrice::ALL
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                format!(
                    "Unknown applied price: {}. Use one of Close, Open, High, Low, Median, Typical, Weighted",
                    s
                )
            })
    }
}

impl fmt::Display for AppliedPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Strategy class owning a parameter schema.
///
/// CCI, CCI_Arrows and CCIA are distinct strategy variants with distinct
/// schemas; they are never merged or matched across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrategyFamily {
    #[serde(rename = "CCI")]
    Cci,
    #[serde(rename = "CCI_Arrows")]
    CciArrows,
    #[serde(rename = "CCIA")]
    Ccia,
}

impl StrategyFamily {
    pub const ALL: [StrategyFamily; 3] = [
        StrategyFamily::Cci,
        StrategyFamily::CciArrows,
        StrategyFamily::Ccia,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StrategyFamily::Cci => "CCI",
            StrategyFamily::CciArrows => "CCI_Arrows",
            StrategyFamily::Ccia => "CCIA",
        }
    }
}

impl FromStr for StrategyFamily {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        StrategyFamily::ALL
            .iter()
            .copied()
            .find(|family| family.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "Unknown strategy family: {}. Use one of CCI, CCI_Arrows, CCIA",
                    s
                )
            })
    }
}

impl fmt::Display for StrategyFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
