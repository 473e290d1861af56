//! CCI strategy presets.
//!
//! Commodity Channel Index signal strategy with a trailing-stop method
//! selector. Method codes are opaque here; the strategy runtime decodes
//! them.

use serde::{Deserialize, Serialize};

use super::{float, int_u32, price};
use crate::error::Result;
use crate::params::ParameterSet;
use crate::registry::{PresetKey, PresetRegistryBuilder};
use crate::schema::Schema;
use crate::types::{AppliedPrice, StrategyFamily, Timeframe};

/// CCI strategy parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CciParams {
    /// CCI averaging period in bars
    pub period: u32,
    /// Price series the CCI consumes
    pub applied_price: AppliedPrice,
    /// Bar shift the indicator is read at (0 = current bar)
    pub shift: u32,
    /// Trailing-stop algorithm selector
    pub trailing_stop_method: u32,
    /// CCI level beyond which a position opens
    pub signal_open_level: f64,
    /// Maximum allowed spread in points
    pub max_spread: f64,
}

impl CciParams {
    /// EURUSD tuning for 1-hour bars
    pub fn eurusd_h1() -> Self {
        CciParams {
            period: 2,
            applied_price: AppliedPrice::Low,
            shift: 0,
            trailing_stop_method: 6,
            signal_open_level: 36.0,
            max_spread: 6.0,
        }
    }

    /// Flatten into the generic field form the registry stores
    pub fn to_set(&self) -> ParameterSet {
        ParameterSet::new()
            .with("Period", self.period)
            .with("AppliedPrice", self.applied_price)
            .with("Shift", self.shift)
            .with("TrailingStopMethod", self.trailing_stop_method)
            .with("SignalOpenLevel", self.signal_open_level)
            .with("MaxSpread", self.max_spread)
    }

    /// Rebuild from a stored set, checking it against the CCI schema first
    pub fn from_set(params: &ParameterSet) -> Result<Self> {
        let family = StrategyFamily::Cci;
        Schema::of(family).validate(params)?;
        Ok(CciParams {
            period: int_u32(family, params, "Period")?,
            applied_price: price(family, params, "AppliedPrice")?,
            shift: int_u32(family, params, "Shift")?,
            trailing_stop_method: int_u32(family, params, "TrailingStopMethod")?,
            signal_open_level: float(family, params, "SignalOpenLevel")?,
            max_spread: float(family, params, "MaxSpread")?,
        })
    }
}

/// Register the built-in CCI presets
pub fn register_builtin(builder: &mut PresetRegistryBuilder) -> Result<()> {
    builder.register(
        PresetKey::new(StrategyFamily::Cci, "EURUSD", Timeframe::H1),
        CciParams::eurusd_h1().to_set(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eurusd_h1_matches_schema() {
        let set = CciParams::eurusd_h1().to_set();
        assert!(Schema::of(StrategyFamily::Cci).validate(&set).is_ok());
        assert_eq!(set.len(), Schema::of(StrategyFamily::Cci).len());
    }

    #[test]
    fn test_round_trip_through_set() {
        let params = CciParams::eurusd_h1();
        let rebuilt = CciParams::from_set(&params.to_set()).unwrap();
        assert_eq!(rebuilt, params);
    }

    #[test]
    fn test_from_set_rejects_incomplete_set() {
        let incomplete = ParameterSet::new().with("Period", 2u32);
        assert!(CciParams::from_set(&incomplete).is_err());
    }
}
