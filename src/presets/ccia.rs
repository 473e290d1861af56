//! CCIA strategy presets.
//!
//! Older CCI variant that predates the tick filter; otherwise the same
//! parameter surface as CCI_Arrows.

use serde::{Deserialize, Serialize};

use super::{float, int_u32, price};
use crate::error::Result;
use crate::params::ParameterSet;
use crate::registry::{PresetKey, PresetRegistryBuilder};
use crate::schema::Schema;
use crate::types::{AppliedPrice, StrategyFamily, Timeframe};

/// CCIA strategy parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CciaParams {
    /// CCI averaging period in bars
    pub period: u32,
    /// Price series the CCI consumes
    pub applied_price: AppliedPrice,
    /// Bar shift the indicator is read at
    pub shift: u32,
    /// Signal-open algorithm selector
    pub signal_open_method: u32,
    /// CCI level beyond which a position opens
    pub signal_open_level: f64,
    /// Signal-close algorithm selector
    pub signal_close_method: u32,
    /// CCI level beyond which a position closes
    pub signal_close_level: f64,
    /// Price-limit algorithm selector for pending orders
    pub price_limit_method: u32,
    /// Price-limit distance in points
    pub price_limit_level: f64,
    /// Maximum allowed spread in points
    pub max_spread: f64,
}

impl CciaParams {
    /// EURUSD tuning for 1-hour bars
    pub fn eurusd_h1() -> Self {
        CciaParams {
            period: 12,
            applied_price: AppliedPrice::Low,
            shift: 0,
            signal_open_method: 0,
            signal_open_level: 36.0,
            signal_close_method: 1,
            signal_close_level: 36.0,
            price_limit_method: 0,
            price_limit_level: 2.0,
            max_spread: 6.0,
        }
    }

    /// Flatten into the generic field form the registry stores
    pub fn to_set(&self) -> ParameterSet {
        ParameterSet::new()
            .with("Period", self.period)
            .with("AppliedPrice", self.applied_price)
            .with("Shift", self.shift)
            .with("SignalOpenMethod", self.signal_open_method)
            .with("SignalOpenLevel", self.signal_open_level)
            .with("SignalCloseMethod", self.signal_close_method)
            .with("SignalCloseLevel", self.signal_close_level)
            .with("PriceLimitMethod", self.price_limit_method)
            .with("PriceLimitLevel", self.price_limit_level)
            .with("MaxSpread", self.max_spread)
    }

    /// Rebuild from a stored set, checking it against the CCIA schema first
    pub fn from_set(params: &ParameterSet) -> Result<Self> {
        let family = StrategyFamily::Ccia;
        Schema::of(family).validate(params)?;
        Ok(CciaParams {
            period: int_u32(family, params, "Period")?,
            applied_price: price(family, params, "AppliedPrice")?,
            shift: int_u32(family, params, "Shift")?,
            signal_open_method: int_u32(family, params, "SignalOpenMethod")?,
            signal_open_level: float(family, params, "SignalOpenLevel")?,
            signal_close_method: int_u32(family, params, "SignalCloseMethod")?,
            signal_close_level: float(family, params, "SignalCloseLevel")?,
            price_limit_method: int_u32(family, params, "PriceLimitMethod")?,
            price_limit_level: float(family, params, "PriceLimitLevel")?,
            max_spread: float(family, params, "MaxSpread")?,
        })
    }
}

/// Register the built-in CCIA presets
pub fn register_builtin(builder: &mut PresetRegistryBuilder) -> Result<()> {
    builder.register(
        PresetKey::new(StrategyFamily::Ccia, "EURUSD", Timeframe::H1),
        CciaParams::eurusd_h1().to_set(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_eurusd_h1_matches_schema() {
        let set = CciaParams::eurusd_h1().to_set();
        assert!(Schema::of(StrategyFamily::Ccia).validate(&set).is_ok());
    }

    #[test]
    fn test_tick_filter_field_is_rejected() {
        let set = CciaParams::eurusd_h1().to_set().with("TickFilterMethod", 0u32);
        let err = Schema::of(StrategyFamily::Ccia).validate(&set);
        assert!(matches!(
            err,
            Err(ConfigError::SchemaMismatch {
                family: StrategyFamily::Ccia,
                ..
            })
        ));
    }

    #[test]
    fn test_round_trip_through_set() {
        let params = CciaParams::eurusd_h1();
        let rebuilt = CciaParams::from_set(&params.to_set()).unwrap();
        assert_eq!(rebuilt, params);
    }
}
