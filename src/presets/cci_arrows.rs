//! CCI_Arrows strategy presets.
//!
//! Arrow-signal variant of the CCI strategy. Carries the full signal
//! open/close method surface plus a tick filter, so its schema is the
//! widest of the three families.

use serde::{Deserialize, Serialize};

use super::{float, int_u32, price};
use crate::error::Result;
use crate::params::ParameterSet;
use crate::registry::{PresetKey, PresetRegistryBuilder};
use crate::schema::Schema;
use crate::types::{AppliedPrice, StrategyFamily, Timeframe};

/// CCI_Arrows strategy parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CciArrowsParams {
    // === Indicator Parameters ===
    /// CCI averaging period in bars
    pub period: u32,
    /// Price series the CCI consumes
    pub applied_price: AppliedPrice,
    /// Bar shift the indicator is read at (0 = current bar)
    pub shift: u32,

    // === Signal Parameters ===
    /// Signal-open algorithm selector
    pub signal_open_method: u32,
    /// CCI level beyond which a position opens
    pub signal_open_level: f64,
    /// Signal-close algorithm selector
    pub signal_close_method: u32,
    /// CCI level beyond which a position closes
    pub signal_close_level: f64,

    // === Order Parameters ===
    /// Price-limit algorithm selector for pending orders
    pub price_limit_method: u32,
    /// Price-limit distance in points
    pub price_limit_level: f64,
    /// Tick filter selector (0 = process every tick)
    pub tick_filter_method: u32,
    /// Maximum allowed spread in points
    pub max_spread: f64,
}

impl CciArrowsParams {
    /// EURUSD tuning for 4-hour bars
    pub fn eurusd_h4() -> Self {
        CciArrowsParams {
            period: 12,
            applied_price: AppliedPrice::Low,
            shift: 0,
            signal_open_method: 0,
            signal_open_level: 36.0,
            signal_close_method: 1,
            signal_close_level: 36.0,
            price_limit_method: 0,
            price_limit_level: 2.0,
            tick_filter_method: 0,
            max_spread: 10.0,
        }
    }

    /// EURUSD tuning for 1-minute bars. Levels sit at zero so the arrow
    /// signal alone drives entries and exits.
    pub fn eurusd_m1() -> Self {
        CciArrowsParams {
            period: 21,
            applied_price: AppliedPrice::Close,
            shift: 0,
            signal_open_method: 0,
            signal_open_level: 0.0,
            signal_close_method: 0,
            signal_close_level: 0.0,
            price_limit_method: 0,
            price_limit_level: 0.0,
            tick_filter_method: 0,
            max_spread: 2.0,
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
            .with("TickFilterMethod", self.tick_filter_method)
            .with("MaxSpread", self.max_spread)
    }

    /// Rebuild from a stored set, checking it against the family schema first
    pub fn from_set(params: &ParameterSet) -> Result<Self> {
        let family = StrategyFamily::CciArrows;
        Schema::of(family).validate(params)?;
        Ok(CciArrowsParams {
            period: int_u32(family, params, "Period")?,
            applied_price: price(family, params, "AppliedPrice")?,
            shift: int_u32(family, params, "Shift")?,
            signal_open_method: int_u32(family, params, "SignalOpenMethod")?,
            signal_open_level: float(family, params, "SignalOpenLevel")?,
            signal_close_method: int_u32(family, params, "SignalCloseMethod")?,
            signal_close_level: float(family, params, "SignalCloseLevel")?,
            price_limit_method: int_u32(family, params, "PriceLimitMethod")?,
            price_limit_level: float(family, params, "PriceLimitLevel")?,
            tick_filter_method: int_u32(family, params, "TickFilterMethod")?,
            max_spread: float(family, params, "MaxSpread")?,
        })
    }
}

/// Register the built-in CCI_Arrows presets
pub fn register_builtin(builder: &mut PresetRegistryBuilder) -> Result<()> {
    builder.register(
        PresetKey::new(StrategyFamily::CciArrows, "EURUSD", Timeframe::H4),
        CciArrowsParams::eurusd_h4().to_set(),
    )?;
    builder.register(
        PresetKey::new(StrategyFamily::CciArrows, "EURUSD", Timeframe::M1),
        CciArrowsParams::eurusd_m1().to_set(),
    )?;
    Ok(())
}
