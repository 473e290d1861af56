//! Strategy Parameter Presets
//!
//! The configuration-data subsystem of a multi-strategy FX trading robot:
//! a registry of parameter presets keyed by (strategy family, symbol,
//! timeframe), built once at startup from compiled-in literals or a JSON
//! preset file, then sealed and read concurrently by strategy instances.
//!
//! # Example
//! ```
//! use strategy_presets::{PresetKey, PresetRegistry, StrategyFamily, Timeframe};
//!
//! let registry = PresetRegistry::builtin();
//! let key = PresetKey::new(StrategyFamily::CciArrows, "EURUSD", Timeframe::H4);
//! let params = registry.lookup(&key)?;
//! assert_eq!(params.float("MaxSpread"), Some(10.0));
//! # Ok::<(), strategy_presets::ConfigError>(())
//! ```

pub mod error;
pub mod loader;
pub mod params;
pub mod presets;
pub mod registry;
pub mod schema;
pub mod types;

pub use error::{ConfigError, SchemaViolation};
pub use loader::{PresetEntry, PresetFile};
pub use params::{ParamValue, ParameterSet};
pub use registry::{PresetKey, PresetRegistry, PresetRegistryBuilder};
pub use schema::{FieldKind, FieldSpec, Schema};
pub use types::*;
