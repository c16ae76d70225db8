//! Configuration for TruthLens, loaded from TOML.
//!
//! Every section and field is optional; missing values fall back to
//! [`defaults`].
//!
//! # Examples
//!
//! ```
//! use truthlens_core::config::TruthlensConfig;
//!
//! let config = TruthlensConfig::from_toml("[store]\ntimeout_ms = 2500\n").unwrap();
//! assert_eq!(config.store.timeout_ms, 2500);
//! assert!(config.engine.reject_in_flight);
//! ```

pub mod defaults;
mod engine_config;
mod observability_config;
mod store_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use engine_config::EngineConfig;
pub use observability_config::ObservabilityConfig;
pub use store_config::StoreConfig;

use crate::errors::{TruthlensError, TruthlensResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TruthlensConfig {
    pub engine: EngineConfig,
    pub store: StoreConfig,
    pub observability: ObservabilityConfig,
}

impl TruthlensConfig {
    /// Parse a TOML document.
    pub fn from_toml(input: &str) -> TruthlensResult<Self> {
        let config: Self = toml::from_str(input).map_err(|e| TruthlensError::Config {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> TruthlensResult<Self> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|e| TruthlensError::Config {
            reason: format!("failed to read {}: {e}", path.display()),
        })?;
        Self::from_toml(&input)
    }

    fn validate(&self) -> TruthlensResult<()> {
        if self.store.timeout_ms == 0 {
            return Err(TruthlensError::Config {
                reason: "store.timeout_ms must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
