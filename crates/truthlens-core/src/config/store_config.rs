use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Vote store boundary configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Upper bound on a single store round trip, in milliseconds.
    pub timeout_ms: u64,
}

impl StoreConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            timeout_ms: defaults::DEFAULT_STORE_TIMEOUT_MS,
        }
    }
}
