use serde::{Deserialize, Serialize};

use super::defaults;

/// Vote engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Report a vote attempted while another is in flight as
    /// `TruthlensError::VoteInFlight`. When false the attempt is ignored
    /// and reported as `VoteOutcome::Ignored`.
    pub reject_in_flight: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reject_in_flight: defaults::DEFAULT_REJECT_IN_FLIGHT,
        }
    }
}
