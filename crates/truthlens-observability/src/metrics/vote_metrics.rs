//! Vote attempt counters and rollback rate.

use serde::{Deserialize, Serialize};

/// Counts of vote attempts by outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteMetrics {
    /// First votes the store accepted.
    pub cast: u64,
    /// Changed votes the store accepted.
    pub changed: u64,
    /// Repeat selections of the current kind.
    pub unchanged: u64,
    /// Attempts undone after a store failure.
    pub rolled_back: u64,
    /// Attempts refused or ignored while another was in flight.
    pub rejected_in_flight: u64,
}

impl VoteMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_cast(&mut self) {
        self.cast += 1;
    }

    pub fn record_changed(&mut self) {
        self.changed += 1;
    }

    pub fn record_unchanged(&mut self) {
        self.unchanged += 1;
    }

    pub fn record_rolled_back(&mut self) {
        self.rolled_back += 1;
    }

    pub fn record_rejected_in_flight(&mut self) {
        self.rejected_in_flight += 1;
    }

    /// Attempts that reached the store.
    pub fn store_attempts(&self) -> u64 {
        self.cast + self.changed + self.rolled_back
    }

    /// Fraction of store attempts that were rolled back (0.0–1.0).
    pub fn rollback_rate(&self) -> f64 {
        let attempts = self.store_attempts();
        if attempts == 0 {
            return 0.0;
        }
        self.rolled_back as f64 / attempts as f64
    }

    /// Reset all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
