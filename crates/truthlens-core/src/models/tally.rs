//! Aggregate vote counts for one item.
//!
//! # Examples
//!
//! ```
//! use truthlens_core::models::{VoteKind, VoteTally};
//!
//! let mut tally = VoteTally::new(2, 2, 2);
//! let delta = tally.apply(VoteKind::Real);
//! assert_eq!(tally, VoteTally::new(2, 3, 2));
//!
//! tally.revert(delta);
//! assert_eq!(tally, VoteTally::new(2, 2, 2));
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::VoteKind;
use crate::constants::EMPTY_TALLY_DENOMINATOR;

/// Per-kind vote counters. Counts never go below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VoteTally {
    pub ai: u64,
    pub real: u64,
    pub unclear: u64,
}

/// The exact change an optimistic mutation made to a tally.
///
/// `removed` is `None` when nothing was decremented, either because this was a
/// first vote or because the previous kind's counter was already zero.
/// `added` is `None` when the target counter was already at `u64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyDelta {
    pub added: Option<VoteKind>,
    pub removed: Option<VoteKind>,
}

/// Per-kind proportions of a tally, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VoteShares {
    pub ai: f64,
    pub real: f64,
    pub unclear: f64,
}

impl VoteTally {
    pub fn new(ai: u64, real: u64, unclear: u64) -> Self {
        Self { ai, real, unclear }
    }

    pub fn total(&self) -> u64 {
        self.ai.saturating_add(self.real).saturating_add(self.unclear)
    }

    /// Total used as the share denominator. An empty tally divides by 1.
    pub fn effective_total(&self) -> u64 {
        match self.total() {
            0 => EMPTY_TALLY_DENOMINATOR,
            total => total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn get(&self, kind: VoteKind) -> u64 {
        match kind {
            VoteKind::Ai => self.ai,
            VoteKind::Real => self.real,
            VoteKind::Unclear => self.unclear,
        }
    }

    fn slot_mut(&mut self, kind: VoteKind) -> &mut u64 {
        match kind {
            VoteKind::Ai => &mut self.ai,
            VoteKind::Real => &mut self.real,
            VoteKind::Unclear => &mut self.unclear,
        }
    }

    /// Fraction of all votes cast for `kind`, using the effective total.
    pub fn share(&self, kind: VoteKind) -> f64 {
        self.get(kind) as f64 / self.effective_total() as f64
    }

    pub fn shares(&self) -> VoteShares {
        VoteShares {
            ai: self.share(VoteKind::Ai),
            real: self.share(VoteKind::Real),
            unclear: self.share(VoteKind::Unclear),
        }
    }

    /// Count one vote for `kind`.
    pub fn apply(&mut self, kind: VoteKind) -> TallyDelta {
        TallyDelta {
            added: self.increment(kind),
            removed: None,
        }
    }

    fn increment(&mut self, kind: VoteKind) -> Option<VoteKind> {
        let slot = self.slot_mut(kind);
        let bumped = slot.checked_add(1)?;
        *slot = bumped;
        Some(kind)
    }

    /// Move one vote from `from` to `to`.
    pub fn shift(&mut self, from: VoteKind, to: VoteKind) -> TallyDelta {
        let source = self.slot_mut(from);
        let removed = if *source > 0 {
            *source -= 1;
            Some(from)
        } else {
            None
        };
        TallyDelta {
            added: self.increment(to),
            removed,
        }
    }

    /// Undo exactly what `delta` did.
    pub fn revert(&mut self, delta: TallyDelta) {
        if let Some(added) = delta.added {
            let slot = self.slot_mut(added);
            *slot = slot.saturating_sub(1);
        }
        if let Some(removed) = delta.removed {
            let slot = self.slot_mut(removed);
            *slot = slot.saturating_add(1);
        }
    }
}
