//! Structured log events for vote operations.
//!
//! Each function emits a `tracing` event with structured fields.

use truthlens_core::models::{ItemId, VoteKind, VoteTally};

/// Log a tally load.
pub fn tally_loaded(item_id: &ItemId, tally: &VoteTally, user_vote: Option<VoteKind>) {
    tracing::debug!(
        event = "tally_loaded",
        item_id = %item_id,
        ai = tally.ai,
        real = tally.real,
        unclear = tally.unclear,
        user_vote = ?user_vote,
        "tally loaded"
    );
}

/// Log a vote the store accepted.
pub fn vote_committed(item_id: &ItemId, kind: VoteKind, previous: Option<VoteKind>) {
    tracing::info!(
        event = "vote_committed",
        item_id = %item_id,
        kind = %kind,
        previous = ?previous,
        "vote committed"
    );
}

/// Log an optimistic update undone after a store failure.
pub fn vote_rolled_back(item_id: &ItemId, kind: VoteKind, restored: Option<VoteKind>, cause: &str) {
    tracing::warn!(
        event = "vote_rolled_back",
        item_id = %item_id,
        kind = %kind,
        restored = ?restored,
        cause = %cause,
        "vote rolled back"
    );
}

/// Log a vote attempt refused because another is in flight for the same item.
pub fn vote_rejected_in_flight(item_id: &ItemId, kind: VoteKind) {
    tracing::debug!(
        event = "vote_rejected_in_flight",
        item_id = %item_id,
        kind = %kind,
        "vote already in flight"
    );
}

/// Log a store call that exceeded its deadline.
pub fn store_timeout(operation: &str, timeout_ms: u64) {
    tracing::warn!(
        event = "store_timeout",
        operation = %operation,
        timeout_ms = timeout_ms,
        "store call timed out"
    );
}
