//! Per-item vote state machine.
//!
//! `NoVote` and `Voted` are settled states. Selecting a kind moves a settled
//! pair into `Pending` and applies the optimistic tally change in the same
//! step; the store's answer then either commits (`Pending -> Voted`) or rolls
//! back (tally reverted by the recorded delta, state restored to what it was).
//!
//! # Examples
//!
//! ```
//! use truthlens_core::models::{VoteKind, VoteTally};
//! use truthlens_verdict::reducer::{ItemVotes, Transition};
//!
//! let mut item = ItemVotes::new(VoteTally::new(2, 2, 2), None);
//! assert!(matches!(item.begin(VoteKind::Real), Transition::Begin(_)));
//! assert_eq!(item.tally, VoteTally::new(2, 3, 2));
//!
//! item.rollback();
//! assert_eq!(item.tally, VoteTally::new(2, 2, 2));
//! assert_eq!(item.state.current(), None);
//! ```

use truthlens_core::models::{VoteKind, VoteState, VoteTally};

/// Which store operation a pending vote needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreCall {
    /// First vote for the pair: insert.
    Cast,
    /// Existing vote for the pair: update.
    Change,
}

/// A vote that has been applied locally and awaits the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingVote {
    pub kind: VoteKind,
    pub previous: Option<VoteKind>,
    pub call: StoreCall,
}

/// Result of selecting a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The kind is already the confirmed vote. Nothing changed.
    Unchanged,
    /// Another vote is outstanding for this pair. Nothing changed.
    InFlight,
    /// The tally was updated optimistically; issue the store call.
    Begin(PendingVote),
}

/// Outcome of resolving a pending vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub kind: VoteKind,
    pub previous: Option<VoteKind>,
}

/// Tally and vote state for one item, as seen by the signed-in user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemVotes {
    pub tally: VoteTally,
    pub state: VoteState,
    generation: u64,
}

impl ItemVotes {
    pub fn new(tally: VoteTally, user_vote: Option<VoteKind>) -> Self {
        Self {
            tally,
            state: VoteState::from_vote(user_vote),
            generation: 0,
        }
    }

    /// Number of votes begun on this item. Fetched state read at an older
    /// generation predates a local vote and must not replace it.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace tally and vote with fetched values, keeping the generation.
    pub fn reload(&mut self, tally: VoteTally, user_vote: Option<VoteKind>) {
        self.tally = tally;
        self.state = VoteState::from_vote(user_vote);
    }

    /// Select `kind`.
    pub fn begin(&mut self, kind: VoteKind) -> Transition {
        match self.state {
            VoteState::Pending { .. } => Transition::InFlight,
            VoteState::Voted { kind: current } if current == kind => Transition::Unchanged,
            VoteState::Voted { kind: previous } => {
                self.generation = self.generation.wrapping_add(1);
                let delta = self.tally.shift(previous, kind);
                self.state = VoteState::Pending {
                    kind,
                    previous: Some(previous),
                    delta,
                };
                Transition::Begin(PendingVote {
                    kind,
                    previous: Some(previous),
                    call: StoreCall::Change,
                })
            }
            VoteState::NoVote => {
                self.generation = self.generation.wrapping_add(1);
                let delta = self.tally.apply(kind);
                self.state = VoteState::Pending {
                    kind,
                    previous: None,
                    delta,
                };
                Transition::Begin(PendingVote {
                    kind,
                    previous: None,
                    call: StoreCall::Cast,
                })
            }
        }
    }

    /// The store accepted the pending vote. Returns `None` if nothing was pending.
    pub fn commit(&mut self) -> Option<Resolved> {
        let VoteState::Pending { kind, previous, .. } = self.state else {
            return None;
        };
        self.state = VoteState::Voted { kind };
        Some(Resolved { kind, previous })
    }

    /// The store rejected the pending vote: undo the optimistic change.
    /// Returns `None` if nothing was pending.
    pub fn rollback(&mut self) -> Option<Resolved> {
        let VoteState::Pending {
            kind,
            previous,
            delta,
        } = self.state
        else {
            return None;
        };
        self.tally.revert(delta);
        self.state = VoteState::from_vote(previous);
        Some(Resolved { kind, previous })
    }
}
