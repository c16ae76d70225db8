//! Per-(user, item) vote state.
//!
//! At most one mutation can be outstanding for a pair: the only way to have
//! one is to be in [`VoteState::Pending`], and a pending pair accepts no
//! further transitions until it commits or rolls back.

use serde::{Deserialize, Serialize};

use super::{TallyDelta, VoteKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum VoteState {
    #[default]
    NoVote,
    Voted { kind: VoteKind },
    Pending {
        kind: VoteKind,
        previous: Option<VoteKind>,
        delta: TallyDelta,
    },
}

impl VoteState {
    /// State for a freshly loaded pair.
    pub fn from_vote(vote: Option<VoteKind>) -> Self {
        match vote {
            Some(kind) => Self::Voted { kind },
            None => Self::NoVote,
        }
    }

    /// The vote the user sees as selected. A pending attempt shows its target kind.
    pub fn current(&self) -> Option<VoteKind> {
        match self {
            Self::NoVote => None,
            Self::Voted { kind } | Self::Pending { kind, .. } => Some(*kind),
        }
    }

    /// The last vote the store confirmed.
    pub fn confirmed(&self) -> Option<VoteKind> {
        match self {
            Self::NoVote => None,
            Self::Voted { kind } => Some(*kind),
            Self::Pending { previous, .. } => *previous,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }
}
