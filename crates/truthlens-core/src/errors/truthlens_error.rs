use super::StoreError;
use crate::models::VoteKind;

/// Top-level error type for TruthLens operations.
#[derive(Debug, thiserror::Error)]
pub enum TruthlensError {
    #[error("sign in to vote")]
    NotSignedIn,

    #[error("item not loaded: {item_id}")]
    ItemNotLoaded { item_id: String },

    #[error("a vote on item {item_id} is already in flight")]
    VoteInFlight { item_id: String },

    #[error("vote {kind} on item {item_id} did not take effect: {source}")]
    VoteRolledBack {
        item_id: String,
        kind: VoteKind,
        #[source]
        source: StoreError,
    },

    #[error("invalid vote kind: {value}")]
    InvalidVoteKind { value: String },

    #[error("configuration error: {reason}")]
    Config { reason: String },

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl TruthlensError {
    /// The action did not take effect but may succeed if repeated.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::VoteInFlight { .. } | Self::VoteRolledBack { .. } | Self::Store(_)
        )
    }
}
