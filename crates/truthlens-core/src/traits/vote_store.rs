//! IVoteStore: the tabular data store behind vote casting.

use std::sync::Arc;

use crate::errors::StoreError;
use crate::models::{ItemId, UserId, VoteKind, VoteTally};

/// Backing store for votes.
///
/// Implementations enforce the `(user, item)` uniqueness constraint:
/// `cast_vote` fails when a vote already exists for the pair and
/// `change_vote` updates the existing row.
#[allow(async_fn_in_trait)]
pub trait IVoteStore: Send + Sync {
    /// Aggregated counts for one item.
    async fn fetch_tally(&self, item_id: &ItemId) -> Result<VoteTally, StoreError>;

    /// The user's current vote on an item, if any.
    async fn fetch_user_vote(
        &self,
        user_id: &UserId,
        item_id: &ItemId,
    ) -> Result<Option<VoteKind>, StoreError>;

    /// Insert a first vote for the pair.
    async fn cast_vote(
        &self,
        user_id: &UserId,
        item_id: &ItemId,
        kind: VoteKind,
    ) -> Result<(), StoreError>;

    /// Update the existing vote for the pair.
    async fn change_vote(
        &self,
        user_id: &UserId,
        item_id: &ItemId,
        kind: VoteKind,
    ) -> Result<(), StoreError>;
}

impl<S: IVoteStore> IVoteStore for Arc<S> {
    async fn fetch_tally(&self, item_id: &ItemId) -> Result<VoteTally, StoreError> {
        (**self).fetch_tally(item_id).await
    }

    async fn fetch_user_vote(
        &self,
        user_id: &UserId,
        item_id: &ItemId,
    ) -> Result<Option<VoteKind>, StoreError> {
        (**self).fetch_user_vote(user_id, item_id).await
    }

    async fn cast_vote(
        &self,
        user_id: &UserId,
        item_id: &ItemId,
        kind: VoteKind,
    ) -> Result<(), StoreError> {
        (**self).cast_vote(user_id, item_id, kind).await
    }

    async fn change_vote(
        &self,
        user_id: &UserId,
        item_id: &ItemId,
        kind: VoteKind,
    ) -> Result<(), StoreError> {
        (**self).change_vote(user_id, item_id, kind).await
    }
}
