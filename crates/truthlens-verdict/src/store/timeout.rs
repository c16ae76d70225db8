//! TimeoutStore: bounds every call to an inner store.

use std::future::Future;
use std::time::Duration;

use truthlens_core::config::StoreConfig;
use truthlens_core::errors::StoreError;
use truthlens_core::models::{ItemId, UserId, VoteKind, VoteTally};
use truthlens_core::traits::IVoteStore;
use truthlens_observability::tracing_setup::events;

/// Wraps a store so that a call that never resolves fails with
/// `StoreError::Timeout` instead of leaving a vote pending forever.
pub struct TimeoutStore<S> {
    inner: S,
    timeout: Duration,
}

impl<S: IVoteStore> TimeoutStore<S> {
    pub fn new(inner: S, config: &StoreConfig) -> Self {
        Self::with_timeout(inner, config.timeout())
    }

    pub fn with_timeout(inner: S, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    async fn bounded<T>(
        &self,
        operation: &str,
        call: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                let timeout_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);
                events::store_timeout(operation, timeout_ms);
                Err(StoreError::Timeout { timeout_ms })
            }
        }
    }
}

impl<S: IVoteStore> IVoteStore for TimeoutStore<S> {
    async fn fetch_tally(&self, item_id: &ItemId) -> Result<VoteTally, StoreError> {
        self.bounded("fetch_tally", self.inner.fetch_tally(item_id))
            .await
    }

    async fn fetch_user_vote(
        &self,
        user_id: &UserId,
        item_id: &ItemId,
    ) -> Result<Option<VoteKind>, StoreError> {
        self.bounded("fetch_user_vote", self.inner.fetch_user_vote(user_id, item_id))
            .await
    }

    async fn cast_vote(
        &self,
        user_id: &UserId,
        item_id: &ItemId,
        kind: VoteKind,
    ) -> Result<(), StoreError> {
        self.bounded("cast_vote", self.inner.cast_vote(user_id, item_id, kind))
            .await
    }

    async fn change_vote(
        &self,
        user_id: &UserId,
        item_id: &ItemId,
        kind: VoteKind,
    ) -> Result<(), StoreError> {
        self.bounded("change_vote", self.inner.change_vote(user_id, item_id, kind))
            .await
    }
}
