//! VerdictEngine: optimistic vote casting reconciled against the store.
//!
//! The engine is built for one session: the signed-in user (or none) is
//! passed at construction. Each loaded item keeps its tally and the user's
//! vote state in a `DashMap` entry. The entry lock is only held while a
//! transition is applied, never across a store call, so a vote on one item
//! never blocks another. A second vote on an item whose first vote is still
//! in flight sees `Pending` and is refused.

use std::sync::Mutex;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, Instrument};

use truthlens_core::config::{EngineConfig, TruthlensConfig};
use truthlens_core::errors::{TruthlensError, TruthlensResult};
use truthlens_core::models::{ItemId, UserId, Verdict, VoteKind, VoteTally};
use truthlens_core::traits::IVoteStore;
use truthlens_observability::tracing_setup::events;
use truthlens_observability::{load_span, vote_span, VoteMetrics};

use crate::classifier::classify;
use crate::reducer::{ItemVotes, StoreCall, Transition};

/// What a vote attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum VoteOutcome {
    /// First vote on the item, accepted by the store.
    Cast,
    /// Vote moved from `previous`, accepted by the store.
    Changed { previous: VoteKind },
    /// The kind was already the user's vote. No store call was made.
    Unchanged,
    /// Another vote on the item was in flight; this attempt was dropped.
    Ignored,
}

/// Point-in-time view of one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    pub item_id: ItemId,
    pub tally: VoteTally,
    pub verdict: Verdict,
    /// Selected kind as shown to the user, including a pending selection.
    pub user_vote: Option<VoteKind>,
    pub pending: bool,
}

impl ItemSnapshot {
    fn new(item_id: &ItemId, votes: &ItemVotes) -> Self {
        Self {
            item_id: item_id.clone(),
            tally: votes.tally,
            verdict: classify(&votes.tally),
            user_vote: votes.state.current(),
            pending: votes.state.is_pending(),
        }
    }
}

/// Verdicts and vote reconciliation for one user session.
pub struct VerdictEngine<S: IVoteStore> {
    store: S,
    current_user: Option<UserId>,
    config: EngineConfig,
    items: DashMap<ItemId, ItemVotes>,
    metrics: Mutex<VoteMetrics>,
}

impl<S: IVoteStore> VerdictEngine<S> {
    /// Create an engine for `current_user`. `None` means signed out:
    /// items can be loaded and classified but not voted on.
    pub fn new(store: S, current_user: Option<UserId>) -> Self {
        Self::with_config(store, current_user, &TruthlensConfig::default())
    }

    pub fn with_config(store: S, current_user: Option<UserId>, config: &TruthlensConfig) -> Self {
        Self {
            store,
            current_user,
            config: config.engine.clone(),
            items: DashMap::new(),
            metrics: Mutex::new(VoteMetrics::new()),
        }
    }

    pub fn current_user(&self) -> Option<&UserId> {
        self.current_user.as_ref()
    }

    /// Fetch an item's tally and the user's vote from the store.
    ///
    /// An item with a vote in flight is left as is; its snapshot is returned
    /// without touching the store. A vote begun while the fetch is running
    /// wins over the fetched values, which are then discarded.
    pub async fn load_item(&self, item_id: &ItemId) -> TruthlensResult<ItemSnapshot> {
        self.fetch_item(item_id)
            .instrument(load_span!(item_id))
            .await
    }

    async fn fetch_item(&self, item_id: &ItemId) -> TruthlensResult<ItemSnapshot> {
        let generation = match self.items.get(item_id) {
            Some(entry) if entry.state.is_pending() => {
                debug!(item_id = %item_id, "load skipped, vote in flight");
                return Ok(ItemSnapshot::new(item_id, &entry));
            }
            Some(entry) => entry.generation(),
            None => 0,
        };

        let tally = self.store.fetch_tally(item_id).await?;
        let user_vote = match &self.current_user {
            Some(user_id) => self.store.fetch_user_vote(user_id, item_id).await?,
            None => None,
        };
        events::tally_loaded(item_id, &tally, user_vote);

        Ok(self.install_at(item_id, tally, user_vote, Some(generation)))
    }

    /// Install state obtained elsewhere (e.g. a bulk feed query).
    ///
    /// Like [`load_item`](Self::load_item), an item with a vote in flight is
    /// not overwritten.
    pub fn install(
        &self,
        item_id: &ItemId,
        tally: VoteTally,
        user_vote: Option<VoteKind>,
    ) -> ItemSnapshot {
        self.install_at(item_id, tally, user_vote, None)
    }

    fn install_at(
        &self,
        item_id: &ItemId,
        tally: VoteTally,
        user_vote: Option<VoteKind>,
        read_at: Option<u64>,
    ) -> ItemSnapshot {
        let mut entry = self.items.entry(item_id.clone()).or_default();
        let stale = read_at.is_some_and(|generation| generation != entry.generation());
        if entry.state.is_pending() || stale {
            debug!(item_id = %item_id, stale, "fetched state discarded");
        } else {
            entry.reload(tally, user_vote);
        }
        ItemSnapshot::new(item_id, &entry)
    }

    /// Cast or change the user's vote on a loaded item.
    ///
    /// The tally is updated before the store is called. If the store call
    /// fails the update is undone exactly and `VoteRolledBack` is returned.
    pub async fn vote(&self, item_id: &ItemId, kind: VoteKind) -> TruthlensResult<VoteOutcome> {
        let user_id = self
            .current_user
            .as_ref()
            .ok_or(TruthlensError::NotSignedIn)?;

        self.vote_as(user_id, item_id, kind)
            .instrument(vote_span!(item_id, kind))
            .await
    }

    async fn vote_as(
        &self,
        user_id: &UserId,
        item_id: &ItemId,
        kind: VoteKind,
    ) -> TruthlensResult<VoteOutcome> {
        let pending = {
            let mut entry = self
                .items
                .get_mut(item_id)
                .ok_or_else(|| TruthlensError::ItemNotLoaded {
                    item_id: item_id.to_string(),
                })?;

            match entry.begin(kind) {
                Transition::Unchanged => {
                    self.record(VoteMetrics::record_unchanged);
                    return Ok(VoteOutcome::Unchanged);
                }
                Transition::InFlight => {
                    events::vote_rejected_in_flight(item_id, kind);
                    self.record(VoteMetrics::record_rejected_in_flight);
                    if self.config.reject_in_flight {
                        return Err(TruthlensError::VoteInFlight {
                            item_id: item_id.to_string(),
                        });
                    }
                    return Ok(VoteOutcome::Ignored);
                }
                Transition::Begin(pending) => {
                    debug!(tally = ?entry.tally, previous = ?pending.previous, "optimistic update applied");
                    pending
                }
            }
        };

        let result = match pending.call {
            StoreCall::Cast => self.store.cast_vote(user_id, item_id, kind).await,
            StoreCall::Change => self.store.change_vote(user_id, item_id, kind).await,
        };

        match result {
            Ok(()) => {
                self.resolve(item_id, ItemVotes::commit);
                events::vote_committed(item_id, kind, pending.previous);
                match pending.previous {
                    None => {
                        self.record(VoteMetrics::record_cast);
                        Ok(VoteOutcome::Cast)
                    }
                    Some(previous) => {
                        self.record(VoteMetrics::record_changed);
                        Ok(VoteOutcome::Changed { previous })
                    }
                }
            }
            Err(source) => {
                self.resolve(item_id, ItemVotes::rollback);
                events::vote_rolled_back(item_id, kind, pending.previous, &source.to_string());
                self.record(VoteMetrics::record_rolled_back);
                Err(TruthlensError::VoteRolledBack {
                    item_id: item_id.to_string(),
                    kind,
                    source,
                })
            }
        }
    }

    fn resolve<R>(&self, item_id: &ItemId, step: impl FnOnce(&mut ItemVotes) -> R) {
        // Items are never removed, and nothing but this call settles a
        // pending entry, so the entry is present and pending here.
        if let Some(mut entry) = self.items.get_mut(item_id) {
            step(&mut entry);
        }
    }

    fn record(&self, update: impl FnOnce(&mut VoteMetrics)) {
        if let Ok(mut metrics) = self.metrics.lock() {
            update(&mut metrics);
        }
    }

    pub fn snapshot(&self, item_id: &ItemId) -> Option<ItemSnapshot> {
        self.items
            .get(item_id)
            .map(|entry| ItemSnapshot::new(item_id, &entry))
    }

    pub fn tally(&self, item_id: &ItemId) -> Option<VoteTally> {
        self.items.get(item_id).map(|entry| entry.tally)
    }

    pub fn verdict(&self, item_id: &ItemId) -> Option<Verdict> {
        self.tally(item_id).map(|tally| classify(&tally))
    }

    /// The user's selected kind on an item, including a pending selection.
    pub fn user_vote(&self, item_id: &ItemId) -> Option<VoteKind> {
        self.items
            .get(item_id)
            .and_then(|entry| entry.state.current())
    }

    pub fn is_pending(&self, item_id: &ItemId) -> bool {
        self.items
            .get(item_id)
            .is_some_and(|entry| entry.state.is_pending())
    }

    /// Number of items loaded.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Snapshot of vote attempt counters.
    pub fn metrics(&self) -> VoteMetrics {
        self.metrics
            .lock()
            .map(|metrics| metrics.clone())
            .unwrap_or_default()
    }
}
