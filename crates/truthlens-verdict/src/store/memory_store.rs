//! MemoryVoteStore: in-process vote table keyed by `(user, item)`.
//!
//! # Examples
//!
//! ```
//! use truthlens_core::models::{ItemId, UserId, VoteKind};
//! use truthlens_core::traits::IVoteStore;
//! use truthlens_verdict::MemoryVoteStore;
//!
//! # tokio_test_block_on(async {
//! let store = MemoryVoteStore::new();
//! let (user, item) = (UserId::from("u1"), ItemId::from("p1"));
//! store.cast_vote(&user, &item, VoteKind::Ai).await.unwrap();
//! assert!(store.cast_vote(&user, &item, VoteKind::Real).await.is_err());
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use truthlens_core::errors::StoreError;
use truthlens_core::models::{ItemId, UserId, VoteKind, VoteRecord, VoteTally};
use truthlens_core::traits::IVoteStore;

use crate::feed::aggregate_tallies;

/// Thread-safe vote table with a uniqueness constraint on `(user, item)`.
#[derive(Debug, Default)]
pub struct MemoryVoteStore {
    votes: DashMap<(UserId, ItemId), VoteRecord>,
}

impl MemoryVoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing rows. Later duplicates of a pair replace earlier ones.
    pub fn from_records(records: impl IntoIterator<Item = VoteRecord>) -> Self {
        let store = Self::new();
        for record in records {
            store
                .votes
                .insert((record.user_id.clone(), record.item_id.clone()), record);
        }
        store
    }

    /// All rows, in no particular order.
    pub fn records(&self) -> Vec<VoteRecord> {
        self.votes.iter().map(|r| r.value().clone()).collect()
    }

    /// Rows for one item.
    pub fn records_for(&self, item_id: &ItemId) -> Vec<VoteRecord> {
        self.votes
            .iter()
            .filter(|r| &r.key().1 == item_id)
            .map(|r| r.value().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.votes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }
}

impl IVoteStore for MemoryVoteStore {
    async fn fetch_tally(&self, item_id: &ItemId) -> Result<VoteTally, StoreError> {
        let records = self.records_for(item_id);
        Ok(aggregate_tallies(&records)
            .remove(item_id)
            .unwrap_or_default())
    }

    async fn fetch_user_vote(
        &self,
        user_id: &UserId,
        item_id: &ItemId,
    ) -> Result<Option<VoteKind>, StoreError> {
        Ok(self
            .votes
            .get(&(user_id.clone(), item_id.clone()))
            .map(|r| r.kind))
    }

    async fn cast_vote(
        &self,
        user_id: &UserId,
        item_id: &ItemId,
        kind: VoteKind,
    ) -> Result<(), StoreError> {
        match self.votes.entry((user_id.clone(), item_id.clone())) {
            Entry::Occupied(_) => Err(StoreError::UniqueViolation {
                user_id: user_id.to_string(),
                item_id: item_id.to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(VoteRecord::new(user_id.clone(), item_id.clone(), kind));
                Ok(())
            }
        }
    }

    async fn change_vote(
        &self,
        user_id: &UserId,
        item_id: &ItemId,
        kind: VoteKind,
    ) -> Result<(), StoreError> {
        match self.votes.get_mut(&(user_id.clone(), item_id.clone())) {
            Some(mut record) => {
                record.kind = kind;
                Ok(())
            }
            None => Err(StoreError::NotFound {
                user_id: user_id.to_string(),
                item_id: item_id.to_string(),
            }),
        }
    }
}
