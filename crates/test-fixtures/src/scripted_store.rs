//! ScriptedStore: an `IVoteStore` whose failures and latency tests control.
//!
//! - `fail_next` queues errors returned by the next mutating calls.
//! - `hold` parks mutating calls until `release` hands out permits, which
//!   lets a test observe and poke at an engine while a vote is in flight.
//! - `hold_fetches` parks `fetch_tally` after it has read its answer, so a
//!   test can change the store underneath an in-progress load.
//! - Call counters record how often each operation reached the store.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::Semaphore;

use truthlens_core::errors::StoreError;
use truthlens_core::models::{ItemId, UserId, VoteKind, VoteTally};
use truthlens_core::traits::IVoteStore;

#[derive(Default)]
struct Tables {
    tallies: HashMap<ItemId, VoteTally>,
    votes: HashMap<(UserId, ItemId), VoteKind>,
}

pub struct ScriptedStore {
    tables: Mutex<Tables>,
    failures: Mutex<VecDeque<StoreError>>,
    held: AtomicBool,
    gate: Semaphore,
    fetch_held: AtomicBool,
    fetch_gate: Semaphore,
    fetch_calls: AtomicUsize,
    cast_calls: AtomicUsize,
    change_calls: AtomicUsize,
}

impl Default for ScriptedStore {
    fn default() -> Self {
        Self::new()
    }
}

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ScriptedStore {
    pub fn new() -> Self {
        Self {
            tables: Mutex::new(Tables::default()),
            failures: Mutex::new(VecDeque::new()),
            held: AtomicBool::new(false),
            gate: Semaphore::new(0),
            fetch_held: AtomicBool::new(false),
            fetch_gate: Semaphore::new(0),
            fetch_calls: AtomicUsize::new(0),
            cast_calls: AtomicUsize::new(0),
            change_calls: AtomicUsize::new(0),
        }
    }

    /// Seed an item's stored tally.
    pub fn with_tally(self, item_id: impl Into<ItemId>, tally: VoteTally) -> Self {
        locked(&self.tables).tallies.insert(item_id.into(), tally);
        self
    }

    /// Seed a stored vote. Does not touch the tally; seed that separately.
    pub fn with_vote(
        self,
        user_id: impl Into<UserId>,
        item_id: impl Into<ItemId>,
        kind: VoteKind,
    ) -> Self {
        locked(&self.tables)
            .votes
            .insert((user_id.into(), item_id.into()), kind);
        self
    }

    /// The next mutating call fails with `error`. Calls queue in order.
    pub fn fail_next(&self, error: StoreError) {
        locked(&self.failures).push_back(error);
    }

    /// Park mutating calls until released.
    pub fn hold(&self) {
        self.held.store(true, Ordering::SeqCst);
    }

    /// Let `n` parked (or future parked) calls proceed.
    pub fn release(&self, n: usize) {
        self.gate.add_permits(n);
    }

    /// Stop parking calls.
    pub fn unhold(&self) {
        self.held.store(false, Ordering::SeqCst);
    }

    /// Park `fetch_tally` calls, after they read the tally, until released.
    pub fn hold_fetches(&self) {
        self.fetch_held.store(true, Ordering::SeqCst);
    }

    /// Let `n` parked tally fetches return.
    pub fn release_fetches(&self, n: usize) {
        self.fetch_gate.add_permits(n);
    }

    pub fn stored_tally(&self, item_id: &ItemId) -> VoteTally {
        locked(&self.tables)
            .tallies
            .get(item_id)
            .copied()
            .unwrap_or_default()
    }

    pub fn stored_vote(&self, user_id: &UserId, item_id: &ItemId) -> Option<VoteKind> {
        locked(&self.tables)
            .votes
            .get(&(user_id.clone(), item_id.clone()))
            .copied()
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn cast_calls(&self) -> usize {
        self.cast_calls.load(Ordering::SeqCst)
    }

    pub fn change_calls(&self) -> usize {
        self.change_calls.load(Ordering::SeqCst)
    }

    /// Total mutating calls that reached the store.
    pub fn mutation_calls(&self) -> usize {
        self.cast_calls() + self.change_calls()
    }

    async fn pass_gate(&self) -> Result<(), StoreError> {
        if self.held.load(Ordering::SeqCst) {
            self.gate
                .acquire()
                .await
                .map_err(|_| StoreError::unavailable("gate closed"))?
                .forget();
        }
        match locked(&self.failures).pop_front() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl IVoteStore for ScriptedStore {
    async fn fetch_tally(&self, item_id: &ItemId) -> Result<VoteTally, StoreError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        let tally = self.stored_tally(item_id);
        if self.fetch_held.load(Ordering::SeqCst) {
            self.fetch_gate
                .acquire()
                .await
                .map_err(|_| StoreError::unavailable("fetch gate closed"))?
                .forget();
        }
        Ok(tally)
    }

    async fn fetch_user_vote(
        &self,
        user_id: &UserId,
        item_id: &ItemId,
    ) -> Result<Option<VoteKind>, StoreError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.stored_vote(user_id, item_id))
    }

    async fn cast_vote(
        &self,
        user_id: &UserId,
        item_id: &ItemId,
        kind: VoteKind,
    ) -> Result<(), StoreError> {
        self.cast_calls.fetch_add(1, Ordering::SeqCst);
        self.pass_gate().await?;

        let mut tables = locked(&self.tables);
        let key = (user_id.clone(), item_id.clone());
        if tables.votes.contains_key(&key) {
            return Err(StoreError::UniqueViolation {
                user_id: user_id.to_string(),
                item_id: item_id.to_string(),
            });
        }
        tables.votes.insert(key, kind);
        tables.tallies.entry(item_id.clone()).or_default().apply(kind);
        Ok(())
    }

    async fn change_vote(
        &self,
        user_id: &UserId,
        item_id: &ItemId,
        kind: VoteKind,
    ) -> Result<(), StoreError> {
        self.change_calls.fetch_add(1, Ordering::SeqCst);
        self.pass_gate().await?;

        let mut tables = locked(&self.tables);
        let key = (user_id.clone(), item_id.clone());
        let Some(previous) = tables.votes.insert(key.clone(), kind) else {
            tables.votes.remove(&key);
            return Err(StoreError::NotFound {
                user_id: user_id.to_string(),
                item_id: item_id.to_string(),
            });
        };
        tables
            .tallies
            .entry(item_id.clone())
            .or_default()
            .shift(previous, kind);
        Ok(())
    }
}
