//! # truthlens-verdict
//!
//! Crowd verdicts for rated items and the one-vote-per-user protocol behind them.
//!
//! ## Modules
//!
//! - `classifier`: map a tally to AI GENERATED / AUTHENTIC / DISPUTED
//! - `reducer`: per-item vote state machine with exact rollback
//! - `engine`: `VerdictEngine`, optimistic updates reconciled against an `IVoteStore`
//! - `feed`: tally aggregation, tab/search filtering, and feed stats
//! - `store`: in-memory store and a timeout wrapper for any store

pub mod classifier;
pub mod engine;
pub mod feed;
pub mod reducer;
pub mod store;

pub use classifier::classify;
pub use engine::{ItemSnapshot, VerdictEngine, VoteOutcome};
pub use feed::{FeedItem, FeedQuery, FeedStats, FeedTab};
pub use reducer::{ItemVotes, Transition};
pub use store::{MemoryVoteStore, TimeoutStore};
