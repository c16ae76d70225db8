//! # truthlens-core
//!
//! Foundation crate for TruthLens.
//! Defines the vote data model, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TruthlensConfig;
pub use errors::{StoreError, TruthlensError, TruthlensResult};
pub use models::{
    ItemId, TallyDelta, UserId, Verdict, VerdictLabel, VoteKind, VoteRecord, VoteShares,
    VoteState, VoteTally,
};
pub use traits::IVoteStore;
