//! Vote metrics.

pub mod vote_metrics;

pub use vote_metrics::VoteMetrics;
