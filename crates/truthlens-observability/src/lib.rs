//! # truthlens-observability
//!
//! Tracing subscriber setup, span definitions, structured vote events, and
//! vote metrics.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::VoteMetrics;
pub use tracing_setup::{init_tracing, init_tracing_from_config, init_tracing_with_filter};
