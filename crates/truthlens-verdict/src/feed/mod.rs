//! Feed helpers: turn raw vote rows into per-item tallies, filter items by
//! tab and search text, and summarise a feed.

pub mod aggregate;
pub mod filter;
pub mod stats;

pub use aggregate::{aggregate_tallies, enrich, user_votes};
pub use filter::{FeedItem, FeedQuery, FeedTab};
pub use stats::FeedStats;
