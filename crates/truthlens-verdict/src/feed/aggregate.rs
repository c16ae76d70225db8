//! Tally aggregation from vote rows.

use std::collections::HashMap;

use truthlens_core::models::{ItemId, UserId, VoteKind, VoteRecord, VoteTally};

use super::FeedItem;

/// Count vote rows per item.
pub fn aggregate_tallies(records: &[VoteRecord]) -> HashMap<ItemId, VoteTally> {
    let mut tallies: HashMap<ItemId, VoteTally> = HashMap::new();
    for record in records {
        tallies
            .entry(record.item_id.clone())
            .or_default()
            .apply(record.kind);
    }
    tallies
}

/// The given user's vote per item.
pub fn user_votes(records: &[VoteRecord], user_id: &UserId) -> HashMap<ItemId, VoteKind> {
    records
        .iter()
        .filter(|record| &record.user_id == user_id)
        .map(|record| (record.item_id.clone(), record.kind))
        .collect()
}

/// Fill in tallies and the user's vote on each feed item.
///
/// Items without rows get an empty tally; signed-out callers get no user votes.
pub fn enrich(items: &mut [FeedItem], records: &[VoteRecord], user_id: Option<&UserId>) {
    let tallies = aggregate_tallies(records);
    let mine = user_id
        .map(|user_id| user_votes(records, user_id))
        .unwrap_or_default();

    for item in items.iter_mut() {
        item.tally = tallies.get(&item.item_id).copied().unwrap_or_default();
        item.user_vote = mine.get(&item.item_id).copied();
    }
}
