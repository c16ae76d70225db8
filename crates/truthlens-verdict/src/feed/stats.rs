use serde::{Deserialize, Serialize};
use ts_rs::TS;

use truthlens_core::models::VerdictLabel;

use super::FeedItem;
use crate::classifier::classify;

/// Header counters for a list of feed items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeedStats {
    pub total: usize,
    pub ai_detected: usize,
    pub verified: usize,
    pub disputed: usize,
}

impl FeedStats {
    pub fn compute(items: &[FeedItem]) -> Self {
        items.iter().fold(
            Self {
                total: items.len(),
                ..Self::default()
            },
            |mut stats, item| {
                match classify(&item.tally).label {
                    VerdictLabel::AiGenerated => stats.ai_detected += 1,
                    VerdictLabel::Authentic => stats.verified += 1,
                    VerdictLabel::Disputed => stats.disputed += 1,
                }
                stats
            },
        )
    }
}
