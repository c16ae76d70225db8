//! Feed tabs and search.
//!
//! # Examples
//!
//! ```
//! use truthlens_core::models::VoteTally;
//! use truthlens_verdict::feed::{FeedItem, FeedQuery, FeedTab};
//!
//! let mut real = FeedItem::new("p1", "Street interview", None);
//! real.tally = VoteTally::new(1, 9, 0);
//! let mut split = FeedItem::new("p2", "Concert clip", None);
//! split.tally = VoteTally::new(3, 3, 3);
//!
//! let query = FeedQuery::tab(FeedTab::Verified);
//! let verified = query.apply(vec![real, split]);
//! assert_eq!(verified.len(), 1);
//! assert_eq!(verified[0].item_id.as_str(), "p1");
//! ```

use std::cmp::Reverse;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use truthlens_core::models::{ItemId, Verdict, VoteKind, VoteTally};

use crate::classifier::{classify, is_disputed, is_verified};

/// Feed tab selection. Every tab lists items newest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedTab {
    #[default]
    Trending,
    Recent,
    /// Items the crowd considers authentic.
    Verified,
    /// Items with no majority.
    Disputed,
}

impl FeedTab {
    /// Whether an item with this tally belongs on the tab.
    pub fn matches(self, tally: &VoteTally) -> bool {
        match self {
            FeedTab::Trending | FeedTab::Recent => true,
            FeedTab::Verified => is_verified(tally),
            FeedTab::Disputed => is_disputed(tally),
        }
    }
}

/// A rated item as listed in the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    pub item_id: ItemId,
    pub title: String,
    pub description: Option<String>,
    /// Posting time. Items without one sort after all dated items.
    pub created_at: Option<DateTime<Utc>>,
    pub tally: VoteTally,
    pub user_vote: Option<VoteKind>,
}

impl FeedItem {
    pub fn new(
        item_id: impl Into<ItemId>,
        title: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            title: title.into(),
            description,
            created_at: None,
            tally: VoteTally::default(),
            user_vote: None,
        }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn verdict(&self) -> Verdict {
        classify(&self.tally)
    }

    /// Case-insensitive substring match on title or description.
    /// An empty needle matches everything.
    pub fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }
}

/// Tab plus optional search text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedQuery {
    pub tab: FeedTab,
    pub search: String,
}

impl FeedQuery {
    pub fn tab(tab: FeedTab) -> Self {
        Self {
            tab,
            search: String::new(),
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn matches(&self, item: &FeedItem) -> bool {
        self.tab.matches(&item.tally) && item.matches_search(&self.search)
    }

    /// Keep matching items, newest first. Items posted at the same time (or
    /// undated) keep their input order.
    pub fn apply(&self, items: Vec<FeedItem>) -> Vec<FeedItem> {
        let mut kept: Vec<FeedItem> = items.into_iter().filter(|item| self.matches(item)).collect();
        kept.sort_by_key(|item| Reverse(item.created_at));
        kept
    }
}
