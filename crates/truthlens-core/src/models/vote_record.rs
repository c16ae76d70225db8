use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ItemId, UserId, VoteKind};

/// One row of the votes table. The store keeps at most one per `(user_id, item_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub user_id: UserId,
    pub item_id: ItemId,
    pub kind: VoteKind,
    pub created_at: DateTime<Utc>,
}

impl VoteRecord {
    pub fn new(user_id: UserId, item_id: ItemId, kind: VoteKind) -> Self {
        Self {
            user_id,
            item_id,
            kind,
            created_at: Utc::now(),
        }
    }
}
