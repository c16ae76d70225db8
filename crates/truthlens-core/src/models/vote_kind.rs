//! The three mutually exclusive vote categories.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::TruthlensError;

/// A single user's judgement of an item.
///
/// Serialized as the store's column values: `"ai"`, `"real"`, `"unclear"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum VoteKind {
    Ai,
    Real,
    Unclear,
}

impl VoteKind {
    /// All kinds, in display order.
    pub const ALL: [VoteKind; 3] = [VoteKind::Ai, VoteKind::Real, VoteKind::Unclear];

    pub fn as_str(self) -> &'static str {
        match self {
            VoteKind::Ai => "ai",
            VoteKind::Real => "real",
            VoteKind::Unclear => "unclear",
        }
    }
}

impl std::fmt::Display for VoteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteKind {
    type Err = TruthlensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ai" => Ok(VoteKind::Ai),
            "real" => Ok(VoteKind::Real),
            "unclear" => Ok(VoteKind::Unclear),
            other => Err(TruthlensError::InvalidVoteKind {
                value: other.to_string(),
            }),
        }
    }
}
