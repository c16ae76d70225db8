use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Crowd classification of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum VerdictLabel {
    AiGenerated,
    Authentic,
    Disputed,
}

impl VerdictLabel {
    /// Badge text shown next to an item.
    pub fn display_name(self) -> &'static str {
        match self {
            VerdictLabel::AiGenerated => "AI GENERATED",
            VerdictLabel::Authentic => "AUTHENTIC",
            VerdictLabel::Disputed => "DISPUTED",
        }
    }
}

impl std::fmt::Display for VerdictLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Derived from a tally on demand; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Verdict {
    pub label: VerdictLabel,
    /// Largest single-kind share of the tally, in `[0, 1]`.
    pub dominant_share: f64,
}
