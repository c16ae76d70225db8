//! Verdict classifier.
//!
//! The same rule drives the badge on an item and the feed tabs, so the two
//! can never disagree.
//!
//! # Examples
//!
//! ```
//! use truthlens_core::models::{VerdictLabel, VoteTally};
//! use truthlens_verdict::classify;
//!
//! assert_eq!(classify(&VoteTally::new(10, 5, 3)).label, VerdictLabel::AiGenerated);
//! assert_eq!(classify(&VoteTally::new(5, 10, 3)).label, VerdictLabel::Authentic);
//! assert_eq!(classify(&VoteTally::default()).label, VerdictLabel::Disputed);
//! ```

use truthlens_core::constants::VERDICT_THRESHOLD;
use truthlens_core::models::{Verdict, VerdictLabel, VoteTally};

/// Classify a tally. Pure and total.
///
/// Checks run in a fixed order: AI share first, then real share. The first
/// share strictly above [`VERDICT_THRESHOLD`] decides; otherwise the item is
/// disputed. An empty tally divides by 1, so every share is 0.
pub fn classify(tally: &VoteTally) -> Verdict {
    let shares = tally.shares();

    let label = if shares.ai > VERDICT_THRESHOLD {
        VerdictLabel::AiGenerated
    } else if shares.real > VERDICT_THRESHOLD {
        VerdictLabel::Authentic
    } else {
        VerdictLabel::Disputed
    };

    Verdict {
        label,
        dominant_share: shares.ai.max(shares.real).max(shares.unclear),
    }
}

/// Majority of voters think the item is AI generated.
pub fn is_ai_detected(tally: &VoteTally) -> bool {
    classify(tally).label == VerdictLabel::AiGenerated
}

/// Majority of voters think the item is real. Backs the "verified" tab.
pub fn is_verified(tally: &VoteTally) -> bool {
    classify(tally).label == VerdictLabel::Authentic
}

/// No kind has a majority. Backs the "disputed" tab.
pub fn is_disputed(tally: &VoteTally) -> bool {
    classify(tally).label == VerdictLabel::Disputed
}
