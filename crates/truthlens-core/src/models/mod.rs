pub mod ids;
pub mod tally;
pub mod verdict;
pub mod vote_kind;
pub mod vote_record;
pub mod vote_state;

pub use ids::{ItemId, UserId};
pub use tally::{TallyDelta, VoteShares, VoteTally};
pub use verdict::{Verdict, VerdictLabel};
pub use vote_kind::VoteKind;
pub use vote_record::VoteRecord;
pub use vote_state::VoteState;
