use proptest::prelude::*;

use truthlens_core::models::{VerdictLabel, VoteKind, VoteTally};
use truthlens_verdict::classify;
use truthlens_verdict::reducer::{ItemVotes, Transition};

fn kind() -> impl Strategy<Value = VoteKind> {
    prop_oneof![
        Just(VoteKind::Ai),
        Just(VoteKind::Real),
        Just(VoteKind::Unclear)
    ]
}

fn tally() -> impl Strategy<Value = VoteTally> {
    (0u64..500, 0u64..500, 0u64..500).prop_map(|(ai, real, unclear)| VoteTally::new(ai, real, unclear))
}

proptest! {
    #[test]
    fn label_follows_fixed_order_threshold_rule(t in tally()) {
        let total = (t.ai + t.real + t.unclear).max(1) as f64;
        let expected = if t.ai as f64 / total > 0.55 {
            VerdictLabel::AiGenerated
        } else if t.real as f64 / total > 0.55 {
            VerdictLabel::Authentic
        } else {
            VerdictLabel::Disputed
        };
        prop_assert_eq!(classify(&t).label, expected);
    }

    #[test]
    fn dominant_share_is_a_fraction(t in tally()) {
        let share = classify(&t).dominant_share;
        prop_assert!((0.0..=1.0).contains(&share));
    }

    #[test]
    fn failed_vote_leaves_item_untouched(t in tally(), prior in proptest::option::of(kind()), k in kind()) {
        let mut item = ItemVotes::new(t, prior);
        let before = item;
        if let Transition::Begin(_) = item.begin(k) {
            item.rollback();
        }
        prop_assert_eq!(item, before);
    }

    #[test]
    fn committed_vote_moves_exactly_one_unit(t in tally(), prior in proptest::option::of(kind()), k in kind()) {
        // Only tallies that already count the prior vote.
        prop_assume!(prior.map_or(true, |p| t.get(p) > 0));
        let mut item = ItemVotes::new(t, prior);
        let transition = item.begin(k);
        item.commit();

        if prior == Some(k) {
            prop_assert_eq!(transition, Transition::Unchanged);
            prop_assert_eq!(item.tally, t);
        } else {
            let expected_total = if prior.is_some() { t.total() } else { t.total() + 1 };
            prop_assert_eq!(item.tally.total(), expected_total);
            prop_assert_eq!(item.tally.get(k), t.get(k) + 1);
        }
        prop_assert_eq!(item.state.current(), Some(k));
    }

    #[test]
    fn change_then_change_back_is_net_zero(t in tally(), k in kind(), j in kind()) {
        let mut item = ItemVotes::new(t, None);
        item.begin(k);
        item.commit();
        let after_cast = item.tally;

        item.begin(j);
        item.commit();
        item.begin(k);
        item.commit();
        prop_assert_eq!(item.tally, after_cast);
    }
}
