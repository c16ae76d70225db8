use truthlens_core::models::{VoteKind, VoteState, VoteTally};
use truthlens_verdict::reducer::{ItemVotes, StoreCall, Transition};

#[test]
fn first_vote_begins_cast_and_increments() {
    let mut item = ItemVotes::new(VoteTally::new(2, 2, 2), None);
    let Transition::Begin(pending) = item.begin(VoteKind::Real) else {
        panic!("expected a pending vote");
    };
    assert_eq!(pending.call, StoreCall::Cast);
    assert_eq!(pending.previous, None);
    assert_eq!(item.tally, VoteTally::new(2, 3, 2));
    assert!(item.state.is_pending());
}

#[test]
fn revote_begins_change_and_shifts_one_unit() {
    let mut item = ItemVotes::new(VoteTally::new(3, 1, 0), Some(VoteKind::Ai));
    let Transition::Begin(pending) = item.begin(VoteKind::Real) else {
        panic!("expected a pending vote");
    };
    assert_eq!(pending.call, StoreCall::Change);
    assert_eq!(pending.previous, Some(VoteKind::Ai));
    assert_eq!(item.tally, VoteTally::new(2, 2, 0));
    assert_eq!(item.tally.total(), 4);
}

#[test]
fn same_kind_is_unchanged() {
    let mut item = ItemVotes::new(VoteTally::new(1, 0, 0), Some(VoteKind::Ai));
    assert_eq!(item.begin(VoteKind::Ai), Transition::Unchanged);
    assert_eq!(item.tally, VoteTally::new(1, 0, 0));
    assert_eq!(item.state, VoteState::Voted { kind: VoteKind::Ai });
}

#[test]
fn pending_item_refuses_every_kind() {
    let mut item = ItemVotes::new(VoteTally::default(), None);
    item.begin(VoteKind::Unclear);
    let before = item;

    for kind in VoteKind::ALL {
        assert_eq!(item.begin(kind), Transition::InFlight);
    }
    assert_eq!(item, before);
}

#[test]
fn commit_settles_on_new_kind() {
    let mut item = ItemVotes::new(VoteTally::new(0, 1, 0), Some(VoteKind::Real));
    item.begin(VoteKind::Ai);
    let resolved = item.commit().expect("pending vote");
    assert_eq!(resolved.kind, VoteKind::Ai);
    assert_eq!(resolved.previous, Some(VoteKind::Real));
    assert_eq!(item.state, VoteState::Voted { kind: VoteKind::Ai });
    assert_eq!(item.tally, VoteTally::new(1, 0, 0));
}

#[test]
fn rollback_restores_previous_vote_and_tally() {
    let mut item = ItemVotes::new(VoteTally::new(0, 1, 0), Some(VoteKind::Real));
    item.begin(VoteKind::Ai);
    item.rollback().expect("pending vote");
    assert_eq!(item.state, VoteState::Voted { kind: VoteKind::Real });
    assert_eq!(item.tally, VoteTally::new(0, 1, 0));
}

#[test]
fn rollback_of_change_from_empty_counter_is_exact() {
    // The user's previous vote is not reflected in the loaded tally.
    let mut item = ItemVotes::new(VoteTally::new(0, 0, 4), Some(VoteKind::Ai));
    item.begin(VoteKind::Real);
    assert_eq!(item.tally, VoteTally::new(0, 1, 4));
    item.rollback();
    assert_eq!(item.tally, VoteTally::new(0, 0, 4));
}

#[test]
fn settling_without_pending_vote_is_none() {
    let mut item = ItemVotes::new(VoteTally::new(1, 1, 1), None);
    assert!(item.commit().is_none());
    assert!(item.rollback().is_none());
    assert_eq!(item, ItemVotes::new(VoteTally::new(1, 1, 1), None));
}

#[test]
fn generation_advances_only_when_a_vote_begins() {
    let mut item = ItemVotes::new(VoteTally::new(1, 0, 0), Some(VoteKind::Ai));
    assert_eq!(item.generation(), 0);

    item.begin(VoteKind::Ai);
    assert_eq!(item.generation(), 0);

    item.begin(VoteKind::Real);
    item.begin(VoteKind::Unclear);
    assert_eq!(item.generation(), 1);

    item.rollback();
    item.reload(VoteTally::new(5, 5, 5), None);
    assert_eq!(item.generation(), 1);
    assert_eq!(item.state, VoteState::NoVote);
}
