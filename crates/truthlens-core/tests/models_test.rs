use truthlens_core::models::*;

// --- VoteKind ---

#[test]
fn vote_kind_parses_store_values() {
    assert_eq!("ai".parse::<VoteKind>().unwrap(), VoteKind::Ai);
    assert_eq!("real".parse::<VoteKind>().unwrap(), VoteKind::Real);
    assert_eq!("unclear".parse::<VoteKind>().unwrap(), VoteKind::Unclear);
    assert!("AI".parse::<VoteKind>().is_err());
    assert!("".parse::<VoteKind>().is_err());
}

#[test]
fn vote_kind_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&VoteKind::Unclear).unwrap(), "\"unclear\"");
    let kind: VoteKind = serde_json::from_str("\"real\"").unwrap();
    assert_eq!(kind, VoteKind::Real);
}

// --- VoteTally ---

#[test]
fn empty_tally_uses_denominator_of_one() {
    let tally = VoteTally::default();
    assert_eq!(tally.total(), 0);
    assert_eq!(tally.effective_total(), 1);
    assert_eq!(tally.shares(), VoteShares::default());
}

#[test]
fn shares_sum_to_one_for_non_empty_tally() {
    let shares = VoteTally::new(3, 5, 2).shares();
    assert!((shares.ai + shares.real + shares.unclear - 1.0).abs() < 1e-12);
    assert!((shares.real - 0.5).abs() < 1e-12);
}

#[test]
fn shift_moves_exactly_one_vote() {
    let mut tally = VoteTally::new(4, 1, 0);
    let delta = tally.shift(VoteKind::Ai, VoteKind::Unclear);
    assert_eq!(tally, VoteTally::new(3, 1, 1));
    assert_eq!(delta.removed, Some(VoteKind::Ai));
    assert_eq!(tally.total(), 5);

    tally.revert(delta);
    assert_eq!(tally, VoteTally::new(4, 1, 0));
}

#[test]
fn shift_from_empty_counter_does_not_underflow_and_reverts_exactly() {
    let mut tally = VoteTally::new(0, 2, 0);
    let delta = tally.shift(VoteKind::Ai, VoteKind::Real);
    assert_eq!(tally, VoteTally::new(0, 3, 0));
    assert_eq!(delta.removed, None);

    tally.revert(delta);
    assert_eq!(tally, VoteTally::new(0, 2, 0));
}

#[test]
fn apply_at_counter_max_reverts_exactly() {
    let mut tally = VoteTally::new(u64::MAX, 1, 0);
    let delta = tally.apply(VoteKind::Ai);
    assert_eq!(delta.added, None);
    assert_eq!(tally, VoteTally::new(u64::MAX, 1, 0));

    tally.revert(delta);
    assert_eq!(tally, VoteTally::new(u64::MAX, 1, 0));

    let delta = tally.shift(VoteKind::Real, VoteKind::Ai);
    assert_eq!(tally, VoteTally::new(u64::MAX, 0, 0));
    tally.revert(delta);
    assert_eq!(tally, VoteTally::new(u64::MAX, 1, 0));
}

// --- VoteState ---

#[test]
fn vote_state_reports_current_and_confirmed() {
    let pending = VoteState::Pending {
        kind: VoteKind::Real,
        previous: Some(VoteKind::Ai),
        delta: TallyDelta {
            added: Some(VoteKind::Real),
            removed: Some(VoteKind::Ai),
        },
    };
    assert!(pending.is_pending());
    assert_eq!(pending.current(), Some(VoteKind::Real));
    assert_eq!(pending.confirmed(), Some(VoteKind::Ai));

    assert_eq!(VoteState::from_vote(None), VoteState::NoVote);
    assert_eq!(
        VoteState::from_vote(Some(VoteKind::Ai)).confirmed(),
        Some(VoteKind::Ai)
    );
}

// --- Verdict ---

#[test]
fn verdict_labels_match_badge_text() {
    assert_eq!(VerdictLabel::AiGenerated.to_string(), "AI GENERATED");
    assert_eq!(VerdictLabel::Authentic.to_string(), "AUTHENTIC");
    assert_eq!(VerdictLabel::Disputed.to_string(), "DISPUTED");
    assert_eq!(
        serde_json::to_string(&VerdictLabel::AiGenerated).unwrap(),
        "\"AI_GENERATED\""
    );
}

// --- Ids ---

#[test]
fn generated_ids_are_unique() {
    assert_ne!(ItemId::new(), ItemId::new());
    assert_eq!(UserId::from("abc").as_str(), "abc");
}
