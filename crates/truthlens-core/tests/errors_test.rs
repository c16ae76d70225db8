use truthlens_core::errors::*;
use truthlens_core::models::VoteKind;

#[test]
fn item_not_loaded_carries_id() {
    let err = TruthlensError::ItemNotLoaded {
        item_id: "post-42".into(),
    };
    assert!(err.to_string().contains("post-42"));
}

#[test]
fn rolled_back_vote_names_kind_and_cause() {
    let err = TruthlensError::VoteRolledBack {
        item_id: "post-1".into(),
        kind: VoteKind::Real,
        source: StoreError::unavailable("connection reset"),
    };
    let msg = err.to_string();
    assert!(msg.contains("real"));
    assert!(msg.contains("post-1"));
    assert!(msg.contains("connection reset"));
}

#[test]
fn unique_violation_carries_pair() {
    let err = StoreError::UniqueViolation {
        user_id: "u1".into(),
        item_id: "p1".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("u1"));
    assert!(msg.contains("p1"));
}

#[test]
fn timeout_carries_duration() {
    let err = StoreError::Timeout { timeout_ms: 250 };
    assert!(err.to_string().contains("250ms"));
}

// --- From impls ---

#[test]
fn store_error_converts_to_truthlens_error() {
    let err: TruthlensError = StoreError::unavailable("down").into();
    assert!(matches!(err, TruthlensError::Store(_)));
}

#[test]
fn retryable_classification() {
    assert!(TruthlensError::VoteInFlight {
        item_id: "p".into()
    }
    .is_retryable());
    assert!(TruthlensError::Store(StoreError::Timeout { timeout_ms: 1 }).is_retryable());
    assert!(!TruthlensError::NotSignedIn.is_retryable());
    assert!(!TruthlensError::InvalidVoteKind {
        value: "fake".into()
    }
    .is_retryable());
}
