//! Test that generates TypeScript bindings from Rust types via ts-rs.
//!
//! Run with: cargo test -p truthlens-core export_bindings
//! Generated files appear in truthlens-core/bindings/*.ts

#[test]
fn export_bindings() {
    // ts-rs export is triggered by the derive macro at compile time.
    // This test just validates all types are importable and TS-derivable.
    use truthlens_core::models::{
        ItemId, UserId, Verdict, VerdictLabel, VoteKind, VoteShares, VoteTally,
    };

    fn assert_ts<T: ts_rs::TS>() {}

    assert_ts::<ItemId>();
    assert_ts::<UserId>();
    assert_ts::<Verdict>();
    assert_ts::<VerdictLabel>();
    assert_ts::<VoteKind>();
    assert_ts::<VoteShares>();
    assert_ts::<VoteTally>();
}
