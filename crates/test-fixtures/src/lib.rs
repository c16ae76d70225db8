//! Test fixtures for TruthLens: scenario loading and a scriptable vote store.
//!
//! Scenario files live in `scenarios/` next to this crate's manifest.

pub mod scripted_store;

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use truthlens_core::models::{VerdictLabel, VoteKind, VoteTally};

pub use scripted_store::ScriptedStore;

/// Root directory of the scenario files.
fn scenarios_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios")
}

/// Load and deserialize a JSON scenario file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = scenarios_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a scenario file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    scenarios_root().join(relative_path).exists()
}

/// Get the absolute path to a scenario file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    scenarios_root().join(relative_path)
}

/// A tally and the verdict it must produce.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierCase {
    pub name: String,
    pub tally: VoteTally,
    pub expected: VerdictLabel,
}

/// One vote attempt against a starting tally, with and without store failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ReconciliationCase {
    pub name: String,
    pub initial: VoteTally,
    pub prior_vote: Option<VoteKind>,
    pub vote: VoteKind,
    pub store_fails: bool,
    /// Tally while the store call is outstanding.
    pub optimistic: VoteTally,
    /// Tally after the store answered.
    pub settled: VoteTally,
    /// User's vote after the store answered.
    pub settled_vote: Option<VoteKind>,
}

pub fn classifier_cases() -> Vec<ClassifierCase> {
    load_fixture("classifier_cases.json")
}

pub fn reconciliation_cases() -> Vec<ReconciliationCase> {
    load_fixture("reconciliation_cases.json")
}
