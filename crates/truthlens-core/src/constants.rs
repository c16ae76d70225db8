/// Share a single category must strictly exceed to decide a verdict.
///
/// Used for both the badge and feed tab filtering. Not configurable.
pub const VERDICT_THRESHOLD: f64 = 0.55;

/// Denominator substituted when a tally has no votes at all.
pub const EMPTY_TALLY_DENOMINATOR: u64 = 1;

/// Environment variable consulted for the tracing filter.
pub const LOG_ENV_VAR: &str = "TRUTHLENS_LOG";
