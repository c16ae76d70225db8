// Single source of truth for all default values.

// --- Engine ---
pub const DEFAULT_REJECT_IN_FLIGHT: bool = true;

// --- Store ---
pub const DEFAULT_STORE_TIMEOUT_MS: u64 = 10_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
