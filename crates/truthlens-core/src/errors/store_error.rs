/// Failures reported by the vote store collaborator.
///
/// Every variant is recoverable: the engine rolls back its optimistic
/// update and reports the failure to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {message}")]
    Unavailable { message: String },

    #[error("vote already exists for user {user_id} on item {item_id}")]
    UniqueViolation { user_id: String, item_id: String },

    #[error("no vote found for user {user_id} on item {item_id}")]
    NotFound { user_id: String, item_id: String },

    #[error("store call timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
}

impl StoreError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}
