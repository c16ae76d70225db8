mod store_error;
mod truthlens_error;

pub use store_error::StoreError;
pub use truthlens_error::TruthlensError;

/// Convenience alias used throughout the workspace.
pub type TruthlensResult<T> = Result<T, TruthlensError>;
