//! `IVoteStore` implementations.

pub mod memory_store;
pub mod timeout;

pub use memory_store::MemoryVoteStore;
pub use timeout::TimeoutStore;
