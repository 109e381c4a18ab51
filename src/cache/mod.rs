//! Cache Module
//!
//! Argument-keyed TTL memoization of asynchronous operations.

mod entry;
mod key;
mod memo;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use key::{encode_key, CacheKey, KeyArg};
pub use memo::{memoize, Memoized, OperationFuture};
pub use stats::CacheStats;
pub use store::{CacheStore, Lookup};
