//! Memoization Module
//!
//! Wraps an asynchronous operation so that its results are cached by
//! argument list for a fixed TTL.
//!
//! Concurrent misses on the same key are not coalesced: each one invokes the
//! operation, and whichever resolves last is the value left in the store.
//! Failures are never stored.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheKey, CacheStats, CacheStore, Lookup};

/// Boxed future returned by a memoized operation.
pub type OperationFuture<T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send>>;

type Operation<A, T, E> = Arc<dyn Fn(A) -> OperationFuture<T, E> + Send + Sync>;

// == Memoized ==
/// An asynchronous operation fronted by its own TTL cache.
///
/// Cloning is cheap and clones share the same store.
pub struct Memoized<A, T, E> {
    name: &'static str,
    operation: Operation<A, T, E>,
    ttl: Duration,
    store: Arc<RwLock<CacheStore<T>>>,
}

impl<A, T, E> Clone for Memoized<A, T, E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            operation: Arc::clone(&self.operation),
            ttl: self.ttl,
            store: Arc::clone(&self.store),
        }
    }
}

impl<A, T, E> fmt::Debug for Memoized<A, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("name", &self.name)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

/// Wraps `operation` in a fresh, independent cache with the given TTL.
pub fn memoize<A, T, E, F, Fut>(operation: F, ttl: Duration) -> Memoized<A, T, E>
where
    A: 'static,
    T: 'static,
    E: 'static,
    F: Fn(A) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
{
    Memoized::new("memoized", operation, ttl)
}

impl<A, T, E> Memoized<A, T, E> {
    // == Constructor ==
    /// Creates a named memoized operation; the name only appears in logs.
    pub fn new<F, Fut>(name: &'static str, operation: F, ttl: Duration) -> Self
    where
        A: 'static,
        T: 'static,
        E: 'static,
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self {
            name,
            operation: Arc::new(move |args| Box::pin(operation(args)) as OperationFuture<T, E>),
            ttl,
            store: Arc::new(RwLock::new(CacheStore::new())),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Stats ==
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    // == Purge Expired ==
    /// Drops stale entries; returns how many were removed.
    pub async fn purge_expired(&self) -> usize {
        self.store.write().await.purge_expired()
    }
}

impl<A, T, E> Memoized<A, T, E>
where
    A: CacheKey,
    T: Clone,
{
    // == Call ==
    /// Returns the cached value for `args` while it is fresh, otherwise
    /// invokes the operation and caches its successful result.
    ///
    /// The store lock is released before the operation is awaited.
    pub async fn call(&self, args: A) -> Result<T, E> {
        let key = args.cache_key();

        let cached = self.store.write().await.lookup(&key);
        if let Lookup::Fresh(value) = cached {
            debug!(cache = self.name, %key, "cache hit");
            return Ok(value);
        }

        debug!(cache = self.name, %key, "cache miss, invoking operation");
        match (self.operation)(args).await {
            Ok(value) => {
                self.store.write().await.insert(key, value.clone(), self.ttl);
                Ok(value)
            }
            Err(err) => {
                self.store.write().await.record_failure();
                debug!(cache = self.name, %key, "operation failed, nothing cached");
                Err(err)
            }
        }
    }
}
