use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};
use tokio::time::Instant;
use tracing::debug;

/// Entries plus the start of the current expiry window.
struct CacheState<K, V> {
    entries: HashMap<K, V>,
    last_reset: Instant,
    /// Bumped whenever the entries are dropped.
    generation: u64,
}

impl<K, V> CacheState<K, V> {
    fn reset(&mut self, now: Instant) {
        self.entries.clear();
        self.last_reset = now;
        self.generation += 1;
    }
}

/// Memoizes values for a fixed window of time.
///
/// Expiry is tracked once for the whole cache rather than per key: when the
/// window has elapsed, the next lookup (for any key) drops every entry and
/// starts a new window. Staleness is therefore bounded by `ttl` for all keys.
///
/// There is no size-based eviction. The lock is only held for map access and
/// never across the computation of a missing value, so two callers missing
/// the same key concurrently may both compute it. A value whose computation
/// began before the entries were dropped is returned to its caller but not
/// stored.
pub struct TimedCache<K, V> {
    state: Mutex<CacheState<K, V>>,
    ttl: Duration,
}

impl<K, V> TimedCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    /// Create an empty cache. The first window opens now.
    pub fn new(ttl: Duration) -> Self {
        Self {
            state: Mutex::new(CacheState {
                entries: HashMap::new(),
                last_reset: Instant::now(),
                generation: 0,
            }),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // A panic while holding the lock cannot leave a half-written entry
    // behind, so a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, CacheState<K, V>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up `key`, or return the generation a miss was observed in.
    fn lookup(&self, key: &K) -> Result<V, u64> {
        let mut state = self.lock();
        let now = Instant::now();
        if now.duration_since(state.last_reset) > self.ttl {
            debug!(
                dropped = state.entries.len(),
                "Cache window elapsed, clearing entries"
            );
            state.reset(now);
            return Err(state.generation);
        }
        state.entries.get(key).cloned().ok_or(state.generation)
    }

    /// Look up `key`, clearing the whole cache first if the window elapsed.
    pub fn get(&self, key: &K) -> Option<V> {
        self.lookup(key).ok()
    }

    /// Store `value` under `key` in the current window.
    pub fn insert(&self, key: K, value: V) {
        self.lock().entries.insert(key, value);
    }

    /// Store `value` only if the entries were not dropped since `generation`.
    fn insert_if_current(&self, key: K, value: V, generation: u64) -> bool {
        let mut state = self.lock();
        if state.generation != generation {
            return false;
        }
        state.entries.insert(key, value);
        true
    }

    /// Return the cached value for `key`, or compute, store and return it.
    ///
    /// Errors from `f` are returned as-is and nothing is stored. A value
    /// computed across an [`invalidate`](Self::invalidate) or a window reset
    /// is returned but not stored.
    pub async fn get_or_try_insert_with<F, Fut, E>(&self, key: K, f: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let generation = match self.lookup(&key) {
            Ok(value) => return Ok(value),
            Err(generation) => generation,
        };

        let value = f().await?;
        if !self.insert_if_current(key, value.clone(), generation) {
            debug!("Cache cleared while computing, value not stored");
        }
        Ok(value)
    }

    /// Drop all entries and restart the window.
    pub fn invalidate(&self) {
        self.lock().reset(Instant::now());
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }
}

type QueryFn<K, V, E> = Box<dyn Fn(K) -> BoxFuture<'static, Result<V, E>> + Send + Sync>;

/// A named query composed with a [`TimedCache`] over its arguments.
///
/// The wrapped query is called with the argument tuple on a miss; hits return
/// a clone of the stored result.
pub struct CachedQuery<K, V, E> {
    name: &'static str,
    query: QueryFn<K, V, E>,
    cache: TimedCache<K, V>,
}

impl<K, V, E> CachedQuery<K, V, E>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new<F, Fut>(name: &'static str, ttl: Duration, query: F) -> Self
    where
        K: 'static,
        V: 'static,
        E: 'static,
        F: Fn(K) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<V, E>> + Send + 'static,
    {
        Self {
            name,
            query: Box::new(move |args| query(args).boxed()),
            cache: TimedCache::new(ttl),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn ttl(&self) -> Duration {
        self.cache.ttl()
    }

    /// Run the query for `args`, serving from the cache when possible.
    pub async fn call(&self, args: K) -> Result<V, E> {
        let mut missed = false;
        let result = self
            .cache
            .get_or_try_insert_with(args.clone(), || {
                missed = true;
                debug!(query = self.name, "Cache miss, running query");
                (self.query)(args)
            })
            .await;
        if !missed {
            debug!(query = self.name, "Cache hit");
        }
        result
    }

    /// Force the next call to re-run the query.
    pub fn invalidate(&self) {
        self.cache.invalidate();
    }
}

impl<V, E> CachedQuery<(), V, E>
where
    V: Clone,
{
    /// Shorthand for argument-less queries.
    pub async fn get(&self) -> Result<V, E> {
        self.call(()).await
    }
}
