//! Generic key→value store with per-entry expiry and lazy eviction.
//!
//! The application keeps one store per logical cache domain (a
//! "related-posts" cache, an "rss" cache, and so on); the domain name is
//! used only for log labels. Each entry carries its own time-to-live, fixed
//! at write time — there is no sliding expiration.
//!
//! # Eviction
//!
//! Expired entries are removed lazily:
//!
//! - a [`get`](CacheStore::get) that finds a stale entry deletes it and
//!   reports a miss;
//! - every [`set`](CacheStore::set) sweeps the whole store before inserting,
//!   using a single "now" for the entire sweep.
//!
//! There are no background timers and no threads. An idle store may hold
//! stale entries in memory until the next operation touches it — the price
//! paid for avoiding timer bookkeeping, and bounded by whatever the store
//! held at its busiest. Immediately after any `get` or `set` returns, no
//! already-expired entry remains in the store.
//!
//! # Concurrency
//!
//! No locking is provided. A store shared across threads must be confined
//! to one of them or wrapped in a `Mutex` by the caller; the methods take
//! `&mut self`, so the borrow checker enforces exclusive access within one
//! thread.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::{debug, trace};

struct CacheEntry<T> {
    value: T,
    expires_at: Instant,
}

/// A named in-memory cache with per-entry TTL.
///
/// `Duration::ZERO` as a TTL makes the entry expire on the next `get`;
/// durations are non-negative by construction, which covers the
/// zero-or-negative TTL case.
pub struct CacheStore<T> {
    name: String,
    entries: HashMap<String, CacheEntry<T>>,
}

impl<T> CacheStore<T> {
    /// Create an empty store for a cache domain, e.g. `"related-posts"`.
    pub fn new(name: impl Into<String>) -> Self {
        CacheStore {
            name: name.into(),
            entries: HashMap::new(),
        }
    }

    /// Insert `value` under `key` with the given TTL, overwriting any
    /// existing entry regardless of that entry's own expiry.
    ///
    /// Sweeps every already-expired entry out of the store first.
    pub fn set(&mut self, key: impl Into<String>, value: T, ttl: Duration) {
        self.set_at(key.into(), value, ttl, Instant::now());
    }

    /// Look up `key`. An expired entry is deleted and reported as a miss.
    /// Expiry is not extended by reads.
    pub fn get(&mut self, key: &str) -> Option<&T> {
        self.get_at(key, Instant::now())
    }

    /// Remove any entry for `key`; no-op if absent.
    pub fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            trace!("[cache remove] {} key={key}", self.name);
        }
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        trace!("[cache clear] {}", self.name);
    }

    /// Number of entries currently held, including any not-yet-swept
    /// expired ones. Diagnostic only.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `key` is physically present, ignoring expiry. Diagnostic
    /// only — use [`get`](CacheStore::get) for lookups.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The cache domain name this store was created with.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn set_at(&mut self, key: String, value: T, ttl: Duration, now: Instant) {
        // One `now` for the whole sweep keeps the pass consistent even if
        // it takes measurable time.
        let name = &self.name;
        self.entries.retain(|k, entry| {
            let keep = entry.expires_at >= now;
            if !keep {
                debug!("[cache expired] {name} key={k}");
            }
            keep
        });

        trace!("[cache set] {name} key={key} ttl={ttl:?}");
        self.entries.insert(
            key,
            CacheEntry {
                value,
                expires_at: now + ttl,
            },
        );
    }

    fn get_at(&mut self, key: &str, now: Instant) -> Option<&T> {
        let expired = match self.entries.get(key) {
            None => {
                trace!("[cache miss] {} key={key}", self.name);
                return None;
            }
            Some(entry) => entry.expires_at < now,
        };
        if expired {
            self.entries.remove(key);
            debug!("[cache expired] {} key={key}", self.name);
            return None;
        }
        trace!("[cache hit] {} key={key}", self.name);
        self.entries.get(key).map(|entry| &entry.value)
    }
}
