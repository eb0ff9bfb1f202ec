use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use lru::LruCache;
use tokio::sync::Mutex;

/// Aggregate hit/miss counters for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Successful fresh reads.
    pub hits: u64,
    /// Reads that found nothing fresh (absent or expired).
    pub misses: u64,
}

struct Entry<V> {
    value: Arc<V>,
    written_at: Instant,
    expires_at: Instant,
    hits: u64,
}

struct Inner<K: Hash + Eq, V> {
    live: LruCache<K, Entry<V>>,
    // Values outlive their TTL here so total provider failure can still be
    // served with the last result. Purged by invalidate/clear only.
    stale: LruCache<K, Arc<V>>,
    stats: CacheStats,
}

/// A capacity-bounded TTL cache with last-known-good retention.
///
/// Entries leave the live store by expiry, explicit invalidation, or LRU
/// eviction once the capacity bound is hit; there is no background sweeper.
/// Every write also updates a stale slot that survives expiry, which the
/// orchestrator consults when every provider fails.
pub struct TtlCache<K: Hash + Eq, V> {
    inner: Mutex<Inner<K, V>>,
    ttl: Duration,
}

impl<K, V> TtlCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a cache holding at most `capacity` live entries, each fresh
    /// for `ttl` after its write.
    #[must_use]
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        // Avoid zero capacity panics
        let cap = capacity.max(1);
        let cap_nz = NonZeroUsize::new(cap).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(Inner {
                live: LruCache::new(cap_nz),
                stale: LruCache::new(cap_nz),
                stats: CacheStats::default(),
            }),
            ttl,
        }
    }

    /// The TTL applied to every write.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Store `value` under `key`, fresh until `now + ttl`. Overwrites any
    /// previous entry (last writer wins) and refreshes the stale slot.
    pub async fn insert(&self, key: K, value: V) {
        let now = Instant::now();
        let value = Arc::new(value);
        let mut guard = self.inner.lock().await;
        guard.stale.put(key.clone(), value.clone());
        guard.live.put(
            key,
            Entry {
                value,
                written_at: now,
                expires_at: now + self.ttl,
                hits: 0,
            },
        );
    }

    /// Return the stored value while fresh, bumping its hit counter.
    /// An expired entry is removed from the live store (its value remains
    /// reachable via [`last_known_good`](Self::last_known_good)).
    pub async fn get(&self, key: &K) -> Option<Arc<V>> {
        let mut guard = self.inner.lock().await;
        let inner = &mut *guard;
        let mut expired = false;
        if let Some(entry) = inner.live.get_mut(key) {
            if Instant::now() < entry.expires_at {
                entry.hits += 1;
                let value = entry.value.clone();
                inner.stats.hits += 1;
                return Some(value);
            }
            expired = true;
        }
        if expired {
            inner.live.pop(key);
        }
        inner.stats.misses += 1;
        None
    }

    /// Return the most recent value ever written under `key`, fresh or not.
    ///
    /// This is the degraded-serving path; callers should prefer
    /// [`get`](Self::get) and fall back here only on total fetch failure.
    pub async fn last_known_good(&self, key: &K) -> Option<Arc<V>> {
        let mut guard = self.inner.lock().await;
        guard.stale.get(key).cloned()
    }

    /// Remove `key` from both the live store and the stale slot.
    /// No cascading effects.
    pub async fn invalidate(&self, key: &K) {
        let mut guard = self.inner.lock().await;
        guard.live.pop(key);
        guard.stale.pop(key);
    }

    /// Drop every entry, live and stale. Counters are kept.
    pub async fn clear(&self) {
        let mut guard = self.inner.lock().await;
        guard.live.clear();
        guard.stale.clear();
    }

    /// Hit count of the live entry under `key`, if one exists.
    pub async fn hits(&self, key: &K) -> Option<u64> {
        let guard = self.inner.lock().await;
        guard.live.peek(key).map(|e| e.hits)
    }

    /// Age of the live entry under `key`, if one exists.
    pub async fn entry_age(&self, key: &K) -> Option<Duration> {
        let guard = self.inner.lock().await;
        guard.live.peek(key).map(|e| e.written_at.elapsed())
    }

    /// Aggregate hit/miss counters.
    pub async fn stats(&self) -> CacheStats {
        let guard = self.inner.lock().await;
        guard.stats
    }

    /// Number of live entries (fresh or not yet observed as expired).
    pub async fn len(&self) -> usize {
        let guard = self.inner.lock().await;
        guard.live.len()
    }

    /// Whether the live store is empty.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Number of retained last-known-good values.
    pub async fn stale_len(&self) -> usize {
        let guard = self.inner.lock().await;
        guard.stale.len()
    }
}

/// Build the per-kind cache map the orchestrator holds: one typed store
/// per enabled kind, `None` where the TTL table disables caching.
#[must_use]
pub fn maybe_store<K, V>(
    cfg: &pelorus_types::CacheConfig,
    kind: pelorus_types::EntityKind,
) -> Option<TtlCache<K, V>>
where
    K: Hash + Eq + Clone,
{
    let ttl = cfg.ttl_for(kind)?;
    let capacity = cfg.capacity_for(kind);
    Some(TtlCache::new(capacity, ttl))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lru_eviction_bounds_live_entries() {
        let cache: TtlCache<u32, u32> = TtlCache::new(2, Duration::from_secs(60));
        cache.insert(1, 10).await;
        cache.insert(2, 20).await;
        cache.insert(3, 30).await;
        assert_eq!(cache.len().await, 2);
        assert!(cache.get(&1).await.is_none(), "oldest key evicted");
        assert_eq!(*cache.get(&3).await.unwrap(), 30);
    }
}
