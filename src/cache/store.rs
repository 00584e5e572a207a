//! Cache Store Module
//!
//! Read-through TTL cache: a HashMap of entries with lazy expiration on read
//! and explicit, caller-driven invalidation. There is no size cap and no
//! background sweep; an expired entry is removed the first time it is read.

use std::collections::HashMap;
use std::sync::Arc;

use crate::cache::CacheEntry;
use crate::clock::Clock;

// == TTL Cache ==
/// Process-local key/value store with per-entry expiration.
///
/// All operations take `&mut self`; callers that share the cache across tasks
/// wrap it in `Arc<RwLock<_>>` and hold the write lock for the whole operation,
/// which keeps `get`'s read-then-evict sequence atomic with respect to
/// concurrent `set`/`del` on the same key.
pub struct TtlCache<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Time source, injected so tests can simulate expiry
    clock: Arc<dyn Clock>,
}

impl<V: Clone> TtlCache<V> {
    // == Constructor ==
    /// Creates an empty cache using the given clock.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            clock,
        }
    }

    // == Set ==
    /// Stores `value` under `key`, unconditionally overwriting any existing
    /// entry. With `Some(ttl)` the entry expires `ttl` seconds from now; with
    /// `None` it never expires on its own.
    ///
    /// Keys are caller-defined strings and are accepted as-is.
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl_seconds: Option<u64>) {
        let entry = CacheEntry::new(value, self.clock.now_ms(), ttl_seconds);
        self.entries.insert(key.into(), entry);
    }

    // == Get ==
    /// Returns the stored value if present and not expired.
    ///
    /// `None` means the key was never set, was deleted, or has expired. In the
    /// expired case the entry is removed as a side effect (lazy eviction) so
    /// dead entries do not accumulate under churn. `Option` keeps absence
    /// unambiguous even when the cached value itself is empty.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now = self.clock.now_ms();

        match self.entries.get(key) {
            Some(entry) if entry.is_expired(now) => {
                self.entries.remove(key);
                None
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }

    // == Delete ==
    /// Removes the entry if present; a no-op when the key is absent.
    pub fn del(&mut self, key: &str) {
        self.entries.remove(key);
    }

    // == Length ==
    /// Returns the current number of entries, expired-but-unread included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn test_cache() -> (TtlCache<String>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(1_000));
        (TtlCache::new(clock.clone()), clock)
    }

    #[test]
    fn test_get_never_set_key() {
        let (mut cache, _clock) = test_cache();

        assert_eq!(cache.get("missing"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_set_and_get() {
        let (mut cache, _clock) = test_cache();

        cache.set("key1", "value1".to_string(), Some(59));

        assert_eq!(cache.get("key1"), Some("value1".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_overwrite_resets_value_and_ttl() {
        let (mut cache, clock) = test_cache();

        cache.set("key1", "value1".to_string(), Some(1));
        clock.advance_ms(900);
        cache.set("key1", "value2".to_string(), Some(1));
        clock.advance_ms(900);

        // 1.8s after the first set, but only 0.9s after the overwrite
        assert_eq!(cache.get("key1"), Some("value2".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_expired_entry_is_removed_on_read() {
        let (mut cache, clock) = test_cache();

        cache.set("key1", "value1".to_string(), Some(59));
        assert_eq!(cache.len(), 1);

        clock.advance_secs(59);

        assert_eq!(cache.get("key1"), None);
        assert_eq!(cache.len(), 0, "lazy eviction removes the dead entry");
    }

    #[test]
    fn test_no_ttl_never_expires() {
        let (mut cache, clock) = test_cache();

        cache.set("key1", "value1".to_string(), None);

        // Decades of simulated time
        clock.advance_secs(60 * 60 * 24 * 365 * 30);

        assert_eq!(cache.get("key1"), Some("value1".to_string()));
    }

    #[test]
    fn test_del_absent_key_is_noop() {
        let (mut cache, _clock) = test_cache();

        cache.set("key1", "value1".to_string(), None);
        cache.del("missing");

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("key1"), Some("value1".to_string()));
    }

    #[test]
    fn test_del_then_get_is_absent() {
        let clock = Arc::new(ManualClock::new(1_000));
        let mut cache = TtlCache::new(clock);

        cache.set("notes:all", vec!["A", "B"], Some(59));
        assert_eq!(cache.get("notes:all"), Some(vec!["A", "B"]));

        cache.del("notes:all");
        assert_eq!(cache.get("notes:all"), None);
    }

    #[test]
    fn test_empty_value_is_a_hit_not_a_miss() {
        let clock = Arc::new(ManualClock::new(1_000));
        let mut cache: TtlCache<Vec<String>> = TtlCache::new(clock);

        // A cached empty list must be distinguishable from absence
        cache.set("notes:all", Vec::new(), Some(59));

        assert_eq!(cache.get("notes:all"), Some(vec![]));
    }

    #[test]
    fn test_empty_key_accepted() {
        let (mut cache, _clock) = test_cache();

        cache.set("", "value".to_string(), None);
        assert_eq!(cache.get(""), Some("value".to_string()));
    }

    #[tokio::test]
    async fn test_concurrent_set_and_get_see_whole_entries() {
        use tokio::sync::RwLock;

        let clock = Arc::new(ManualClock::new(1_000));
        let cache = Arc::new(RwLock::new(TtlCache::new(clock)));

        let mut handles = Vec::new();
        for i in 0..16u32 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                for _ in 0..100 {
                    if i % 2 == 0 {
                        let mut guard = cache.write().await;
                        guard.set("shared", (i, format!("value-{i}")), Some(59));
                    } else {
                        let mut guard = cache.write().await;
                        if let Some((tag, value)) = guard.get("shared") {
                            // Value and tag were written together; a torn entry
                            // would break this pairing.
                            assert_eq!(value, format!("value-{tag}"));
                        }
                    }
                }
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }
    }
}
