//! Sentence cache keyed by step count.
//!
//! [`ResponseCache`] remembers the sentence generated for each step count so
//! repeated lookups within the validity window never touch the network. A
//! hit also bypasses request pacing entirely, since nothing is dispatched.
//!
//! Entries expire lazily: a stale entry is shadowed on read and replaced on
//! the next successful generation for that count. There is no background
//! sweep and no eviction — the map is unbounded, and the key space is
//! bounded in practice by how many distinct step counts a day produces.
//!
//! All access goes through one `tokio::sync::Mutex`, so a read never
//! observes a partially written entry and concurrent callers serialize.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::telemetry;

/// Default validity window for cached sentences.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Configuration for the sentence cache.
///
/// ```rust
/// # use gadfly::CacheConfig;
/// # use std::time::Duration;
/// let config = CacheConfig::new().ttl(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Time-to-live for cached entries. Default: 5 minutes.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl: DEFAULT_TTL }
    }
}

impl CacheConfig {
    /// Create a new config with the default TTL.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the time-to-live for cached entries.
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

/// A cached sentence plus its creation time.
#[derive(Debug, Clone)]
struct CacheEntry {
    sentence: String,
    created_at: Instant,
}

/// In-memory sentence cache keyed by step count.
pub struct ResponseCache {
    entries: Mutex<HashMap<u32, CacheEntry>>,
    ttl: Duration,
}

impl ResponseCache {
    /// Create an empty cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl: config.ttl,
        }
    }

    /// Look up the cached sentence for a step count.
    ///
    /// Returns `None` on a miss or when the entry has outlived the TTL.
    /// Stale entries are not purged here, only shadowed. Emits cache
    /// hit/miss metrics.
    pub async fn get(&self, steps: u32) -> Option<String> {
        let entries = self.entries.lock().await;
        match entries.get(&steps) {
            Some(entry) if entry.created_at.elapsed() < self.ttl => {
                metrics::counter!(telemetry::CACHE_HITS_TOTAL).increment(1);
                Some(entry.sentence.clone())
            }
            _ => {
                metrics::counter!(telemetry::CACHE_MISSES_TOTAL).increment(1);
                None
            }
        }
    }

    /// Insert (or overwrite) the sentence for a step count, stamped now.
    pub async fn insert(&self, steps: u32, sentence: impl Into<String>) {
        let mut entries = self.entries.lock().await;
        entries.insert(
            steps,
            CacheEntry {
                sentence: sentence.into(),
                created_at: Instant::now(),
            },
        );
    }

    /// Number of entries currently in the map, stale ones included.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Whether the cache holds no entries at all.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Evict all entries.
    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn miss_on_empty_cache() {
        let cache = ResponseCache::new(&CacheConfig::default());
        assert!(cache.get(1000).await.is_none());
    }

    #[tokio::test]
    async fn insert_then_hit() {
        let cache = ResponseCache::new(&CacheConfig::default());
        cache.insert(1000, "move it").await;
        assert_eq!(cache.get(1000).await.as_deref(), Some("move it"));
    }

    #[tokio::test]
    async fn keys_are_distinct_step_counts() {
        let cache = ResponseCache::new(&CacheConfig::default());
        cache.insert(1000, "a").await;
        assert!(cache.get(1001).await.is_none());
    }

    #[tokio::test]
    async fn overwrite_replaces_sentence() {
        let cache = ResponseCache::new(&CacheConfig::default());
        cache.insert(1000, "first").await;
        cache.insert(1000, "second").await;
        assert_eq!(cache.get(1000).await.as_deref(), Some("second"));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn stale_entry_is_shadowed_not_purged() {
        let cache = ResponseCache::new(&CacheConfig::new().ttl(Duration::from_millis(30)));
        cache.insert(1000, "stale soon").await;
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(cache.get(1000).await.is_none());
        // The entry is still in the map; reads only shadow it.
        assert_eq!(cache.len().await, 1);
    }
}
