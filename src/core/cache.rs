//! Process-lifetime memo cache for feed lookups
//!
//! Every feed call is memoized by its exact argument tuple. Inputs are
//! immutable once fetched, so entries are never invalidated and never
//! evicted: the cache is an unbounded `LruCache` behind a `Mutex`.

use lru::LruCache;
use std::{
    future::Future,
    hash::Hash,
    sync::{Arc, Mutex, MutexGuard},
};
use tracing::debug;

use crate::{CompetitionId, SeasonId};

/// Whether a lookup was answered from memory or had to go to the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
}

/// Key usable by the memo cache
pub trait CacheKey: Hash + Eq + Clone + Send + Sync {
    /// Short human-readable label for log lines
    fn label(&self) -> String;
}

/// Key for the competitions listing (the feed has exactly one)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompetitionsCacheKey;

impl CacheKey for CompetitionsCacheKey {
    fn label(&self) -> String {
        "competitions".to_string()
    }
}

/// Key for the matches of one competition season
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeasonCacheKey {
    pub competition_id: CompetitionId,
    pub season_id: SeasonId,
}

impl CacheKey for SeasonCacheKey {
    fn label(&self) -> String {
        format!("matches_c{}_s{}", self.competition_id, self.season_id)
    }
}

/// Memo cache keyed by call arguments
pub struct MemoCache<K, V>
where
    K: CacheKey,
    V: Clone,
{
    entries: Arc<Mutex<LruCache<K, V>>>,
}

impl<K, V> MemoCache<K, V>
where
    K: CacheKey,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(LruCache::unbounded())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<K, V>> {
        // A panic while holding the lock cannot leave an entry half-written
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Get a memoized value
    pub fn get(&self, key: &K) -> Option<V> {
        self.lock().get(key).cloned()
    }

    /// Memoize a value
    pub fn put(&self, key: K, value: V) {
        self.lock().put(key, value);
    }

    /// Return the memoized value for `key`, or run `fetch` and memoize its result.
    ///
    /// Errors are not memoized, so the next call tries the feed again.
    /// The lock is not held while `fetch` runs.
    pub async fn get_or_try_fetch<F, Fut, E>(&self, key: K, fetch: F) -> Result<(V, CacheStatus), E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(&key) {
            debug!(key = %key.label(), "cache hit");
            return Ok((value, CacheStatus::Hit));
        }

        debug!(key = %key.label(), "cache miss");
        let value = fetch().await?;
        self.put(key, value.clone());
        Ok((value, CacheStatus::Miss))
    }

    /// Number of memoized entries
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V> Default for MemoCache<K, V>
where
    K: CacheKey,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_cache_key_label() {
        let key = SeasonCacheKey {
            competition_id: CompetitionId::new(43),
            season_id: SeasonId::new(3),
        };

        assert_eq!(key.label(), "matches_c43_s3");
    }

    #[test]
    fn test_memo_cache_put_and_get() {
        let cache: MemoCache<SeasonCacheKey, Vec<String>> = MemoCache::new();
        let key = SeasonCacheKey {
            competition_id: CompetitionId::new(43),
            season_id: SeasonId::new(3),
        };

        assert!(cache.is_empty());
        assert_eq!(cache.get(&key), None);

        cache.put(key.clone(), vec!["France".to_string()]);
        assert_eq!(cache.get(&key), Some(vec!["France".to_string()]));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_memo_cache_never_evicts() {
        let cache: MemoCache<SeasonCacheKey, u32> = MemoCache::new();

        for season in 0..1_000 {
            cache.put(
                SeasonCacheKey {
                    competition_id: CompetitionId::new(1),
                    season_id: SeasonId::new(season),
                },
                season,
            );
        }

        assert_eq!(cache.len(), 1_000);
        let first = SeasonCacheKey {
            competition_id: CompetitionId::new(1),
            season_id: SeasonId::new(0),
        };
        assert_eq!(cache.get(&first), Some(0));
    }

    #[tokio::test]
    async fn test_get_or_try_fetch_memoizes_success() {
        let cache: MemoCache<CompetitionsCacheKey, u32> = MemoCache::new();
        let mut calls = 0;

        let (value, status) = cache
            .get_or_try_fetch(CompetitionsCacheKey, || {
                calls += 1;
                async { Ok::<_, String>(7) }
            })
            .await
            .unwrap();
        assert_eq!((value, status), (7, CacheStatus::Miss));

        let (value, status) = cache
            .get_or_try_fetch(CompetitionsCacheKey, || async { Ok::<_, String>(99) })
            .await
            .unwrap();
        assert_eq!((value, status), (7, CacheStatus::Hit));
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_get_or_try_fetch_does_not_memoize_errors() {
        let cache: MemoCache<CompetitionsCacheKey, u32> = MemoCache::new();

        let result = cache
            .get_or_try_fetch(CompetitionsCacheKey, || async {
                Err::<u32, _>("feed offline".to_string())
            })
            .await;
        assert!(result.is_err());
        assert!(cache.is_empty());

        let (value, status) = cache
            .get_or_try_fetch(CompetitionsCacheKey, || async { Ok::<_, String>(3) })
            .await
            .unwrap();
        assert_eq!((value, status), (3, CacheStatus::Miss));
    }
}
