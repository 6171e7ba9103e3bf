use moka::future::Cache;
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;
use tracing::warn;

const MAX_ENTRIES: u64 = 5000;
const DEFAULT_TTL: Duration = Duration::from_secs(600);

/// Bounded in-process read-through cache, keyed by identity. Entries are
/// evicted least-recently-used past 5000 entries and expire after the TTL.
/// The cache is an optimization only: writes always go to the store first
/// and the cached value is refreshed from the write result.
pub struct CacheStore {
    cache: Cache<String, String>,
}

impl CacheStore {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(MAX_ENTRIES)
            .time_to_live(ttl)
            .build();

        Self { cache }
    }

    pub async fn get_from_cache<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.cache.get(key).await?;

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("⚠️ Dropping undecodable cache entry for {key}: {e}");
                self.cache.invalidate(key).await;
                None
            }
        }
    }

    pub async fn set_to_cache<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.cache.insert(key.to_string(), raw).await,
            Err(e) => warn!("⚠️ Failed to serialize cache entry for {key}: {e}"),
        }
    }

    pub async fn invalidate(&self, key: &str) {
        self.cache.invalidate(key).await;
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn round_trips_and_invalidates() {
        let store = CacheStore::new();

        store.set_to_cache("points:user:u1", &42i64).await;
        assert_eq!(store.get_from_cache::<i64>("points:user:u1").await, Some(42));

        store.invalidate("points:user:u1").await;
        assert_eq!(store.get_from_cache::<i64>("points:user:u1").await, None);
    }

    #[tokio::test]
    async fn miss_on_unknown_key() {
        let store = CacheStore::new();
        assert_eq!(store.get_from_cache::<i64>("points:user:nope").await, None);
    }
}
