//! In-memory catalog cache.
//!
//! Single-entry get-or-populate cache for the service catalog with a
//! sliding expiration window. The cache is owned by the application
//! state and injected into the catalog service; there is no global
//! state and no invalidation path - a stale entry simply ages out.

use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::config::CATALOG_CACHE_TTL_SECS;
use crate::domain::Service;

struct CachedCatalog {
    services: Vec<Service>,
    expires_at: Instant,
}

/// Sliding-expiration cache holding one copy of the service catalog.
///
/// The stored value is immutable until it expires; every hit pushes the
/// expiry forward by the full window.
pub struct CatalogCache {
    ttl: Duration,
    entry: Mutex<Option<CachedCatalog>>,
}

impl CatalogCache {
    /// Create a cache with the default 30-minute sliding window.
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(CATALOG_CACHE_TTL_SECS))
    }

    /// Create a cache with a custom sliding window.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: Mutex::new(None),
        }
    }

    /// Return the cached catalog if present and unexpired, renewing the
    /// expiration window. An expired entry is dropped.
    pub async fn get(&self) -> Option<Vec<Service>> {
        let mut guard = self.entry.lock().await;

        match guard.as_mut() {
            Some(cached) if Instant::now() < cached.expires_at => {
                cached.expires_at = Instant::now() + self.ttl;
                Some(cached.services.clone())
            }
            _ => {
                *guard = None;
                None
            }
        }
    }

    /// Store a freshly loaded catalog, starting a new expiration window.
    pub async fn store(&self, services: Vec<Service>) {
        let mut guard = self.entry.lock().await;
        *guard = Some(CachedCatalog {
            services,
            expires_at: Instant::now() + self.ttl,
        });
    }
}

impl Default for CatalogCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Vec<Service> {
        vec![Service {
            id: 1,
            name: "Internet".to_string(),
            description: "Broadband".to_string(),
        }]
    }

    #[tokio::test]
    async fn empty_cache_misses() {
        let cache = CatalogCache::new();
        assert!(cache.get().await.is_none());
    }

    #[tokio::test]
    async fn stored_catalog_is_returned_until_expiry() {
        let cache = CatalogCache::with_ttl(Duration::from_millis(200));
        cache.store(sample_catalog()).await;

        let hit = cache.get().await.expect("entry should be fresh");
        assert_eq!(hit, sample_catalog());

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(cache.get().await.is_none());
    }

    #[tokio::test]
    async fn access_renews_the_sliding_window() {
        let cache = CatalogCache::with_ttl(Duration::from_millis(200));
        cache.store(sample_catalog()).await;

        // Keep touching the entry more often than the window elapses
        for _ in 0..3 {
            tokio::time::sleep(Duration::from_millis(120)).await;
            assert!(cache.get().await.is_some());
        }

        // 3 * 120ms exceeds the ttl; only the sliding reset kept it alive
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(cache.get().await.is_none());
    }

    #[tokio::test]
    async fn store_replaces_previous_entry() {
        let cache = CatalogCache::with_ttl(Duration::from_secs(60));
        cache.store(sample_catalog()).await;
        cache.store(Vec::new()).await;

        let hit = cache.get().await.expect("entry should be fresh");
        assert!(hit.is_empty());
    }
}
