//! Cache types for catalog reads.
//!
//! [`ReadCache`] pairs the `moka` cache with a generation counter bumped on
//! every invalidation. A read notes the generation before going to the
//! backend and only keeps its result if no invalidation happened meanwhile,
//! so a slow read cannot repopulate the cache with rows a write replaced.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use moka::future::Cache;

use decors_core::Slug;

use crate::models::{InquiryFilter, InquiryListing, Product, ProductFilter};

/// Upper bound on cached entries per cache.
const MAX_ENTRIES: u64 = 1000;

/// Cache key for catalog reads.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Product(Slug),
    Products(ProductFilter),
    Inquiries(InquiryFilter),
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Product(Box<Product>),
    Products(Arc<Vec<Product>>),
    Inquiries(Arc<Vec<InquiryListing>>),
}

/// Generation observed before a backend read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Read cache that refuses results fetched across an invalidation.
#[derive(Clone)]
pub struct ReadCache {
    entries: Cache<CacheKey, CacheValue>,
    generation: Arc<AtomicU64>,
}

impl ReadCache {
    /// Build a read cache with the configured time-to-live.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Cache::builder()
                .max_capacity(MAX_ENTRIES)
                .time_to_live(ttl)
                .build(),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn get(&self, key: &CacheKey) -> Option<CacheValue> {
        self.entries.get(key).await
    }

    /// Current generation; take it before calling the backend.
    #[must_use]
    pub fn generation(&self) -> Generation {
        Generation(self.generation.load(Ordering::Acquire))
    }

    /// Store a value read at `seen`, unless an invalidation has happened
    /// since. Returns whether the value was kept.
    pub async fn fill(&self, key: CacheKey, value: CacheValue, seen: Generation) -> bool {
        if self.generation() != seen {
            return false;
        }
        self.entries.insert(key.clone(), value).await;

        // An invalidation may have landed between the check and the insert.
        if self.generation() != seen {
            self.entries.invalidate(&key).await;
            return false;
        }
        true
    }

    /// Drop every entry and every read still in flight.
    pub async fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        self.entries.invalidate_all();
        self.entries.run_pending_tasks().await;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn listing() -> CacheValue {
        CacheValue::Products(Arc::new(Vec::new()))
    }

    #[tokio::test]
    async fn test_fill_kept_without_invalidation() {
        let cache = ReadCache::new(Duration::from_secs(60));
        let seen = cache.generation();
        let key = CacheKey::Products(ProductFilter::all());

        assert!(cache.fill(key.clone(), listing(), seen).await);
        assert!(cache.get(&key).await.is_some());
    }

    #[tokio::test]
    async fn test_fill_dropped_after_invalidation() {
        let cache = ReadCache::new(Duration::from_secs(60));
        let seen = cache.generation();
        let key = CacheKey::Products(ProductFilter::all());

        cache.invalidate().await;

        assert!(!cache.fill(key.clone(), listing(), seen).await);
        assert!(cache.get(&key).await.is_none());
    }
}
