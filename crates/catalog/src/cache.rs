//! Price-display cache invalidation surface.
//!
//! The platform caches derived price data per product, plus a catalog-wide
//! transient version that bulk operations bump to expire everything at once.
//! The engine never reads the cache; it only signals staleness, so this
//! models exactly that: counters a platform adapter (or a test) can observe.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use aurum_core::ProductId;

/// Tracks cache invalidation signals emitted by the pricing engine.
#[derive(Debug, Default)]
pub struct PriceCache {
    invalidations: RwLock<HashMap<ProductId, u64>>,
    version: AtomicU64,
}

impl PriceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate one product's cached price-display data.
    pub fn invalidate(&self, product_id: &ProductId) {
        if let Ok(mut map) = self.invalidations.write() {
            *map.entry(*product_id).or_insert(0) += 1;
        }
    }

    /// How many times a product's cache entry has been invalidated.
    pub fn invalidations(&self, product_id: &ProductId) -> u64 {
        match self.invalidations.read() {
            Ok(map) => map.get(product_id).copied().unwrap_or(0),
            Err(_) => 0,
        }
    }

    /// Expire every cached product price at once (bulk recalculation).
    pub fn bump_version(&self) {
        self.version.fetch_add(1, Ordering::SeqCst);
    }

    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalidations_are_counted_per_product() {
        let cache = PriceCache::new();
        let a = ProductId::new();
        let b = ProductId::new();

        cache.invalidate(&a);
        cache.invalidate(&a);

        assert_eq!(cache.invalidations(&a), 2);
        assert_eq!(cache.invalidations(&b), 0);
    }

    #[test]
    fn version_bumps_monotonically() {
        let cache = PriceCache::new();
        assert_eq!(cache.version(), 0);
        cache.bump_version();
        cache.bump_version();
        assert_eq!(cache.version(), 2);
    }
}
