//! Catalog store contract and the in-memory reference backend.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use aurum_core::{CategoryId, Money, ProductId, VariationId};

use crate::cache::PriceCache;
use crate::product::{Category, Product, Variation};

/// The slice of the platform's catalog the pricing engine reads and writes.
///
/// Price writes carry the full overwrite semantics of a recalculation: the
/// sale price is cleared and regular/effective both become the computed
/// value. Implementations write whatever record currently exists; a missing
/// record makes the write a no-op (the engine has already decided to write,
/// and a record deleted underneath it is a last-write-wins race the system
/// does not try to detect).
pub trait Catalog: Send + Sync {
    fn product(&self, id: &ProductId) -> Option<Product>;
    fn variation(&self, id: &VariationId) -> Option<Variation>;
    fn category(&self, id: &CategoryId) -> Option<Category>;

    /// Every product whose raw purity metadata is non-blank — the bulk
    /// recalculation's selection query.
    fn products_with_purity(&self) -> Vec<ProductId>;

    fn write_product_prices(&self, id: &ProductId, price: Money);
    fn write_variation_prices(&self, id: &VariationId, price: Money);

    /// The platform's price-display cache, for invalidation signals.
    fn price_cache(&self) -> &PriceCache;
}

impl<C> Catalog for Arc<C>
where
    C: Catalog + ?Sized,
{
    fn product(&self, id: &ProductId) -> Option<Product> {
        (**self).product(id)
    }

    fn variation(&self, id: &VariationId) -> Option<Variation> {
        (**self).variation(id)
    }

    fn category(&self, id: &CategoryId) -> Option<Category> {
        (**self).category(id)
    }

    fn products_with_purity(&self) -> Vec<ProductId> {
        (**self).products_with_purity()
    }

    fn write_product_prices(&self, id: &ProductId, price: Money) {
        (**self).write_product_prices(id, price)
    }

    fn write_variation_prices(&self, id: &VariationId, price: Money) {
        (**self).write_variation_prices(id, price)
    }

    fn price_cache(&self) -> &PriceCache {
        (**self).price_cache()
    }
}

/// In-memory catalog for tests/dev and as reference store semantics.
///
/// Lock poisoning degrades to read-miss / write-noop; the store never
/// panics under a poisoned lock.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: RwLock<HashMap<ProductId, Product>>,
    variations: RwLock<HashMap<VariationId, Variation>>,
    categories: RwLock<HashMap<CategoryId, Category>>,
    cache: PriceCache,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_product(&self, product: Product) {
        if let Ok(mut map) = self.products.write() {
            map.insert(product.id, product);
        }
    }

    /// Insert a variation and link it into its parent's variation list
    /// (when the parent exists and does not already reference it).
    pub fn insert_variation(&self, variation: Variation) {
        if let Ok(mut products) = self.products.write() {
            if let Some(parent) = products.get_mut(&variation.parent) {
                if !parent.variations.contains(&variation.id) {
                    parent.variations.push(variation.id);
                }
            }
        }
        if let Ok(mut map) = self.variations.write() {
            map.insert(variation.id, variation);
        }
    }

    pub fn insert_category(&self, category: Category) {
        if let Ok(mut map) = self.categories.write() {
            map.insert(category.id, category);
        }
    }
}

impl Catalog for InMemoryCatalog {
    fn product(&self, id: &ProductId) -> Option<Product> {
        let map = self.products.read().ok()?;
        map.get(id).cloned()
    }

    fn variation(&self, id: &VariationId) -> Option<Variation> {
        let map = self.variations.read().ok()?;
        map.get(id).cloned()
    }

    fn category(&self, id: &CategoryId) -> Option<Category> {
        let map = self.categories.read().ok()?;
        map.get(id).cloned()
    }

    fn products_with_purity(&self) -> Vec<ProductId> {
        let map = match self.products.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };

        let mut ids: Vec<ProductId> = map
            .values()
            .filter(|p| p.has_purity())
            .map(|p| p.id)
            .collect();

        // HashMap iteration order is arbitrary; keep sweeps reproducible.
        ids.sort_by_key(|id| *id.as_uuid().as_bytes());
        ids
    }

    fn write_product_prices(&self, id: &ProductId, price: Money) {
        if let Ok(mut map) = self.products.write() {
            if let Some(product) = map.get_mut(id) {
                product.prices.apply_calculated(price);
            }
        }
    }

    fn write_variation_prices(&self, id: &VariationId, price: Money) {
        if let Ok(mut map) = self.variations.write() {
            if let Some(variation) = map.get_mut(id) {
                variation.prices.apply_calculated(price);
            }
        }
    }

    fn price_cache(&self) -> &PriceCache {
        &self.cache
    }
}
