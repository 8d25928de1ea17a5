//! Admin bulk recalculation tool.

use tracing::info;

use aurum_catalog::Catalog;

use crate::calculator::PriceCalculator;

/// Outcome of a bulk sweep. `Display` renders the operator-facing summary
/// the admin tools interface shows.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BulkRecalculation {
    pub updated: usize,
}

impl core::fmt::Display for BulkRecalculation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Updated {} gold products with new calculated prices.",
            self.updated
        )
    }
}

/// Recalculate every product carrying a non-empty purity attribute.
///
/// No batching or pagination — the sweep is meant for manual, infrequent
/// use and runs to completion within the caller's request. Every selected
/// product counts toward `updated`, including those whose computation came
/// to zero. The catalog-wide price-cache version is bumped afterwards.
pub fn recalculate_all<C: Catalog>(calculator: &PriceCalculator<C>) -> BulkRecalculation {
    let mut updated = 0;
    for product_id in calculator.catalog().products_with_purity() {
        calculator.recalculate_product(&product_id);
        updated += 1;
    }

    calculator.catalog().price_cache().bump_version();

    let summary = BulkRecalculation { updated };
    info!(updated, "bulk gold price recalculation finished");
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use aurum_catalog::{InMemoryCatalog, Product};
    use aurum_core::{Money, ProductId, Purity, Weight};

    use crate::config::{MetalPriceTable, PricingConfig};

    fn seed(catalog: &InMemoryCatalog, purity: Option<&str>, grams: f64) -> ProductId {
        let mut product = Product::new(ProductId::new(), "Piece");
        product.purity = purity.map(str::to_string);
        product.weight = Some(Weight::grams(grams));
        let id = product.id;
        catalog.insert_product(product);
        id
    }

    fn calculator(catalog: Arc<InMemoryCatalog>) -> PriceCalculator<Arc<InMemoryCatalog>> {
        let config = PricingConfig {
            metal_prices: MetalPriceTable::new([(Purity::K14, 50.0)]),
            ..PricingConfig::default()
        };
        PriceCalculator::new(catalog, config)
    }

    #[test]
    fn sweeps_exactly_the_purity_bearing_products() {
        let catalog = Arc::new(InMemoryCatalog::new());
        let gold = seed(&catalog, Some("14K"), 2.0);
        let odd = seed(&catalog, Some("goldish"), 1.0); // non-empty counts
        let unweighed = seed(&catalog, Some("14K"), 0.0); // zero result still counts
        seed(&catalog, Some("   "), 1.0);
        seed(&catalog, None, 1.0);

        let summary = recalculate_all(&calculator(Arc::clone(&catalog)));

        assert_eq!(summary.updated, 3);
        assert_eq!(
            catalog.product(&gold).unwrap().prices.effective,
            Some(Money::from_minor(10000))
        );
        assert_eq!(
            catalog.product(&odd).unwrap().prices.effective,
            Some(Money::ZERO)
        );
        assert_eq!(catalog.product(&unweighed).unwrap().prices.effective, None);
    }

    #[test]
    fn summary_renders_the_operator_message() {
        let summary = BulkRecalculation { updated: 12 };
        assert_eq!(
            summary.to_string(),
            "Updated 12 gold products with new calculated prices."
        );
    }

    #[test]
    fn bulk_sweep_bumps_the_cache_version() {
        let catalog = Arc::new(InMemoryCatalog::new());
        seed(&catalog, Some("14K"), 1.0);

        let calc = calculator(Arc::clone(&catalog));
        recalculate_all(&calc);
        recalculate_all(&calc);

        assert_eq!(catalog.price_cache().version(), 2);
    }
}
