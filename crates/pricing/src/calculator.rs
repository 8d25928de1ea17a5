//! The price calculator: resolution, formula, persistence.

use tracing::debug;

use aurum_catalog::{Catalog, Product, Variation};
use aurum_core::{Money, OriginTag, ProductId, Purity, VariationId, Weight};

use crate::config::PricingConfig;

/// Parent-level resolution shared by the whole variation pass.
///
/// Holds the parent's *resolved* contributions so variations inherit the
/// outcome of resolution (a looked-up rate), not the raw metadata.
#[derive(Debug, Clone, PartialEq)]
struct ResolvedRates {
    base: f64,
    labor: f64,
    adjustment: f64,
}

/// Computes and persists gold jewelry prices against a [`Catalog`].
///
/// Every entry point returns a price and never an error: missing records,
/// unknown codes and non-positive weights degrade to [`Money::ZERO`], and
/// nothing is persisted for the record that failed to price.
#[derive(Debug)]
pub struct PriceCalculator<C: Catalog> {
    catalog: C,
    config: PricingConfig,
}

impl<C: Catalog> PriceCalculator<C> {
    pub fn new(catalog: C, config: PricingConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Recalculate and persist a product's price, and its variations'.
    ///
    /// Returns the parent's computed price; [`Money::ZERO`] (with no writes
    /// and no cache invalidation) when the product is missing or its weight
    /// is not sellable. Each variation persists independently: one that
    /// cannot be priced is skipped without rolling back its siblings.
    pub fn recalculate_product(&self, id: &ProductId) -> Money {
        let Some(product) = self.catalog.product(id) else {
            debug!(product_id = %id, "recalculation skipped: product not found");
            return Money::ZERO;
        };

        let rates = self.resolve_product_rates(&product);

        let Some(weight) = product.weight.filter(Weight::is_sellable) else {
            debug!(product_id = %id, "recalculation skipped: weight not sellable");
            return Money::ZERO;
        };

        let price = Self::price_from(&rates, weight);
        self.catalog.write_product_prices(id, price);

        for variation_id in &product.variations {
            if let Some(variation) = self.catalog.variation(variation_id) {
                self.price_variation(&rates, &variation);
            }
        }

        self.catalog.price_cache().invalidate(id);
        debug!(product_id = %id, price = %price, "prices recalculated");
        price
    }

    /// Recalculate and persist a single variation's price.
    ///
    /// Used by the display filter. Resolves the parent product for the
    /// inherited purity/origin contributions and the labor price, exactly as
    /// the variation pass of [`recalculate_product`] would.
    ///
    /// [`recalculate_product`]: PriceCalculator::recalculate_product
    pub fn recalculate_variation(&self, id: &VariationId) -> Money {
        let Some(variation) = self.catalog.variation(id) else {
            debug!(variation_id = %id, "recalculation skipped: variation not found");
            return Money::ZERO;
        };
        let Some(parent) = self.catalog.product(&variation.parent) else {
            debug!(variation_id = %id, "recalculation skipped: parent not found");
            return Money::ZERO;
        };

        let rates = self.resolve_product_rates(&parent);
        match self.price_variation(&rates, &variation) {
            Some(price) => {
                self.catalog.price_cache().invalidate(&variation.parent);
                price
            }
            None => Money::ZERO,
        }
    }

    /// Resolve the parent's base, labor and origin contributions.
    fn resolve_product_rates(&self, product: &Product) -> ResolvedRates {
        let base = product
            .purity
            .as_deref()
            .and_then(Purity::parse)
            .map(|purity| self.config.metal_prices.per_gram(purity))
            .unwrap_or(0.0);

        // The highest labor cost among ALL of the product's categories.
        let mut labor = 0.0;
        for category_id in &product.categories {
            if let Some(category) = self.catalog.category(category_id) {
                if let Some(cost) = category.labor_cost {
                    if cost > labor {
                        labor = cost;
                    }
                }
            }
        }

        let adjustment = product
            .origin
            .as_deref()
            .and_then(OriginTag::parse)
            .and_then(|tag| self.config.origin_adjustments.adjustment(&tag))
            .unwrap_or(0.0);

        ResolvedRates {
            base,
            labor,
            adjustment,
        }
    }

    /// Price and persist one variation under its parent's resolved rates.
    ///
    /// Override-or-inherit: a non-blank variation override takes precedence
    /// over the parent's value; an override naming an unknown code falls
    /// back to the parent's resolved contribution. Labor is always the
    /// parent's. Returns `None` (no write) when the weight is not sellable.
    fn price_variation(&self, parent: &ResolvedRates, variation: &Variation) -> Option<Money> {
        let Some(weight) = variation.weight.filter(Weight::is_sellable) else {
            debug!(variation_id = %variation.id, "variation skipped: weight not sellable");
            return None;
        };

        let base = match variation.purity.as_deref().and_then(Purity::parse) {
            Some(purity) => self.config.metal_prices.per_gram(purity),
            None => parent.base,
        };

        let adjustment = match variation.origin.as_deref().and_then(OriginTag::parse) {
            Some(tag) => self
                .config
                .origin_adjustments
                .adjustment(&tag)
                .unwrap_or(parent.adjustment),
            None => parent.adjustment,
        };

        let rates = ResolvedRates {
            base,
            labor: parent.labor,
            adjustment,
        };
        let price = Self::price_from(&rates, weight);
        self.catalog.write_variation_prices(&variation.id, price);
        Some(price)
    }

    /// `(base + labor + origin_adjustment) * weight`, rounded to 2 decimals.
    fn price_from(rates: &ResolvedRates, weight: Weight) -> Money {
        Money::from_major((rates.base + rates.labor + rates.adjustment) * weight.as_grams())
    }
}
