//! Live price substitution on the platform's price reads.

use tracing::debug;

use aurum_catalog::Catalog;
use aurum_core::{Money, ProductId, VariationId};

use crate::calculator::PriceCalculator;

/// What the platform is reading a price for.
///
/// The platform intercepts four read points (product price, product regular
/// price, variation price, variation regular price); price and regular price
/// answer identically here, so the four hooks collapse into two targets.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DisplayTarget {
    Product(ProductId),
    Variation(VariationId),
}

/// Substitutes live calculated prices for stored ones on display reads.
///
/// `apply` returns what the platform should show: the calculated price, or
/// `stored` untouched whenever the target is excluded, not gold-priced, or
/// unknown.
#[derive(Debug)]
pub struct DisplayPriceFilter<C: Catalog> {
    calculator: PriceCalculator<C>,
}

impl<C: Catalog> DisplayPriceFilter<C> {
    pub fn new(calculator: PriceCalculator<C>) -> Self {
        Self { calculator }
    }

    pub fn calculator(&self) -> &PriceCalculator<C> {
        &self.calculator
    }

    pub fn apply(&self, target: &DisplayTarget, stored: Option<Money>) -> Option<Money> {
        match target {
            DisplayTarget::Product(id) => self.product_price(id, stored),
            DisplayTarget::Variation(id) => self.variation_price(id, stored),
        }
    }

    fn product_price(&self, id: &ProductId, stored: Option<Money>) -> Option<Money> {
        let catalog = self.calculator.catalog();
        let Some(product) = catalog.product(id) else {
            return stored;
        };

        // Items in excluded categories keep their own pricing model.
        let excluded = product.categories.iter().any(|category_id| {
            catalog.category(category_id).is_some_and(|category| {
                self.calculator
                    .config()
                    .display_exclusions
                    .contains(&category.slug)
            })
        });
        if excluded {
            debug!(product_id = %id, "display override skipped: excluded category");
            return stored;
        }

        // Not gold-priced without purity and a sellable weight.
        if !product.has_purity() || !product.weight.is_some_and(|w| w.is_sellable()) {
            return stored;
        }

        let price = self.calculator.recalculate_product(id);
        if price.is_positive() { Some(price) } else { stored }
    }

    fn variation_price(&self, id: &VariationId, stored: Option<Money>) -> Option<Money> {
        let catalog = self.calculator.catalog();
        let Some(variation) = catalog.variation(id) else {
            return stored;
        };

        // Variations carry no category memberships, so the exclusion list is
        // judged at the parent product's reads, never here.
        if !variation.has_purity() || !variation.weight.is_some_and(|w| w.is_sellable()) {
            return stored;
        }

        // Variations always answer with the calculated value.
        Some(self.calculator.recalculate_variation(id))
    }
}
