//! Save-triggered recalculation.
//!
//! The platform adapter publishes [`CatalogEvent::ProductSaved`] from its
//! product-save hook; draining the subscription inside the same request
//! keeps stored prices consistent with the current tables before the next
//! display read.

use tracing::debug;

use aurum_catalog::{Catalog, CatalogEvent};
use aurum_events::{EventBus, Subscription};

use crate::calculator::PriceCalculator;

/// Listens for product saves and recalculates the saved product's prices.
#[derive(Debug)]
pub struct SaveRecalculator<C: Catalog> {
    calculator: PriceCalculator<C>,
    subscription: Subscription<CatalogEvent>,
}

impl<C: Catalog> SaveRecalculator<C> {
    /// Subscribe to a catalog event bus.
    pub fn new<B>(calculator: PriceCalculator<C>, bus: &B) -> Self
    where
        B: EventBus<CatalogEvent> + ?Sized,
    {
        Self {
            calculator,
            subscription: bus.subscribe(),
        }
    }

    pub fn calculator(&self) -> &PriceCalculator<C> {
        &self.calculator
    }

    /// Handle every pending save notification without blocking.
    ///
    /// Returns the number of events handled. Recalculation is idempotent
    /// (overwrite, never append), so duplicate deliveries are harmless.
    pub fn drain(&self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.subscription.try_recv() {
            match event {
                CatalogEvent::ProductSaved(saved) => {
                    let price = self.calculator.recalculate_product(&saved.product_id);
                    debug!(
                        product_id = %saved.product_id,
                        price = %price,
                        "recalculated after save"
                    );
                }
            }
            handled += 1;
        }
        handled
    }
}
