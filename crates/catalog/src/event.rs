//! Catalog notifications published by the platform adapter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use aurum_core::ProductId;
use aurum_events::Event;

/// A product was saved through the catalog's product-editing interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSaved {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogEvent {
    ProductSaved(ProductSaved),
}

impl Event for CatalogEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CatalogEvent::ProductSaved(_) => "catalog.product.saved",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CatalogEvent::ProductSaved(e) => e.occurred_at,
        }
    }
}
