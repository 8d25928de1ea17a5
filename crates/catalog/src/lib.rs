//! `aurum-catalog` — the commerce platform's catalog, as the pricing engine
//! sees it.
//!
//! The platform owns product storage, editing UI and price reads; this crate
//! models the narrow slice the engine needs: product/variation/category
//! records, a [`Catalog`] store contract with price-field writes, a
//! [`PriceCache`] invalidation surface, and the save notification the
//! platform publishes ([`CatalogEvent`]). [`InMemoryCatalog`] is the
//! dev/test backend and the reference for store semantics.

pub mod cache;
pub mod event;
pub mod product;
pub mod store;

pub use cache::PriceCache;
pub use event::{CatalogEvent, ProductSaved};
pub use product::{Category, CategorySlug, PriceFields, Product, Variation};
pub use store::{Catalog, InMemoryCatalog};
