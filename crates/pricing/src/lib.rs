//! `aurum-pricing` — dynamic gold jewelry pricing.
//!
//! Computes retail prices from per-gram metal price tables, category labor
//! costs and origin premiums:
//!
//! ```text
//! price = round((base + labor + origin_adjustment) * weight, 2)
//! ```
//!
//! The [`PriceCalculator`] recomputes and persists prices for a product and
//! its variations; [`DisplayPriceFilter`] substitutes live prices on the
//! platform's price reads; [`SaveRecalculator`] reacts to product-save
//! notifications; [`recalculate_all`] is the admin bulk sweep. Configuration
//! is an explicitly injected [`PricingConfig`] — no ambient globals.
//!
//! Failure posture: the calculator never errors. Missing records, unknown
//! purity/origin codes and non-positive weights degrade to zero
//! contributions or a zero result with no persistence.

pub mod bulk;
pub mod calculator;
pub mod config;
pub mod display;
pub mod hooks;

pub use bulk::{BulkRecalculation, recalculate_all};
pub use calculator::PriceCalculator;
pub use config::{DisplayExclusions, MetalPriceTable, OriginAdjustmentTable, PricingConfig};
pub use display::{DisplayPriceFilter, DisplayTarget};
pub use hooks::SaveRecalculator;
