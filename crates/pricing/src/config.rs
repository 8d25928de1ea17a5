//! Injected pricing configuration.
//!
//! The operator edits these tables through the platform's settings storage;
//! the engine receives them as an explicit value passed into the calculator,
//! never as ambient global state. Hosts typically deserialize
//! [`PricingConfig`] from their settings JSON and rebuild the calculator
//! when rates change. Operator-entered values are not validated (out of
//! scope).

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use aurum_catalog::CategorySlug;
use aurum_core::{OriginTag, Purity};

/// Per-gram base prices keyed by purity grade, in major currency units.
///
/// Grades without a configured entry price at 0 (an unset rate, not an
/// error).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetalPriceTable {
    entries: HashMap<Purity, f64>,
}

impl MetalPriceTable {
    pub fn new(entries: impl IntoIterator<Item = (Purity, f64)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn set(&mut self, purity: Purity, per_gram: f64) {
        self.entries.insert(purity, per_gram);
    }

    /// Per-gram base price for a grade; 0 when the operator never set one.
    pub fn per_gram(&self, purity: Purity) -> f64 {
        self.entries.get(&purity).copied().unwrap_or(0.0)
    }
}

/// Flat per-gram adjustments keyed by normalized origin tag.
///
/// Lookup distinguishes "no entry" from "entry of 0": an unknown tag yields
/// `None` so variation overrides can fall back to the parent's resolved
/// adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OriginAdjustmentTable {
    entries: HashMap<String, f64>,
}

impl OriginAdjustmentTable {
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn set(&mut self, tag: &str, adjustment: f64) {
        if let Some(tag) = OriginTag::parse(tag) {
            self.entries.insert(tag.as_str().to_string(), adjustment);
        }
    }

    pub fn adjustment(&self, tag: &OriginTag) -> Option<f64> {
        self.entries.get(tag.as_str()).copied()
    }
}

impl Default for OriginAdjustmentTable {
    /// The stock adjustments the system shipped with.
    fn default() -> Self {
        let mut table = Self::empty();
        table.set("korean", 2.0);
        table.set("italian", 5.0);
        table
    }
}

/// Category slugs whose display price is never overridden (items sold by a
/// different pricing model).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayExclusions {
    slugs: HashSet<CategorySlug>,
}

impl DisplayExclusions {
    pub fn empty() -> Self {
        Self {
            slugs: HashSet::new(),
        }
    }

    pub fn new(slugs: impl IntoIterator<Item = CategorySlug>) -> Self {
        Self {
            slugs: slugs.into_iter().collect(),
        }
    }

    pub fn contains(&self, slug: &CategorySlug) -> bool {
        self.slugs.contains(slug)
    }
}

impl Default for DisplayExclusions {
    fn default() -> Self {
        Self::new([
            CategorySlug::new("diamond"),
            CategorySlug::new("luxury-watches"),
        ])
    }
}

/// Everything the pricing engine is configured by.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default)]
    pub metal_prices: MetalPriceTable,
    #[serde(default)]
    pub origin_adjustments: OriginAdjustmentTable,
    #[serde(default)]
    pub display_exclusions: DisplayExclusions,
}
