//! Catalog records: products, variations, categories, price fields.
//!
//! Purity and origin metadata are kept **raw** (as the operator entered
//! them); normalization happens where they are consumed, in the pricing
//! crate. That mirrors how the platform stores metadata and keeps writes by
//! other tools visible without migration.

use serde::{Deserialize, Serialize};

use aurum_core::{CategoryId, Money, ProductId, VariationId, Weight};

/// Persisted price fields on a product or variation record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceFields {
    pub regular: Option<Money>,
    pub sale: Option<Money>,
    /// The effective price the storefront sells at.
    pub effective: Option<Money>,
}

impl PriceFields {
    /// Overwrite with a calculated price: the sale price is removed, regular
    /// and effective both become the computed value.
    pub fn apply_calculated(&mut self, price: Money) {
        self.sale = None;
        self.regular = Some(price);
        self.effective = Some(price);
    }
}

/// Normalized category slug (trimmed, lowercased).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySlug(String);

impl CategorySlug {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CategorySlug {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category record: slug plus the operator-configured per-gram labor cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub slug: CategorySlug,
    /// Per-gram labor cost in major currency units; `None` when the
    /// category has no labor cost configured.
    pub labor_cost: Option<f64>,
}

/// Top-level product record (simple, or variable when `variations` is
/// non-empty).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Raw purity metadata, as entered (e.g. `" 14k "`).
    pub purity: Option<String>,
    /// Raw origin metadata, as entered.
    pub origin: Option<String>,
    pub weight: Option<Weight>,
    pub categories: Vec<CategoryId>,
    pub variations: Vec<VariationId>,
    pub prices: PriceFields,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            purity: None,
            origin: None,
            weight: None,
            categories: Vec::new(),
            variations: Vec::new(),
            prices: PriceFields::default(),
        }
    }

    /// Whether the record carries non-blank purity metadata (the bulk
    /// tool's selection predicate, and the display filter's gold gate).
    pub fn has_purity(&self) -> bool {
        self.purity
            .as_deref()
            .is_some_and(|raw| !raw.trim().is_empty())
    }

    pub fn is_variable(&self) -> bool {
        !self.variations.is_empty()
    }
}

/// Variation record. Belongs to exactly one parent product; may override
/// purity, origin and weight. Variations carry no category memberships.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    pub id: VariationId,
    pub parent: ProductId,
    /// Raw purity override, as entered; blank means "inherit".
    pub purity: Option<String>,
    /// Raw origin override, as entered; blank means "inherit".
    pub origin: Option<String>,
    pub weight: Option<Weight>,
    pub prices: PriceFields,
}

impl Variation {
    pub fn new(id: VariationId, parent: ProductId) -> Self {
        Self {
            id,
            parent,
            purity: None,
            origin: None,
            weight: None,
            prices: PriceFields::default(),
        }
    }

    pub fn has_purity(&self) -> bool {
        self.purity
            .as_deref()
            .is_some_and(|raw| !raw.trim().is_empty())
    }
}
