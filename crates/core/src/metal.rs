//! Metal value objects: purity grades, origin tags, weight.
//!
//! Purity and origin metadata arrive as operator-entered free text. Parsing
//! here is the single normalization point: purity codes are trimmed and
//! uppercased, origin tags trimmed and lowercased. Unknown or blank input
//! parses to `None` — the calculator treats that as a zero contribution.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Gold purity grade (karat).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Purity {
    #[serde(rename = "10K")]
    K10,
    #[serde(rename = "14K")]
    K14,
    #[serde(rename = "18K")]
    K18,
    #[serde(rename = "22K")]
    K22,
    #[serde(rename = "24K")]
    K24,
}

impl Purity {
    pub const ALL: [Purity; 5] = [
        Purity::K10,
        Purity::K14,
        Purity::K18,
        Purity::K22,
        Purity::K24,
    ];

    /// Parse an operator-entered purity code (trimmed, case-insensitive).
    ///
    /// Returns `None` for blank or unrecognized codes.
    pub fn parse(raw: &str) -> Option<Purity> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "10K" => Some(Purity::K10),
            "14K" => Some(Purity::K14),
            "18K" => Some(Purity::K18),
            "22K" => Some(Purity::K22),
            "24K" => Some(Purity::K24),
            _ => None,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Purity::K10 => "10K",
            Purity::K14 => "14K",
            Purity::K18 => "18K",
            Purity::K22 => "22K",
            Purity::K24 => "24K",
        }
    }
}

impl ValueObject for Purity {}

impl core::fmt::Display for Purity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

/// Normalized country-of-origin tag (trimmed, lowercased, free-text).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OriginTag(String);

impl OriginTag {
    /// Parse an operator-entered origin tag. Blank input is `None`.
    pub fn parse(raw: &str) -> Option<OriginTag> {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(OriginTag(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for OriginTag {}

impl core::fmt::Display for OriginTag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Product weight in grams.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    pub const fn grams(grams: f64) -> Self {
        Self(grams)
    }

    pub const fn as_grams(&self) -> f64 {
        self.0
    }

    /// A weight prices a product only when strictly positive (and finite).
    pub fn is_sellable(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl ValueObject for Weight {}
