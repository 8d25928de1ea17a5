//! Money in minor currency units.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// An amount of money in the catalog's currency, in minor units (cents).
///
/// Signed: operator-entered price tables are not validated, so a computed
/// price can in principle come out negative. All rounding happens in
/// [`Money::from_major`]; arithmetic on already-rounded amounts stays exact.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Construct from minor units (cents).
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Construct from major units, rounding to two decimal places.
    ///
    /// Rounds half away from zero. Non-finite input collapses to zero, in
    /// line with the calculator's soft-failure posture.
    pub fn from_major(major: f64) -> Self {
        let minor = (major * 100.0).round();
        if minor.is_finite() {
            Self(minor as i64)
        } else {
            Self::ZERO
        }
    }

    pub const fn minor(&self) -> i64 {
        self.0
    }

    pub fn as_major(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}
