//! Integer peso amounts and the fixed `es-CL` formatting routine.
//!
//! Catalog prices are whole Chilean pesos, so amounts are plain integers
//! and no rounding ever happens. Formatting uses `.` as the thousands
//! separator with no decimal places, independent of any host locale
//! facility, so rendered quotes are reproducible everywhere.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount of Chilean pesos.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Pesos(i64);

impl Pesos {
    pub const ZERO: Pesos = Pesos(0);

    /// Create an amount from whole pesos.
    pub fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Get the amount in whole pesos.
    pub fn amount(&self) -> i64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiply by a quantity, returning `None` on overflow.
    pub fn checked_mul(self, factor: i64) -> Option<Pesos> {
        self.0.checked_mul(factor).map(Pesos)
    }

    /// Multiply by a quantity, clamping at the numeric limits.
    pub fn saturating_mul(self, factor: i64) -> Pesos {
        Pesos(self.0.saturating_mul(factor))
    }

    /// Add another amount, returning `None` on overflow.
    pub fn checked_add(self, other: Pesos) -> Option<Pesos> {
        self.0.checked_add(other.0).map(Pesos)
    }

    /// Add another amount, clamping at the numeric limits.
    pub fn saturating_add(self, other: Pesos) -> Pesos {
        Pesos(self.0.saturating_add(other.0))
    }

    /// Render with `es-CL` digit grouping and no symbol: `22500` becomes
    /// `"22.500"`.
    pub fn format(&self) -> String {
        format_clp(self.0)
    }
}

impl fmt::Display for Pesos {
    /// Renders with the peso sign, e.g. `"$22.500"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.format())
    }
}

/// Group digits in threes with `.`, the es-CL convention for integer pesos.
pub fn format_clp(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    let lead = digits.len() % 3;
    for (i, c) in digits.char_indices() {
        if i != 0 && i % 3 == lead {
            out.push('.');
        }
        out.push(c);
    }
    out
}
