//! Usage ratio value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Share of a quota that has been consumed, between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsageRatio(u8);

impl UsageRatio {
    /// Nothing consumed.
    pub const ZERO: Self = Self(0);

    /// Quota fully consumed.
    pub const FULL: Self = Self(100);

    /// Creates a new UsageRatio, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Computes the percentage of a quota that has been used.
    ///
    /// Defined as 0 whenever `total <= 0`: a zero-limit category always
    /// reads as 0% used, never NaN or infinity. Non-finite input is
    /// treated as 0. The result is clamped to 0..=100.
    pub fn percent_used(used: f64, total: f64) -> Self {
        if !total.is_finite() || total <= 0.0 {
            return Self::ZERO;
        }
        let used = if used.is_finite() { used.max(0.0) } else { 0.0 };
        let pct = (used / total * 100.0).clamp(0.0, 100.0);
        Self(pct.round() as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// True once the quota is fully consumed.
    pub fn is_exhausted(&self) -> bool {
        self.0 >= 100
    }
}

impl Default for UsageRatio {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for UsageRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
