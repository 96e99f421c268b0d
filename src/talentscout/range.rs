//! # Range Constraint
//!
//! [`NumRange`] is the two-ended integer interval behind the followers, price,
//! and age dimensions. Its fields are private: every way of producing a range
//! goes through a constructor or a clamping setter, so `min <= max` holds for
//! every value that exists.
//!
//! ## Clamp on Write
//!
//! | Edit | Result |
//! |------|--------|
//! | `set_min(v)` | `min = min(v, max)` |
//! | `set_max(v)` | `max = max(v, min)` |
//! | `new(a, b)` | `[min(a, b), max(a, b)]` |
//!
//! Inputs are only clamped against the sibling bound. The slider bounds a UI
//! draws ([`SliderBounds`]) are advisory and never enforced here.
//!
//! ## Display
//!
//! [`RangeFormat`] turns a stored value into a label ("1.6k", "$50"). It is a
//! pure function of the value and never feeds back into the stored numbers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive integer interval with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct NumRange {
    min: i64,
    max: i64,
}

#[derive(Deserialize)]
struct RawRange {
    min: i64,
    max: i64,
}

impl TryFrom<RawRange> for NumRange {
    type Error = String;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        if raw.min > raw.max {
            return Err(format!("range min {} exceeds max {}", raw.min, raw.max));
        }
        Ok(NumRange::new(raw.min, raw.max))
    }
}

impl NumRange {
    /// Build a range from two endpoints in either order.
    pub const fn new(a: i64, b: i64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    pub const fn min(&self) -> i64 {
        self.min
    }

    pub const fn max(&self) -> i64 {
        self.max
    }

    /// New range with the lower bound moved to `v`, clamped to the current max.
    pub fn with_min(self, v: i64) -> Self {
        Self {
            min: v.min(self.max),
            max: self.max,
        }
    }

    /// New range with the upper bound moved to `v`, clamped to the current min.
    pub fn with_max(self, v: i64) -> Self {
        Self {
            min: self.min,
            max: v.max(self.min),
        }
    }

    pub fn set_min(&mut self, v: i64) {
        *self = self.with_min(v);
    }

    pub fn set_max(&mut self, v: i64) {
        *self = self.with_max(v);
    }

    /// Inclusive at both ends.
    pub fn contains(&self, v: i64) -> bool {
        self.min <= v && v <= self.max
    }

    /// `contains` for unsigned record fields; values beyond `i64::MAX` saturate.
    pub fn contains_u64(&self, v: u64) -> bool {
        self.contains(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl fmt::Display for NumRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}

/// UI hint for where a slider for this range starts and ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderBounds {
    pub lo: i64,
    pub hi: i64,
}

impl SliderBounds {
    pub const fn new(lo: i64, hi: i64) -> Self {
        Self { lo, hi }
    }
}

/// Display transform for range values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeFormat {
    /// `42`
    Plain,
    /// `1.6k`, `4.0m`
    Compact,
    /// `$50`
    Currency(&'static str),
}

impl RangeFormat {
    pub fn format(&self, v: i64) -> String {
        match self {
            RangeFormat::Plain => v.to_string(),
            RangeFormat::Compact => compact(v),
            RangeFormat::Currency(symbol) => format!("{}{}", symbol, v),
        }
    }

    /// `"<min> - <max>"` using this format for both ends.
    pub fn format_range(&self, range: &NumRange) -> String {
        format!("{} - {}", self.format(range.min()), self.format(range.max()))
    }
}

fn compact(v: i64) -> String {
    let magnitude = v.unsigned_abs();
    if magnitude >= 1_000_000 {
        format!("{:.1}m", v as f64 / 1_000_000.0)
    } else if magnitude >= 1_000 {
        format!("{:.1}k", v as f64 / 1_000.0)
    } else {
        v.to_string()
    }
}
