//! Runtime values for filter dimensions.
//!
//! [`DimensionValue`] is the tagged form a dimension's value takes when it is
//! handled generically: read out of a [`FilterState`](super::FilterState) by
//! dimension, compared for change detection, written back by a clear, or
//! parsed from text on the command line.

use super::dimension::{Dimension, DimensionKind};
use crate::error::{Result, ScoutError};
use crate::range::NumRange;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Selecting this label in a set dimension switches the dimension off.
pub const ANY: &str = "Any";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
    Other,
    Unset,
}

impl Gender {
    /// Seed gender from the inbound context parameter.
    ///
    /// A missing or blank parameter means male; anything that is not "male"
    /// or "female" (in any case) means other. The result is never `Unset`.
    pub fn from_context(param: Option<&str>) -> Gender {
        match param.map(str::trim).filter(|p| !p.is_empty()) {
            None => Gender::Male,
            Some(p) if p.eq_ignore_ascii_case("male") => Gender::Male,
            Some(p) if p.eq_ignore_ascii_case("female") => Gender::Female,
            Some(_) => Gender::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
            Gender::Other => "other",
            Gender::Unset => "unset",
        }
    }

    /// Capitalized form used in headings ("Male Influencers").
    pub fn title(self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::Other => "Other",
            Gender::Unset => "",
        }
    }

    /// The choices an editor offers.
    pub const CHOICES: &'static [Gender] = &[Gender::Female, Gender::Male, Gender::Other];
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "female" | "f" => Ok(Gender::Female),
            "male" | "m" => Ok(Gender::Male),
            "other" | "o" => Ok(Gender::Other),
            "unset" | "" => Ok(Gender::Unset),
            other => Err(ScoutError::Parse(format!("unknown gender: {}", other))),
        }
    }
}

/// A duplicate-free, order-insensitive set of facet labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelSet(BTreeSet<String>);

impl LabelSet {
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Returns `false` if the label was already present.
    pub fn insert(&mut self, label: impl Into<String>) -> bool {
        self.0.insert(label.into())
    }

    pub fn remove(&mut self, label: &str) -> bool {
        self.0.remove(label)
    }

    /// Add the label if absent, remove it if present. Returns whether the
    /// label is selected afterwards.
    pub fn toggle(&mut self, label: &str) -> bool {
        if self.0.remove(label) {
            false
        } else {
            self.0.insert(label.to_string());
            true
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Whether the "Any" sentinel is selected.
    pub fn has_any(&self) -> bool {
        self.0.contains(ANY)
    }
}

impl<S: Into<String>> FromIterator<S> for LabelSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("(none)");
        }
        let joined: Vec<&str> = self.iter().collect();
        f.write_str(&joined.join(", "))
    }
}

/// A dimension's value in tagged form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimensionValue {
    Labels(LabelSet),
    Range(NumRange),
    Text(String),
    Gender(Gender),
}

impl DimensionValue {
    pub fn kind(&self) -> DimensionKind {
        match self {
            DimensionValue::Labels(_) => DimensionKind::Labels,
            DimensionValue::Range(_) => DimensionKind::Range,
            DimensionValue::Text(_) => DimensionKind::Text,
            DimensionValue::Gender(_) => DimensionKind::Choice,
        }
    }

    /// Parse command-line text into a value for `dimension`.
    ///
    /// - label sets: comma separated, `""` is the empty set
    /// - ranges: `A..B` or `A:B`, numbers may carry a `k` or `m` suffix
    /// - city: taken verbatim
    /// - gender: `female`, `male` or `other`
    pub fn parse(dimension: Dimension, text: &str) -> Result<DimensionValue> {
        match dimension.kind() {
            DimensionKind::Labels => Ok(DimensionValue::Labels(
                text.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .collect(),
            )),
            DimensionKind::Range => parse_range(text).map(DimensionValue::Range),
            DimensionKind::Text => Ok(DimensionValue::Text(text.to_string())),
            DimensionKind::Choice => text.parse().map(DimensionValue::Gender),
        }
    }

    /// Human-readable rendering, using the dimension's range format.
    pub fn describe(&self, dimension: Dimension) -> String {
        match self {
            DimensionValue::Labels(set) => set.to_string(),
            DimensionValue::Range(range) => match dimension.spec().format {
                Some(format) => format.format_range(range),
                None => range.to_string(),
            },
            DimensionValue::Text(text) if text.is_empty() => "(any)".to_string(),
            DimensionValue::Text(text) => format!("\"{}\"", text),
            DimensionValue::Gender(g) => g.to_string(),
        }
    }
}

/// Parse `A..B` or `A:B`.
pub fn parse_range(text: &str) -> Result<NumRange> {
    let (lo, hi) = text
        .split_once("..")
        .or_else(|| text.split_once(':'))
        .ok_or_else(|| ScoutError::Parse(format!("expected MIN..MAX, got {:?}", text)))?;
    Ok(NumRange::new(parse_number(lo)?, parse_number(hi)?))
}

/// Parse an integer with an optional `k` (thousand) or `m` (million) suffix.
pub fn parse_number(text: &str) -> Result<i64> {
    let t = text.trim().replace('_', "");
    let (digits, scale) = match t.chars().last() {
        Some('k') | Some('K') => (&t[..t.len() - 1], 1_000.0),
        Some('m') | Some('M') => (&t[..t.len() - 1], 1_000_000.0),
        _ => (t.as_str(), 1.0),
    };
    if scale == 1.0 {
        return digits
            .parse::<i64>()
            .map_err(|_| ScoutError::Parse(format!("not a number: {:?}", text)));
    }
    let base: f64 = digits
        .parse()
        .map_err(|_| ScoutError::Parse(format!("not a number: {:?}", text)))?;
    Ok((base * scale).round() as i64)
}
