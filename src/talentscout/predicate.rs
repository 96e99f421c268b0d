//! # Predicate Compiler
//!
//! [`compile`] turns a committed [`FilterState`] into a [`Predicate`]: a
//! conjunction of one [`Clause`] per *active* dimension. A record is
//! accepted iff every clause accepts it.
//!
//! ## When a dimension is active
//!
//! | Kind | Inactive when |
//! |------|---------------|
//! | label set | empty, or contains the "Any" sentinel |
//! | range | equal to the dimension's open value |
//! | city | blank after trimming |
//! | gender | always, unless `strict_gender` is set and gender is not `unset` |
//!
//! Label sets are translated to catalog codes here (and only here) through
//! [`crate::codes`]. Within a set the test is membership (OR); across
//! dimensions it is AND.
//!
//! A record that lacks the attribute an active clause looks at is rejected.
//!
//! The compiler keeps no state: compiling the same `FilterState` twice gives
//! predicates that agree on every record.

use crate::codes;
use crate::filter::{Dimension, DimensionKind, FilterState, Gender, LabelSet};
use crate::model::Influencer;
use crate::range::NumRange;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CompileOptions {
    /// Make gender an exact-match clause instead of advisory.
    pub strict_gender: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// The record's code(s) for `dimension` must intersect `codes`.
    Codes {
        dimension: Dimension,
        codes: BTreeSet<String>,
    },
    /// The record's value for `dimension` must lie in `range`.
    Range { dimension: Dimension, range: NumRange },
    /// Lowercased needle searched in the lowercased city.
    CityContains(String),
    Gender(Gender),
}

impl Clause {
    pub fn dimension(&self) -> Dimension {
        match self {
            Clause::Codes { dimension, .. } | Clause::Range { dimension, .. } => *dimension,
            Clause::CityContains(_) => Dimension::City,
            Clause::Gender(_) => Dimension::Gender,
        }
    }

    pub fn accepts(&self, record: &Influencer) -> bool {
        match self {
            Clause::Codes { dimension, codes } => record_codes(record, *dimension)
                .iter()
                .any(|code| codes.contains(*code)),
            Clause::Range { dimension, range } => match record_number(record, *dimension) {
                Some(v) => range.contains_u64(v),
                None => false,
            },
            Clause::CityContains(needle) => {
                record.location.city.to_lowercase().contains(needle.as_str())
            }
            Clause::Gender(g) => record.gender == Some(*g),
        }
    }
}

fn record_codes(record: &Influencer, dimension: Dimension) -> Vec<&str> {
    match dimension {
        Dimension::Platform => vec![record.platform.as_str()],
        Dimension::Country => vec![record.location.country_code.as_str()],
        Dimension::Category => record.categories.iter().map(String::as_str).collect(),
        Dimension::ContentType => record.content_types.iter().map(String::as_str).collect(),
        Dimension::Ethnicity => record.ethnicity.iter().map(String::as_str).collect(),
        Dimension::Language => record.languages.iter().map(String::as_str).collect(),
        _ => Vec::new(),
    }
}

fn record_number(record: &Influencer, dimension: Dimension) -> Option<u64> {
    match dimension {
        Dimension::Followers => Some(record.followers),
        Dimension::Price => Some(record.price_usd),
        Dimension::Age => record.age.map(u64::from),
        _ => None,
    }
}

/// A compiled filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicate {
    clauses: Vec<Clause>,
}

impl Predicate {
    pub fn matches(&self, record: &Influencer) -> bool {
        self.clauses.iter().all(|c| c.accepts(record))
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// The dimensions that contribute a clause, in dimension order.
    pub fn active_dimensions(&self) -> Vec<Dimension> {
        self.clauses.iter().map(Clause::dimension).collect()
    }

    pub fn is_open(&self) -> bool {
        self.clauses.is_empty()
    }
}

pub fn compile(state: &FilterState, options: CompileOptions) -> Predicate {
    let open = FilterState::unconstrained();
    let mut clauses = Vec::new();

    for dimension in Dimension::ALL.iter().copied() {
        let clause = match dimension.kind() {
            DimensionKind::Labels => state
                .labels(dimension)
                .and_then(|set| codes_clause(dimension, set)),
            DimensionKind::Range => match (state.range(dimension), open.range(dimension)) {
                (Some(range), Some(open_range)) if range != open_range => {
                    Some(Clause::Range { dimension, range })
                }
                _ => None,
            },
            DimensionKind::Text => {
                let needle = state.city.trim();
                if needle.is_empty() {
                    None
                } else {
                    Some(Clause::CityContains(needle.to_lowercase()))
                }
            }
            DimensionKind::Choice => {
                if options.strict_gender && state.gender != Gender::Unset {
                    Some(Clause::Gender(state.gender))
                } else {
                    None
                }
            }
        };
        clauses.extend(clause);
    }

    let predicate = Predicate { clauses };
    tracing::debug!(
        clauses = predicate.clauses.len(),
        active = ?predicate.active_dimensions(),
        "compiled predicate"
    );
    predicate
}

fn codes_clause(dimension: Dimension, labels: &LabelSet) -> Option<Clause> {
    if labels.is_empty() || labels.has_any() {
        return None;
    }
    let map = codes::for_dimension(dimension)?;
    let codes = labels.iter().map(|l| map.to_code(l).to_string()).collect();
    Some(Clause::Codes { dimension, codes })
}
