//! The full filter state and its defaults.
//!
//! [`FilterState`] has one typed field per [`Dimension`]. Generic code reaches
//! a field through the dispatch methods here (`get`, `set`, `labels_mut`,
//! `range_mut`, `copy_from`) keyed by the enumeration, never by string.
//!
//! ## Defaults and open values
//!
//! Two distinct states matter:
//!
//! | Constructor | Meaning |
//! |-------------|---------|
//! | [`default_filters`] | what a fresh session starts with, and what clear / Clear All write back |
//! | [`FilterState::unconstrained`] | every dimension open, the predicate accepts everything |
//!
//! They differ: the default followers and price ranges are active
//! constraints, while the default age range is already open.

use super::dimension::{Dimension, DimensionKind};
use super::value::{DimensionValue, Gender, LabelSet};
use crate::error::{Result, ScoutError};
use crate::range::NumRange;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FOLLOWERS: NumRange = NumRange::new(0, 1_000_000);
pub const DEFAULT_PRICE: NumRange = NumRange::new(50, 3000);
pub const DEFAULT_AGE: NumRange = NumRange::new(0, 100);

pub const OPEN_FOLLOWERS: NumRange = NumRange::new(0, i64::MAX);
pub const OPEN_PRICE: NumRange = NumRange::new(0, i64::MAX);
pub const OPEN_AGE: NumRange = NumRange::new(0, 100);

/// The single default state. Only `gender` varies by session, see
/// [`default_filters`].
pub const DEFAULT_FILTERS: FilterState = FilterState {
    platform: LabelSet::new(),
    category: LabelSet::new(),
    content_type: LabelSet::new(),
    followers: DEFAULT_FOLLOWERS,
    country: LabelSet::new(),
    city: String::new(),
    price: DEFAULT_PRICE,
    gender: Gender::Male,
    age: DEFAULT_AGE,
    ethnicity: LabelSet::new(),
    language: LabelSet::new(),
};

/// Default state seeded with the session gender.
pub fn default_filters(seed: Gender) -> FilterState {
    FilterState {
        gender: seed,
        ..DEFAULT_FILTERS
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub platform: LabelSet,
    pub category: LabelSet,
    pub content_type: LabelSet,
    pub followers: NumRange,
    pub country: LabelSet,
    pub city: String,
    pub price: NumRange,
    pub gender: Gender,
    pub age: NumRange,
    pub ethnicity: LabelSet,
    pub language: LabelSet,
}

impl Default for FilterState {
    fn default() -> Self {
        DEFAULT_FILTERS
    }
}

impl FilterState {
    /// Every dimension at its "no constraint" value and gender unset.
    pub fn unconstrained() -> Self {
        FilterState {
            followers: OPEN_FOLLOWERS,
            price: OPEN_PRICE,
            age: OPEN_AGE,
            gender: Gender::Unset,
            ..DEFAULT_FILTERS
        }
    }

    /// The value of `dimension` that imposes no restriction.
    pub fn open_value(dimension: Dimension) -> DimensionValue {
        Self::unconstrained().get(dimension)
    }

    pub fn get(&self, dimension: Dimension) -> DimensionValue {
        match dimension {
            Dimension::Platform => DimensionValue::Labels(self.platform.clone()),
            Dimension::Category => DimensionValue::Labels(self.category.clone()),
            Dimension::ContentType => DimensionValue::Labels(self.content_type.clone()),
            Dimension::Followers => DimensionValue::Range(self.followers),
            Dimension::Country => DimensionValue::Labels(self.country.clone()),
            Dimension::City => DimensionValue::Text(self.city.clone()),
            Dimension::Price => DimensionValue::Range(self.price),
            Dimension::Gender => DimensionValue::Gender(self.gender),
            Dimension::Age => DimensionValue::Range(self.age),
            Dimension::Ethnicity => DimensionValue::Labels(self.ethnicity.clone()),
            Dimension::Language => DimensionValue::Labels(self.language.clone()),
        }
    }

    /// Write `value` into `dimension`. A value of the wrong kind is rejected
    /// and the state is left as it was.
    pub fn set(&mut self, dimension: Dimension, value: DimensionValue) -> Result<()> {
        match (dimension.kind(), value) {
            (DimensionKind::Labels, DimensionValue::Labels(set)) => {
                if let Some(slot) = self.labels_mut(dimension) {
                    *slot = set;
                }
                Ok(())
            }
            (DimensionKind::Range, DimensionValue::Range(range)) => {
                if let Some(slot) = self.range_mut(dimension) {
                    *slot = range;
                }
                Ok(())
            }
            (DimensionKind::Text, DimensionValue::Text(text)) => {
                self.city = text;
                Ok(())
            }
            (DimensionKind::Choice, DimensionValue::Gender(g)) => {
                self.gender = g;
                Ok(())
            }
            (kind, _) => Err(ScoutError::KindMismatch {
                dimension,
                expected: kind.describe(),
            }),
        }
    }

    pub fn labels(&self, dimension: Dimension) -> Option<&LabelSet> {
        match dimension {
            Dimension::Platform => Some(&self.platform),
            Dimension::Category => Some(&self.category),
            Dimension::ContentType => Some(&self.content_type),
            Dimension::Country => Some(&self.country),
            Dimension::Ethnicity => Some(&self.ethnicity),
            Dimension::Language => Some(&self.language),
            _ => None,
        }
    }

    pub fn labels_mut(&mut self, dimension: Dimension) -> Option<&mut LabelSet> {
        match dimension {
            Dimension::Platform => Some(&mut self.platform),
            Dimension::Category => Some(&mut self.category),
            Dimension::ContentType => Some(&mut self.content_type),
            Dimension::Country => Some(&mut self.country),
            Dimension::Ethnicity => Some(&mut self.ethnicity),
            Dimension::Language => Some(&mut self.language),
            _ => None,
        }
    }

    pub fn range(&self, dimension: Dimension) -> Option<NumRange> {
        match dimension {
            Dimension::Followers => Some(self.followers),
            Dimension::Price => Some(self.price),
            Dimension::Age => Some(self.age),
            _ => None,
        }
    }

    pub fn range_mut(&mut self, dimension: Dimension) -> Option<&mut NumRange> {
        match dimension {
            Dimension::Followers => Some(&mut self.followers),
            Dimension::Price => Some(&mut self.price),
            Dimension::Age => Some(&mut self.age),
            _ => None,
        }
    }

    /// Copy one dimension's value over from `other`.
    pub fn copy_from(&mut self, other: &FilterState, dimension: Dimension) {
        match dimension.kind() {
            DimensionKind::Labels => {
                if let (Some(dst), Some(src)) = (self.labels_mut(dimension), other.labels(dimension))
                {
                    dst.clone_from(src);
                }
            }
            DimensionKind::Range => {
                if let (Some(dst), Some(src)) = (self.range_mut(dimension), other.range(dimension)) {
                    *dst = src;
                }
            }
            DimensionKind::Text => self.city.clone_from(&other.city),
            DimensionKind::Choice => self.gender = other.gender,
        }
    }

    /// Whether `self` and `other` agree on `dimension`.
    pub fn dimension_eq(&self, other: &FilterState, dimension: Dimension) -> bool {
        match dimension {
            Dimension::Platform => self.platform == other.platform,
            Dimension::Category => self.category == other.category,
            Dimension::ContentType => self.content_type == other.content_type,
            Dimension::Followers => ranges_eq(self.followers, other.followers),
            Dimension::Country => self.country == other.country,
            Dimension::City => self.city == other.city,
            Dimension::Price => ranges_eq(self.price, other.price),
            Dimension::Gender => self.gender == other.gender,
            Dimension::Age => ranges_eq(self.age, other.age),
            Dimension::Ethnicity => self.ethnicity == other.ethnicity,
            Dimension::Language => self.language == other.language,
        }
    }

    /// Dimensions on which `self` and `other` differ, in dimension order.
    pub fn differing(&self, other: &FilterState) -> Vec<Dimension> {
        Dimension::ALL
            .iter()
            .copied()
            .filter(|d| !self.dimension_eq(other, *d))
            .collect()
    }
}

fn ranges_eq(a: NumRange, b: NumRange) -> bool {
    a.min() == b.min() && a.max() == b.max()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_table() {
        let s = default_filters(Gender::Female);
        assert!(s.platform.is_empty());
        assert_eq!(s.followers, NumRange::new(0, 1_000_000));
        assert_eq!(s.price, NumRange::new(50, 3000));
        assert_eq!(s.age, NumRange::new(0, 100));
        assert_eq!(s.city, "");
        assert_eq!(s.gender, Gender::Female);
    }

    #[test]
    fn unconstrained_differs_from_defaults() {
        let open = FilterState::unconstrained();
        let defaults = default_filters(Gender::Male);
        assert_eq!(
            open.differing(&defaults),
            vec![Dimension::Followers, Dimension::Price, Dimension::Gender]
        );
    }

    #[test]
    fn get_and_set_by_dimension() {
        let mut s = FilterState::default();
        let countries: LabelSet = ["Canada"].into_iter().collect();
        s.set(Dimension::Country, DimensionValue::Labels(countries.clone()))
            .unwrap();
        assert_eq!(s.get(Dimension::Country), DimensionValue::Labels(countries));

        s.set(
            Dimension::Age,
            DimensionValue::Range(NumRange::new(18, 35)),
        )
        .unwrap();
        assert_eq!(s.age, NumRange::new(18, 35));

        s.set(Dimension::City, DimensionValue::Text("Paris".into()))
            .unwrap();
        assert_eq!(s.get(Dimension::City), DimensionValue::Text("Paris".into()));
    }

    #[test]
    fn set_rejects_wrong_kind() {
        let mut s = FilterState::default();
        let before = s.clone();
        let err = s
            .set(Dimension::Followers, DimensionValue::Text("lots".into()))
            .unwrap_err();
        assert!(matches!(
            err,
            ScoutError::KindMismatch {
                dimension: Dimension::Followers,
                expected: "range"
            }
        ));
        assert_eq!(s, before);
    }

    #[test]
    fn copy_from_touches_one_dimension() {
        let mut a = FilterState::default();
        let mut b = FilterState::default();
        b.platform.insert("TikTok");
        b.city = "Austin".into();

        a.copy_from(&b, Dimension::Platform);
        assert!(a.dimension_eq(&b, Dimension::Platform));
        assert!(!a.dimension_eq(&b, Dimension::City));
    }

    #[test]
    fn every_dimension_has_an_accessor() {
        let s = FilterState::unconstrained();
        for d in Dimension::ALL {
            assert_eq!(s.get(*d).kind(), d.kind());
        }
    }

    #[test]
    fn open_values() {
        assert_eq!(
            FilterState::open_value(Dimension::Followers),
            DimensionValue::Range(NumRange::new(0, i64::MAX))
        );
        assert_eq!(
            FilterState::open_value(Dimension::Gender),
            DimensionValue::Gender(Gender::Unset)
        );
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(FilterState::default()).unwrap();
        assert!(json.get("contentType").is_some());
        assert_eq!(json["price"]["min"], 50);
    }
}
