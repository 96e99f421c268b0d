//! # Result Set
//!
//! [`filter`] is the pure application of a predicate to a catalog: matches in
//! catalog order, nothing re-ranked, the catalog untouched. Zero matches is a
//! normal outcome.
//!
//! [`ResultView`] memoizes that computation keyed by
//! `(catalog id, committed state, compile options)` and slices the matches
//! into fixed-size pages for a "next page" affordance.

use crate::catalog::{Catalog, CatalogId};
use crate::filter::{FilterListener, FilterState, Gender};
use crate::model::Influencer;
use crate::predicate::{compile, CompileOptions, Predicate};

pub const DEFAULT_PAGE_SIZE: usize = 12;

pub fn filter<'a>(catalog: &'a Catalog, predicate: &Predicate) -> Vec<&'a Influencer> {
    catalog
        .records()
        .iter()
        .filter(|r| predicate.matches(r))
        .collect()
}

/// "2 Male Influencers", "1 Female Influencer", "0 Influencers".
pub fn header(count: usize, gender: Gender) -> String {
    let noun = if count == 1 { "Influencer" } else { "Influencers" };
    match gender {
        Gender::Unset => format!("{} {}", count, noun),
        g => format!("{} {} {}", count, g.title(), noun),
    }
}

type MemoKey = (CatalogId, FilterState, CompileOptions);

/// One page of matches.
#[derive(Debug)]
pub struct Page<'a> {
    /// Zero-based.
    pub index: usize,
    pub page_count: usize,
    pub total: usize,
    pub records: Vec<&'a Influencer>,
}

#[derive(Debug)]
pub struct ResultView {
    page_size: usize,
    key: Option<MemoKey>,
    /// Indexes into the catalog's records.
    matches: Vec<usize>,
    recomputes: u64,
}

impl Default for ResultView {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ResultView {
    /// A page size of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            key: None,
            matches: Vec::new(),
            recomputes: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// How many times the matches were actually recomputed.
    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }

    /// Bring the memo up to date. Returns `true` if it had to recompute.
    pub fn refresh(
        &mut self,
        catalog: &Catalog,
        committed: &FilterState,
        options: CompileOptions,
    ) -> bool {
        let fresh = match &self.key {
            Some((id, state, opts)) => {
                *id == catalog.id() && state == committed && *opts == options
            }
            None => false,
        };
        if fresh {
            return false;
        }

        let predicate = compile(committed, options);
        self.matches = catalog
            .records()
            .iter()
            .enumerate()
            .filter(|(_, r)| predicate.matches(r))
            .map(|(i, _)| i)
            .collect();
        self.key = Some((catalog.id(), committed.clone(), options));
        self.recomputes += 1;
        tracing::debug!(
            matches = self.matches.len(),
            active = ?predicate.active_dimensions(),
            "recomputed result set"
        );
        true
    }

    /// Match count as of the last refresh.
    pub fn total(&self) -> usize {
        self.matches.len()
    }

    pub fn page_count(&self) -> usize {
        self.matches.len().div_ceil(self.page_size).max(1)
    }

    /// All matches, in catalog order.
    pub fn records<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Influencer> {
        self.matches
            .iter()
            .filter_map(|i| catalog.records().get(*i))
            .collect()
    }

    /// The requested page. An index past the end wraps to page 0.
    pub fn page<'a>(&self, catalog: &'a Catalog, index: usize) -> Page<'a> {
        let page_count = self.page_count();
        let index = if index < page_count { index } else { 0 };
        let records = self
            .matches
            .iter()
            .skip(index * self.page_size)
            .take(self.page_size)
            .filter_map(|i| catalog.records().get(*i))
            .collect();
        Page {
            index,
            page_count,
            total: self.total(),
            records,
        }
    }
}

/// The page the user is looking at. Any committed change sends it back to
/// the first page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageCursor {
    pub page: usize,
    /// Number of committed changes seen.
    pub revision: u64,
}

impl PageCursor {
    /// Advance one page, wrapping to 0 after the last.
    pub fn advance(&mut self, page_count: usize) -> usize {
        self.page = if self.page + 1 < page_count {
            self.page + 1
        } else {
            0
        };
        self.page
    }
}

impl FilterListener for PageCursor {
    fn on_filters_change(&mut self, _committed: &FilterState) {
        self.page = 0;
        self.revision += 1;
    }

    fn on_clear_all(&mut self) {
        self.page = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::default_filters;
    use crate::range::NumRange;
    use crate::test_utils::record;

    fn three_record_catalog() -> Catalog {
        Catalog::new(vec![
            record("1").followers(1_600).build(),
            record("2").followers(560_000).build(),
            record("3").followers(4_000_000).build(),
        ])
        .unwrap()
    }

    #[test]
    fn follower_scenario_keeps_first_two_in_order() {
        let catalog = three_record_catalog();
        let mut state = FilterState::unconstrained();
        state.followers = NumRange::new(0, 1_000_000);
        let p = compile(&state, CompileOptions::default());
        let ids: Vec<_> = filter(&catalog, &p).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn zero_matches_is_fine() {
        let catalog = three_record_catalog();
        let mut state = FilterState::unconstrained();
        state.city = "Atlantis".into();
        let p = compile(&state, CompileOptions::default());
        assert!(filter(&catalog, &p).is_empty());
    }

    #[test]
    fn view_memoizes_on_state_and_catalog() {
        let catalog = three_record_catalog();
        let mut view = ResultView::new(2);
        let state = FilterState::unconstrained();

        assert!(view.refresh(&catalog, &state, CompileOptions::default()));
        assert!(!view.refresh(&catalog, &state, CompileOptions::default()));
        assert_eq!(view.recomputes(), 1);

        let other = Catalog::new(catalog.records().to_vec()).unwrap();
        assert!(view.refresh(&other, &state, CompileOptions::default()));

        let mut narrowed = state.clone();
        narrowed.followers = NumRange::new(0, 10_000);
        assert!(view.refresh(&other, &narrowed, CompileOptions::default()));
        assert_eq!(view.total(), 1);
        assert_eq!(view.recomputes(), 3);
    }

    #[test]
    fn pages_wrap_past_the_end() {
        let catalog = three_record_catalog();
        let mut view = ResultView::new(2);
        view.refresh(&catalog, &FilterState::unconstrained(), CompileOptions::default());

        assert_eq!(view.page_count(), 2);
        let first = view.page(&catalog, 0);
        assert_eq!(first.records.len(), 2);
        let second = view.page(&catalog, 1);
        assert_eq!(second.records[0].id, "3");
        let wrapped = view.page(&catalog, 2);
        assert_eq!(wrapped.index, 0);
    }

    #[test]
    fn empty_result_has_one_empty_page() {
        let catalog = Catalog::new(vec![]).unwrap();
        let mut view = ResultView::default();
        view.refresh(&catalog, &default_filters(Gender::Male), CompileOptions::default());
        let page = view.page(&catalog, 0);
        assert_eq!(page.page_count, 1);
        assert!(page.records.is_empty());
    }

    #[test]
    fn cursor_wraps_and_resets() {
        let mut cursor = PageCursor::default();
        assert_eq!(cursor.advance(3), 1);
        assert_eq!(cursor.advance(3), 2);
        assert_eq!(cursor.advance(3), 0);
        cursor.advance(3);
        cursor.on_filters_change(&FilterState::default());
        assert_eq!(cursor.page, 0);
        assert_eq!(cursor.revision, 1);
    }

    #[test]
    fn header_wording() {
        assert_eq!(header(2, Gender::Male), "2 Male Influencers");
        assert_eq!(header(1, Gender::Female), "1 Female Influencer");
        assert_eq!(header(0, Gender::Unset), "0 Influencers");
    }
}
