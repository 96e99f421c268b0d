//! Property-based tests for the filter engine's invariants.

use proptest::prelude::*;
use serde_json::json;

use talentscout::catalog::Catalog;
use talentscout::filter::{
    default_filters, ConfirmPort, Dimension, FilterListener, FilterState, Gender,
    StagedFilterStore,
};
use talentscout::model::Influencer;
use talentscout::predicate::{compile, CompileOptions};
use talentscout::range::NumRange;
use talentscout::results;

#[derive(Debug, Clone)]
enum Edit {
    Toggle(Dimension, &'static str),
    Min(Dimension, i64),
    Max(Dimension, i64),
    City(String),
    Gender(Gender),
}

fn arb_label_dimension() -> impl Strategy<Value = Dimension> {
    prop::sample::select(vec![
        Dimension::Platform,
        Dimension::Category,
        Dimension::ContentType,
        Dimension::Country,
        Dimension::Ethnicity,
        Dimension::Language,
    ])
}

fn arb_range_dimension() -> impl Strategy<Value = Dimension> {
    prop::sample::select(vec![Dimension::Followers, Dimension::Price, Dimension::Age])
}

fn arb_label() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "Any",
        "Instagram",
        "TikTok",
        "YouTube",
        "United States",
        "India",
        "Gaming",
        "Lifestyle",
        "Reel",
        "Hindi",
        "Asian",
    ])
}

fn arb_gender() -> impl Strategy<Value = Gender> {
    prop::sample::select(vec![
        Gender::Female,
        Gender::Male,
        Gender::Other,
        Gender::Unset,
    ])
}

fn arb_edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (arb_label_dimension(), arb_label()).prop_map(|(d, l)| Edit::Toggle(d, l)),
        (arb_range_dimension(), -1_000i64..5_000_000).prop_map(|(d, v)| Edit::Min(d, v)),
        (arb_range_dimension(), -1_000i64..5_000_000).prop_map(|(d, v)| Edit::Max(d, v)),
        "[a-zA-Z ]{0,5}".prop_map(Edit::City),
        arb_gender().prop_map(Edit::Gender),
    ]
}

fn apply<L: FilterListener>(store: &mut StagedFilterStore<L>, edit: &Edit) {
    match edit {
        Edit::Toggle(d, label) => {
            store.toggle_label(*d, label).unwrap();
        }
        Edit::Min(d, v) => store.set_range_min(*d, *v).unwrap(),
        Edit::Max(d, v) => store.set_range_max(*d, *v).unwrap(),
        Edit::City(text) => store.set_city(text.clone()),
        Edit::Gender(g) => store.set_gender(*g),
    }
}

/// A committed state reached by edits followed by saving everything.
fn arb_state() -> impl Strategy<Value = FilterState> {
    prop::collection::vec(arb_edit(), 0..12).prop_map(|edits| {
        let mut store = StagedFilterStore::new(Gender::Male);
        for edit in &edits {
            apply(&mut store, edit);
        }
        for d in Dimension::ALL {
            store.commit(*d);
        }
        store.committed().clone()
    })
}

fn arb_record() -> impl Strategy<Value = serde_json::Value> {
    (
        prop::sample::select(vec!["instagram", "tiktok", "youtube", "ugc"]),
        0u64..5_000_000,
        0u64..5_000,
        prop::sample::select(vec!["US", "IN", "GB"]),
        prop::sample::select(vec!["Los Angeles", "Kanpur", "London", "Denver"]),
        prop::option::of(13u32..80),
        prop::option::of(arb_gender()),
        prop::collection::vec(prop::sample::select(vec!["Gaming", "Lifestyle"]), 0..2),
        prop::collection::vec(prop::sample::select(vec!["en", "hi"]), 0..2),
    )
        .prop_map(
            |(platform, followers, price, country, city, age, gender, categories, languages)| {
                json!({
                    "id": "",
                    "name": "Creator",
                    "platform": platform,
                    "followers": followers,
                    "rating": 4.0,
                    "price_usd": price,
                    "location": {"city": city, "region_code": "", "country_code": country},
                    "age": age,
                    "gender": gender,
                    "categories": categories,
                    "languages": languages,
                })
            },
        )
}

fn arb_catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(arb_record(), 0..25).prop_map(|values| {
        let records: Vec<Influencer> = values
            .into_iter()
            .enumerate()
            .map(|(i, mut v)| {
                v["id"] = json!(i.to_string());
                serde_json::from_value(v).unwrap()
            })
            .collect();
        Catalog::new(records).unwrap()
    })
}

#[derive(Default)]
struct Counting {
    changes: usize,
    clear_alls: usize,
}

impl FilterListener for Counting {
    fn on_filters_change(&mut self, _committed: &FilterState) {
        self.changes += 1;
    }

    fn on_clear_all(&mut self) {
        self.clear_alls += 1;
    }
}

proptest! {
    #[test]
    fn range_min_never_exceeds_max(
        start in (any::<i64>(), any::<i64>()),
        ops in prop::collection::vec((any::<bool>(), any::<i64>()), 0..40),
    ) {
        let mut range = NumRange::new(start.0, start.1);
        prop_assert!(range.min() <= range.max());
        for (is_min, v) in ops {
            if is_min {
                range.set_min(v);
            } else {
                range.set_max(v);
            }
            prop_assert!(range.min() <= range.max());
        }
    }

    #[test]
    fn commit_touches_only_its_dimension(
        edits in prop::collection::vec(arb_edit(), 0..20),
        target in prop::sample::select(Dimension::ALL.to_vec()),
    ) {
        let mut store = StagedFilterStore::new(Gender::Male);
        for edit in &edits {
            apply(&mut store, edit);
        }
        let before = store.committed().clone();
        store.commit(target);

        prop_assert_eq!(store.committed().get(target), store.pending().get(target));
        prop_assert!(!store.has_changes(target));
        for d in Dimension::ALL.iter().filter(|d| **d != target) {
            prop_assert_eq!(store.committed().get(*d), before.get(*d));
        }
    }

    #[test]
    fn clear_is_immediate(
        edits in prop::collection::vec(arb_edit(), 0..20),
        target in prop::sample::select(Dimension::ALL.to_vec()),
        seed in prop::sample::select(vec![Gender::Female, Gender::Male, Gender::Other]),
    ) {
        let mut store = StagedFilterStore::new(seed);
        for (i, edit) in edits.iter().enumerate() {
            apply(&mut store, edit);
            if i % 3 == 0 {
                for d in Dimension::ALL {
                    store.commit(*d);
                }
            }
        }
        store.clear(target);

        let expected = default_filters(seed).get(target);
        prop_assert_eq!(store.pending().get(target), expected.clone());
        prop_assert_eq!(store.committed().get(target), expected);
        prop_assert!(!store.has_changes(target));
    }

    #[test]
    fn compile_is_idempotent(
        state in arb_state(),
        catalog in arb_catalog(),
        strict in any::<bool>(),
    ) {
        let options = CompileOptions { strict_gender: strict };
        let first = compile(&state, options);
        let second = compile(&state, options);
        for record in catalog.records() {
            prop_assert_eq!(first.matches(record), second.matches(record));
        }
    }

    #[test]
    fn open_state_keeps_whole_catalog_in_order(
        catalog in arb_catalog(),
        strict in any::<bool>(),
    ) {
        let predicate = compile(
            &FilterState::unconstrained(),
            CompileOptions { strict_gender: strict },
        );
        let ids: Vec<&str> = results::filter(&catalog, &predicate)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        let all: Vec<&str> = catalog.records().iter().map(|r| r.id.as_str()).collect();
        prop_assert_eq!(ids, all);
    }

    #[test]
    fn declined_reset_changes_nothing(edits in prop::collection::vec(arb_edit(), 0..20)) {
        let mut store = StagedFilterStore::with_listener(Gender::Male, Counting::default());
        for (i, edit) in edits.iter().enumerate() {
            apply(&mut store, edit);
            if i % 2 == 0 {
                for d in Dimension::ALL {
                    store.commit(*d);
                }
            }
        }
        let committed = store.committed().clone();
        let pending = store.pending().clone();
        let notified = store.listener().changes;

        let mut decline = |_: &str| false;
        prop_assert!(!store.reset_all(&mut decline));

        prop_assert_eq!(store.committed(), &committed);
        prop_assert_eq!(store.pending(), &pending);
        prop_assert_eq!(store.listener().changes, notified);
        prop_assert_eq!(store.listener().clear_alls, 0);
    }
}

#[test]
fn accepted_reset_restores_defaults_and_notifies_once() {
    let mut store = StagedFilterStore::with_listener(Gender::Female, Counting::default());
    store.set_city("Austin");
    store.commit(Dimension::City);
    store.set_range_max(Dimension::Price, 10).unwrap();

    struct Yes;
    impl ConfirmPort for Yes {
        fn confirm(&mut self, _message: &str) -> bool {
            true
        }
    }

    let before = store.listener().changes;
    assert!(store.reset_all(&mut Yes));
    assert_eq!(store.committed(), &default_filters(Gender::Female));
    assert_eq!(store.pending(), store.committed());
    assert_eq!(store.listener().changes, before + 1);
    assert_eq!(store.listener().clear_alls, 1);
}
