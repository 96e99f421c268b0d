use crate::commands::{CmdMessage, CmdResult, PageInfo, Session};
use crate::error::Result;
use crate::results::header;

/// List the current page of results. `page` (zero-based) moves the cursor
/// first; a page past the end wraps to the first.
pub fn run(session: &mut Session, page: Option<usize>) -> Result<CmdResult> {
    let Session {
        catalog,
        store,
        view,
        options,
        ..
    } = session;

    view.refresh(catalog, store.committed(), *options);
    if let Some(p) = page {
        store.listener_mut().page = p;
    }
    let shown = view.page(catalog, store.listener().page);
    store.listener_mut().page = shown.index;

    let mut result = CmdResult::default()
        .with_header(header(shown.total, store.committed().gender))
        .with_page(PageInfo {
            index: shown.index,
            page_count: shown.page_count,
            total: shown.total,
        })
        .with_listed(shown.records.into_iter().cloned().collect());

    if shown.total == 0 {
        result.add_message(CmdMessage::info("No influencers match the current filters."));
    }
    if store.is_dirty() {
        let names: Vec<String> = store
            .dirty_dimensions()
            .iter()
            .map(|d| d.to_string())
            .collect();
        result.add_message(CmdMessage::warning(format!(
            "Unsaved changes: {}",
            names.join(", ")
        )));
    }
    Ok(result)
}

/// Advance to the next page and list it.
pub fn next(session: &mut Session) -> Result<CmdResult> {
    session
        .view
        .refresh(&session.catalog, session.store.committed(), session.options);
    let page_count = session.view.page_count();
    session.store.listener_mut().advance(page_count);
    run(session, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::commands::edit::{self, EditOp};
    use crate::commands::save;
    use crate::config::ScoutConfig;
    use crate::filter::{Dimension, DimensionValue, Gender, Section};
    use crate::test_utils::record;

    fn names(result: &CmdResult) -> Vec<&str> {
        result.listed.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn default_filters_hide_big_and_pricey_creators() {
        let mut s = Session::with_catalog(Catalog::sample().unwrap(), Gender::Male);
        let res = run(&mut s, None).unwrap();
        // followers 0..1M and price 50..3000 drop Drex Lee, James Chen,
        // Chris Anderson, Tyler Wilson and Owen Taylor.
        assert_eq!(res.page.as_ref().unwrap().total, 15);
        assert_eq!(res.header.as_deref(), Some("15 Male Influencers"));
        assert_eq!(names(&res)[0], "Don B.");
    }

    #[test]
    fn only_committed_edits_change_the_list() {
        let mut s = Session::with_catalog(Catalog::sample().unwrap(), Gender::Male);
        edit::run(&mut s, Dimension::City, EditOp::Set(DimensionValue::Text("los".into())))
            .unwrap();
        let staged = run(&mut s, None).unwrap();
        assert_eq!(staged.page.as_ref().unwrap().total, 15);
        assert_eq!(staged.messages.last().unwrap().content, "Unsaved changes: city");

        save::section(&mut s, Section::Location).unwrap();
        let saved = run(&mut s, None).unwrap();
        // James Chen lives in Los Angeles but has 1.25M followers.
        assert_eq!(saved.page.as_ref().unwrap().total, 0);
        assert_eq!(saved.header.as_deref(), Some("0 Male Influencers"));
    }

    #[test]
    fn paging_wraps_and_resets_on_change() {
        let mut config = ScoutConfig::default();
        config.page_size = 4;
        let mut s = Session::new(Catalog::sample().unwrap(), Gender::Male, &config);

        let first = run(&mut s, None).unwrap();
        assert_eq!(first.page.as_ref().unwrap().page_count, 4);
        let second = next(&mut s).unwrap();
        assert_eq!(second.page.as_ref().unwrap().index, 1);
        assert_ne!(names(&first), names(&second));

        let wrapped = run(&mut s, Some(9)).unwrap();
        assert_eq!(wrapped.page.as_ref().unwrap().index, 0);

        next(&mut s).unwrap();
        edit::run(&mut s, Dimension::Platform, EditOp::Add("Instagram".into())).unwrap();
        save::section(&mut s, Section::Platform).unwrap();
        let after = run(&mut s, None).unwrap();
        assert_eq!(after.page.as_ref().unwrap().index, 0);
    }

    #[test]
    fn header_follows_committed_gender() {
        let catalog = Catalog::new(vec![record("1").build()]).unwrap();
        let mut s = Session::with_catalog(catalog, Gender::Female);
        let res = run(&mut s, None).unwrap();
        assert_eq!(res.header.as_deref(), Some("1 Female Influencer"));
    }
}
