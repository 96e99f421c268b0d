use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::filter::{Dimension, Section};

/// Save one section. On the mobile layout the section collapses afterwards.
pub fn section(session: &mut Session, section: Section) -> Result<CmdResult> {
    session.check_section_access(section)?;
    let mut result = CmdResult::default();
    if session.store.commit_section(section) {
        session.panel.on_saved(section);
        result.add_message(CmdMessage::success(format!("Saved {}.", section.title())));
    } else {
        result.add_message(CmdMessage::info(format!(
            "No changes to save in {}.",
            section.title()
        )));
    }
    Ok(result)
}

/// Save a single dimension, leaving the rest of its section staged.
pub fn dimension(session: &mut Session, dimension: Dimension) -> Result<CmdResult> {
    session.check_access(dimension)?;
    let mut result = CmdResult::default();
    if session.store.commit(dimension) {
        result.add_message(CmdMessage::success(format!("Saved {}.", dimension)));
    } else {
        result.add_message(CmdMessage::info(format!("No changes to save in {}.", dimension)));
    }
    Ok(result)
}

/// Save every dirty section.
pub fn all(session: &mut Session) -> Result<CmdResult> {
    let dirty: Vec<Section> = Section::ALL
        .iter()
        .copied()
        .filter(|s| session.store.section_has_changes(*s))
        .collect();
    if dirty.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("Nothing to save.")));
    }
    let mut result = CmdResult::default();
    for s in dirty {
        result.messages.extend(section(session, s)?.messages);
    }
    Ok(result)
}

/// Drop pending edits in a section, or everywhere.
pub fn discard(session: &mut Session, section: Option<Section>) -> Result<CmdResult> {
    let changed = match section {
        Some(s) => session.store.discard_section(s),
        None => session.store.discard_all(),
    };
    let message = if changed {
        CmdMessage::success("Discarded unsaved changes.")
    } else {
        CmdMessage::info("Nothing to discard.")
    };
    Ok(CmdResult::default().with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::commands::edit::{self, EditOp};
    use crate::config::ScoutConfig;
    use crate::filter::{EditorLayout, Gender};

    fn session_with(layout: EditorLayout) -> Session {
        let mut config = ScoutConfig::default();
        config.layout = layout;
        Session::new(Catalog::sample().unwrap(), Gender::Male, &config)
    }

    #[test]
    fn saving_location_commits_country_and_city() {
        let mut s = session_with(EditorLayout::Desktop);
        edit::run(&mut s, Dimension::Country, EditOp::Add("United States".into())).unwrap();
        edit::run(
            &mut s,
            Dimension::City,
            EditOp::Set(crate::filter::DimensionValue::Text("Los".into())),
        )
        .unwrap();

        let res = section(&mut s, Section::Location).unwrap();
        assert_eq!(res.messages[0].content, "Saved Location.");
        assert!(s.store.committed().country.contains("United States"));
        assert_eq!(s.store.committed().city, "Los");
        assert_eq!(s.store.listener().revision, 1);
    }

    #[test]
    fn mobile_save_collapses_section() {
        let mut s = session_with(EditorLayout::Mobile);
        s.panel.open(Section::Price);
        edit::run(&mut s, Dimension::Price, EditOp::Max(500)).unwrap();
        section(&mut s, Section::Price).unwrap();
        assert!(!s.panel.is_open(Section::Price));
    }

    #[test]
    fn desktop_save_keeps_section_open() {
        let mut s = session_with(EditorLayout::Desktop);
        s.panel.open(Section::Price);
        edit::run(&mut s, Dimension::Price, EditOp::Max(500)).unwrap();
        section(&mut s, Section::Price).unwrap();
        assert!(s.panel.is_open(Section::Price));
    }

    #[test]
    fn saving_clean_section_reports_nothing() {
        let mut s = session_with(EditorLayout::Desktop);
        let res = section(&mut s, Section::Age).unwrap();
        assert_eq!(res.messages[0].content, "No changes to save in Age.");
        assert_eq!(s.store.listener().revision, 0);
    }

    #[test]
    fn save_dimension_leaves_sibling_staged() {
        let mut s = session_with(EditorLayout::Desktop);
        edit::run(&mut s, Dimension::Country, EditOp::Add("Canada".into())).unwrap();
        s.store.set_city("Toronto");
        dimension(&mut s, Dimension::Country).unwrap();
        assert!(s.store.has_changes(Dimension::City));
    }

    #[test]
    fn save_all_commits_everything() {
        let mut s = session_with(EditorLayout::Desktop);
        edit::run(&mut s, Dimension::Platform, EditOp::Add("YouTube".into())).unwrap();
        edit::run(&mut s, Dimension::Age, EditOp::Min(20)).unwrap();
        let res = all(&mut s).unwrap();
        assert_eq!(res.messages.len(), 2);
        assert!(!s.store.is_dirty());
    }

    #[test]
    fn discard_drops_pending_edits() {
        let mut s = session_with(EditorLayout::Desktop);
        edit::run(&mut s, Dimension::Platform, EditOp::Add("YouTube".into())).unwrap();
        let res = discard(&mut s, None).unwrap();
        assert_eq!(res.messages[0].content, "Discarded unsaved changes.");
        assert!(!s.store.is_dirty());
        let res = discard(&mut s, Some(Section::Platform)).unwrap();
        assert_eq!(res.messages[0].content, "Nothing to discard.");
    }
}
