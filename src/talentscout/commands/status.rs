use crate::commands::{CmdMessage, CmdResult, DimensionStatus, Session};
use crate::error::Result;
use crate::filter::Dimension;

/// Committed and pending value of every dimension.
pub fn run(session: &Session) -> Result<CmdResult> {
    let store = &session.store;
    let mut result = CmdResult::default();
    result.status = Dimension::ALL
        .iter()
        .map(|d| DimensionStatus {
            dimension: *d,
            committed: store.committed().get(*d).describe(*d),
            pending: store.pending().get(*d).describe(*d),
            dirty: store.has_changes(*d),
            locked: session.check_access(*d).is_err(),
        })
        .collect();
    result.open_sections = session.panel.open_sections().collect();

    let dirty = store.dirty_dimensions().len();
    if dirty > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} dimension(s) with unsaved changes",
            dirty
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::ScoutConfig;
    use crate::filter::{Gender, Section};

    #[test]
    fn reports_every_dimension() {
        let mut s = Session::with_catalog(Catalog::sample().unwrap(), Gender::Male);
        s.store.set_range_max(Dimension::Price, 400).unwrap();
        s.panel.open(Section::Price);

        let res = run(&s).unwrap();

        assert_eq!(res.status.len(), Dimension::ALL.len());
        let price = &res.status[Dimension::Price as usize];
        assert_eq!(price.committed, "$50 - $3000");
        assert_eq!(price.pending, "$50 - $400");
        assert!(price.dirty);
        assert_eq!(res.open_sections, vec![Section::Price]);
        assert_eq!(res.messages.len(), 1);
    }

    #[test]
    fn marks_locked_dimensions() {
        let mut config = ScoutConfig::default();
        config.premium = false;
        let s = Session::new(Catalog::sample().unwrap(), Gender::Male, &config);
        let res = run(&s).unwrap();
        let locked: Vec<_> = res
            .status
            .iter()
            .filter(|r| r.locked)
            .map(|r| r.dimension)
            .collect();
        assert_eq!(locked, vec![Dimension::Ethnicity, Dimension::Language]);
    }
}
