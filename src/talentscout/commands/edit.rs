use crate::commands::{unknown_label_warning, CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::filter::{Dimension, DimensionValue, Gender};

/// A single pending edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    /// Replace the whole pending value.
    Set(DimensionValue),
    Add(String),
    Remove(String),
    Toggle(String),
    Min(i64),
    Max(i64),
}

pub fn run(session: &mut Session, dimension: Dimension, op: EditOp) -> Result<CmdResult> {
    session.check_access(dimension)?;
    let mut result = CmdResult::default();
    let store = &mut session.store;

    match op {
        EditOp::Set(value) => {
            if let DimensionValue::Labels(set) = &value {
                for label in set.iter() {
                    result.messages.extend(unknown_label_warning(dimension, label));
                }
            }
            if value == DimensionValue::Gender(Gender::Unset) {
                result.add_message(CmdMessage::warning("Gender cannot be unset."));
            }
            store.edit(dimension, value)?;
        }
        EditOp::Add(label) => {
            result.messages.extend(unknown_label_warning(dimension, &label));
            store.insert_label(dimension, &label)?;
        }
        EditOp::Remove(label) => {
            if !store.remove_label(dimension, &label)? {
                result.add_message(CmdMessage::info(format!(
                    "'{}' was not selected",
                    label
                )));
            }
        }
        EditOp::Toggle(label) => {
            result.messages.extend(unknown_label_warning(dimension, &label));
            store.toggle_label(dimension, &label)?;
        }
        EditOp::Min(v) => store.set_range_min(dimension, v)?,
        EditOp::Max(v) => store.set_range_max(dimension, v)?,
    }

    result.add_message(pending_message(session, dimension));
    Ok(result)
}

pub(crate) fn pending_message(session: &Session, dimension: Dimension) -> CmdMessage {
    let pending = session.store.pending().get(dimension).describe(dimension);
    if session.store.has_changes(dimension) {
        CmdMessage::info(format!("{}: {} (unsaved)", dimension, pending))
    } else {
        CmdMessage::info(format!("{}: {}", dimension, pending))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::commands::MessageLevel;
    use crate::config::ScoutConfig;
    use crate::error::ScoutError;
    use crate::range::NumRange;

    fn session() -> Session {
        Session::with_catalog(Catalog::sample().unwrap(), Gender::Male)
    }

    #[test]
    fn add_marks_dimension_unsaved() {
        let mut s = session();
        let res = run(&mut s, Dimension::Platform, EditOp::Add("TikTok".into())).unwrap();
        assert!(s.store.has_changes(Dimension::Platform));
        assert_eq!(res.messages.last().unwrap().content, "platform: TikTok (unsaved)");
    }

    #[test]
    fn unknown_label_is_applied_with_warning() {
        let mut s = session();
        let res = run(&mut s, Dimension::Category, EditOp::Add("Knitting".into())).unwrap();
        assert!(s.store.pending().category.contains("Knitting"));
        assert_eq!(res.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn min_is_clamped_to_max() {
        let mut s = session();
        run(&mut s, Dimension::Price, EditOp::Min(9_000)).unwrap();
        assert_eq!(s.store.pending().price, NumRange::new(3000, 3000));
    }

    #[test]
    fn toggle_twice_is_idle() {
        let mut s = session();
        run(&mut s, Dimension::Country, EditOp::Toggle("Canada".into())).unwrap();
        let res = run(&mut s, Dimension::Country, EditOp::Toggle("Canada".into())).unwrap();
        assert!(!s.store.has_changes(Dimension::Country));
        assert_eq!(res.messages.last().unwrap().content, "country: (none)");
    }

    #[test]
    fn wrong_kind_is_an_error() {
        let mut s = session();
        let err = run(&mut s, Dimension::Age, EditOp::Add("young".into())).unwrap_err();
        assert!(matches!(err, ScoutError::KindMismatch { .. }));
    }

    #[test]
    fn premium_dimensions_are_gated() {
        let mut config = ScoutConfig::default();
        config.premium = false;
        let mut s = Session::new(Catalog::sample().unwrap(), Gender::Male, &config);
        let err = run(&mut s, Dimension::Language, EditOp::Add("English".into())).unwrap_err();
        assert!(matches!(err, ScoutError::Premium(Dimension::Language)));
        assert!(!s.store.is_dirty());
    }

    #[test]
    fn unsetting_gender_warns_and_keeps_value() {
        let mut s = session();
        let res = run(
            &mut s,
            Dimension::Gender,
            EditOp::Set(DimensionValue::Gender(Gender::Unset)),
        )
        .unwrap();
        assert_eq!(s.store.pending().gender, Gender::Male);
        assert_eq!(res.messages[0].level, MessageLevel::Warning);
    }
}
