use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::filter::{Dimension, Section};

/// Reset a section to its defaults in both the committed and pending state.
pub fn section(session: &mut Session, section: Section) -> Result<CmdResult> {
    session.check_section_access(section)?;
    session.store.clear_section(section);
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Cleared {}.",
        section.title()
    ))))
}

pub fn dimension(session: &mut Session, dimension: Dimension) -> Result<CmdResult> {
    session.check_access(dimension)?;
    session.store.clear(dimension);
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Cleared {}.",
        dimension
    ))))
}
