use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::filter::Section;

/// Open or collapse a section of the editor.
pub fn toggle(session: &mut Session, section: Section) -> Result<CmdResult> {
    let state = if session.panel.toggle(section) {
        "open"
    } else {
        "closed"
    };
    let mut result =
        CmdResult::default().with_message(CmdMessage::info(format!("{}: {}", section.title(), state)));
    result.open_sections = session.panel.open_sections().collect();
    Ok(result)
}
