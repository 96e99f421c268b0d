use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::filter::ConfirmPort;

/// Clear All, gated by `port`.
pub fn run<P: ConfirmPort + ?Sized>(session: &mut Session, port: &mut P) -> Result<CmdResult> {
    let message = if session.store.reset_all(port) {
        CmdMessage::success("All filters cleared.")
    } else {
        CmdMessage::info("Clear all cancelled.")
    };
    Ok(CmdResult::default().with_message(message))
}
