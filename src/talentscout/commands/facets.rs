use crate::commands::{CmdMessage, CmdResult, FacetList};
use crate::error::Result;
use crate::facets;
use crate::filter::Dimension;

/// Option lists for one dimension, or for every dimension that has one.
pub fn run(dimension: Option<Dimension>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let wanted: Vec<Dimension> = match dimension {
        Some(d) => vec![d],
        None => Dimension::ALL.to_vec(),
    };
    for d in wanted {
        match facets::options(d) {
            Some(options) => result.facets.push(FacetList {
                dimension: d,
                options,
            }),
            None if dimension.is_some() => result.add_message(CmdMessage::info(format!(
                "{} has no fixed options ({})",
                d,
                d.kind().describe()
            ))),
            None => {}
        }
    }
    Ok(result)
}
