use crate::commands::{CmdResult, DimensionInfo};
use crate::error::Result;
use crate::filter::{Dimension, FilterState, Gender, DIMENSIONS};

/// Describe every dimension: its kind, default and "no constraint" value.
pub fn run(seed: Gender) -> Result<CmdResult> {
    let defaults = crate::filter::default_filters(seed);
    let mut result = CmdResult::default();
    result.dimensions = DIMENSIONS
        .iter()
        .map(|spec| {
            let d: Dimension = spec.dimension;
            DimensionInfo {
                dimension: d,
                title: spec.title,
                kind: spec.kind.describe(),
                section: d.section().title(),
                premium: spec.premium,
                default: defaults.get(d).describe(d),
                open: FilterState::open_value(d).describe(d),
            }
        })
        .collect();
    Ok(result)
}
