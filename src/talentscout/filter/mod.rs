//! Filter editing: dimensions, values, the full state and the staged store.
//!
//! Everything in here works on human-readable labels. Translation to
//! catalog codes happens later, in [`crate::predicate`].

pub mod dimension;
pub mod panel;
pub mod state;
pub mod store;
pub mod value;

pub use dimension::{Dimension, DimensionKind, DimensionSpec, Section, DIMENSIONS};
pub use panel::{EditorLayout, SectionPanel};
pub use state::{default_filters, FilterState, DEFAULT_FILTERS};
pub use store::{ConfirmPort, FilterListener, StagedFilterStore, CLEAR_ALL_PROMPT};
pub use value::{DimensionValue, Gender, LabelSet, ANY};
