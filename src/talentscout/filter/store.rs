//! # Staged Filter Store
//!
//! The store keeps two full copies of [`FilterState`]:
//!
//! - **committed** drives the result set
//! - **pending** drives the editor
//!
//! Edits only ever touch pending. A dimension is *dirty* while its pending
//! value differs from its committed value; that difference is computed on
//! every call to [`has_changes`](StagedFilterStore::has_changes) and never
//! cached.
//!
//! ## Transitions
//!
//! | Operation | pending\[d\] | committed\[d\] | Notifies |
//! |-----------|--------------|----------------|----------|
//! | edit      | new value    | unchanged      | no       |
//! | `commit`  | unchanged    | := pending\[d\] | yes      |
//! | `discard` | := committed\[d\] | unchanged | no       |
//! | `clear`   | := default   | := default     | yes      |
//! | `reset_all` (confirmed) | all := defaults | all := defaults | yes, plus `on_clear_all` |
//! | `replace_committed` | all := new | all := new | no |
//!
//! `commit`, `discard` and `clear` act on one dimension only; any other
//! dimension that is mid-edit stays dirty.
//!
//! ## Ports
//!
//! The store talks to the outside through two injected capabilities: a
//! [`ConfirmPort`] consulted by `reset_all` before anything changes, and a
//! [`FilterListener`] told about every new committed state.

use super::dimension::{Dimension, DimensionKind, Section};
use super::state::{default_filters, FilterState};
use super::value::{DimensionValue, Gender, LabelSet};
use crate::error::{Result, ScoutError};
use crate::range::NumRange;

/// The question asked before Clear All.
pub const CLEAR_ALL_PROMPT: &str = "Are you sure you want to clear all filters?";

/// Synchronous yes/no confirmation.
pub trait ConfirmPort {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> ConfirmPort for F {
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// The collaborator that owns the result view.
pub trait FilterListener {
    /// Called with the new committed state after a commit, clear or reset.
    fn on_filters_change(&mut self, committed: &FilterState);

    /// Called after a confirmed Clear All, following `on_filters_change`.
    fn on_clear_all(&mut self) {}
}

impl FilterListener for () {
    fn on_filters_change(&mut self, _committed: &FilterState) {}
}

#[derive(Debug)]
pub struct StagedFilterStore<L: FilterListener = ()> {
    committed: FilterState,
    pending: FilterState,
    seed: Gender,
    listener: L,
}

impl StagedFilterStore<()> {
    pub fn new(seed: Gender) -> Self {
        Self::with_listener(seed, ())
    }
}

impl<L: FilterListener> StagedFilterStore<L> {
    pub fn with_listener(seed: Gender, listener: L) -> Self {
        let committed = default_filters(seed);
        Self {
            pending: committed.clone(),
            committed,
            seed,
            listener,
        }
    }

    pub fn committed(&self) -> &FilterState {
        &self.committed
    }

    pub fn pending(&self) -> &FilterState {
        &self.pending
    }

    pub fn seed(&self) -> Gender {
        self.seed
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// The state clear and Clear All write back.
    pub fn defaults(&self) -> FilterState {
        default_filters(self.seed)
    }

    // --- pending edits ---

    /// Toggle `label` in a set dimension. Returns whether it is now selected.
    pub fn toggle_label(&mut self, dimension: Dimension, label: &str) -> Result<bool> {
        let selected = self.pending_labels(dimension)?.toggle(label);
        tracing::trace!(%dimension, label, selected, "toggle label");
        Ok(selected)
    }

    pub fn insert_label(&mut self, dimension: Dimension, label: &str) -> Result<bool> {
        let added = self.pending_labels(dimension)?.insert(label);
        tracing::trace!(%dimension, label, added, "insert label");
        Ok(added)
    }

    pub fn remove_label(&mut self, dimension: Dimension, label: &str) -> Result<bool> {
        let removed = self.pending_labels(dimension)?.remove(label);
        tracing::trace!(%dimension, label, removed, "remove label");
        Ok(removed)
    }

    /// Move the lower bound. Clamped against the current upper bound.
    pub fn set_range_min(&mut self, dimension: Dimension, value: i64) -> Result<()> {
        let range = self.pending_range(dimension)?;
        range.set_min(value);
        tracing::trace!(%dimension, range = %range, "set min");
        Ok(())
    }

    /// Move the upper bound. Clamped against the current lower bound.
    pub fn set_range_max(&mut self, dimension: Dimension, value: i64) -> Result<()> {
        let range = self.pending_range(dimension)?;
        range.set_max(value);
        tracing::trace!(%dimension, range = %range, "set max");
        Ok(())
    }

    pub fn set_city(&mut self, text: impl Into<String>) {
        self.pending.city = text.into();
        tracing::trace!(city = %self.pending.city, "set city");
    }

    /// Select a gender. `Unset` is ignored: gender is never empty once seeded.
    pub fn set_gender(&mut self, gender: Gender) {
        if gender == Gender::Unset {
            tracing::warn!("ignoring attempt to unset gender");
            return;
        }
        self.pending.gender = gender;
        tracing::trace!(%gender, "set gender");
    }

    /// Replace the pending value of `dimension` wholesale.
    pub fn edit(&mut self, dimension: Dimension, value: DimensionValue) -> Result<()> {
        if let DimensionValue::Gender(g) = value {
            if dimension == Dimension::Gender {
                self.set_gender(g);
                return Ok(());
            }
        }
        self.pending.set(dimension, value)?;
        tracing::trace!(%dimension, "edit");
        Ok(())
    }

    fn pending_labels(&mut self, dimension: Dimension) -> Result<&mut LabelSet> {
        self.pending
            .labels_mut(dimension)
            .ok_or(ScoutError::KindMismatch {
                dimension,
                expected: dimension.kind().describe(),
            })
    }

    fn pending_range(&mut self, dimension: Dimension) -> Result<&mut NumRange> {
        self.pending
            .range_mut(dimension)
            .ok_or(ScoutError::KindMismatch {
                dimension,
                expected: dimension.kind().describe(),
            })
    }

    // --- change detection ---

    pub fn has_changes(&self, dimension: Dimension) -> bool {
        !self.pending.dimension_eq(&self.committed, dimension)
    }

    pub fn section_has_changes(&self, section: Section) -> bool {
        section.dimensions().iter().any(|d| self.has_changes(*d))
    }

    /// Dirty dimensions in dimension order.
    pub fn dirty_dimensions(&self) -> Vec<Dimension> {
        self.pending.differing(&self.committed)
    }

    pub fn is_dirty(&self) -> bool {
        Dimension::ALL.iter().any(|d| self.has_changes(*d))
    }

    // --- commit / discard ---

    /// Copy pending\[d\] into committed. Returns `false` (and notifies no one)
    /// when the dimension was not dirty.
    pub fn commit(&mut self, dimension: Dimension) -> bool {
        if !self.commit_quiet(dimension) {
            return false;
        }
        tracing::debug!(%dimension, "commit");
        self.notify();
        true
    }

    /// Commit every dirty dimension of a section with a single notification.
    pub fn commit_section(&mut self, section: Section) -> bool {
        let mut changed = false;
        for d in section.dimensions() {
            changed |= self.commit_quiet(*d);
        }
        if changed {
            tracing::debug!(section = section.name(), "commit section");
            self.notify();
        }
        changed
    }

    fn commit_quiet(&mut self, dimension: Dimension) -> bool {
        if !self.has_changes(dimension) {
            return false;
        }
        self.committed.copy_from(&self.pending, dimension);
        true
    }

    /// Throw away the pending edit on one dimension.
    pub fn discard(&mut self, dimension: Dimension) -> bool {
        if !self.has_changes(dimension) {
            return false;
        }
        self.pending.copy_from(&self.committed, dimension);
        tracing::trace!(%dimension, "discard");
        true
    }

    pub fn discard_section(&mut self, section: Section) -> bool {
        let mut changed = false;
        for d in section.dimensions() {
            changed |= self.discard(*d);
        }
        changed
    }

    pub fn discard_all(&mut self) -> bool {
        let changed = self.is_dirty();
        self.pending = self.committed.clone();
        changed
    }

    // --- immediate writes ---

    /// Write the default value into both copies of `dimension`.
    pub fn clear(&mut self, dimension: Dimension) {
        let defaults = self.defaults();
        self.committed.copy_from(&defaults, dimension);
        self.pending.copy_from(&defaults, dimension);
        tracing::debug!(%dimension, "clear");
        self.notify();
    }

    /// Write an explicit value into both copies of `dimension`.
    pub fn clear_with(&mut self, dimension: Dimension, value: DimensionValue) -> Result<()> {
        if dimension.kind() == DimensionKind::Choice && value == DimensionValue::Gender(Gender::Unset)
        {
            tracing::warn!("ignoring attempt to unset gender");
            return Ok(());
        }
        self.committed.set(dimension, value)?;
        self.pending.copy_from(&self.committed, dimension);
        tracing::debug!(%dimension, "clear with value");
        self.notify();
        Ok(())
    }

    pub fn clear_section(&mut self, section: Section) {
        let defaults = self.defaults();
        for d in section.dimensions() {
            self.committed.copy_from(&defaults, *d);
            self.pending.copy_from(&defaults, *d);
        }
        tracing::debug!(section = section.name(), "clear section");
        self.notify();
    }

    /// Clear All. Asks `port` first; a decline changes nothing and notifies
    /// no one. Returns whether the reset happened.
    pub fn reset_all<P: ConfirmPort + ?Sized>(&mut self, port: &mut P) -> bool {
        if !port.confirm(CLEAR_ALL_PROMPT) {
            tracing::debug!("clear all declined");
            return false;
        }
        self.committed = self.defaults();
        self.pending = self.committed.clone();
        tracing::debug!("clear all");
        self.listener.on_filters_change(&self.committed);
        self.listener.on_clear_all();
        true
    }

    /// Replace committed from outside and resync pending. Pending edits are
    /// dropped. An `Unset` gender in `state` keeps the current one.
    pub fn replace_committed(&mut self, mut state: FilterState) {
        if state.gender == Gender::Unset {
            tracing::warn!(
                gender = %self.committed.gender,
                "ignoring unset gender in replacement state"
            );
            state.gender = self.committed.gender;
        }
        self.pending = state.clone();
        self.committed = state;
        tracing::debug!("committed state replaced");
    }

    /// Adopt a new seed gender from context. The committed gender follows
    /// and pending resyncs.
    pub fn reseed(&mut self, seed: Gender) {
        if seed == Gender::Unset {
            tracing::warn!("ignoring unset seed gender");
            return;
        }
        self.seed = seed;
        let mut state = self.committed.clone();
        state.gender = seed;
        self.replace_committed(state);
    }

    fn notify(&mut self) {
        self.listener.on_filters_change(&self.committed);
    }
}
