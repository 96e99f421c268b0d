//! Editor section open/closed state.
//!
//! Which sections are expanded belongs to the editor, not to the filter
//! state, so it lives here and is never touched by commit or Clear All.

use super::dimension::Section;
use crate::error::{Result, ScoutError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorLayout {
    #[default]
    Desktop,
    Mobile,
}

impl fmt::Display for EditorLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorLayout::Desktop => f.write_str("desktop"),
            EditorLayout::Mobile => f.write_str("mobile"),
        }
    }
}

impl FromStr for EditorLayout {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(EditorLayout::Desktop),
            "mobile" => Ok(EditorLayout::Mobile),
            other => Err(ScoutError::Parse(format!(
                "unknown layout {:?} (expected desktop or mobile)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SectionPanel {
    layout: EditorLayout,
    open: BTreeSet<Section>,
}

impl SectionPanel {
    pub fn new(layout: EditorLayout) -> Self {
        Self {
            layout,
            open: BTreeSet::new(),
        }
    }

    pub fn layout(&self) -> EditorLayout {
        self.layout
    }

    pub fn is_open(&self, section: Section) -> bool {
        self.open.contains(&section)
    }

    /// Flip a section. Returns whether it is open afterwards.
    pub fn toggle(&mut self, section: Section) -> bool {
        if self.open.remove(&section) {
            false
        } else {
            self.open.insert(section);
            true
        }
    }

    pub fn open(&mut self, section: Section) {
        self.open.insert(section);
    }

    pub fn close(&mut self, section: Section) {
        self.open.remove(&section);
    }

    /// Called after a section was saved. On mobile the section collapses.
    pub fn on_saved(&mut self, section: Section) {
        if self.layout == EditorLayout::Mobile {
            self.close(section);
        }
    }

    pub fn open_sections(&self) -> impl Iterator<Item = Section> + '_ {
        self.open.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_and_closes() {
        let mut panel = SectionPanel::default();
        assert!(panel.toggle(Section::Price));
        assert!(panel.is_open(Section::Price));
        assert!(!panel.toggle(Section::Price));
        assert!(!panel.is_open(Section::Price));
    }

    #[test]
    fn mobile_save_collapses_section() {
        let mut panel = SectionPanel::new(EditorLayout::Mobile);
        panel.open(Section::Location);
        panel.on_saved(Section::Location);
        assert!(!panel.is_open(Section::Location));
    }

    #[test]
    fn desktop_save_keeps_section_open() {
        let mut panel = SectionPanel::new(EditorLayout::Desktop);
        panel.open(Section::Location);
        panel.on_saved(Section::Location);
        assert!(panel.is_open(Section::Location));
    }

    #[test]
    fn layout_parsing() {
        assert_eq!("Mobile".parse::<EditorLayout>().unwrap(), EditorLayout::Mobile);
        assert!("tablet".parse::<EditorLayout>().is_err());
    }
}
