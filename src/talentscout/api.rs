//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every talentscout operation, whichever UI drives it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the [`Session`]: catalog, staged store, result view and panel
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (dimension and section names from text)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O operations**: no stdout, stderr, or terminal prompts. Confirmation
//!   for Clear All comes in through a [`ConfirmPort`] supplied by the caller
//! - **Presentation concerns**: returns data structures, not strings
//!
//! ## Testing Strategy
//!
//! API tests verify dispatch and argument normalization. Command behavior is
//! tested in the command modules.

use crate::catalog::Catalog;
use crate::commands::{self, Session};
use crate::error::Result;
use crate::filter::{ConfirmPort, Dimension, FilterState, Section};
use std::path::{Path, PathBuf};

/// The main API facade for talentscout operations.
#[derive(Debug)]
pub struct ScoutApi {
    session: Session,
    config_dir: PathBuf,
}

impl ScoutApi {
    pub fn new(session: Session, config_dir: PathBuf) -> Self {
        Self {
            session,
            config_dir,
        }
    }

    pub fn edit(&mut self, dimension: Dimension, op: EditOp) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.session, dimension, op)
    }

    /// Edit a dimension named at runtime, e.g. from a shell line.
    pub fn edit_named(&mut self, name: &str, op: EditOp) -> Result<commands::CmdResult> {
        let dimension: Dimension = name.parse()?;
        self.edit(dimension, op)
    }

    pub fn save_section(&mut self, section: Section) -> Result<commands::CmdResult> {
        commands::save::section(&mut self.session, section)
    }

    pub fn save_dimension(&mut self, dimension: Dimension) -> Result<commands::CmdResult> {
        commands::save::dimension(&mut self.session, dimension)
    }

    pub fn save_all(&mut self) -> Result<commands::CmdResult> {
        commands::save::all(&mut self.session)
    }

    pub fn discard(&mut self, section: Option<Section>) -> Result<commands::CmdResult> {
        commands::save::discard(&mut self.session, section)
    }

    pub fn clear_section(&mut self, section: Section) -> Result<commands::CmdResult> {
        commands::clear::section(&mut self.session, section)
    }

    pub fn clear_dimension(&mut self, dimension: Dimension) -> Result<commands::CmdResult> {
        commands::clear::dimension(&mut self.session, dimension)
    }

    pub fn clear_all<P: ConfirmPort + ?Sized>(
        &mut self,
        port: &mut P,
    ) -> Result<commands::CmdResult> {
        commands::reset::run(&mut self.session, port)
    }

    /// List one page of the committed result set. `page` is zero-based;
    /// `None` keeps the current page.
    pub fn list(&mut self, page: Option<usize>) -> Result<commands::CmdResult> {
        commands::list::run(&mut self.session, page)
    }

    pub fn next_page(&mut self) -> Result<commands::CmdResult> {
        commands::list::next(&mut self.session)
    }

    pub fn status(&self) -> Result<commands::CmdResult> {
        commands::status::run(&self.session)
    }

    pub fn toggle_section(&mut self, section: Section) -> Result<commands::CmdResult> {
        commands::panel::toggle(&mut self.session, section)
    }

    pub fn facets(&self, dimension: Option<Dimension>) -> Result<commands::CmdResult> {
        commands::facets::run(dimension)
    }

    pub fn dimensions(&self) -> Result<commands::CmdResult> {
        commands::dimensions::run(self.session.store.seed())
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    /// Swap in new committed filters from outside the editor. The view goes
    /// back to the first page.
    pub fn replace_committed(&mut self, state: FilterState) {
        self.session.store.replace_committed(state);
        self.session.store.listener_mut().page = 0;
    }

    /// Swap the catalog. The result set is recomputed on the next listing.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        self.session.catalog = catalog;
        self.session.store.listener_mut().page = 0;
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::edit::EditOp;
pub use crate::commands::{
    CmdMessage, CmdResult, DimensionInfo, DimensionStatus, FacetList, MessageLevel, PageInfo,
};
