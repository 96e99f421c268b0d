use crate::catalog::Catalog;
use crate::config::ScoutConfig;
use crate::error::{Result, ScoutError};
use crate::filter::{Dimension, EditorLayout, Gender, Section, SectionPanel, StagedFilterStore};
use crate::model::Influencer;
use crate::predicate::CompileOptions;
use crate::results::{PageCursor, ResultView};

pub mod clear;
pub mod config;
pub mod dimensions;
pub mod edit;
pub mod facets;
pub mod list;
pub mod panel;
pub mod reset;
pub mod save;
pub mod status;

/// Everything a command operates on: the catalog, the staged store and the
/// view derived from it.
#[derive(Debug)]
pub struct Session {
    pub catalog: Catalog,
    pub store: StagedFilterStore<PageCursor>,
    pub view: ResultView,
    pub panel: SectionPanel,
    pub options: CompileOptions,
    pub premium: bool,
}

impl Session {
    pub fn new(catalog: Catalog, seed: Gender, config: &ScoutConfig) -> Self {
        Self {
            catalog,
            store: StagedFilterStore::with_listener(seed, PageCursor::default()),
            view: ResultView::new(config.page_size),
            panel: SectionPanel::new(config.layout),
            options: CompileOptions {
                strict_gender: config.strict_gender,
            },
            premium: config.premium,
        }
    }

    /// A session over `catalog` with default configuration.
    pub fn with_catalog(catalog: Catalog, seed: Gender) -> Self {
        Self::new(catalog, seed, &ScoutConfig::default())
    }

    pub fn layout(&self) -> EditorLayout {
        self.panel.layout()
    }

    /// Fails for premium dimensions when premium access is off.
    pub(crate) fn check_access(&self, dimension: Dimension) -> Result<()> {
        if dimension.spec().premium && !self.premium {
            return Err(ScoutError::Premium(dimension));
        }
        Ok(())
    }

    pub(crate) fn check_section_access(&self, section: Section) -> Result<()> {
        section
            .dimensions()
            .iter()
            .try_for_each(|d| self.check_access(*d))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Position of a listed page within the result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    /// Zero-based.
    pub index: usize,
    pub page_count: usize,
    pub total: usize,
}

/// One row of a status report.
#[derive(Debug, Clone)]
pub struct DimensionStatus {
    pub dimension: Dimension,
    pub committed: String,
    pub pending: String,
    pub dirty: bool,
    /// Gated and currently not editable.
    pub locked: bool,
}

/// An option list for one dimension.
#[derive(Debug, Clone)]
pub struct FacetList {
    pub dimension: Dimension,
    pub options: &'static [&'static str],
}

/// Static description of a dimension.
#[derive(Debug, Clone)]
pub struct DimensionInfo {
    pub dimension: Dimension,
    pub title: &'static str,
    pub kind: &'static str,
    pub section: &'static str,
    pub premium: bool,
    pub default: String,
    pub open: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<Influencer>,
    pub header: Option<String>,
    pub page: Option<PageInfo>,
    pub status: Vec<DimensionStatus>,
    pub open_sections: Vec<Section>,
    pub facets: Vec<FacetList>,
    pub dimensions: Vec<DimensionInfo>,
    pub config: Option<ScoutConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed(mut self, records: Vec<Influencer>) -> Self {
        self.listed = records;
        self
    }

    pub fn with_header(mut self, header: String) -> Self {
        self.header = Some(header);
        self
    }

    pub fn with_page(mut self, page: PageInfo) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_config(mut self, config: ScoutConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Warn about labels that are not in the dimension's option list. They are
/// still applied; the code map passes them through unchanged.
pub(crate) fn unknown_label_warning(dimension: Dimension, label: &str) -> Option<CmdMessage> {
    if crate::facets::is_known(dimension, label) {
        return None;
    }
    tracing::warn!(%dimension, label, "label is not a known option");
    Some(CmdMessage::warning(format!(
        "'{}' is not a known {} option",
        label, dimension
    )))
}
