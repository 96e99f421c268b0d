//! The read-only record collection the engine filters.
//!
//! Each [`Catalog`] gets a process-unique [`CatalogId`] when it is built, so a
//! result view can tell two catalogs apart without comparing their records.

use crate::error::{Result, ScoutError};
use crate::model::Influencer;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

const SAMPLE_JSON: &str = include_str!("data/catalog.json");

static NEXT_CATALOG_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CatalogId(u64);

#[derive(Debug, Clone)]
pub struct Catalog {
    id: CatalogId,
    records: Vec<Influencer>,
}

impl Catalog {
    /// Build a catalog. Record ids must be unique.
    pub fn new(records: Vec<Influencer>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(ScoutError::Catalog(format!(
                    "duplicate record id: {}",
                    record.id
                )));
            }
        }
        let id = CatalogId(NEXT_CATALOG_ID.fetch_add(1, Ordering::Relaxed));
        tracing::debug!(catalog = id.0, records = records.len(), "catalog loaded");
        Ok(Self { id, records })
    }

    /// Parse a JSON array of records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<Influencer> = serde_json::from_str(json)?;
        Self::new(records)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ScoutError::Catalog(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&content)
    }

    /// The built-in sample of 20 records.
    pub fn sample() -> Result<Self> {
        Self::from_json_str(SAMPLE_JSON)
    }

    pub fn id(&self) -> CatalogId {
        self.id
    }

    pub fn records(&self) -> &[Influencer] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&Influencer> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
