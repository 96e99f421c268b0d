use crate::api::ScoutApi;
use crate::catalog::Catalog;
use crate::commands::Session;
use crate::config::ScoutConfig;
use crate::error::{Result, ScoutError};
use crate::filter::Gender;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Overrides the platform config directory.
pub const HOME_ENV: &str = "TALENTSCOUT_HOME";

pub struct ScoutContext {
    pub api: ScoutApi,
    pub config: ScoutConfig,
}

/// Inputs that come from the command line rather than the config file.
#[derive(Debug, Default, Clone)]
pub struct InitOptions {
    pub catalog: Option<PathBuf>,
    /// Raw seed text, read the way a `g` query parameter is.
    pub gender: Option<String>,
}

pub fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "talentscout", "talentscout")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ScoutError::Config("could not determine config directory".to_string()))
}

pub fn initialize(options: InitOptions) -> Result<ScoutContext> {
    let dir = config_dir()?;
    initialize_in(&dir, options)
}

/// Like [`initialize`], with an explicit config directory.
pub fn initialize_in(config_dir: &Path, options: InitOptions) -> Result<ScoutContext> {
    let config = ScoutConfig::load(config_dir)?;

    // Flag, then config file, then the built-in sample.
    let catalog = match options.catalog.as_ref().or(config.catalog_path.as_ref()) {
        Some(path) => Catalog::load(path)?,
        None => Catalog::sample()?,
    };

    // A blank flag counts as no flag.
    let seed = match options.gender.as_deref().filter(|g| !g.trim().is_empty()) {
        Some(raw) => Gender::from_context(Some(raw)),
        None => config.default_gender,
    };
    tracing::debug!(
        records = catalog.len(),
        seed = seed.as_str(),
        dir = %config_dir.display(),
        "initialized"
    );

    let session = Session::new(catalog, seed, &config);
    let api = ScoutApi::new(session, config_dir.to_path_buf());
    Ok(ScoutContext { api, config })
}
