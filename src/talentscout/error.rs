use crate::filter::Dimension;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Unknown dimension: {0}")]
    UnknownDimension(String),

    #[error("Dimension {dimension} expects a {expected} value")]
    KindMismatch {
        dimension: Dimension,
        expected: &'static str,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0} is a premium filter; enable it with `talentscout config premium true`")]
    Premium(Dimension),
}

pub type Result<T> = std::result::Result<T, ScoutError>;
