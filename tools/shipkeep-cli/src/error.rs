//! Error types for the CLI.

use std::path::PathBuf;

use shipkeep_core::types::CatalogError;
use shipkeep_core::{CoreError, IndexPathError, SheetError};
use thiserror::Error;

/// CLI-specific result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration file not found.
    #[error("config file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// Configuration file is not valid TOML for the expected schema.
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    /// Input file not found.
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// Index path error.
    #[error("{0}")]
    IndexPath(#[from] IndexPathError),

    /// Estimate sheet error.
    #[error("sheet error: {0}")]
    Sheet(#[from] SheetError),

    /// Catalog error.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Core library error.
    #[error("{0}")]
    Core(#[from] CoreError),

    /// Sector is not in the catalog.
    #[error("unknown sector: {0}")]
    UnknownSector(String),

    /// Some input lines were rejected.
    #[error("{count} invalid index path(s) in input")]
    InvalidLines {
        /// Number of rejected lines.
        count: usize,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
