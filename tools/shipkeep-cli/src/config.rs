//! Configuration for the shipkeep CLI.
//!
//! Every section is optional; a missing file section falls back to the
//! built-in defaults.
//!
//! # Example Configuration
//!
//! ```toml
//! [logging]
//! level = "debug"
//!
//! [catalog]
//! maintenance_tiers = ["SCCĐ", "SCCN", "SCCV"]
//! request_prefix = "YCVT-"
//!
//! [[catalog.sectors]]
//! name = "Cơ khí"
//! short_code = "CK"
//!
//! [[catalog.sectors]]
//! name = "Vỏ Tàu"
//! short_code = "VT"
//!
//! [sheet]
//! replacement = "vật tư thay thế"
//! consumable = "vật tư tiêu hao"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use shipkeep_core::{Catalog, CoreError, SheetLabels};

use crate::error::{CliError, Result};

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Sectors, maintenance tiers and numbering
    pub catalog: Catalog,

    /// Estimate sheet group labels
    pub sheet: SheetLabels,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level for shipkeep crates when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::ConfigNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `path`, or the defaults when no path is given
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.catalog.validate()?;
        if self.sheet.replacement.trim().is_empty() || self.sheet.consumable.trim().is_empty() {
            return Err(CoreError::Validation("sheet labels must not be blank".into()).into());
        }
        if self.sheet.replacement.to_lowercase() == self.sheet.consumable.to_lowercase() {
            return Err(CoreError::Validation("sheet labels must differ".into()).into());
        }
        Ok(())
    }

    /// Filter directives for the configured level
    pub fn log_directives(&self) -> String {
        let level = &self.logging.level;
        format!("shipkeep={level},shipkeep_core={level}")
    }
}
