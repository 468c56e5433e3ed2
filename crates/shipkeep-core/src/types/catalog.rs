//! Reference data: sectors, maintenance tiers and document numbering.
//!
//! The [`Catalog`] is immutable once built. Callers load it from
//! configuration (or take [`Catalog::default`]) and pass it to whatever needs
//! to validate a sector or tier.
//!
//! # Example
//!
//! ```
//! use shipkeep_core::types::Catalog;
//!
//! let catalog = Catalog::default();
//! assert!(catalog.has_sector(" vỏ tàu "));
//! assert_eq!(catalog.short_code("Cơ khí"), Some("CK"));
//! assert!(catalog.has_tier("SCCN"));
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A workshop sector and its abbreviation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    /// Full sector name.
    pub name: String,
    /// Abbreviation used in document numbers and file names.
    pub short_code: String,
}

impl Sector {
    /// Create a sector entry.
    #[must_use]
    pub fn new(name: impl Into<String>, short_code: impl Into<String>) -> Self {
        Self { name: name.into(), short_code: short_code.into() }
    }
}

/// Errors from an inconsistent catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalog lists no sectors.
    #[error("catalog has no sectors")]
    NoSectors,

    /// The catalog lists no maintenance tiers.
    #[error("catalog has no maintenance tiers")]
    NoTiers,

    /// A name or code is blank.
    #[error("catalog contains a blank {0}")]
    Blank(&'static str),

    /// A sector or tier appears twice.
    #[error("duplicate catalog entry: {0}")]
    Duplicate(String),
}

const DEFAULT_SECTORS: [(&str, &str); 10] = [
    ("Cơ khí", "CK"),
    ("Vũ khí", "VK"),
    ("Vỏ Tàu", "VT"),
    ("Đà đốc", "ĐĐ"),
    ("Điện tàu", "ĐT"),
    ("Động lực", "ĐL"),
    ("Van ống", "VỐ"),
    ("KT-ĐT", "KT"),
    ("Trang trí", "TT"),
    ("Cơ điện", "CĐ"),
];

const DEFAULT_TIERS: [&str; 3] = ["SCCĐ", "SCCN", "SCCV"];

const DEFAULT_REQUEST_PREFIX: &str = "YCVT-";

/// Immutable lookup tables for sectors and maintenance tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Known sectors, in display order.
    pub sectors: Vec<Sector>,
    /// Known maintenance tiers.
    pub maintenance_tiers: Vec<String>,
    /// Prefix of printed materials request numbers.
    pub request_prefix: String,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            sectors: DEFAULT_SECTORS.iter().map(|(name, code)| Sector::new(*name, *code)).collect(),
            maintenance_tiers: DEFAULT_TIERS.iter().map(|t| (*t).to_owned()).collect(),
            request_prefix: DEFAULT_REQUEST_PREFIX.to_owned(),
        }
    }
}

/// Lookup form of a name: trimmed and lower-cased.
fn fold(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Whether two catalog names are equal, ignoring case and surrounding whitespace.
pub(crate) fn same_name(known: &str, candidate: &str) -> bool {
    fold(known) == fold(candidate)
}

impl Catalog {
    /// Find a sector by name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn sector(&self, name: &str) -> Option<&Sector> {
        self.sectors.iter().find(|s| same_name(&s.name, name))
    }

    /// Whether `name` is a known sector.
    #[must_use]
    pub fn has_sector(&self, name: &str) -> bool {
        self.sector(name).is_some()
    }

    /// Abbreviation of a sector.
    #[must_use]
    pub fn short_code(&self, name: &str) -> Option<&str> {
        self.sector(name).map(|s| s.short_code.as_str())
    }

    /// Whether `tier` is a known maintenance tier.
    #[must_use]
    pub fn has_tier(&self, tier: &str) -> bool {
        self.maintenance_tiers.iter().any(|t| same_name(t, tier))
    }

    /// Check the catalog is usable.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if a list is empty, an entry is blank, or a
    /// sector or tier name repeats (ignoring case and surrounding whitespace).
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.sectors.is_empty() {
            return Err(CatalogError::NoSectors);
        }
        if self.maintenance_tiers.is_empty() {
            return Err(CatalogError::NoTiers);
        }

        let mut seen = HashSet::new();
        for sector in &self.sectors {
            if sector.name.trim().is_empty() {
                return Err(CatalogError::Blank("sector name"));
            }
            if sector.short_code.trim().is_empty() {
                return Err(CatalogError::Blank("sector short code"));
            }
            if !seen.insert(fold(&sector.name)) {
                return Err(CatalogError::Duplicate(sector.name.clone()));
            }
        }

        seen.clear();
        for tier in &self.maintenance_tiers {
            if tier.trim().is_empty() {
                return Err(CatalogError::Blank("maintenance tier"));
            }
            if !seen.insert(fold(tier)) {
                return Err(CatalogError::Duplicate(tier.clone()));
            }
        }
        Ok(())
    }
}
