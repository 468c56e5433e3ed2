//! Maintenance instances and the equipment they cover.

use serde::{Deserialize, Serialize};

use super::catalog::same_name;

/// One maintenance instance of a vessel: project, tier and sequence number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maintenance {
    /// Record identifier assigned by the store.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Project (vessel) name.
    pub project: String,
    /// Short project code.
    pub project_code: String,
    /// Maintenance tier, one of [`Catalog::maintenance_tiers`](crate::types::Catalog).
    pub maintenance_tier: String,
    /// Sequence number of this maintenance within the project and tier.
    pub maintenance_number: String,
    /// Year the maintenance takes place.
    pub year: i32,
}

impl Maintenance {
    /// Whether this instance is identified by the given tier and number.
    ///
    /// The tier is compared the way the catalog compares tiers, ignoring case
    /// and surrounding whitespace.
    #[must_use]
    pub fn matches(&self, project_code: &str, tier: &str, number: &str) -> bool {
        self.project_code == project_code
            && same_name(&self.maintenance_tier, tier)
            && self.maintenance_number == number
    }
}

/// An equipment or machinery entry in a sector's catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentMachinery {
    /// Record identifier assigned by the store.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Equipment name.
    pub name: String,
    /// Sector the equipment belongs to.
    pub sector: String,
    /// Display position within the sector.
    #[serde(default)]
    pub order: i32,
}

impl EquipmentMachinery {
    /// Create an entry that has not been stored yet.
    #[must_use]
    pub fn new(name: impl Into<String>, sector: impl Into<String>) -> Self {
        Self { id: String::new(), name: name.into(), sector: sector.into(), order: 0 }
    }
}
