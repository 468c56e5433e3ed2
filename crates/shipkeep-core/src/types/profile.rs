//! Per-equipment materials profiles.

use serde::{Deserialize, Serialize};

use super::MaterialsForEquipment;
use crate::encoding::{decode_index_path, IndexPath};
use crate::error::IndexPathError;

/// Estimated and actual materials for one equipment in one maintenance.
///
/// `index` is the equipment's outline position on the estimate sheet, stored
/// as its ordering key so profiles list in sheet order when sorted by it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialsProfile {
    /// Record identifier assigned by the store.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Maintenance instance this profile belongs to.
    pub maintenance_instance_id: String,
    /// Equipment this profile describes.
    pub equipment_machinery_id: String,
    /// Sector of the equipment.
    pub sector: String,
    /// Ordering key, `0` when the sheet gave no usable position.
    #[serde(default)]
    pub index: i64,
    /// Materials estimated before the work.
    #[serde(default)]
    pub estimate: MaterialsForEquipment,
    /// Materials actually used.
    #[serde(default)]
    pub reality: MaterialsForEquipment,
}

impl MaterialsProfile {
    /// Create an empty profile at the given outline position.
    #[must_use]
    pub fn new(
        maintenance_instance_id: impl Into<String>,
        equipment_machinery_id: impl Into<String>,
        sector: impl Into<String>,
        index: Option<IndexPath>,
    ) -> Self {
        Self {
            id: String::new(),
            maintenance_instance_id: maintenance_instance_id.into(),
            equipment_machinery_id: equipment_machinery_id.into(),
            sector: sector.into(),
            index: index.map_or(0, |path| path.key()),
            estimate: MaterialsForEquipment::new(),
            reality: MaterialsForEquipment::new(),
        }
    }

    /// The outline position for display; empty when unset.
    #[must_use]
    pub fn index_path(&self) -> String {
        decode_index_path(self.index)
    }

    /// The outline position as a validated path.
    ///
    /// # Errors
    ///
    /// Returns [`IndexPathError::NonCanonicalKey`] if the stored key is unset
    /// or was not produced from a valid path.
    pub fn outline_path(&self) -> Result<IndexPath, IndexPathError> {
        IndexPath::from_key(self.index)
    }
}
