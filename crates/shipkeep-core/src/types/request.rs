//! Materials requests raised against a maintenance instance.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::MaterialsForEquipment;

/// A request for materials, keyed by equipment id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialsRequest {
    /// Record identifier assigned by the store.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Maintenance instance the request is raised for.
    pub maintenance_instance_id: String,
    /// Sector raising the request.
    pub sector: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Official request number, `0` until one is assigned.
    #[serde(default)]
    pub num_of_request: u32,
    /// Requested materials per equipment id.
    #[serde(default)]
    pub materials_for_equipment: BTreeMap<String, MaterialsForEquipment>,
    /// User who raised the request.
    pub requested_by: String,
    /// Unix timestamp of the request.
    pub requested_at: i64,
}

impl MaterialsRequest {
    /// Whether an official number has been assigned.
    #[must_use]
    pub fn is_numbered(&self) -> bool {
        self.num_of_request != 0
    }

    /// The printed document number, e.g. `YCVT-12`.
    ///
    /// `None` until a number has been assigned.
    #[must_use]
    pub fn document_number(&self, prefix: &str) -> Option<String> {
        self.is_numbered().then(|| format!("{prefix}{}", self.num_of_request))
    }

    /// Total number of material lines across all equipment.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.materials_for_equipment.values().map(MaterialsForEquipment::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Material, MaterialKind};

    fn request() -> MaterialsRequest {
        let mut materials = MaterialsForEquipment::new();
        materials.insert(MaterialKind::Replacement, Material::new("Seal", "pcs", 4.0));
        materials.insert(MaterialKind::Consumable, Material::new("Paint", "l", 2.5));

        MaterialsRequest {
            id: String::new(),
            maintenance_instance_id: "m1".into(),
            sector: "Vỏ Tàu".into(),
            description: String::new(),
            num_of_request: 0,
            materials_for_equipment: BTreeMap::from([("e1".to_owned(), materials)]),
            requested_by: "u1".into(),
            requested_at: 1_700_000_000,
        }
    }

    #[test]
    fn document_number_requires_assignment() {
        let mut req = request();
        assert_eq!(req.document_number("YCVT-"), None);

        req.num_of_request = 12;
        assert_eq!(req.document_number("YCVT-").as_deref(), Some("YCVT-12"));
    }

    #[test]
    fn line_count_spans_equipment() {
        assert_eq!(request().line_count(), 2);
    }
}
