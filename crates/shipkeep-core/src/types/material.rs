//! Materials consumed while servicing a piece of equipment.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single material line: what, in which unit, how much.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Material name, as written on the sheet.
    pub name: String,
    /// Unit of measure, lower-cased.
    pub unit: String,
    /// Quantity in `unit`.
    pub quantity: f64,
}

impl Material {
    /// Create a new material line.
    #[must_use]
    pub fn new(name: impl Into<String>, unit: impl Into<String>, quantity: f64) -> Self {
        Self { name: name.into(), unit: unit.into(), quantity }
    }
}

/// The two material groups tracked per equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialKind {
    /// Parts swapped out during maintenance.
    Replacement,
    /// Supplies used up during maintenance.
    Consumable,
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Replacement => f.write_str("replacement"),
            Self::Consumable => f.write_str("consumable"),
        }
    }
}

/// Materials for one piece of equipment, grouped by kind and keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialsForEquipment {
    /// Replacement materials by name.
    #[serde(default)]
    pub replacement_materials: BTreeMap<String, Material>,
    /// Consumable supplies by name.
    #[serde(default)]
    pub consumable_supplies: BTreeMap<String, Material>,
}

impl MaterialsForEquipment {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn group(&self, kind: MaterialKind) -> &BTreeMap<String, Material> {
        match kind {
            MaterialKind::Replacement => &self.replacement_materials,
            MaterialKind::Consumable => &self.consumable_supplies,
        }
    }

    /// Insert a material, replacing any earlier line with the same name and kind.
    pub fn insert(&mut self, kind: MaterialKind, material: Material) -> Option<Material> {
        let group = match kind {
            MaterialKind::Replacement => &mut self.replacement_materials,
            MaterialKind::Consumable => &mut self.consumable_supplies,
        };
        group.insert(material.name.clone(), material)
    }

    /// Look up a material by kind and name.
    #[must_use]
    pub fn get(&self, kind: MaterialKind, name: &str) -> Option<&Material> {
        self.group(kind).get(name)
    }

    /// Iterate over every material with its kind, replacements first.
    pub fn iter(&self) -> impl Iterator<Item = (MaterialKind, &Material)> {
        self.replacement_materials
            .values()
            .map(|m| (MaterialKind::Replacement, m))
            .chain(self.consumable_supplies.values().map(|m| (MaterialKind::Consumable, m)))
    }

    /// Total number of material lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.replacement_materials.len() + self.consumable_supplies.len()
    }

    /// Whether there are no material lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get_by_kind() {
        let mut materials = MaterialsForEquipment::new();
        materials.insert(MaterialKind::Replacement, Material::new("Bearing 6205", "pcs", 2.0));
        materials.insert(MaterialKind::Consumable, Material::new("Grease", "kg", 0.5));

        assert_eq!(materials.len(), 2);
        assert_eq!(materials.get(MaterialKind::Replacement, "Bearing 6205").unwrap().quantity, 2.0);
        assert!(materials.get(MaterialKind::Consumable, "Bearing 6205").is_none());
    }

    #[test]
    fn insert_replaces_same_name() {
        let mut materials = MaterialsForEquipment::new();
        materials.insert(MaterialKind::Consumable, Material::new("Rag", "kg", 1.0));
        let old = materials.insert(MaterialKind::Consumable, Material::new("Rag", "kg", 3.0));

        assert_eq!(old.unwrap().quantity, 1.0);
        assert_eq!(materials.len(), 1);
    }

    #[test]
    fn iter_lists_replacements_first() {
        let mut materials = MaterialsForEquipment::new();
        materials.insert(MaterialKind::Consumable, Material::new("A", "kg", 1.0));
        materials.insert(MaterialKind::Replacement, Material::new("B", "pcs", 1.0));

        let kinds: Vec<_> = materials.iter().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, vec![MaterialKind::Replacement, MaterialKind::Consumable]);
    }

    #[test]
    fn serde_field_names() {
        let json = serde_json::to_value(MaterialsForEquipment::new()).unwrap();
        assert!(json.get("replacement_materials").is_some());
        assert!(json.get("consumable_supplies").is_some());
    }
}
