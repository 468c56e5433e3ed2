//! Estimate sheet parsing.
//!
//! An estimate sheet lists equipment under outline numbers, each followed by
//! labelled groups of material lines:
//!
//! ```text
//! index | title                     | unit | quantity
//! ------+---------------------------+------+---------
//! 1     | Main engine               |      |
//!       | I. Vật tư thay thế        |      |
//! -     | Piston ring               | Pcs  | 6
//!       | II. Vật tư tiêu hao       |      |
//! -     | Lube oil                  | L    | 40
//! 1.1   | Fuel pump                 |      |
//! ```
//!
//! Reading the spreadsheet file is left to the caller; this module works on
//! rows of already-extracted cells. The first row is a header and is skipped.
//!
//! # Example
//!
//! ```
//! use shipkeep_core::sheet::{EstimateSheet, SheetLabels};
//! use shipkeep_core::types::MaterialKind;
//!
//! let rows = vec![
//!     vec!["STT", "Name", "Unit", "Qty"],
//!     vec!["1", "Main engine", "", ""],
//!     vec!["", "Vật tư thay thế", "", ""],
//!     vec!["-", "Piston ring", "Pcs", "6"],
//! ];
//!
//! let sheet = EstimateSheet::parse(&rows, &SheetLabels::default()).unwrap();
//! let engine = &sheet.entries()[0];
//! assert_eq!(engine.index.unwrap().to_string(), "1");
//! let ring = engine.materials.get(MaterialKind::Replacement, "Piston ring").unwrap();
//! assert_eq!((ring.unit.as_str(), ring.quantity), ("pcs", 6.0));
//! ```

use std::collections::HashMap;
use std::num::ParseFloatError;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::encoding::IndexPath;
use crate::outline::OutlineIndex;
use crate::types::{Material, MaterialKind, MaterialsForEquipment, MaterialsProfile};

/// Index cell marking a material line.
const MATERIAL_MARKER: &str = "-";

// The pattern is a literal; every parse test compiles it.
#[allow(clippy::expect_used)]
fn index_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]+(\.[0-9]+)*$").expect("index pattern is valid"))
}

/// Errors produced while parsing an estimate sheet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SheetError {
    /// A material line appeared before any equipment header.
    #[error("row {row}: material line appears before any equipment")]
    OrphanMaterial {
        /// Zero-based row number, counting the header.
        row: usize,
    },

    /// A quantity cell is not a number.
    #[error("row {row}: invalid quantity {value:?}: {source}")]
    Quantity {
        /// Zero-based row number, counting the header.
        row: usize,
        /// The offending cell, trimmed.
        value: String,
        /// The underlying parse failure.
        #[source]
        source: ParseFloatError,
    },
}

/// Title fragments that open a material group.
///
/// Matching ignores case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetLabels {
    /// Label of the replacement materials group.
    pub replacement: String,
    /// Label of the consumable supplies group.
    pub consumable: String,
}

impl Default for SheetLabels {
    fn default() -> Self {
        Self { replacement: "vật tư thay thế".to_owned(), consumable: "vật tư tiêu hao".to_owned() }
    }
}

impl SheetLabels {
    fn kind_of(&self, title: &str) -> Option<MaterialKind> {
        let title = title.to_lowercase();
        // The consumable label wins when a title carries both.
        if title.contains(&self.consumable.to_lowercase()) {
            Some(MaterialKind::Consumable)
        } else if title.contains(&self.replacement.to_lowercase()) {
            Some(MaterialKind::Replacement)
        } else {
            None
        }
    }
}

/// One equipment section of an estimate sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateEntry {
    /// Outline position; `None` if the index cell was not a valid path.
    pub index: Option<IndexPath>,
    /// Equipment name from the title cell.
    pub equipment: String,
    /// Estimated materials.
    pub materials: MaterialsForEquipment,
    /// Row of the equipment header.
    pub row: usize,
}

/// The parsed content of an estimate sheet, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EstimateSheet {
    entries: Vec<EstimateEntry>,
}

impl EstimateSheet {
    /// Parse sheet rows.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::OrphanMaterial`] for a material line before the
    /// first equipment header and [`SheetError::Quantity`] for a quantity that
    /// is not a number.
    pub fn parse<R>(rows: R, labels: &SheetLabels) -> Result<Self, SheetError>
    where
        R: IntoIterator,
        R::Item: IntoIterator,
        <R::Item as IntoIterator>::Item: AsRef<str>,
    {
        let mut entries: Vec<EstimateEntry> = Vec::new();
        let mut by_name: HashMap<String, usize> = HashMap::new();
        let mut current: Option<usize> = None;
        let mut kind: Option<MaterialKind> = None;

        for (row_no, row) in rows.into_iter().enumerate().skip(1) {
            let cells: Vec<_> = row.into_iter().collect();
            let cell = |i: usize| cells.get(i).map_or("", |c| c.as_ref().trim());
            let index_cell = cell(0);
            let title = cell(1);

            if index_pattern().is_match(index_cell) {
                let slot = *by_name.entry(title.to_owned()).or_insert_with(|| {
                    let index = match IndexPath::parse(index_cell) {
                        Ok(path) => Some(path),
                        Err(e) => {
                            warn!(
                                row = row_no,
                                index = index_cell,
                                error = %e,
                                "unusable index path"
                            );
                            None
                        }
                    };
                    entries.push(EstimateEntry {
                        index,
                        equipment: title.to_owned(),
                        materials: MaterialsForEquipment::new(),
                        row: row_no,
                    });
                    entries.len() - 1
                });
                current = Some(slot);
                kind = None;
            }

            if let Some(found) = labels.kind_of(title) {
                kind = Some(found);
            }

            let Some(kind) = kind.filter(|_| index_cell == MATERIAL_MARKER) else {
                continue;
            };
            let slot = current.ok_or(SheetError::OrphanMaterial { row: row_no })?;

            let quantity = match (kind, cells.len()) {
                (MaterialKind::Consumable, 0..=2) | (MaterialKind::Replacement, 0..=3) => {
                    debug!(row = row_no, %kind, "skipping short material row");
                    continue;
                }
                (MaterialKind::Consumable, 3) => 0.0,
                _ => parse_quantity(row_no, cell(3))?,
            };
            let material = Material::new(title, cell(2).to_lowercase(), quantity);
            entries[slot].materials.insert(kind, material);
        }

        debug!(entries = entries.len(), "parsed estimate sheet");
        Ok(Self { entries })
    }

    /// Equipment sections in order of first appearance.
    #[must_use]
    pub fn entries(&self) -> &[EstimateEntry] {
        &self.entries
    }

    /// Number of equipment sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the sheet has no equipment sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sections with a valid path, keyed by that path.
    ///
    /// Sections without a path are dropped. If two sections share a path the
    /// later one is kept.
    #[must_use]
    pub fn into_outline(self) -> OutlineIndex<EstimateEntry> {
        let mut outline = OutlineIndex::new();
        for entry in self.entries {
            let Some(path) = entry.index else {
                continue;
            };
            if let Some(previous) = outline.insert(path, entry) {
                warn!(%path, equipment = %previous.equipment, "duplicate index path on sheet");
            }
        }
        outline
    }

    /// Build estimate profiles for a maintenance instance.
    ///
    /// `equipment_id` resolves an equipment name to its record id, creating
    /// the record if needed.
    pub fn into_profiles<F>(
        self,
        maintenance_instance_id: &str,
        sector: &str,
        mut equipment_id: F,
    ) -> Vec<MaterialsProfile>
    where
        F: FnMut(&str) -> String,
    {
        self.entries
            .into_iter()
            .map(|entry| {
                let id = equipment_id(&entry.equipment);
                let mut profile =
                    MaterialsProfile::new(maintenance_instance_id, id, sector, entry.index);
                profile.estimate = entry.materials;
                profile
            })
            .collect()
    }
}

fn parse_quantity(row: usize, value: &str) -> Result<f64, SheetError> {
    value.parse().map_err(|source| SheetError::Quantity { row, value: value.to_owned(), source })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn parse(rows: &[&[&str]]) -> Result<EstimateSheet, SheetError> {
        EstimateSheet::parse(rows.iter().copied(), &SheetLabels::default())
    }

    const HEADER: &[&str] = &["STT", "Tên", "ĐVT", "SL"];

    #[test]
    fn groups_materials_by_label() {
        let sheet = parse(&[
            HEADER,
            &["1", "Main engine"],
            &["", "I. VẬT TƯ THAY THẾ"],
            &["-", "Piston ring", " PCS ", "6"],
            &["", "II. Vật tư tiêu hao"],
            &["-", "Lube oil", "L", "40.5"],
            &["1.2", "Fuel pump"],
        ])
        .unwrap();

        assert_eq!(sheet.len(), 2);
        let engine = &sheet.entries()[0];
        assert_eq!(engine.row, 1);
        let ring = engine.materials.get(MaterialKind::Replacement, "Piston ring").unwrap();
        assert_eq!(ring.unit, "pcs");
        assert_eq!(ring.quantity, 6.0);
        let oil = engine.materials.get(MaterialKind::Consumable, "Lube oil").unwrap();
        assert_eq!(oil.quantity, 40.5);

        let pump = &sheet.entries()[1];
        assert_eq!(pump.index.unwrap().to_string(), "1.2");
        assert!(pump.materials.is_empty());
    }

    #[test]
    fn new_equipment_resets_group() {
        let sheet = parse(&[
            HEADER,
            &["1", "Winch"],
            &["", "Vật tư tiêu hao"],
            &["2", "Crane"],
            &["-", "Grease", "kg", "1"],
        ])
        .unwrap();

        assert!(sheet.entries().iter().all(|e| e.materials.is_empty()));
    }

    #[test]
    fn short_rows_are_skipped_or_defaulted() {
        let sheet = parse(&[
            HEADER,
            &["1", "Winch"],
            &["", "Vật tư tiêu hao"],
            &["-", "Rag"],
            &["-", "Grease", "Kg"],
            &["", "Vật tư thay thế"],
            &["-", "Gasket", "pcs"],
        ])
        .unwrap();

        let winch = &sheet.entries()[0];
        assert_eq!(winch.materials.len(), 1);
        assert_eq!(winch.materials.get(MaterialKind::Consumable, "Grease").unwrap().quantity, 0.0);
    }

    #[test]
    fn bad_quantity_fails() {
        let err = parse(&[
            HEADER,
            &["1", "Winch"],
            &["", "Vật tư thay thế"],
            &["-", "Gasket", "pcs", "two"],
        ])
        .unwrap_err();

        assert!(matches!(err, SheetError::Quantity { row: 3, ref value, .. } if value == "two"));
    }

    #[test]
    fn orphan_material_fails() {
        let err = parse(&[HEADER, &["", "Vật tư tiêu hao"], &["-", "Rag", "kg", "1"]]).unwrap_err();
        assert_eq!(err, SheetError::OrphanMaterial { row: 2 });
    }

    #[test]
    fn invalid_paths_keep_entry_without_index() {
        let sheet = parse(&[
            HEADER,
            &["1.0", "Zero"],
            &["64", "Too big"],
            &["1.2.3.4.5.6.7.8.9.10.11", "Deep"],
        ])
        .unwrap();

        assert_eq!(sheet.len(), 3);
        assert!(sheet.entries().iter().all(|e| e.index.is_none()));
        assert!(sheet.into_outline().is_empty());
    }

    #[test]
    fn repeated_equipment_merges_and_keeps_first_path() {
        let sheet = parse(&[
            HEADER,
            &["2", "Pump"],
            &["", "Vật tư tiêu hao"],
            &["-", "Rag", "kg", "1"],
            &["3", "Pump"],
            &["", "Vật tư tiêu hao"],
            &["-", "Oil", "l", "2"],
        ])
        .unwrap();

        assert_eq!(sheet.len(), 1);
        let pump = &sheet.entries()[0];
        assert_eq!(pump.index.unwrap().to_string(), "2");
        assert_eq!(pump.materials.len(), 2);
    }

    #[test]
    fn outline_orders_by_path() {
        let sheet = parse(&[HEADER, &["1.10", "B"], &["1.9", "A"], &["2", "C"]]).unwrap();
        let names: Vec<_> =
            sheet.into_outline().into_values().map(|e| e.equipment).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn profiles_carry_ordering_key() {
        let sheet = parse(&[HEADER, &["1.2", "Pump"], &["x", "Note"], &["abc", "Other"]]).unwrap();
        let profiles = sheet.into_profiles("m1", "Cơ khí", |name| format!("eq-{name}"));

        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].equipment_machinery_id, "eq-Pump");
        assert_eq!(profiles[0].index_path(), "1.2");
        assert_eq!(profiles[0].maintenance_instance_id, "m1");
    }

    #[test]
    fn consumable_label_wins_when_title_has_both() {
        let sheet = parse(&[
            HEADER,
            &["1", "Winch"],
            &["", "Vật tư thay thế và vật tư tiêu hao"],
            &["-", "Grease", "kg", "2"],
        ])
        .unwrap();

        let winch = &sheet.entries()[0].materials;
        assert!(winch.get(MaterialKind::Consumable, "Grease").is_some());
        assert!(winch.get(MaterialKind::Replacement, "Grease").is_none());
    }

    #[test]
    fn custom_labels() {
        let labels = SheetLabels { replacement: "spares".into(), consumable: "consumables".into() };
        let rows: Vec<Vec<String>> = vec![
            vec!["#".into()],
            vec!["1".into(), "Boiler".into()],
            vec![String::new(), "Spares".into()],
            vec!["-".into(), "Valve".into(), "pcs".into(), "1".into()],
        ];
        let sheet = EstimateSheet::parse(&rows, &labels).unwrap();
        assert!(sheet.entries()[0].materials.get(MaterialKind::Replacement, "Valve").is_some());
    }
}
