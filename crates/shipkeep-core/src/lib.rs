//! Shipkeep Core
//!
//! Outline ordering keys and record types for tracking vessel maintenance:
//! maintenance instances, equipment catalogs, per-equipment materials
//! profiles and materials requests.
//!
//! # Overview
//!
//! The centre of the crate is the index path codec. Estimate sheets and
//! bills of materials number their lines as dotted outlines (`1`, `1.2`,
//! `1.2.10`). The codec packs such a path into one `i64` whose integer order
//! is the outline's depth-first order, so records can be stored with that
//! key and listed or range-filtered by it.
//!
//! - **Codec**: [`encode_index_path`] and [`decode_index_path`]
//! - **Validated paths**: [`IndexPath`] with depth, parent and subtree range
//! - **Ordered records**: [`OutlineIndex`]
//! - **Records**: [`MaterialsProfile`], [`MaterialsRequest`], [`Maintenance`], ...
//! - **Reference data**: [`Catalog`] of sectors and maintenance tiers
//! - **Ingestion**: [`EstimateSheet`] turns sheet rows into keyed entries
//!
//! # Example
//!
//! ```
//! use shipkeep_core::{decode_index_path, encode_index_path, IndexPath, OutlineIndex};
//!
//! let key = encode_index_path("1.2.10").unwrap();
//! assert_eq!(decode_index_path(key), "1.2.10");
//!
//! let mut outline = OutlineIndex::new();
//! outline.insert(IndexPath::from_key(key).unwrap(), "Fuel pump");
//! outline.insert("1.2".parse().unwrap(), "Fuel system");
//! assert_eq!(outline.values().copied().collect::<Vec<_>>(), ["Fuel system", "Fuel pump"]);
//! ```
//!
//! # Modules
//!
//! - [`encoding`] - Index path codec
//! - [`outline`] - Outline-ordered record index
//! - [`types`] - Record types and the reference [`Catalog`]
//! - [`sheet`] - Estimate sheet parsing
//! - [`error`] - Error types ([`CoreError`], [`IndexPathError`])

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod encoding;
pub mod error;
pub mod outline;
pub mod sheet;
pub mod types;

// Re-export commonly used types
pub use encoding::{decode_index_path, encode_index_path, IndexPath};
pub use error::{CoreError, IndexPathError};
pub use outline::OutlineIndex;
pub use sheet::{EstimateEntry, EstimateSheet, SheetError, SheetLabels};
pub use types::{
    Catalog, EquipmentMachinery, Maintenance, Material, MaterialKind, MaterialsForEquipment,
    MaterialsProfile, MaterialsRequest, Sector,
};
