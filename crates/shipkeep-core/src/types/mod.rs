//! Record types for maintenance tracking.
//!
//! Records are plain values. Persisting them is up to the caller; the
//! [`MaterialsProfile::index`] field is the ordering key produced by
//! [`encode_index_path`](crate::encoding::encode_index_path).

mod catalog;
mod maintenance;
mod material;
mod profile;
mod request;

pub use catalog::{Catalog, CatalogError, Sector};
pub use maintenance::{EquipmentMachinery, Maintenance};
pub use material::{Material, MaterialKind, MaterialsForEquipment};
pub use profile::MaterialsProfile;
pub use request::MaterialsRequest;
