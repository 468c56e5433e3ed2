//! Key encoding for outline ordering.
//!
//! This module turns hierarchical outline positions into keys that can be
//! stored next to a record and sorted or range-filtered as plain integers.
//!
//! # Index Paths
//!
//! The [`index_path`] module provides the two primitive operations:
//!
//! - [`encode_index_path`] - dotted string to `i64` key
//! - [`decode_index_path`] - `i64` key back to the dotted string, for display
//!
//! and the validated [`IndexPath`] type for code that wants the ordering key
//! and the outline structure (depth, parent, subtree range) together.
//!
//! # Example
//!
//! ```
//! use shipkeep_core::encoding::{decode_index_path, encode_index_path};
//!
//! let mut keys: Vec<i64> = ["2", "1.10", "1.9", "1"]
//!     .iter()
//!     .map(|p| encode_index_path(p).unwrap())
//!     .collect();
//! keys.sort();
//!
//! let paths: Vec<String> = keys.into_iter().map(decode_index_path).collect();
//! assert_eq!(paths, ["1", "1.9", "1.10", "2"]);
//! ```

pub mod index_path;

#[cfg(test)]
mod proptest_tests;

pub use index_path::{decode_index_path, encode_index_path, IndexPath};
