//! Error types for the core crate.

use std::num::ParseIntError;

use thiserror::Error;

use crate::sheet::SheetError;
use crate::types::CatalogError;

/// Errors that can occur in the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An index path could not be encoded or validated.
    #[error("index path error: {0}")]
    IndexPath(#[from] IndexPathError),

    /// An estimate sheet could not be parsed.
    #[error("sheet error: {0}")]
    Sheet(#[from] SheetError),

    /// The reference catalog is inconsistent.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// A validation error occurred.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Errors produced while turning a dotted path into an ordering key.
///
/// [`encode_index_path`](crate::encoding::index_path::encode_index_path) only
/// produces the first four variants. The remaining ones come from the stricter
/// [`IndexPath`](crate::encoding::index_path::IndexPath) type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexPathError {
    /// The input was empty or contained only whitespace.
    #[error("index path is empty")]
    EmptyInput,

    /// The path has more segments than fit in a key.
    #[error(
        "index path has {depth} segments, at most {} are supported",
        crate::encoding::index_path::MAX_DEPTH
    )]
    TooDeep {
        /// Number of segments that were supplied.
        depth: usize,
    },

    /// A segment is not a base-10 integer.
    #[error("invalid index path segment {segment:?}: {source}")]
    Parse {
        /// The offending segment, trimmed.
        segment: String,
        /// The underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },

    /// A segment is outside `[0, 63]`.
    #[error(
        "index path segment {value} is out of range [0, {}]",
        crate::encoding::index_path::MAX_LEVEL_VALUE
    )]
    OutOfRange {
        /// The parsed value.
        value: i64,
    },

    /// A segment is zero, which would truncate the path when decoded.
    #[error("index path segment at position {position} is zero")]
    ZeroSegment {
        /// Zero-based position of the segment.
        position: usize,
    },

    /// A stored key does not correspond to any well-formed path.
    #[error("key {key:#x} is not a canonical index path")]
    NonCanonicalKey {
        /// The rejected key.
        key: i64,
    },
}
