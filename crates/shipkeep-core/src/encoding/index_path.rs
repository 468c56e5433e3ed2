//! Order-preserving integer keys for dotted outline paths.
//!
//! An index path such as `"1.2.10"` names a position in a nested outline
//! (bill-of-materials numbering, estimate sheet sections). This module packs
//! such a path into a single non-negative `i64` so that comparing keys as
//! plain integers gives the same order as walking the outline depth-first.
//!
//! # Key Layout
//!
//! Each level gets a fixed 6-bit slot. Level `i` (0-indexed) occupies bits
//! `[54 - 6*i, 59 - 6*i]`, so the first level is the most significant:
//!
//! ```text
//!  63  60 59    54 53    48 47    42       5     0
//! [0000][level 0][level 1][level 2] ... [level 9]
//! ```
//!
//! Bits 60-63 are never set, so every key is non-negative. Unused trailing
//! slots stay zero, which is why a parent sorts before its children and why
//! a zero slot reads as "path ends here" when decoding.
//!
//! Because a slot's position does not depend on how many decimal digits the
//! level has, `"1.9" < "1.10"` and `"1.63" < "2"` hold for the keys.
//!
//! # Example
//!
//! ```
//! use shipkeep_core::encoding::index_path::{decode_index_path, encode_index_path};
//!
//! let a = encode_index_path("1.9").unwrap();
//! let b = encode_index_path("1.10").unwrap();
//! assert!(a < b);
//!
//! assert_eq!(encode_index_path("1.2").unwrap(), (1 << 54) | (2 << 48));
//! assert_eq!(decode_index_path(b), "1.10");
//! assert_eq!(decode_index_path(0), "");
//! ```

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::IndexPathError;

/// Width of a single level slot.
pub const BITS_PER_LEVEL: u32 = 6;
/// Maximum number of levels that fit in a key.
pub const MAX_DEPTH: usize = 10;
/// Largest value a single level can hold.
pub const MAX_LEVEL_VALUE: i64 = 63;
/// Shift of the first (most significant) level slot.
pub const TOP_LEVEL_SHIFT: u32 = 54;
/// Mask for one level slot after shifting it down.
pub const LEVEL_MASK: i64 = 0x3F;

/// Bits that may be set in any key (bits 0-59).
const KEY_MASK: i64 = (1 << (TOP_LEVEL_SHIFT + BITS_PER_LEVEL)) - 1;

#[inline]
const fn level_shift(level: usize) -> u32 {
    TOP_LEVEL_SHIFT - BITS_PER_LEVEL * level as u32
}

#[inline]
const fn field(key: i64, level: usize) -> i64 {
    (key >> level_shift(level)) & LEVEL_MASK
}

/// Number of leading non-zero slots in `key`.
#[inline]
fn leading_depth(key: i64) -> usize {
    (0..MAX_DEPTH).take_while(|&level| field(key, level) != 0).count()
}

fn parse_segment(segment: &str) -> Result<i64, IndexPathError> {
    let segment = segment.trim();
    let value: i64 = segment
        .parse()
        .map_err(|source| IndexPathError::Parse { segment: segment.to_owned(), source })?;
    if !(0..=MAX_LEVEL_VALUE).contains(&value) {
        return Err(IndexPathError::OutOfRange { value });
    }
    Ok(value)
}

/// Encode a dotted-decimal path into its ordering key.
///
/// Segments are trimmed and parsed as base-10 integers. A segment of `0` is
/// accepted but truncates the path when the key is decoded again; use
/// [`IndexPath`] to reject such paths up front.
///
/// # Errors
///
/// - [`IndexPathError::EmptyInput`] if `path` is empty or whitespace.
/// - [`IndexPathError::TooDeep`] if there are more than [`MAX_DEPTH`] segments.
/// - [`IndexPathError::Parse`] if a segment is not an integer.
/// - [`IndexPathError::OutOfRange`] if a segment is outside `[0, 63]`.
pub fn encode_index_path(path: &str) -> Result<i64, IndexPathError> {
    let path = path.trim();
    if path.is_empty() {
        return Err(IndexPathError::EmptyInput);
    }

    let depth = path.split('.').count();
    if depth > MAX_DEPTH {
        return Err(IndexPathError::TooDeep { depth });
    }

    let mut key = 0i64;
    for (level, segment) in path.split('.').enumerate() {
        key |= parse_segment(segment)? << level_shift(level);
    }
    Ok(key)
}

/// Decode an ordering key back into its dotted form.
///
/// Slots are read from the most significant down and decoding stops at the
/// first zero slot. `0` decodes to the empty string. Every `i64` is accepted;
/// bits 60-63 are ignored.
#[must_use]
pub fn decode_index_path(key: i64) -> String {
    let mut out = String::new();
    for level in 0..MAX_DEPTH {
        let value = field(key, level);
        if value == 0 {
            break;
        }
        if level > 0 {
            out.push('.');
        }
        out.push_str(&value.to_string());
    }
    out
}

/// A validated outline position.
///
/// Unlike the raw [`encode_index_path`], an `IndexPath` never contains a zero
/// segment, so it always survives a trip through its key. Ordering, equality
/// and hashing all follow the key.
///
/// # Example
///
/// ```
/// use shipkeep_core::encoding::index_path::IndexPath;
///
/// let section: IndexPath = "1.2".parse().unwrap();
/// let item = section.child(10).unwrap();
///
/// assert_eq!(item.to_string(), "1.2.10");
/// assert!(section.is_ancestor_of(&item));
/// assert!(section.subtree_range().contains(&item.key()));
/// assert_eq!(item.parent(), Some(section));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexPath(i64);

impl IndexPath {
    /// Parse and validate a dotted path.
    ///
    /// # Errors
    ///
    /// Everything [`encode_index_path`] rejects, plus
    /// [`IndexPathError::ZeroSegment`] for a segment equal to zero.
    pub fn parse(path: &str) -> Result<Self, IndexPathError> {
        let key = encode_index_path(path)?;
        let depth = path.trim().split('.').count();
        if let Some(position) = (0..depth).find(|&level| field(key, level) == 0) {
            return Err(IndexPathError::ZeroSegment { position });
        }
        Ok(Self(key))
    }

    /// Build a path from a stored key.
    ///
    /// # Errors
    ///
    /// Returns [`IndexPathError::NonCanonicalKey`] for `0`, for keys with any
    /// of bits 60-63 set, and for keys with a non-zero slot after a zero one.
    pub fn from_key(key: i64) -> Result<Self, IndexPathError> {
        let depth = leading_depth(key);
        if depth == 0 || key & !KEY_MASK != 0 || truncate(key, depth) != key {
            return Err(IndexPathError::NonCanonicalKey { key });
        }
        Ok(Self(key))
    }

    /// Wrap a key already known to be canonical.
    #[inline]
    pub(crate) const fn from_key_unchecked(key: i64) -> Self {
        Self(key)
    }

    /// The ordering key.
    #[inline]
    #[must_use]
    pub const fn key(&self) -> i64 {
        self.0
    }

    /// Number of levels, between 1 and [`MAX_DEPTH`].
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        leading_depth(self.0)
    }

    /// The value at `level`, if the path is that deep.
    #[must_use]
    pub fn segment(&self, level: usize) -> Option<u8> {
        (level < self.depth()).then(|| field(self.0, level) as u8)
    }

    /// Level values from the outermost to the innermost.
    pub fn segments(&self) -> impl Iterator<Item = u8> {
        let key = self.0;
        (0..self.depth()).map(move |level| field(key, level) as u8)
    }

    /// The enclosing path, or `None` for a top-level path.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let depth = self.depth();
        (depth > 1).then(|| Self(truncate(self.0, depth - 1)))
    }

    /// Append one level.
    ///
    /// # Errors
    ///
    /// [`IndexPathError::TooDeep`] if the path is already [`MAX_DEPTH`] levels,
    /// [`IndexPathError::OutOfRange`] or [`IndexPathError::ZeroSegment`] if
    /// `value` is not in `[1, 63]`.
    pub fn child(&self, value: i64) -> Result<Self, IndexPathError> {
        let depth = self.depth();
        if depth == MAX_DEPTH {
            return Err(IndexPathError::TooDeep { depth: depth + 1 });
        }
        if !(0..=MAX_LEVEL_VALUE).contains(&value) {
            return Err(IndexPathError::OutOfRange { value });
        }
        if value == 0 {
            return Err(IndexPathError::ZeroSegment { position: depth });
        }
        Ok(Self(self.0 | (value << level_shift(depth))))
    }

    /// Whether `other` lies strictly below this path.
    #[must_use]
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        self != other && self.subtree_range().contains(&other.0)
    }

    /// Half-open key range holding this path and all of its descendants.
    ///
    /// Suitable as a range filter on a stored ordering key.
    #[must_use]
    pub fn subtree_range(&self) -> Range<i64> {
        let span = 1i64 << level_shift(self.depth() - 1);
        self.0..self.0 + span
    }
}

/// Keep the first `depth` slots of `key` and clear the rest.
#[inline]
fn truncate(key: i64, depth: usize) -> i64 {
    if depth >= MAX_DEPTH {
        return key & KEY_MASK;
    }
    let low_bits = level_shift(depth - 1);
    key & KEY_MASK & !((1i64 << low_bits) - 1)
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&decode_index_path(self.0))
    }
}

impl FromStr for IndexPath {
    type Err = IndexPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<i64> for IndexPath {
    type Error = IndexPathError;

    fn try_from(key: i64) -> Result<Self, Self::Error> {
        Self::from_key(key)
    }
}

impl From<IndexPath> for i64 {
    #[inline]
    fn from(path: IndexPath) -> Self {
        path.0
    }
}

impl Serialize for IndexPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IndexPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
