//! Records kept in outline order.
//!
//! [`OutlineIndex`] maps [`IndexPath`]s to records using the encoded key as
//! the map key, so iteration order is depth-first outline order and subtree
//! lookups are a single range scan. This mirrors what a store does when it
//! sorts or range-filters on a persisted ordering key.
//!
//! # Example
//!
//! ```
//! use shipkeep_core::encoding::IndexPath;
//! use shipkeep_core::outline::OutlineIndex;
//!
//! let mut outline = OutlineIndex::new();
//! for (path, name) in [("2", "Hull"), ("1.10", "Winch"), ("1", "Deck"), ("1.9", "Crane")] {
//!     outline.insert(path.parse::<IndexPath>().unwrap(), name);
//! }
//!
//! let names: Vec<_> = outline.values().copied().collect();
//! assert_eq!(names, ["Deck", "Crane", "Winch", "Hull"]);
//!
//! let deck: IndexPath = "1".parse().unwrap();
//! assert_eq!(outline.children(&deck).count(), 2);
//! ```

use std::collections::BTreeMap;

use tracing::debug;

use crate::encoding::IndexPath;
use crate::error::IndexPathError;

/// An ordered map from outline positions to records.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineIndex<T> {
    entries: BTreeMap<i64, T>,
}

impl<T> Default for OutlineIndex<T> {
    fn default() -> Self {
        Self { entries: BTreeMap::new() }
    }
}

impl<T> OutlineIndex<T> {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild an index from persisted ordering keys.
    ///
    /// # Errors
    ///
    /// Returns [`IndexPathError::NonCanonicalKey`] for the first key that was
    /// not produced from a valid [`IndexPath`].
    pub fn from_keyed<I>(records: I) -> Result<Self, IndexPathError>
    where
        I: IntoIterator<Item = (i64, T)>,
    {
        let mut index = Self::new();
        for (key, value) in records {
            index.insert(IndexPath::from_key(key)?, value);
        }
        debug!(entries = index.len(), "rebuilt outline index from stored keys");
        Ok(index)
    }

    /// Insert a record, returning the one previously at `path`.
    pub fn insert(&mut self, path: IndexPath, value: T) -> Option<T> {
        self.entries.insert(path.key(), value)
    }

    /// The record at `path`.
    #[must_use]
    pub fn get(&self, path: &IndexPath) -> Option<&T> {
        self.entries.get(&path.key())
    }

    /// Mutable access to the record at `path`.
    pub fn get_mut(&mut self, path: &IndexPath) -> Option<&mut T> {
        self.entries.get_mut(&path.key())
    }

    /// Remove and return the record at `path`.
    pub fn remove(&mut self, path: &IndexPath) -> Option<T> {
        self.entries.remove(&path.key())
    }

    /// Whether a record exists at `path`.
    #[must_use]
    pub fn contains(&self, path: &IndexPath) -> bool {
        self.entries.contains_key(&path.key())
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All records in outline order.
    pub fn iter(&self) -> impl Iterator<Item = (IndexPath, &T)> {
        self.entries.iter().map(|(key, value)| (IndexPath::from_key_unchecked(*key), value))
    }

    /// All records in outline order, without their paths.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    /// `path` and everything below it, in outline order.
    pub fn subtree(&self, path: &IndexPath) -> impl Iterator<Item = (IndexPath, &T)> {
        self.entries
            .range(path.subtree_range())
            .map(|(key, value)| (IndexPath::from_key_unchecked(*key), value))
    }

    /// Records exactly one level below `path`.
    pub fn children(&self, path: &IndexPath) -> impl Iterator<Item = (IndexPath, &T)> {
        let depth = path.depth() + 1;
        self.subtree(path).filter(move |(child, _)| child.depth() == depth)
    }

    /// Top-level records.
    pub fn roots(&self) -> impl Iterator<Item = (IndexPath, &T)> {
        self.iter().filter(|(path, _)| path.depth() == 1)
    }

    /// Consume the index, yielding records in outline order.
    pub fn into_values(self) -> impl Iterator<Item = T> {
        self.entries.into_values()
    }
}

impl<T> FromIterator<(IndexPath, T)> for OutlineIndex<T> {
    fn from_iter<I: IntoIterator<Item = (IndexPath, T)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (path, value) in iter {
            index.insert(path, value);
        }
        index
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn path(s: &str) -> IndexPath {
        s.parse().unwrap()
    }

    fn sample() -> OutlineIndex<&'static str> {
        ["3", "1.2.1", "1", "1.10", "1.2", "2.1", "1.2.10", "2"]
            .into_iter()
            .map(|p| (path(p), p))
            .collect()
    }

    #[test]
    fn iterates_in_outline_order() {
        let order: Vec<_> = sample().values().copied().collect();
        assert_eq!(order, ["1", "1.2", "1.2.1", "1.2.10", "1.10", "2", "2.1", "3"]);
    }

    #[test]
    fn subtree_includes_root_and_descendants() {
        let outline = sample();
        let sub: Vec<_> = outline.subtree(&path("1.2")).map(|(_, v)| *v).collect();
        assert_eq!(sub, ["1.2", "1.2.1", "1.2.10"]);

        let missing_root: Vec<_> = outline.subtree(&path("1.5")).collect();
        assert!(missing_root.is_empty());
    }

    #[test]
    fn children_are_one_level_down() {
        let outline = sample();
        let kids: Vec<_> = outline.children(&path("1")).map(|(p, _)| p.to_string()).collect();
        assert_eq!(kids, ["1.2", "1.10"]);

        let roots: Vec<_> = outline.roots().map(|(p, _)| p.to_string()).collect();
        assert_eq!(roots, ["1", "2", "3"]);
    }

    #[test]
    fn insert_get_remove() {
        let mut outline = OutlineIndex::new();
        assert!(outline.insert(path("4.4"), 1).is_none());
        assert_eq!(outline.insert(path("4.4"), 2), Some(1));
        assert_eq!(outline.get(&path("4.4")), Some(&2));
        assert!(outline.contains(&path("4.4")));
        assert!(!outline.contains(&path("4")));

        *outline.get_mut(&path("4.4")).unwrap() += 1;
        assert_eq!(outline.remove(&path("4.4")), Some(3));
        assert!(!outline.contains(&path("4.4")));
        assert!(outline.is_empty());
    }

    #[test]
    fn from_keyed_validates_keys() {
        let good = vec![(path("2").key(), "b"), (path("1").key(), "a")];
        let outline = OutlineIndex::from_keyed(good).unwrap();
        assert_eq!(outline.into_values().collect::<Vec<_>>(), ["a", "b"]);

        let bad = vec![(path("1").key(), "a"), (0, "unset")];
        assert_eq!(
            OutlineIndex::from_keyed(bad),
            Err(IndexPathError::NonCanonicalKey { key: 0 })
        );
    }
}
