//! Marker indices.
//!
//! A marker is a positive integer tag carried by a vertex or edge row, usually
//! naming a boundary condition. Marker `0` means untagged and is never
//! indexed.

use std::collections::btree_map;
use std::collections::BTreeMap;

/// The marker value meaning "no marker".
pub const NO_MARKER: u32 = 0;

/// Mapping from marker to the ids carrying it, in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerIndex<T> {
    entries: BTreeMap<u32, Vec<T>>,
}

impl<T> Default for MarkerIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MarkerIndex<T> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Record `id` under `marker`. Untagged ids are ignored.
    pub fn insert(&mut self, marker: u32, id: T) {
        if marker == NO_MARKER {
            return;
        }
        self.entries.entry(marker).or_default().push(id);
    }

    /// Ids carrying `marker`, or an empty slice.
    pub fn get(&self, marker: u32) -> &[T] {
        self.entries.get(&marker).map(Vec::as_slice).unwrap_or_default()
    }

    /// Distinct markers in ascending order.
    pub fn markers(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.keys().copied()
    }

    /// Iterate over `(marker, ids)` in ascending marker order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[T])> {
        self.entries.iter().map(|(&m, ids)| (m, ids.as_slice()))
    }

    /// Number of distinct markers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no id carries a marker.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a MarkerIndex<T> {
    type Item = (&'a u32, &'a Vec<T>);
    type IntoIter = btree_map::Iter<'a, u32, Vec<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_by_marker_in_order() {
        let mut index = MarkerIndex::new();
        index.insert(2, 10);
        index.insert(1, 11);
        index.insert(2, 12);

        assert_eq!(index.get(2), &[10, 12]);
        assert_eq!(index.get(1), &[11]);
        assert_eq!(index.markers().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_zero_marker_not_indexed() {
        let mut index = MarkerIndex::new();
        index.insert(NO_MARKER, 5);

        assert!(index.is_empty());
        assert!(index.get(0).is_empty());
    }

    #[test]
    fn test_missing_marker_is_empty() {
        let index: MarkerIndex<u32> = MarkerIndex::new();
        assert!(index.get(9).is_empty());
    }
}
