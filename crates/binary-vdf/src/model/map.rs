//! Insertion-ordered map with unique keys.
//!
//! Entry order is the serialization order, so it is preserved across
//! inserts, replacements and removals.

use rustc_hash::FxHashMap;

use crate::model::VdfValue;

/// An ordered map of keys to [`VdfValue`]s.
///
/// Equality compares entries in order: two maps holding the same entries in
/// a different order are not equal, since they encode to different bytes.
#[derive(Debug, Clone, Default)]
pub struct VdfMap {
    entries: Vec<(String, VdfValue)>,
    index: FxHashMap<String, usize>,
}

impl VdfMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Inserts a value, returning the previous value for the key if any.
    ///
    /// A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<VdfValue>) -> Option<VdfValue> {
        let key = key.into();
        let value = value.into();
        if let Some(&idx) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[idx].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Adds an entry and returns the map, for building literals.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<VdfValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&VdfValue> {
        self.index.get(key).map(|&idx| &self.entries[idx].1)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut VdfValue> {
        match self.index.get(key) {
            Some(&idx) => Some(&mut self.entries[idx].1),
            None => None,
        }
    }

    /// Returns the string stored under `key`, if it is a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(VdfValue::as_str)
    }

    /// Returns the number stored under `key`, if it is a number.
    pub fn get_u32(&self, key: &str) -> Option<u32> {
        self.get(key).and_then(VdfValue::as_u32)
    }

    /// Returns the nested map stored under `key`, if it is a map.
    pub fn get_map(&self, key: &str) -> Option<&VdfMap> {
        self.get(key).and_then(VdfValue::as_map)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Removes a key, keeping the relative order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<VdfValue> {
        let idx = self.index.remove(key)?;
        let (_, value) = self.entries.remove(idx);
        for slot in self.index.values_mut() {
            if *slot > idx {
                *slot -= 1;
            }
        }
        Some(value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &VdfValue> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Returns the exact length of this map's binary encoding, including the
    /// closing end-of-map marker.
    pub fn encoded_len(&self) -> usize {
        let body: usize = self
            .entries
            .iter()
            .map(|(key, value)| 1 + key.len() + 1 + value.encoded_len())
            .sum();
        body + 1
    }
}

impl PartialEq for VdfMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for VdfMap {}

impl<K: Into<String>, V: Into<VdfValue>> FromIterator<(K, V)> for VdfMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = VdfMap::with_capacity(iter.size_hint().0);
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<K: Into<String>, V: Into<VdfValue>> Extend<(K, V)> for VdfMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

/// Borrowing iterator over a [`VdfMap`], in insertion order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (String, VdfValue)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a VdfValue);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k.as_str(), v))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a VdfMap {
    type Item = (&'a str, &'a VdfValue);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for VdfMap {
    type Item = (String, VdfValue);
    type IntoIter = std::vec::IntoIter<(String, VdfValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
