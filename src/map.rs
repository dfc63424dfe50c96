//! Ordered container types for configuration values.
//!
//! This module provides [`Record`] and [`Map`], both thin wrappers around
//! [`IndexMap`] that maintain insertion order. Entry order is significant for
//! the renderer: sections and assignments are written in exactly the order the
//! producing evaluator inserted them, so both containers must never reorder.
//!
//! - [`Record`] maps property names (`String`) to values and models named
//!   structures (a struct-like object, a document root).
//! - [`Map`] maps arbitrary [`Value`] keys to values; non-string keys are
//!   converted to text by the renderer's scalar dispatcher at write time.
//!
//! ## Examples
//!
//! ```rust
//! use serde_props::{Record, Value};
//!
//! let mut record = Record::new();
//! record.insert("name".to_string(), Value::from("Alice"));
//! record.insert("age".to_string(), Value::from(30));
//!
//! // Iteration maintains insertion order
//! let keys: Vec<_> = record.keys().cloned().collect();
//! assert_eq!(keys, vec!["name", "age"]);
//! ```

use crate::Value;
use indexmap::IndexMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// An ordered map of property names to configuration values.
///
/// # Examples
///
/// ```rust
/// use serde_props::{Record, Value};
///
/// let mut record = Record::new();
/// record.insert("first".to_string(), Value::from(1));
/// record.insert("second".to_string(), Value::from(2));
///
/// assert_eq!(record.len(), 2);
/// assert_eq!(record.get("first").and_then(|v| v.as_i64()), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record(IndexMap<String, Value>);

impl Record {
    /// Creates an empty `Record`.
    #[must_use]
    pub fn new() -> Self {
        Record(IndexMap::new())
    }

    /// Creates an empty `Record` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Record(IndexMap::with_capacity(capacity))
    }

    /// Inserts a property, keeping the original position if the name was
    /// already present. Returns the previous value in that case.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the record contains the property `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of properties in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the record has no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the property names, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_entries(self.0.iter(), state);
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Record(IndexMap::from_iter(iter))
    }
}

impl Extend<(String, Value)> for Record {
    fn extend<T: IntoIterator<Item = (String, Value)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

/// An ordered map of arbitrary value keys to configuration values.
///
/// Keys are full [`Value`]s; the renderer converts them to text with the same
/// rules as leaf values, so only scalar keys survive rendering. `Value`
/// implements `Eq` and `Hash` (floats by normalized bit pattern) precisely so
/// it can be used here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Map(IndexMap<Value, Value>);

impl Map {
    /// Creates an empty `Map`.
    #[must_use]
    pub fn new() -> Self {
        Map(IndexMap::new())
    }

    /// Creates an empty `Map` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Map(IndexMap::with_capacity(capacity))
    }

    /// Inserts an entry, keeping the original position if the key was already
    /// present. Returns the previous value in that case.
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &Value) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Value, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Value, Value> {
        self.0.values()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Value, Value> {
        self.0.iter()
    }
}

impl Hash for Map {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_entries(self.0.iter(), state);
    }
}

impl IntoIterator for Map {
    type Item = (Value, Value);
    type IntoIter = indexmap::map::IntoIter<Value, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a Value, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Value, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(Value, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (Value, Value)>>(iter: T) -> Self {
        Map(IndexMap::from_iter(iter))
    }
}

impl Extend<(Value, Value)> for Map {
    fn extend<T: IntoIterator<Item = (Value, Value)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

// IndexMap equality ignores entry order, so the hash must as well: combine
// per-entry hashes with XOR.
fn hash_entries<K: Hash, V: Hash, H: Hasher>(
    entries: impl Iterator<Item = (K, V)>,
    state: &mut H,
) {
    let mut combined: u64 = 0;
    for (key, value) in entries {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        value.hash(&mut hasher);
        combined ^= hasher.finish();
    }
    combined.hash(state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_preserves_insertion_order() {
        let mut record = Record::new();
        record.insert("z".to_string(), Value::from(1));
        record.insert("a".to_string(), Value::from(2));
        record.insert("m".to_string(), Value::from(3));

        let keys: Vec<_> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn reinsert_keeps_position() {
        let mut record = Record::new();
        record.insert("a".to_string(), Value::from(1));
        record.insert("b".to_string(), Value::from(2));
        let old = record.insert("a".to_string(), Value::from(3));

        assert_eq!(old, Some(Value::from(1)));
        let keys: Vec<_> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(record.get("a"), Some(&Value::from(3)));
    }

    #[test]
    fn map_accepts_non_string_keys() {
        let mut map = Map::new();
        map.insert(Value::from(1), Value::from("one"));
        map.insert(Value::from(true), Value::from("yes"));

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&Value::from(1)).and_then(Value::as_str), Some("one"));
    }

    #[test]
    fn equal_maps_hash_alike_regardless_of_order() {
        let forward: Map = [
            (Value::from("a"), Value::from(1)),
            (Value::from("b"), Value::from(2)),
        ]
        .into_iter()
        .collect();
        let backward: Map = [
            (Value::from("b"), Value::from(2)),
            (Value::from("a"), Value::from(1)),
        ]
        .into_iter()
        .collect();

        assert_eq!(forward, backward);

        let hash_of = |map: &Map| {
            let mut hasher = DefaultHasher::new();
            map.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash_of(&forward), hash_of(&backward));
    }
}
