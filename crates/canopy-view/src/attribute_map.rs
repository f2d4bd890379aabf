//! Ordered attribute mappings.

use std::hash::{Hash, Hasher};

use indexmap::map::Iter;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::attribute::{AttributeKey, AttributeValue};
use crate::hash;

/// An ordered mapping from attribute keys to the values to assign.
///
/// Insertion order is preserved because application order may be observable
/// (layout-affecting properties, for one). Keys are unique; inserting under
/// an existing key replaces the value but keeps the key's original position.
#[derive(Clone, Debug, Default)]
pub struct AttributeMap {
    entries: IndexMap<AttributeKey, AttributeValue, FxBuildHasher>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value under `key`, returning the previous value if the key
    /// was already present.
    pub fn insert(
        &mut self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &AttributeKey) -> Option<&AttributeValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &AttributeKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> Iter<'_, AttributeKey, AttributeValue> {
        self.entries.iter()
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &AttributeKey> {
        self.entries.keys()
    }

    /// Digest of the map's contents, consistent with [`AttributeMap`]
    /// equality: two maps holding the same entries hash equal regardless of
    /// insertion order. Folding is commutative over per-entry hashes, with
    /// the entry count mixed in up front.
    pub fn content_hash(&self) -> u64 {
        let mut acc = hash::hash_one(&self.entries.len());
        for (key, value) in &self.entries {
            let mut hasher = hash::default_hasher();
            key.hash(&mut hasher);
            value.hash(&mut hasher);
            acc = acc.wrapping_add(hasher.finish());
        }
        acc
    }
}

// IndexMap equality ignores order, so a map built in a different insertion
// order still compares equal. content_hash() matches that semantics.
impl PartialEq for AttributeMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for AttributeMap {}

impl FromIterator<(AttributeKey, AttributeValue)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (AttributeKey, AttributeValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(AttributeKey, AttributeValue)> for AttributeMap {
    fn extend<I: IntoIterator<Item = (AttributeKey, AttributeValue)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<'a> IntoIterator for &'a AttributeMap {
    type Item = (&'a AttributeKey, &'a AttributeValue);
    type IntoIter = Iter<'a, AttributeKey, AttributeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
