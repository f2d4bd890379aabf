//! Structural attribute shapes.
//!
//! A shape is a compact fingerprint of *which* attribute keys a map carries,
//! ignoring their values. The renderer compares the shapes of a view's
//! previous and current configuration before doing any per-value diffing:
//! equal shapes mean the same key set, so only values can differ.
//!
//! Shapes are interned in a process-wide registry, so comparing two shapes
//! is a single integer comparison no matter how many keys produced them.

use std::sync::{Mutex, OnceLock};

use log::trace;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::attribute_map::AttributeMap;

/// Interned fingerprint of an attribute map's key set.
///
/// Two maps with the same keys (in any insertion order) produce the
/// identical shape for the lifetime of the process.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct AttributeShape(u32);

impl AttributeShape {
    /// Computes the shape of `attributes`.
    ///
    /// The key set is sorted before interning, so insertion order and
    /// attribute values never influence the result.
    pub fn of(attributes: &AttributeMap) -> Self {
        let mut keys: SmallVec<[&str; 8]> =
            attributes.keys().map(|key| key.identifier()).collect();
        keys.sort_unstable();
        Self(intern(&keys))
    }

    /// The registry token backing this shape.
    #[inline]
    pub fn token(self) -> u32 {
        self.0
    }
}

fn registry() -> &'static Mutex<FxHashMap<Box<[Box<str>]>, u32>> {
    static REGISTRY: OnceLock<Mutex<FxHashMap<Box<[Box<str>]>, u32>>> = OnceLock::new();
    REGISTRY.get_or_init(|| Mutex::new(FxHashMap::default()))
}

fn intern(keys: &[&str]) -> u32 {
    let owned: Vec<Box<str>> = keys.iter().map(|&key| Box::from(key)).collect();
    let mut shapes = registry()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(&token) = shapes.get(owned.as_slice()) {
        return token;
    }
    let token = shapes.len() as u32;
    trace!("interned attribute shape {token} ({} keys)", owned.len());
    shapes.insert(owned.into_boxed_slice(), token);
    token
}
