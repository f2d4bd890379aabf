//! View class descriptors.

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifies which concrete view type a configuration targets.
///
/// The descriptor is opaque to the configuration value itself: it only has
/// to be cheap to copy, comparable, and hashable. Identity is the `TypeId`
/// of the view type; the type name is carried for diagnostics only.
///
/// The default descriptor identifies no view at all. Components that render
/// nothing themselves (pure layout wrappers) carry it so the renderer can
/// skip view creation entirely.
#[derive(Clone, Copy, Default)]
pub struct ViewClass {
    id: Option<TypeId>,
    name: &'static str,
}

impl ViewClass {
    /// Returns the descriptor for a concrete view type.
    pub fn of<V: 'static>() -> Self {
        Self {
            id: Some(TypeId::of::<V>()),
            name: type_name::<V>(),
        }
    }

    /// Returns `false` only for the default "no view" descriptor.
    #[inline]
    pub fn provides_view(&self) -> bool {
        self.id.is_some()
    }

    /// Diagnostic name of the view type; empty for the default descriptor.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

// Identity is the TypeId; the name is diagnostic only and two types could
// share a name across crate versions.
impl PartialEq for ViewClass {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ViewClass {}

impl Hash for ViewClass {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ViewClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.provides_view() {
            f.debug_tuple("ViewClass").field(&self.name).finish()
        } else {
            f.write_str("ViewClass(none)")
        }
    }
}
