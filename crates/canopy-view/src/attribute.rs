//! Attribute keys and type-erased attribute values.

use std::any::{Any, TypeId};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifies a settable property or behavior on a view.
///
/// Keys are selector-like string identifiers; the mechanism that applies a
/// `(key, value)` pair to a live view lives in the renderer, not here.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct AttributeKey(Cow<'static, str>);

impl AttributeKey {
    pub fn new(identifier: impl Into<Cow<'static, str>>) -> Self {
        Self(identifier.into())
    }

    #[inline]
    pub fn identifier(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for AttributeKey {
    fn from(identifier: &'static str) -> Self {
        Self::new(identifier)
    }
}

/// A type-erased value to assign to a view attribute.
///
/// Wraps any `Clone + PartialEq + Hash + Debug` value so heterogeneous
/// attributes can live in one map. Equality and hashing delegate to the
/// wrapped value; two values of different types never compare equal.
pub struct AttributeValue {
    type_id: TypeId,
    inner: Box<dyn ErasedValue>,
}

impl AttributeValue {
    pub fn new<T>(value: T) -> Self
    where
        T: Clone + PartialEq + Hash + fmt::Debug + Send + Sync + 'static,
    {
        Self {
            type_id: TypeId::of::<T>(),
            inner: Box::new(value),
        }
    }

    /// Returns `true` if the wrapped value is of type `T`.
    #[inline]
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Attempts to downcast to a reference of type `T`.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.inner.as_any().downcast_ref()
    }
}

impl Clone for AttributeValue {
    fn clone(&self) -> Self {
        Self {
            type_id: self.type_id,
            inner: self.inner.clone_boxed(),
        }
    }
}

impl PartialEq for AttributeValue {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id && self.inner.erased_eq(other.inner.as_any())
    }
}

impl Eq for AttributeValue {}

impl Hash for AttributeValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
        self.inner.erased_hash(state);
    }
}

impl fmt::Debug for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.erased_debug(f)
    }
}

impl From<&'static str> for AttributeValue {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}

trait ErasedValue: Any + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn clone_boxed(&self) -> Box<dyn ErasedValue>;
    fn erased_eq(&self, other: &dyn Any) -> bool;
    fn erased_hash(&self, state: &mut dyn Hasher);
    fn erased_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<T> ErasedValue for T
where
    T: Clone + PartialEq + Hash + fmt::Debug + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_boxed(&self) -> Box<dyn ErasedValue> {
        Box::new(self.clone())
    }

    fn erased_eq(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<T>() == Some(self)
    }

    fn erased_hash(&self, mut state: &mut dyn Hasher) {
        self.hash(&mut state);
    }

    fn erased_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
