//! The view configuration value.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use crate::accessibility::AccessibilityContext;
use crate::attribute_map::AttributeMap;
use crate::hash::{combine_hashes, hash_one};
use crate::shape::AttributeShape;
use crate::view_class::ViewClass;

/// Everything a configuration holds, built once per construction and never
/// mutated afterwards.
struct Repr {
    view_class: ViewClass,
    attributes: Arc<AttributeMap>,
    accessibility: AccessibilityContext,
    shape: AttributeShape,
    block_implicit_animations: bool,
}

/// Specifies the class of a view and the attributes to apply to it.
///
/// ```
/// use canopy_view::{AttributeMap, AttributeValue, ViewClass, ViewConfiguration};
///
/// struct Label;
///
/// let mut attributes = AttributeMap::new();
/// attributes.insert("set_text", AttributeValue::new(String::from("hello")));
/// let config = ViewConfiguration::with_attributes(ViewClass::of::<Label>(), attributes);
/// assert!(!config.is_default_configuration());
/// ```
///
/// A configuration is an immutable value backed by a reference-counted
/// record: cloning is O(1) and clones may cross threads freely. There is no
/// way to change a configuration in place; build a new one instead.
#[derive(Clone)]
pub struct ViewConfiguration {
    repr: Arc<Repr>,
}

/// The one record shared by every default-constructed configuration:
/// no view class, no attributes. Lives for the rest of the process.
fn singleton_repr() -> &'static Arc<Repr> {
    static SINGLETON: OnceLock<Arc<Repr>> = OnceLock::new();
    SINGLETON.get_or_init(|| {
        let attributes = AttributeMap::new();
        let shape = AttributeShape::of(&attributes);
        Arc::new(Repr {
            view_class: ViewClass::default(),
            attributes: Arc::new(attributes),
            accessibility: AccessibilityContext::default(),
            shape,
            block_implicit_animations: false,
        })
    })
}

impl Default for ViewConfiguration {
    fn default() -> Self {
        Self {
            repr: Arc::clone(singleton_repr()),
        }
    }
}

impl ViewConfiguration {
    /// A configuration for `view_class` with no attributes.
    pub fn new(view_class: ViewClass) -> Self {
        Self::with_attributes(view_class, AttributeMap::new())
    }

    /// A configuration with default accessibility metadata and implicit
    /// animations left enabled.
    pub fn with_attributes(view_class: ViewClass, attributes: AttributeMap) -> Self {
        Self::with_parts(view_class, attributes, AccessibilityContext::default(), false)
    }

    /// The full constructor. Consumes `attributes`; the resulting value
    /// always holds a fresh backing record, even when the map is empty, so
    /// [`is_default_configuration`](Self::is_default_configuration) stays an
    /// identity check.
    pub fn with_parts(
        view_class: ViewClass,
        attributes: AttributeMap,
        accessibility: AccessibilityContext,
        block_implicit_animations: bool,
    ) -> Self {
        // The shape must observe the map before it moves into the record.
        let shape = AttributeShape::of(&attributes);
        Self {
            repr: Arc::new(Repr {
                view_class,
                attributes: Arc::new(attributes),
                accessibility,
                shape,
                block_implicit_animations,
            }),
        }
    }

    pub fn view_class(&self) -> &ViewClass {
        &self.repr.view_class
    }

    /// Shared handle to the attribute map. The handle stays valid after
    /// every `ViewConfiguration` referring to the map has been dropped.
    pub fn attributes(&self) -> Arc<AttributeMap> {
        Arc::clone(&self.repr.attributes)
    }

    pub fn accessibility_context(&self) -> &AccessibilityContext {
        &self.repr.accessibility
    }

    /// Structural fingerprint of the attribute key set; see
    /// [`AttributeShape`].
    pub fn attribute_shape(&self) -> AttributeShape {
        self.repr.shape
    }

    /// When set, the renderer wraps attribute application in an
    /// animation-suppressing block.
    pub fn block_implicit_animations(&self) -> bool {
        self.repr.block_implicit_animations
    }

    /// Whether this value shares the process-wide default record.
    ///
    /// This is an identity comparison, never structural: a configuration
    /// built through [`with_parts`](Self::with_parts) with a default class
    /// and an empty map reports `false`. Callers use it to skip attribute
    /// diffing entirely for views carrying no configuration.
    pub fn is_default_configuration(&self) -> bool {
        Arc::ptr_eq(&self.repr, singleton_repr())
    }

    /// Hash over the view class, the attribute map contents, and the
    /// animation flag.
    ///
    /// `accessibility_context` and `attribute_shape` are excluded: the shape
    /// is derived from the attributes and would be redundant, and
    /// accessibility metadata is not part of the equality contract callers
    /// rely on when using configurations as cache keys.
    pub fn hash_value(&self) -> u64 {
        combine_hashes(&[
            hash_one(&self.repr.view_class),
            self.repr.attributes.content_hash(),
            hash_one(&self.repr.block_implicit_animations),
        ])
    }
}

/// Matches the subhash set of [`ViewConfiguration::hash_value`]:
/// accessibility metadata does not participate.
impl PartialEq for ViewConfiguration {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.repr, &other.repr) {
            return true;
        }
        self.repr.view_class == other.repr.view_class
            && self.repr.block_implicit_animations == other.repr.block_implicit_animations
            && self.repr.attributes == other.repr.attributes
    }
}

impl Eq for ViewConfiguration {}

impl Hash for ViewConfiguration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value());
    }
}

impl fmt::Debug for ViewConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewConfiguration")
            .field("view_class", &self.repr.view_class)
            .field("attributes", &self.repr.attributes.len())
            .field("shape", &self.repr.shape)
            .field("block_implicit_animations", &self.repr.block_implicit_animations)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeValue;

    struct Label;

    fn map_of(entries: &[(&'static str, u32)]) -> AttributeMap {
        let mut map = AttributeMap::new();
        for &(key, value) in entries {
            map.insert(key, AttributeValue::new(value));
        }
        map
    }

    #[test]
    fn default_configurations_share_one_record() {
        let a = ViewConfiguration::default();
        let b = ViewConfiguration::default();
        assert!(a.is_default_configuration());
        assert!(b.is_default_configuration());
        assert!(Arc::ptr_eq(&a.repr, &b.repr));
        assert_eq!(a.hash_value(), b.hash_value());
    }

    #[test]
    fn constructed_empty_configuration_is_not_the_default() {
        // Structurally identical to the default, but built through the full
        // constructor path.
        let config = ViewConfiguration::with_parts(
            ViewClass::default(),
            AttributeMap::new(),
            AccessibilityContext::default(),
            false,
        );
        assert!(!config.is_default_configuration());
        // Content still compares equal to the default value.
        assert_eq!(config, ViewConfiguration::default());
    }

    #[test]
    fn non_default_class_is_not_the_default() {
        let config = ViewConfiguration::new(ViewClass::of::<Label>());
        assert!(!config.is_default_configuration());
    }

    #[test]
    fn clone_shares_the_attribute_map() {
        let config =
            ViewConfiguration::with_attributes(ViewClass::of::<Label>(), map_of(&[("alpha", 1)]));
        let cloned = config.clone();
        assert!(Arc::ptr_eq(&config.attributes(), &cloned.attributes()));
        assert!(Arc::ptr_eq(&config.repr, &cloned.repr));
    }

    #[test]
    fn attributes_handle_outlives_the_configuration() {
        let handle = {
            let config = ViewConfiguration::with_attributes(
                ViewClass::of::<Label>(),
                map_of(&[("alpha", 1), ("beta", 2)]),
            );
            config.attributes()
        };
        assert_eq!(handle.len(), 2);
    }

    #[test]
    fn shape_reflects_the_consumed_map() {
        let map = map_of(&[("alpha", 1), ("beta", 2)]);
        let expected = AttributeShape::of(&map);
        let config = ViewConfiguration::with_attributes(ViewClass::of::<Label>(), map);
        assert_eq!(config.attribute_shape(), expected);
    }

    #[test]
    fn accessibility_is_excluded_from_hash_and_equality() {
        let with_label = ViewConfiguration::with_parts(
            ViewClass::of::<Label>(),
            map_of(&[("alpha", 1)]),
            AccessibilityContext::new().with_label("Submit"),
            false,
        );
        let without = ViewConfiguration::with_parts(
            ViewClass::of::<Label>(),
            map_of(&[("alpha", 1)]),
            AccessibilityContext::default(),
            false,
        );
        assert_ne!(
            with_label.accessibility_context(),
            without.accessibility_context()
        );
        assert_eq!(with_label.hash_value(), without.hash_value());
        assert_eq!(with_label, without);
    }

    #[test]
    fn the_flag_participates_in_hash_and_equality() {
        let blocking = ViewConfiguration::with_parts(
            ViewClass::of::<Label>(),
            map_of(&[("alpha", 1)]),
            AccessibilityContext::default(),
            true,
        );
        let not_blocking = ViewConfiguration::with_parts(
            ViewClass::of::<Label>(),
            map_of(&[("alpha", 1)]),
            AccessibilityContext::default(),
            false,
        );
        assert!(blocking.block_implicit_animations());
        assert_ne!(blocking.hash_value(), not_blocking.hash_value());
        assert_ne!(blocking, not_blocking);
    }

    #[test]
    fn hash_trait_matches_hash_value() {
        let config = ViewConfiguration::new(ViewClass::of::<Label>());
        let via_trait = hash_one(&config);
        let also_via_trait = hash_one(&config.clone());
        assert_eq!(via_trait, also_via_trait);
    }

    #[test]
    fn debug_summarises_without_dumping_values() {
        let config =
            ViewConfiguration::with_attributes(ViewClass::of::<Label>(), map_of(&[("alpha", 1)]));
        let rendered = format!("{config:?}");
        assert!(rendered.contains("ViewConfiguration"));
        assert!(rendered.contains("Label"));
    }
}
