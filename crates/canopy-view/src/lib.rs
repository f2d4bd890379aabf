//! Immutable view configuration values for the Canopy component framework.
//!
//! A [`ViewConfiguration`] pairs a [`ViewClass`] with the ordered set of
//! attribute assignments that should be applied to an instantiated view,
//! plus accessibility metadata and an animation-blocking flag. The renderer
//! diffs the previous and current configuration of a reused view to decide
//! which attributes need to be re-applied; the derived [`AttributeShape`]
//! makes the "same set of keys?" pre-check O(1).
//!
//! Configurations are value types backed by an atomically reference-counted
//! record, so cloning one is O(1) regardless of how many attributes it
//! carries, and clones are safe to hand across threads.

pub mod accessibility;
pub mod attribute;
pub mod attribute_map;
pub mod config;
pub mod hash;
pub mod shape;
pub mod view_class;

pub use accessibility::AccessibilityContext;
pub use attribute::{AttributeKey, AttributeValue};
pub use attribute_map::AttributeMap;
pub use config::ViewConfiguration;
pub use hash::{combine_hashes, hash_one};
pub use shape::AttributeShape;
pub use view_class::ViewClass;
