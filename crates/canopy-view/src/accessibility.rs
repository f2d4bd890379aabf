//! Accessibility metadata carried alongside a view configuration.

use std::borrow::Cow;

/// Accessibility metadata for an instantiated view.
///
/// Owned by value inside the configuration's backing record. Deliberately
/// excluded from the configuration hash and equality contract; see
/// [`ViewConfiguration::hash_value`](crate::ViewConfiguration::hash_value).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccessibilityContext {
    pub identifier: Option<Cow<'static, str>>,
    pub label: Option<Cow<'static, str>>,
    pub hint: Option<Cow<'static, str>>,
    pub value: Option<Cow<'static, str>>,
    /// Whether the view should be exposed as an accessibility element.
    /// `None` defers to the platform default for the view type.
    pub is_accessibility_element: Option<bool>,
}

impl AccessibilityContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identifier(mut self, identifier: impl Into<Cow<'static, str>>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<Cow<'static, str>>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_is_accessibility_element(mut self, is_element: bool) -> Self {
        self.is_accessibility_element = Some(is_element);
        self
    }

    /// Returns `true` if no field has been set.
    pub fn is_unset(&self) -> bool {
        *self == Self::default()
    }
}
