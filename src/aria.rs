//! ARIA attribute maps returned by composables.
//!
//! Composables describe accessibility attributes as data. The host copies
//! them onto the element. Boolean attributes keep their type so the host
//! can decide between `aria-checked="true"` and omitting the attribute;
//! [`AriaAttributes::to_pairs`] gives the DOM string form.

use std::collections::BTreeMap;

use serde::Serialize;

/// An attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AriaValue {
    Bool(bool),
    Str(String),
}

impl AriaValue {
    /// The DOM attribute string.
    pub fn to_attr(&self) -> String {
        match self {
            AriaValue::Bool(b) => b.to_string(),
            AriaValue::Str(s) => s.clone(),
        }
    }
}

impl From<bool> for AriaValue {
    fn from(value: bool) -> Self {
        AriaValue::Bool(value)
    }
}

impl From<&str> for AriaValue {
    fn from(value: &str) -> Self {
        AriaValue::Str(value.to_string())
    }
}

impl From<String> for AriaValue {
    fn from(value: String) -> Self {
        AriaValue::Str(value)
    }
}

/// Ordered attribute map, keyed by attribute name (`role`, `aria-checked`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AriaAttributes {
    attrs: BTreeMap<&'static str, AriaValue>,
}

impl AriaAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute.
    pub fn set(mut self, name: &'static str, value: impl Into<AriaValue>) -> Self {
        self.attrs.insert(name, value.into());
        self
    }

    /// Sets an attribute only when `condition` holds.
    ///
    /// Used for attributes that are omitted rather than set to `false`,
    /// like `aria-disabled` on an enabled control.
    pub fn set_if(self, condition: bool, name: &'static str, value: impl Into<AriaValue>) -> Self {
        if condition {
            self.set(name, value)
        } else {
            self
        }
    }

    /// Sets an attribute when `value` is present.
    pub fn set_opt<V: Into<AriaValue>>(self, name: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(name, value),
            None => self,
        }
    }

    pub fn get(&self, name: &str) -> Option<&AriaValue> {
        self.attrs.get(name)
    }

    /// Returns the attribute as a DOM string.
    pub fn get_str(&self, name: &str) -> Option<String> {
        self.get(name).map(AriaValue::to_attr)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &AriaValue)> {
        self.attrs.iter().map(|(k, v)| (*k, v))
    }

    /// All attributes as `(name, value)` strings.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        self.iter().map(|(k, v)| (k, v.to_attr())).collect()
    }
}
