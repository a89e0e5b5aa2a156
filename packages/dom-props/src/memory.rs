use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use crate::names::is_valid_attribute_name;
use crate::operations::{DomError, DomNode};
use crate::value::PropValue;

/// A DOM element that lives in memory.
///
/// Headless renderers use it to keep track of what would have been written to a real element. Attributes are kept
/// sorted by namespace and name so the node can be compared and printed deterministically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryNode {
    pub tag: String,
    attributes: BTreeMap<(Option<String>, String), String>,
    properties: FxHashMap<String, PropValue>,
    focused: bool,
    bad_input: bool,
}

impl MemoryNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// The value of an attribute outside of any namespace.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(&(None, name.to_string()))
            .map(String::as_str)
    }

    /// The value of an attribute in a namespace.
    pub fn attribute_ns(&self, namespace: &str, name: &str) -> Option<&str> {
        self.attributes
            .get(&(Some(namespace.to_string()), name.to_string()))
            .map(String::as_str)
    }

    /// Every attribute as `(namespace, name, value)`.
    pub fn attributes(&self) -> impl Iterator<Item = (Option<&str>, &str, &str)> {
        self.attributes
            .iter()
            .map(|((ns, name), value)| (ns.as_deref(), name.as_str(), value.as_str()))
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn set_bad_input(&mut self, bad_input: bool) {
        self.bad_input = bad_input;
    }
}

impl DomNode for MemoryNode {
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), DomError> {
        if !is_valid_attribute_name(name) {
            return Err(DomError::InvalidCharacter(name.to_string()));
        }
        self.attributes
            .insert((None, name.to_string()), value.to_string());
        Ok(())
    }

    fn set_attribute_ns(&mut self, namespace: &str, name: &str, value: &str) -> Result<(), DomError> {
        if !is_valid_attribute_name(name) {
            return Err(DomError::InvalidCharacter(name.to_string()));
        }
        self.attributes
            .insert((Some(namespace.to_string()), name.to_string()), value.to_string());
        Ok(())
    }

    fn remove_attribute(&mut self, name: &str) -> Result<(), DomError> {
        // Qualified names like `xlink:href` also match namespaced attributes
        self.attributes.retain(|(_, attr), _| attr != name);
        Ok(())
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.attributes.keys().any(|(_, attr)| attr == name)
    }

    fn set_property(&mut self, name: &str, value: PropValue) -> Result<(), DomError> {
        self.properties.insert(name.to_string(), value);
        Ok(())
    }

    fn property(&self, name: &str) -> Option<PropValue> {
        self.properties.get(name).cloned()
    }

    fn has_bad_input(&self) -> bool {
        self.bad_input
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}
