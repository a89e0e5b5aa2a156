use crate::context::PropContext;
use crate::registry::is_custom_attribute;
use crate::value::PropValue;
use crate::warning::WarningSink;

/// An error reported by a [`DomNode`] backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("`{0}` is not a valid attribute name")]
    InvalidCharacter(String),

    #[error("the node does not support the `{0}` property")]
    UnsupportedProperty(String),

    #[error("{0}")]
    Backend(String),
}

/// The subset of the DOM element API the property writer needs.
///
/// Renderers implement this for their node handles. [`crate::MemoryNode`] is an in-memory implementation.
pub trait DomNode {
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), DomError>;

    fn set_attribute_ns(&mut self, namespace: &str, name: &str, value: &str) -> Result<(), DomError>;

    fn remove_attribute(&mut self, name: &str) -> Result<(), DomError>;

    fn has_attribute(&self, name: &str) -> bool;

    /// Write a node property, like `node.checked = true`.
    fn set_property(&mut self, name: &str, value: PropValue) -> Result<(), DomError>;

    /// Read a node property, like `node.type`.
    fn property(&self, name: &str) -> Option<PropValue>;

    /// Whether the user typed something the input could not parse.
    fn has_bad_input(&self) -> bool {
        false
    }

    /// Whether the node is the document's active element.
    fn is_focused(&self) -> bool {
        false
    }
}

impl<S: WarningSink> PropContext<S> {
    /// Write a property to a node, following the rules in the registry.
    ///
    /// Reserved properties, event handlers and unknown properties are never written.
    pub fn set_value_for_property(
        &mut self,
        node: &mut dyn DomNode,
        name: &str,
        value: &PropValue,
    ) -> Result<(), DomError> {
        let registry = self.registry.clone();
        let Some(descriptor) = registry.get(name) else {
            if is_custom_attribute(name) {
                return self.set_value_for_attribute(node, name, value);
            }
            return Ok(());
        };

        if let Some(mutate) = descriptor.mutation_method {
            return mutate(node, Some(value));
        }

        if descriptor.should_ignore_value(value) {
            return self.delete_value_for_property(node, name);
        }

        if descriptor.must_use_property {
            return node.set_property(descriptor.property_name, value.clone());
        }

        let attribute_name = descriptor.attribute_name.as_ref();
        if let Some(namespace) = descriptor.attribute_namespace {
            return node.set_attribute_ns(namespace, attribute_name, &value.to_attribute_string());
        }

        if descriptor.has_boolean_value
            || (descriptor.has_overloaded_boolean_value && *value == PropValue::Bool(true))
        {
            return node.set_attribute(attribute_name, "");
        }

        node.set_attribute(attribute_name, &value.to_attribute_string())
    }

    /// Remove a property from a node, resetting node properties to their empty value.
    pub fn delete_value_for_property(
        &mut self,
        node: &mut dyn DomNode,
        name: &str,
    ) -> Result<(), DomError> {
        let registry = self.registry.clone();
        let Some(descriptor) = registry.get(name) else {
            if is_custom_attribute(name) {
                return self.delete_value_for_attribute(node, name);
            }
            return Ok(());
        };

        if let Some(mutate) = descriptor.mutation_method {
            return mutate(node, None);
        }

        if descriptor.must_use_property {
            let empty = match descriptor.has_boolean_value {
                true => PropValue::Bool(false),
                false => PropValue::Text(String::new()),
            };
            return node.set_property(descriptor.property_name, empty);
        }

        node.remove_attribute(&descriptor.attribute_name)
    }

    /// Write an attribute verbatim, skipping names the DOM would reject.
    ///
    /// Used for custom attributes and for every property of custom elements.
    pub fn set_value_for_attribute(
        &mut self,
        node: &mut dyn DomNode,
        name: &str,
        value: &PropValue,
    ) -> Result<(), DomError> {
        if !self.is_attribute_name_safe(name) {
            return Ok(());
        }

        match value {
            PropValue::None | PropValue::Listener => node.remove_attribute(name),
            value => node.set_attribute(name, &value.to_attribute_string()),
        }
    }

    pub fn delete_value_for_attribute(
        &mut self,
        node: &mut dyn DomNode,
        name: &str,
    ) -> Result<(), DomError> {
        node.remove_attribute(name)
    }
}
