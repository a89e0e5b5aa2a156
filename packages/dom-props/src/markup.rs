use std::fmt::Write;

use crate::context::PropContext;
use crate::registry::is_custom_attribute;
use crate::value::PropValue;
use crate::warning::WarningSink;

impl<S: WarningSink> PropContext<S> {
    /// Render a property as an HTML attribute for server rendering.
    ///
    /// Returns `None` if the property is not a DOM property or custom attribute, and an empty string if the value
    /// means the attribute should be left out.
    pub fn markup_for_property(&self, name: &str, value: &PropValue) -> Option<String> {
        if let Some(descriptor) = self.registry.get(name) {
            if descriptor.should_ignore_value(value) {
                return Some(String::new());
            }

            let attribute_name = descriptor.attribute_name.as_ref();
            if descriptor.has_boolean_value
                || (descriptor.has_overloaded_boolean_value && *value == PropValue::Bool(true))
            {
                return Some(format!("{attribute_name}=\"\""));
            }

            return Some(quoted_attribute(attribute_name, value));
        }

        if is_custom_attribute(name) {
            return Some(match value {
                PropValue::None | PropValue::Listener => String::new(),
                value => quoted_attribute(name, value),
            });
        }

        None
    }

    /// Render an attribute of a custom element verbatim.
    ///
    /// Attribute names the DOM would reject are left out.
    pub fn markup_for_custom_attribute(&mut self, name: &str, value: &PropValue) -> String {
        if !self.is_attribute_name_safe(name) {
            return String::new();
        }

        match value {
            PropValue::None | PropValue::Listener => String::new(),
            value => quoted_attribute(name, value),
        }
    }
}

fn quoted_attribute(name: &str, value: &PropValue) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "{name}=\"{}\"",
        askama_escape::escape(&value.to_attribute_string(), askama_escape::Html)
    );
    out
}
